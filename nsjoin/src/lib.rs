//! Namespace joining for callers that cannot issue raw syscalls
//!
//! This crate exposes one capability: moving the calling thread into an
//! existing Linux namespace via `setns(2)`, given an already-open descriptor
//! and a textual kind selector:
//! - `net` - Network namespace
//! - `pid` - Process ID namespace
//! - `mnt` - Mount namespace
//! - `ipc` - Inter-process communication namespace
//! - `uts` - Hostname namespace
//! - `user` - UID/GID mapping namespace
//!
//! Arguments arrive either typed ([`JoinRequest::new`]) or as untyped
//! host-runtime values ([`join`]); every input is fully validated before the
//! syscall is attempted, and every failure is classified as one of the four
//! [`Error`] variants.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod error;
pub mod joiner;
pub mod kind;

pub use error::{Error, Result};
pub use joiner::{join, JoinRequest};
pub use kind::NamespaceKind;
