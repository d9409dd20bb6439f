//! Join request validation and execution
//!
//! A request is validated into a typed [`JoinRequest`] before any syscall is
//! attempted, and the `setns(2)` call is issued at most once per request.
//! The effect is a property of the calling thread, not of any value in this
//! crate: on success the thread's membership for the requested kind has
//! changed, and nothing in-process represents that state.

use std::os::fd::{BorrowedFd, RawFd};

use nix::sched::setns;
use serde_json::Value;
use tracing::debug;

use crate::kind::NamespaceKind;
use crate::{Error, Result};

/// A fully validated request to join one namespace
///
/// Holds the caller's descriptor only as a raw integer; ownership never
/// transfers and the descriptor is never closed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinRequest {
    descriptor: RawFd,
    kind: NamespaceKind,
}

impl JoinRequest {
    /// Build a request from an already-typed descriptor and kind
    #[must_use]
    pub const fn new(descriptor: RawFd, kind: NamespaceKind) -> Self {
        Self { descriptor, kind }
    }

    /// Validate a raw argument list as received from the host runtime
    ///
    /// Checks run in order: arity, descriptor type, kind type, kind
    /// resolution. The first failure wins and no syscall is issued.
    pub fn from_args(args: &[Value]) -> Result<Self> {
        if args.len() != 2 {
            return Err(Error::InvalidArgumentCount { got: args.len() });
        }

        let descriptor = descriptor_arg(&args[0])?;
        let kind = kind_arg(&args[1])?;

        Ok(Self { descriptor, kind })
    }

    /// Descriptor this request passes to setns(2)
    #[must_use]
    pub const fn descriptor(self) -> RawFd {
        self.descriptor
    }

    /// Namespace kind this request targets
    #[must_use]
    pub const fn kind(self) -> NamespaceKind {
        self.kind
    }

    /// Issue the setns(2) call for this request
    ///
    /// Moves the calling thread into the referenced namespace for the
    /// requested kind. The change is immediate and survives this call;
    /// whether re-joining later is permitted is up to kernel semantics,
    /// not this crate. On success returns the raw syscall result (0).
    ///
    /// # Errors
    /// Returns [`Error::SyscallFailed`] with the errno value and its
    /// description when the kernel rejects the call. On failure the
    /// calling thread's membership is unchanged.
    pub fn join(self) -> Result<i32> {
        debug!(descriptor = self.descriptor, kind = %self.kind, "joining namespace");

        // SAFETY: the descriptor is borrowed for the duration of the call
        // only; the caller keeps ownership and closes it.
        let fd = unsafe { BorrowedFd::borrow_raw(self.descriptor) };

        match setns(fd, self.kind.to_clone_flags()) {
            Ok(()) => Ok(0),
            // Errno is read off the failed call before anything else runs,
            // so the description cannot be clobbered by a later syscall.
            Err(errno) => Err(Error::SyscallFailed {
                errno: errno as i32,
                description: errno.desc().to_string(),
            }),
        }
    }
}

/// Validate `args` and join the namespace in one step
///
/// This is the call surface handed to the host runtime boundary: two
/// untyped values in, an integer success code or a classified error out.
pub fn join(args: &[Value]) -> Result<i32> {
    JoinRequest::from_args(args)?.join()
}

fn descriptor_arg(value: &Value) -> Result<RawFd> {
    let Value::Number(number) = value else {
        return Err(Error::InvalidArgumentType {
            message: format!("descriptor must be an integer, got {}", value_type(value)),
        });
    };

    let Some(n) = number.as_i64() else {
        return Err(Error::InvalidArgumentType {
            message: format!("descriptor {number} is not representable as a signed integer"),
        });
    };

    RawFd::try_from(n).map_err(|_| Error::InvalidArgumentType {
        message: format!("descriptor {n} does not fit in a signed 32-bit integer"),
    })
}

fn kind_arg(value: &Value) -> Result<NamespaceKind> {
    let Some(s) = value.as_str() else {
        return Err(Error::InvalidArgumentType {
            message: format!("kind must be a string, got {}", value_type(value)),
        });
    };

    s.parse()
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
