//! Error types for namespace joining

use thiserror::Error;

/// Failure modes of a join request
///
/// The taxonomy is flat and closed: a request either fails validation
/// (first three variants, no syscall issued) or the kernel rejects the
/// `setns(2)` call itself.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Caller supplied other than exactly two arguments
    #[error("wrong number of arguments: expected 2, got {got}")]
    InvalidArgumentCount {
        /// Number of arguments actually supplied
        got: usize,
    },

    /// First argument not integer-representable, or second not text
    #[error("wrong argument type: {message}")]
    InvalidArgumentType {
        /// What was supplied and what was expected
        message: String,
    },

    /// Kind selector is text but not one of the recognized selectors
    #[error("unknown namespace kind: {kind:?}")]
    UnknownNamespaceKind {
        /// The selector string that failed to resolve
        kind: String,
    },

    /// `setns(2)` returned an error indicator
    #[error("setns failed: {description} (errno {errno})")]
    SyscallFailed {
        /// Raw errno value reported by the kernel
        errno: i32,
        /// Errno description captured immediately after the failing call
        description: String,
    },
}

/// Result type alias for join operations
pub type Result<T> = std::result::Result<T, Error>;
