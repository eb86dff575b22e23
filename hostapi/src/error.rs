//! Host-side error type.
//!
//! `HostError` is returned by every [`HostChannel`](crate::HostChannel)
//! method. `NotFound` is a lookup miss the generator may surface as its own
//! error kind; every other variant is an I/O failure outside the generator's
//! control and aborts the run.

use l2gen_primitives::ErrorCode;

/// Error returned by the host across the syscall boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The requested mapping, blob or block does not exist.
    #[error("not found")]
    NotFound,

    /// An account with the same script hash is already registered.
    #[error("duplicated script hash")]
    DuplicatedScriptHash,

    /// The host ran out of a bounded resource (account ids, return data, ...).
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),

    /// The underlying store or lookup failed.
    #[error("host i/o error: {0}")]
    Io(String),
}

impl HostError {
    /// Convert to the integer code reported by the generator.
    pub fn to_error_code(&self) -> ErrorCode {
        match self {
            Self::NotFound => ErrorCode::NotFound,
            Self::DuplicatedScriptHash | Self::ResourceExhausted(_) | Self::Io(_) => {
                ErrorCode::HostIo
            }
        }
    }

    /// Create an I/O error.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Returns true for lookup misses.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
