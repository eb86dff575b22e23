//! Stable integer error codes returned by the generator.
//!
//! Every gateway and ledger operation reports `0` on success and one of the
//! non-zero codes below on failure. The repr values are part of the host
//! contract and must not change without versioning it.

use core::fmt;

/// Generator error codes.
///
/// The SUDT codes (12..=15) keep the values used by deployed ledger scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    Ok = 0,
    InvalidContext = 1,
    InvalidData = 2,
    NotFound = 3,
    HostIo = 4,
    InsufficientBalance = 12,
    AmountOverflow = 13,
    InvalidDestination = 14,
    AccountNotFound = 15,
}

impl ErrorCode {
    /// Return the i32 representation of this error code.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::InvalidContext => write!(f, "ERR_INVALID_CONTEXT"),
            Self::InvalidData => write!(f, "ERR_INVALID_DATA"),
            Self::NotFound => write!(f, "ERR_NOT_FOUND"),
            Self::HostIo => write!(f, "ERR_HOST_IO"),
            Self::InsufficientBalance => write!(f, "ERR_INSUFFICIENT_BALANCE"),
            Self::AmountOverflow => write!(f, "ERR_AMOUNT_OVERFLOW"),
            Self::InvalidDestination => write!(f, "ERR_INVALID_DESTINATION"),
            Self::AccountNotFound => write!(f, "ERR_ACCOUNT_NOT_FOUND"),
        }
    }
}
