//! Generator error type.
//!
//! Every gateway and ledger operation returns a [`GeneratorResult`]. The
//! stable integer reported to the host comes from [`GeneratorError::code`].

use l2gen_hostapi::HostError;
use l2gen_primitives::{AccountId, CodecError, ErrorCode};

/// Errors produced by the context builder, the gateway and the ledger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// The execution context is missing or was not initialized.
    #[error("invalid execution context")]
    InvalidContext,

    /// A host-reported buffer length exceeds the fixed capacity.
    #[error("invalid {what}: reported length {len} exceeds capacity {max}")]
    InvalidData {
        what: &'static str,
        len: usize,
        max: usize,
    },

    /// A buffer did not decode.
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        source: CodecError,
    },

    /// The host has no mapping, blob or block for the requested key.
    #[error("not found")]
    NotFound,

    /// The referenced account has a zero script hash.
    #[error("account {0} not found")]
    AccountNotFound(AccountId),

    #[error("insufficient balance: have {balance}, need {amount}")]
    InsufficientBalance { balance: u128, amount: u128 },

    #[error("amount overflow: balance {balance} + amount {amount} exceeds u128")]
    AmountOverflow { balance: u128, amount: u128 },

    /// Transfer source and destination are the same account.
    #[error("invalid destination: account {0} cannot transfer to itself")]
    InvalidDestination(AccountId),

    /// The host failed for reasons outside the generator's control.
    #[error("host i/o error: {0}")]
    HostIo(#[from] HostError),
}

impl GeneratorError {
    /// Stable integer code of this error.
    ///
    /// Host errors take the host's own mapping, so a host `NotFound` reports
    /// `NotFound` whichever syscall it came from.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidContext => ErrorCode::InvalidContext,
            Self::InvalidData { .. } | Self::Parse { .. } => ErrorCode::InvalidData,
            Self::NotFound => ErrorCode::NotFound,
            Self::AccountNotFound(_) => ErrorCode::AccountNotFound,
            Self::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
            Self::AmountOverflow { .. } => ErrorCode::AmountOverflow,
            Self::InvalidDestination(_) => ErrorCode::InvalidDestination,
            Self::HostIo(err) => err.to_error_code(),
        }
    }

    /// Map a host error, turning lookup misses into [`GeneratorError::NotFound`].
    pub(crate) fn from_lookup(err: HostError) -> Self {
        if err.is_not_found() {
            Self::NotFound
        } else {
            Self::HostIo(err)
        }
    }
}

impl From<GeneratorError> for ErrorCode {
    fn from(err: GeneratorError) -> Self {
        err.code()
    }
}

/// Convenience result type for the generator.
pub type GeneratorResult<T> = Result<T, GeneratorError>;
