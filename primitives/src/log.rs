//! Append-only log records emitted through the `log` syscall.

use core::fmt;

use crate::codec::{CodecError, Reader};
use crate::types::AccountId;

/// Caller-chosen service flag attached to every log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceFlag(pub u8);

impl ServiceFlag {
    /// Records written by a SUDT ledger.
    pub const SUDT_OPERATION: ServiceFlag = ServiceFlag(0);
}

impl fmt::Display for ServiceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

/// Operation tag of a SUDT transfer record.
pub const SUDT_OPERATION_TRANSFER: u8 = 0;

/// Encoded length of a [`TransferLog`]: tag + from + to + amount.
pub const TRANSFER_LOG_SIZE: usize = 1 + 4 + 4 + 16;

/// Record of a completed SUDT transfer.
///
/// Wire layout, no padding, little-endian:
/// `[tag: u8 = 0] [from_id: u32] [to_id: u32] [amount: u128]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferLog {
    pub from_id: AccountId,
    pub to_id: AccountId,
    pub amount: u128,
}

impl TransferLog {
    pub fn encode(&self) -> [u8; TRANSFER_LOG_SIZE] {
        let mut buf = [0u8; TRANSFER_LOG_SIZE];
        buf[0] = SUDT_OPERATION_TRANSFER;
        buf[1..5].copy_from_slice(&self.from_id.to_le_bytes());
        buf[5..9].copy_from_slice(&self.to_id.to_le_bytes());
        buf[9..].copy_from_slice(&self.amount.to_le_bytes());
        buf
    }

    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let mut r = Reader::new(data);
        let tag = r.read_u8()?;
        if tag != SUDT_OPERATION_TRANSFER {
            return Err(CodecError::UnknownTag(tag));
        }
        let log = Self {
            from_id: r.read_u32()?,
            to_id: r.read_u32()?,
            amount: r.read_u128()?,
        };
        r.finish()?;
        Ok(log)
    }
}
