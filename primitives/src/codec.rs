//! Wire format of the context buffers supplied by the host.
//!
//! All numeric values are little-endian.
//!
//! ```text
//! TransactionContext:
//!   [from_id: u32] [to_id: u32] [nonce: u32] [args_len: u32] [args: args_len bytes]
//!
//! BlockInfo (exactly 20 bytes):
//!   [number: u64] [timestamp: u64] [block_producer_id: u32]
//! ```
//!
//! The transaction hash is not carried on the wire; it is the BLAKE3 hash of
//! the serialized transaction buffer.

use alloc::vec::Vec;
use core::fmt;

use crate::crypto::hash_blake3;
use crate::types::{AccountId, Hash};

/// Fixed size of a serialized [`BlockInfo`].
pub const BLOCK_INFO_SIZE: usize = 8 + 8 + 4;

/// Size of a serialized [`TransactionContext`] without arguments.
pub const TX_HEADER_SIZE: usize = 4 + 4 + 4 + 4;

/// Decoding failure for context buffers and call arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer ended before a field could be read.
    UnexpectedEnd { needed: usize, remaining: usize },
    /// Bytes were left over after the last field.
    TrailingBytes(usize),
    /// A tag byte did not name a known variant.
    UnknownTag(u8),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd { needed, remaining } => write!(
                f,
                "unexpected end of data: needed {} bytes, {} remaining",
                needed, remaining
            ),
            Self::TrailingBytes(n) => write!(f, "{} trailing bytes", n),
            Self::UnknownTag(tag) => write!(f, "unknown tag 0x{:02x}", tag),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}

/// A cursor for reading bytes during decoding.
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if n > self.remaining() {
            return Err(CodecError::UnexpectedEnd {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.read_bytes(4)?);
        Ok(u32::from_le_bytes(buf))
    }

    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.read_bytes(8)?);
        Ok(u64::from_le_bytes(buf))
    }

    pub fn read_u128(&mut self) -> Result<u128, CodecError> {
        let mut buf = [0u8; 16];
        buf.copy_from_slice(self.read_bytes(16)?);
        Ok(u128::from_le_bytes(buf))
    }

    pub fn read_var_bytes(&mut self) -> Result<Vec<u8>, CodecError> {
        let len = self.read_u32()? as usize;
        Ok(self.read_bytes(len)?.to_vec())
    }

    /// Fail if any bytes remain unread.
    pub fn finish(self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(CodecError::TrailingBytes(n)),
        }
    }
}

/// The transaction being executed, as seen by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionContext {
    /// Sender account.
    pub from_id: AccountId,
    /// Receiver account (the script being called).
    pub to_id: AccountId,
    /// Sender nonce the transaction was signed with.
    pub nonce: u32,
    /// Call arguments, opaque to this layer.
    pub args: Vec<u8>,
    /// BLAKE3 hash of the serialized transaction.
    pub tx_hash: Hash,
}

impl TransactionContext {
    /// Serialize the wire fields. `tx_hash` is derived, not encoded.
    pub fn encode(&self) -> Vec<u8> {
        encode_transaction(self.from_id, self.to_id, self.nonce, &self.args)
    }

    /// Decode a serialized transaction and compute its hash.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let mut r = Reader::new(data);
        let from_id = r.read_u32()?;
        let to_id = r.read_u32()?;
        let nonce = r.read_u32()?;
        let args = r.read_var_bytes()?;
        r.finish()?;

        Ok(Self {
            from_id,
            to_id,
            nonce,
            args,
            tx_hash: hash_blake3(data),
        })
    }
}

/// Serialize a transaction from its parts.
pub fn encode_transaction(from_id: AccountId, to_id: AccountId, nonce: u32, args: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(TX_HEADER_SIZE + args.len());
    buf.extend_from_slice(&from_id.to_le_bytes());
    buf.extend_from_slice(&to_id.to_le_bytes());
    buf.extend_from_slice(&nonce.to_le_bytes());
    buf.extend_from_slice(&(args.len() as u32).to_le_bytes());
    buf.extend_from_slice(args);
    buf
}

/// The block the transaction is included in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockInfo {
    pub number: u64,
    /// Logical block time supplied by the host, never the OS clock.
    pub timestamp: u64,
    pub block_producer_id: AccountId,
}

impl BlockInfo {
    pub fn encode(&self) -> [u8; BLOCK_INFO_SIZE] {
        let mut buf = [0u8; BLOCK_INFO_SIZE];
        buf[..8].copy_from_slice(&self.number.to_le_bytes());
        buf[8..16].copy_from_slice(&self.timestamp.to_le_bytes());
        buf[16..].copy_from_slice(&self.block_producer_id.to_le_bytes());
        buf
    }

    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let mut r = Reader::new(data);
        let info = Self {
            number: r.read_u64()?,
            timestamp: r.read_u64()?,
            block_producer_id: r.read_u32()?,
        };
        r.finish()?;
        Ok(info)
    }
}
