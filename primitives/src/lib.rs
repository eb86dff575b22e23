//! `l2gen-primitives`: foundational types for the layer-2 generator.
//!
//! This crate provides the account and hash types, stable error and syscall
//! codes, storage key derivation, the transaction/block context wire format,
//! and the SUDT transfer log record shared by the host API crate and the
//! generator.
//!
//! Supports `#![no_std]` for guest builds (use `default-features = false`).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod types;
pub mod error;
pub mod syscall;
pub mod crypto;
pub mod keys;
pub mod codec;
pub mod log;

// Re-export commonly used types at the crate root for convenience.
pub use types::{AccountId, Hash, ScriptHash, StorageKey, Value, ZERO_HASH};
pub use error::ErrorCode;
pub use syscall::SyscallCode;
pub use keys::{build_account_key, build_nonce_key, sudt_balance_sub_key};
pub use codec::{BlockInfo, CodecError, TransactionContext};
pub use log::{ServiceFlag, TransferLog};
