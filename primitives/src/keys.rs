//! Account storage key derivation.
//!
//! A physical key is `blake3(account_id_le || field_tag || sub_key)`. The
//! account id and a field tag are hashed in front of the logical sub-key, so
//! two accounts never share a physical key for the same logical key, and the
//! nonce slot can never collide with a generic key-value slot.

use crate::crypto::hash_blake3_parts;
use crate::types::{AccountId, StorageKey};

/// Field tag for generic account key-value slots.
pub const FIELD_ACCOUNT_KV: u8 = 0;

/// Field tag for the account nonce slot.
pub const FIELD_ACCOUNT_NONCE: u8 = 1;

/// Sentinel sub-key used for the nonce slot.
pub const NONCE_SUB_KEY: [u8; 32] = [0u8; 32];

fn build_account_field(account_id: AccountId, field: u8, sub_key: &[u8; 32]) -> StorageKey {
    hash_blake3_parts(&[&account_id.to_le_bytes(), &[field], sub_key])
}

/// Derive the physical key of `key` inside `account_id`'s storage.
pub fn build_account_key(account_id: AccountId, key: &[u8; 32]) -> StorageKey {
    build_account_field(account_id, FIELD_ACCOUNT_KV, key)
}

/// Derive the physical key of `account_id`'s nonce.
pub fn build_nonce_key(account_id: AccountId) -> StorageKey {
    build_account_field(account_id, FIELD_ACCOUNT_NONCE, &NONCE_SUB_KEY)
}

/// Logical key of `holder`'s balance slot inside a SUDT ledger account.
///
/// Layout: holder id (4 bytes LE) followed by 28 zero bytes.
pub fn sudt_balance_sub_key(holder: AccountId) -> [u8; 32] {
    let mut key = [0u8; 32];
    key[..4].copy_from_slice(&holder.to_le_bytes());
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_key_is_deterministic() {
        let k = [7u8; 32];
        assert_eq!(build_account_key(3, &k), build_account_key(3, &k));
    }

    #[test]
    fn test_account_key_separates_accounts() {
        let k = [7u8; 32];
        assert_ne!(build_account_key(1, &k), build_account_key(2, &k));
        assert_ne!(build_account_key(0, &k), build_account_key(u32::MAX, &k));
    }

    #[test]
    fn test_account_key_separates_sub_keys() {
        assert_ne!(build_account_key(1, &[1u8; 32]), build_account_key(1, &[2u8; 32]));
    }

    #[test]
    fn test_nonce_key_differs_from_kv_slot() {
        // The nonce sentinel is all-zero, which is also a legal generic key.
        assert_ne!(build_nonce_key(9), build_account_key(9, &NONCE_SUB_KEY));
        assert_ne!(build_nonce_key(1), build_nonce_key(2));
    }

    #[test]
    fn test_sudt_balance_sub_key_layout() {
        let key = sudt_balance_sub_key(0x0403_0201);
        assert_eq!(&key[..4], &[1, 2, 3, 4]);
        assert!(key[4..].iter().all(|b| *b == 0));
    }
}
