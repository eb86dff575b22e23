//! Core type aliases and constants for the layer-2 generator.

/// 32-byte hash used for script hashes, data addresses and block hashes.
pub type Hash = [u8; 32];

/// Layer-2 account identifier. Ids are not guaranteed to be contiguous.
pub type AccountId = u32;

/// Script hash bound to an account at creation. All-zero means "no account".
pub type ScriptHash = Hash;

/// Physical 32-byte key in the host key-value store.
pub type StorageKey = [u8; 32];

/// Fixed-size value stored under a [`StorageKey`].
pub type Value = [u8; 32];

/// A zero-valued hash (32 zero bytes).
pub const ZERO_HASH: Hash = [0u8; 32];

/// Returns true if the hash is the all-zero "absent" sentinel.
pub fn is_zero_hash(hash: &Hash) -> bool {
    hash.iter().all(|b| *b == 0)
}

/// Encode a `u128` into a 32-byte storage value (low 16 bytes, LE).
pub fn u128_to_value(v: u128) -> Value {
    let mut value = [0u8; 32];
    value[..16].copy_from_slice(&v.to_le_bytes());
    value
}

/// Decode a `u128` from a storage value. The high 16 bytes are ignored.
pub fn u128_from_value(value: &Value) -> u128 {
    let mut buf = [0u8; 16];
    buf.copy_from_slice(&value[..16]);
    u128::from_le_bytes(buf)
}

/// Decode a u32 from little-endian bytes.
pub fn u32_from_le_bytes(bytes: &[u8]) -> Option<u32> {
    if bytes.len() < 4 {
        return None;
    }
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[..4]);
    Some(u32::from_le_bytes(buf))
}
