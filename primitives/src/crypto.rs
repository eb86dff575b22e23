//! Hashing helpers.
//!
//! BLAKE3 is used for storage key derivation, content-addressed data,
//! script hashes, and the transaction hash.

use crate::types::Hash;

/// Compute BLAKE3 hash of the input data.
pub fn hash_blake3(data: &[u8]) -> Hash {
    *blake3::hash(data).as_bytes()
}

/// Hash a sequence of byte slices as if they were concatenated.
pub fn hash_blake3_parts(parts: &[&[u8]]) -> Hash {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(part);
    }
    *hasher.finalize().as_bytes()
}

/// Address under which `storeData` files a blob.
pub fn data_hash(data: &[u8]) -> Hash {
    hash_blake3(data)
}

/// Script hash bound to an account created from `script`.
pub fn script_hash(script: &[u8]) -> Hash {
    hash_blake3(script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blake3_deterministic() {
        assert_eq!(hash_blake3(b"generator"), hash_blake3(b"generator"));
        assert_ne!(hash_blake3(b"a"), hash_blake3(b"b"));
    }

    #[test]
    fn test_blake3_known_vector() {
        // BLAKE3("") from the reference test vectors.
        let h = hash_blake3(b"");
        assert_eq!(h[0], 0xaf);
        assert_eq!(h[1], 0x13);
        assert_eq!(h[31], 0x62);
    }

    #[test]
    fn test_parts_match_concatenation() {
        assert_eq!(
            hash_blake3_parts(&[b"hello", b" ", b"world"]),
            hash_blake3(b"hello world")
        );
    }
}
