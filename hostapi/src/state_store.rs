//! Backend storage abstraction for account key-value slots.
//!
//! `MemHost` combines a `StateStore` (committed state) with a write buffer
//! so that a run's writes are applied all-or-nothing: reads check the
//! buffer first, then fall through to the store.

use l2gen_primitives::{StorageKey, Value};

use crate::error::HostError;

/// Abstraction over committed key-value storage.
///
/// Implementations must be deterministic: the same key always returns
/// the same value for a given committed state.
pub trait StateStore {
    /// Get the value for a key. Returns `Ok(None)` if the key was never written.
    fn get(&self, key: &StorageKey) -> Result<Option<Value>, HostError>;

    /// Write a value.
    fn put(&mut self, key: StorageKey, value: Value) -> Result<(), HostError>;

    /// Check if a key exists.
    ///
    /// Default implementation uses `get()`, but backends may optimize this.
    fn contains(&self, key: &StorageKey) -> Result<bool, HostError> {
        Ok(self.get(key)?.is_some())
    }
}
