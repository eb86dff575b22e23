//! In-memory state store.
//!
//! `MemStore` implements `StateStore` using a `BTreeMap` for deterministic
//! key ordering.

use std::collections::BTreeMap;

use l2gen_primitives::{StorageKey, Value};

use crate::error::HostError;
use crate::state_store::StateStore;

/// In-memory state store backed by `BTreeMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemStore {
    data: BTreeMap<StorageKey, Value>,
}

impl MemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Insert a key-value pair into the store.
    pub fn insert(&mut self, key: StorageKey, value: Value) {
        self.data.insert(key, value);
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&StorageKey, &Value)> {
        self.data.iter()
    }
}

impl StateStore for MemStore {
    fn get(&self, key: &StorageKey) -> Result<Option<Value>, HostError> {
        Ok(self.data.get(key).copied())
    }

    fn put(&mut self, key: StorageKey, value: Value) -> Result<(), HostError> {
        self.insert(key, value);
        Ok(())
    }

    fn contains(&self, key: &StorageKey) -> Result<bool, HostError> {
        Ok(self.data.contains_key(key))
    }
}
