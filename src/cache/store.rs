//! Cache Store Module
//!
//! Concurrent key-value storage enforcing the create-once contract: a key can
//! only be written while absent, and only an explicit delete frees it again.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::cache::Payload;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// In-memory key to payload mapping, safe to share across threads.
///
/// Every mutation is a single conditional step on one key. `put` holds the
/// shard lock for that key across the presence check and the insert, and
/// `delete` removes only what is present, so operations on the same key are
/// linearizable. Keys in different shards never contend.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: DashMap<String, Payload>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    // == Get ==
    /// Returns the payload stored at `key`.
    ///
    /// The returned payload shares the stored buffer; no bytes are copied.
    pub fn get(&self, key: &str) -> Result<Payload> {
        self.entries
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    // == Put ==
    /// Stores `payload` at `key` if the key is absent.
    ///
    /// Returns the key on success. An existing entry is left untouched and
    /// reported as `AlreadyExists`.
    pub fn put(&self, key: String, payload: Payload) -> Result<String> {
        match self.entries.entry(key) {
            Entry::Occupied(occupied) => Err(CacheError::AlreadyExists(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                let key = vacant.key().clone();
                vacant.insert(payload);
                Ok(key)
            }
        }
    }

    // == Delete ==
    /// Removes the entry at `key`, returning the key.
    pub fn delete(&self, key: &str) -> Result<String> {
        self.entries
            .remove(key)
            .map(|(key, _)| key)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    /// Returns true if `key` currently holds an entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
