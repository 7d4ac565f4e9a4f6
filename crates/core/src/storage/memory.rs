//! In-memory key-value storage
//!
//! Used by tests and by embedders that want a throwaway library. Handles
//! share one underlying map, so a clone can be kept around to inspect what
//! a store persisted or to open a second store over the same data.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::errors::Result;
use super::StorageBackend;

/// HashMap-backed storage; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry, handy for decode tests
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        // A freshly created mutex cannot be poisoned
        if let Ok(mut entries) = storage.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| "memory storage lock poisoned")?;
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| "memory storage lock poisoned")?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
