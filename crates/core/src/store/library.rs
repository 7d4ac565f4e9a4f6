//! Process-global store handle
//!
//! Command handlers are plain `fn(Value) -> Result<Value>` (see
//! `crate::commands`), so they reach the store through a global handle
//! initialized once by the embedder, in the same way the storage location
//! is chosen once at startup.

use std::sync::{Mutex, OnceLock};

use crate::errors::{Result, ShelfError};
use crate::storage::{FileStorage, StorageBackend};
use super::PromptStore;

static STORE: OnceLock<Mutex<PromptStore>> = OnceLock::new();

pub struct Library;

impl Library {
    /// Initialize the global store over `storage`.
    ///
    /// Idempotent: a second call is a no-op so embedders can call it from
    /// multiple entry points.
    pub fn init(storage: Box<dyn StorageBackend>) -> Result<()> {
        if STORE.get().is_some() {
            return Ok(());
        }
        let store = PromptStore::open(storage);
        let _ = STORE.set(Mutex::new(store));
        Ok(())
    }

    /// Initialize the global store at the platform data directory
    pub fn init_default() -> Result<()> {
        if STORE.get().is_some() {
            return Ok(());
        }
        Self::init(Box::new(FileStorage::default_location()?))
    }

    /// Run `f` against the global store
    pub fn with<T>(f: impl FnOnce(&mut PromptStore) -> T) -> Result<T> {
        let store = STORE
            .get()
            .ok_or_else(|| ShelfError::Other("prompt library not initialized".to_string()))?;
        let mut guard = store
            .lock()
            .map_err(|_| ShelfError::Other("prompt library lock poisoned".to_string()))?;
        Ok(f(&mut guard))
    }
}
