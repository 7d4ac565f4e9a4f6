//! Key-value persistence backends
//!
//! The store keeps the whole prompt collection as one JSON array under a
//! single fixed key, so the backend surface is deliberately tiny: get a
//! string by key, set a string by key. Backends are swappable so tests can
//! run against memory or a mock instead of the filesystem.

use crate::errors::Result;

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Fixed key the prompt collection is persisted under
pub const STORAGE_KEY: &str = "prompt-library.v2";

/// String key-value storage, the persistence seam of the store
#[cfg_attr(test, mockall::automock)]
pub trait StorageBackend: Send {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
