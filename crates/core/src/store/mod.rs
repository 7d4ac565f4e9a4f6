//! Prompt collection and its persistence cycle
//!
//! The store is the single source of truth for prompt records. Every
//! mutation rewrites the whole collection through the storage backend
//! before returning; loading is tolerant of malformed or foreign payloads
//! and degrades to safe defaults instead of erroring.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::storage::{StorageBackend, STORAGE_KEY};

pub mod library;

#[cfg(test)]
mod store_test;

/// Highest selectable rating
pub const MAX_RATING: u8 = 5;

/// One saved prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Milliseconds since epoch, assigned at creation, never changed
    pub created_at: i64,
    /// 0 means unrated
    pub rating: u8,
}

/// Clamp an arbitrary rating input into the valid range.
/// Anything outside [0,5] collapses to 0 (unrated), it is never rejected.
pub fn clamp_rating(value: i64) -> u8 {
    if (0..=MAX_RATING as i64).contains(&value) {
        value as u8
    } else {
        0
    }
}

/// Decode one persisted record, tolerantly.
///
/// Records missing the required string fields are dropped; a missing,
/// non-integer, or out-of-range rating becomes 0; a missing timestamp
/// becomes 0 so the record still sorts deterministically.
fn decode_record(value: &Value) -> Option<Prompt> {
    let id = value.get("id")?.as_str()?;
    let title = value.get("title")?.as_str()?;
    let content = value.get("content")?.as_str()?;
    let created_at = value.get("createdAt").and_then(Value::as_i64).unwrap_or(0);
    let rating = value
        .get("rating")
        .and_then(Value::as_i64)
        .map(clamp_rating)
        .unwrap_or(0);

    Some(Prompt {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        created_at,
        rating,
    })
}

/// Owned, mutable prompt collection with write-through persistence
pub struct PromptStore {
    prompts: Vec<Prompt>,
    storage: Box<dyn StorageBackend>,
}

impl PromptStore {
    /// Open a store over `storage`, loading whatever is persisted there.
    ///
    /// A missing key, unparsable JSON, or a non-array payload all load as
    /// an empty collection; this never fails.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let prompts = Self::load_from(storage.as_ref());
        Self { prompts, storage }
    }

    fn load_from(storage: &dyn StorageBackend) -> Vec<Prompt> {
        let raw = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read prompt storage, starting empty");
                return Vec::new();
            },
        };

        let parsed: Value = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "malformed prompt storage payload, starting empty");
                return Vec::new();
            },
        };

        let Some(items) = parsed.as_array() else {
            warn!("prompt storage payload is not an array, starting empty");
            return Vec::new();
        };

        let prompts: Vec<Prompt> = items.iter().filter_map(decode_record).collect();
        if prompts.len() < items.len() {
            warn!(
                dropped = items.len() - prompts.len(),
                "dropped structurally invalid prompt records on load"
            );
        }
        debug!(count = prompts.len(), "loaded prompt collection");
        prompts
    }

    /// Persist the whole collection. Failures are logged and swallowed;
    /// the in-memory state stays authoritative for the session.
    fn save(&mut self) {
        let payload = match serde_json::to_string(&self.prompts) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "failed to serialize prompt collection");
                return;
            },
        };
        if let Err(e) = self.storage.set(STORAGE_KEY, &payload) {
            warn!(error = %e, "failed to persist prompt collection, keeping in-memory state");
        }
    }

    /// Current collection, in insertion order
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Look up one record by id
    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    /// Create a record and append it to the collection.
    ///
    /// Trims both fields, assigns a fresh id and the current time, starts
    /// unrated, and persists before returning. Non-emptiness is the
    /// caller's responsibility (the command layer validates).
    pub fn add(&mut self, title: &str, content: &str) -> Prompt {
        let prompt = Prompt {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            created_at: Utc::now().timestamp_millis(),
            rating: 0,
        };
        self.prompts.push(prompt.clone());
        self.save();
        prompt
    }

    /// Remove the record with `id`. Unknown ids are a no-op and do not
    /// touch storage. Returns whether a record was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.prompts.len();
        self.prompts.retain(|p| p.id != id);
        let removed = self.prompts.len() != before;
        if removed {
            self.save();
        }
        removed
    }

    /// Set the rating of the record with `id`.
    ///
    /// Selecting the current rating again clears it to 0 (toggle-off);
    /// anything outside [0,5] is coerced to 0. Unknown ids are a no-op.
    /// Persists whenever the record was found; returns the new rating.
    pub fn set_rating(&mut self, id: &str, value: i64) -> Option<u8> {
        let prompt = self.prompts.iter_mut().find(|p| p.id == id)?;
        let new_rating = if prompt.rating as i64 == value {
            0 // toggle off if same
        } else {
            clamp_rating(value)
        };
        prompt.rating = new_rating;
        self.save();
        Some(new_rating)
    }
}
