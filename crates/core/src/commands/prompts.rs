//! Prompt library commands
//!
//! JSON handlers behind the command registry. Mutating commands return the
//! re-rendered list alongside their own result so the frontend can replace
//! the whole card list after every change rather than patching in place.

use serde_json::{json, Value};

use crate::errors::{Result, ShelfError};
use crate::rating::RatingControl;
use crate::store::library::Library;
use crate::view;

fn query_of(args: &Value) -> Option<String> {
    args.get("query").and_then(|v| v.as_str()).map(String::from)
}

/// `prompts.list` - rendered card list, optionally filtered by `query`
pub fn list(args: Value) -> Result<Value> {
    let query = query_of(&args);
    let view = Library::with(|store| view::render(store.prompts(), query.as_deref()))?;
    Ok(json!(view))
}

/// `prompts.create` - add a prompt from `title` and `content`
///
/// Both fields must be non-empty after trimming; this is the validation
/// seam the store itself relies on.
pub fn create(args: Value) -> Result<Value> {
    let title = args.get("title").and_then(|v| v.as_str()).ok_or("Missing title")?;
    let content = args.get("content").and_then(|v| v.as_str()).ok_or("Missing content")?;

    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(ShelfError::InvalidArgs {
            command: "prompts.create".to_string(),
            reason:  "title and content must be non-empty".to_string(),
        });
    }

    let (prompt, view) = Library::with(|store| {
        let prompt = store.add(title, content);
        (prompt, view::render(store.prompts(), None))
    })?;

    Ok(json!({ "prompt": prompt, "view": view }))
}

/// `prompts.delete` - remove a prompt by `id`; unknown ids are a no-op
pub fn delete(args: Value) -> Result<Value> {
    let id = args.get("id").and_then(|v| v.as_str()).ok_or("Missing id")?;

    let (deleted, view) = Library::with(|store| {
        let deleted = store.delete(id);
        (deleted, view::render(store.prompts(), None))
    })?;

    Ok(json!({ "deleted": deleted, "view": view }))
}

/// `prompts.rate` - pointer path: star `value` was clicked on prompt `id`
///
/// A non-numeric or out-of-range value is coerced, never rejected; the
/// toggle-off rule applies in the store.
pub fn rate(args: Value) -> Result<Value> {
    let id = args.get("id").and_then(|v| v.as_str()).ok_or("Missing id")?;
    let value = args.get("value").and_then(|v| v.as_i64()).unwrap_or(0);

    let (rating, view) = Library::with(|store| {
        let rating = store.set_rating(id, value);
        (rating, view::render(store.prompts(), None))
    })?;

    Ok(json!({ "rating": rating, "view": view }))
}

/// `prompts.key` - keyboard path: key `key` pressed inside the rating
/// group of prompt `id`
///
/// Returns `focus` (where the frontend should move focus; null when the
/// key was not recognized and the event should not be consumed) plus the
/// re-rendered list.
pub fn key(args: Value) -> Result<Value> {
    let id = args.get("id").and_then(|v| v.as_str()).ok_or("Missing id")?;
    let key = args.get("key").and_then(|v| v.as_str()).ok_or("Missing key")?;

    let (focus, view) = Library::with(|store| {
        let control = RatingControl::new(id);
        let focus = control.key(store, key);
        (focus, view::render(store.prompts(), None))
    })?;

    Ok(json!({ "focus": focus, "view": view }))
}
