//! prompt-shelf-rs: embeddable core for a prompt library UI
//!
//! The core owns the prompt collection and everything stateful around it:
//! - Persistent store (add, delete, rate, tolerant load/save)
//! - 5-star rating control (radio-group pointer/keyboard model)
//! - List rendering (derived sort order, search filter, card view models)
//!
//! ## Architecture
//!
//! - **Store**: single source of truth, write-through persistence over a
//!   swappable key-value backend (filesystem by default)
//! - **Rating control / list view**: pure interaction and render state;
//!   no UI toolkit dependency
//! - **Commands**: JSON registry (`"prompts.create"`, `"prompts.rate"`,
//!   ...) that any frontend drives; every mutation returns the
//!   re-rendered list
//!
//! A frontend initializes the store once and then talks JSON:
//!
//! ```
//! use prompt_shelf_core::{commands, storage::MemoryStorage, store::library::Library};
//! use serde_json::json;
//!
//! Library::init(Box::new(MemoryStorage::new())).unwrap();
//! let created = commands::dispatch(
//!     "prompts.create",
//!     json!({"title": "Greeting", "content": "Say hello."}),
//! ).unwrap();
//! assert!(created["prompt"]["id"].is_string());
//! ```

// Module declarations
pub mod commands;
pub mod errors;
pub mod rating;
pub mod storage;
pub mod store;
pub mod view;

pub use errors::{Result, ShelfError};
pub use rating::{handle_key, star_states, Focus, KeyResponse, RatingControl, RatingKey};
pub use storage::{FileStorage, MemoryStorage, StorageBackend, STORAGE_KEY};
pub use store::{clamp_rating, library::Library, Prompt, PromptStore, MAX_RATING};
pub use view::{display_order, matches_query, render, ListView, PromptCard};
