//! 5-star rating control
//!
//! Interaction model for the per-prompt star widget, following the
//! radio-group accessibility pattern: the group exposes exactly one tab
//! stop, and arrow keys move focus and selection together. This module is
//! pure state; a frontend materializes the buttons from [`StarState`] and
//! feeds pointer/keyboard events back through [`RatingControl`].
//!
//! All rating writes go through [`PromptStore::set_rating`], so the
//! toggle-off rule applies to keyboard input as well as clicks.

use serde::Serialize;

use crate::store::{PromptStore, MAX_RATING};

/// Render state for one star button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarState {
    /// 1-based star index
    pub index: u8,
    /// Star is visually lit (index <= rating)
    pub filled: bool,
    /// Radio-group checked star. When nothing is rated this is star 1,
    /// as the keyboard entry point only, not a selection.
    pub checked: bool,
    /// The group's single tab stop
    pub focusable: bool,
    /// Accessible label ("1 star", "2 stars", ...)
    pub label: String,
}

/// Where focus lands after a keyboard interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    /// A star button, by 1-based index
    Star(u8),
    /// The group container itself
    Group,
}

/// Keys the control responds to, parsed from browser-style key names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingKey {
    ArrowLeft,
    ArrowDown,
    ArrowRight,
    ArrowUp,
    Home,
    End,
    Digit(u8),
}

impl RatingKey {
    /// Parse a key name as delivered by a UI event ("ArrowLeft", "Home",
    /// "3", ...). Unrecognized keys return `None` and must not consume
    /// the event.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowUp" => Some(Self::ArrowUp),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "0" | "1" | "2" | "3" | "4" | "5" => {
                key.parse::<u8>().ok().map(Self::Digit)
            },
            _ => None,
        }
    }
}

/// Outcome of one recognized key press: the value to feed through
/// `set_rating` and where focus moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyResponse {
    pub value: u8,
    pub focus: Focus,
}

/// Per-star render states for a rating
pub fn star_states(rating: u8) -> Vec<StarState> {
    let checked_index = entry_index(rating);
    (1..=MAX_RATING)
        .map(|i| StarState {
            index: i,
            filled: i <= rating,
            checked: i == checked_index,
            focusable: i == checked_index,
            label: if i == 1 { "1 star".to_string() } else { format!("{} stars", i) },
        })
        .collect()
}

/// The star arrow navigation starts from: the checked star, or star 1
/// when nothing is rated
fn entry_index(rating: u8) -> u8 {
    if rating == 0 { 1 } else { rating.min(MAX_RATING) }
}

/// Transition table for the keyboard contract
pub fn handle_key(current_rating: u8, key: RatingKey) -> KeyResponse {
    let entry = entry_index(current_rating);
    match key {
        RatingKey::ArrowLeft | RatingKey::ArrowDown => {
            let idx = entry.saturating_sub(1).max(1);
            KeyResponse { value: idx, focus: Focus::Star(idx) }
        },
        RatingKey::ArrowRight | RatingKey::ArrowUp => {
            let idx = (entry + 1).min(MAX_RATING);
            KeyResponse { value: idx, focus: Focus::Star(idx) }
        },
        RatingKey::Home => KeyResponse { value: 1, focus: Focus::Star(1) },
        RatingKey::End => KeyResponse { value: MAX_RATING, focus: Focus::Star(MAX_RATING) },
        RatingKey::Digit(0) => KeyResponse { value: 0, focus: Focus::Group },
        RatingKey::Digit(d) => {
            let d = d.min(MAX_RATING);
            KeyResponse { value: d, focus: Focus::Star(d) }
        },
    }
}

/// The widget side of the rating feature, bound to one record id
#[derive(Debug, Clone)]
pub struct RatingControl {
    prompt_id: String,
}

impl RatingControl {
    pub fn new(prompt_id: impl Into<String>) -> Self {
        Self { prompt_id: prompt_id.into() }
    }

    pub fn prompt_id(&self) -> &str {
        &self.prompt_id
    }

    /// Pointer path: clicking star `index`. Returns the new rating, or
    /// `None` when the record no longer exists.
    pub fn click(&self, store: &mut PromptStore, index: u8) -> Option<u8> {
        store.set_rating(&self.prompt_id, i64::from(index))
    }

    /// Keyboard path: apply a browser-style key name. Returns where focus
    /// moves, or `None` when the key is unrecognized or the record no
    /// longer exists (the event is then not consumed).
    pub fn key(&self, store: &mut PromptStore, key: &str) -> Option<Focus> {
        let key = RatingKey::parse(key)?;
        let current = store.get(&self.prompt_id)?.rating;
        let response = handle_key(current, key);
        store.set_rating(&self.prompt_id, i64::from(response.value))?;
        Some(response.focus)
    }
}
