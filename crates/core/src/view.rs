//! List rendering
//!
//! Derives the visible card order from the store and produces serializable
//! view models a frontend can materialize directly. Display order is
//! recomputed on every render and never persisted; rendering the same
//! snapshot twice yields the same view.

use serde::Serialize;

use crate::rating::{star_states, StarState};
use crate::store::Prompt;

/// Render state for one prompt card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptCard {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub rating: u8,
    pub stars: Vec<StarState>,
}

impl PromptCard {
    fn from_prompt(prompt: &Prompt) -> Self {
        Self {
            id: prompt.id.clone(),
            title: prompt.title.clone(),
            preview: prompt.content.clone(),
            rating: prompt.rating,
            stars: star_states(prompt.rating),
        }
    }
}

/// The whole rendered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub cards: Vec<PromptCard>,
    /// Set iff no card survived the filter; drives the empty-state hint
    pub empty: bool,
}

/// Display order: rating descending, newest first within a rating
pub fn display_order(prompts: &[Prompt]) -> Vec<&Prompt> {
    let mut ordered: Vec<&Prompt> = prompts.iter().collect();
    ordered.sort_by(|a, b| {
        b.rating
            .cmp(&a.rating)
            .then(b.created_at.cmp(&a.created_at))
    });
    ordered
}

/// Case-insensitive substring match against title or content.
/// A blank query matches everything.
pub fn matches_query(prompt: &Prompt, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    prompt.title.to_lowercase().contains(&query)
        || prompt.content.to_lowercase().contains(&query)
}

/// Render the card list for the given snapshot, optionally filtered
pub fn render(prompts: &[Prompt], query: Option<&str>) -> ListView {
    let cards: Vec<PromptCard> = display_order(prompts)
        .into_iter()
        .filter(|p| query.map_or(true, |q| matches_query(p, q)))
        .map(PromptCard::from_prompt)
        .collect();
    let empty = cards.is_empty();
    ListView { cards, empty }
}
