//! Case-insensitive substring matching over note title and content.
//!
//! # Invariants
//! - Only the empty string means "no filter"; any other text, whitespace
//!   included, is matched literally.
//! - Matching folds case with Unicode lowercase on both sides.
//! - Matching never reorders input; callers keep list order.

use crate::model::note::Note;

/// Normalized search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: Option<String>,
}

impl SearchQuery {
    /// Builds a query from raw user text.
    ///
    /// Text is not trimmed; callers that treat blank input as "no filter"
    /// must do so before building the query.
    pub fn new(text: &str) -> Self {
        let needle = if text.is_empty() {
            None
        } else {
            Some(text.to_lowercase())
        };
        Self { needle }
    }

    /// Query that matches every note.
    pub fn all() -> Self {
        Self { needle: None }
    }

    /// Returns `true` when the query applies no filter.
    pub fn is_unfiltered(&self) -> bool {
        self.needle.is_none()
    }

    /// Returns whether `note` title or content contains the needle.
    pub fn matches(&self, note: &Note) -> bool {
        let Some(needle) = self.needle() else {
            return true;
        };
        note.title.to_lowercase().contains(needle) || note.content.to_lowercase().contains(needle)
    }

    fn needle(&self) -> Option<&str> {
        self.needle.as_deref()
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::all()
    }
}
