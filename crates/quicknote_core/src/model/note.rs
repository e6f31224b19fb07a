//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted `Note` record and the `NoteDraft` write input.
//! - Derive list previews and human-readable timestamps.
//!
//! # Invariants
//! - `id` is assigned by storage and never reused.
//! - `title` and `content` are never blank.
//! - `updated_at >= created_at`.

use chrono::{DateTime, Local, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Store-assigned note identifier.
pub type NoteId = i64;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Validation failure for note write input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NoteValidationError {
    #[error("note title must not be blank")]
    BlankTitle,
    #[error("note content must not be blank")]
    BlankContent,
}

/// One persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Creation time in epoch milliseconds (UTC).
    pub created_at: i64,
    /// Last successful update in epoch milliseconds (UTC).
    pub updated_at: i64,
}

impl Note {
    /// Checks record-level invariants on a row read back from storage.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        validate_fields(&self.title, &self.content)
    }

    /// Single-line preview of `content`, at most `max_chars` characters plus
    /// a trailing `...` when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        let collapsed = WHITESPACE_RE.replace_all(self.content.trim(), " ");
        let mut preview = collapsed.chars().take(max_chars).collect::<String>();
        if collapsed.chars().count() > max_chars {
            preview.push_str("...");
        }
        preview
    }

    pub fn created_at_local(&self) -> Option<String> {
        format_timestamp(self.created_at, &Local)
    }

    pub fn updated_at_local(&self) -> Option<String> {
        format_timestamp(self.updated_at, &Local)
    }
}

/// Write-side input for create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Rejects a blank title or content. Whitespace-only counts as blank.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        validate_fields(&self.title, &self.content)
    }
}

fn validate_fields(title: &str, content: &str) -> Result<(), NoteValidationError> {
    if title.trim().is_empty() {
        return Err(NoteValidationError::BlankTitle);
    }
    if content.trim().is_empty() {
        return Err(NoteValidationError::BlankContent);
    }
    Ok(())
}

/// Formats epoch milliseconds as `YYYY-MM-DD HH:MM:SS` in `tz`.
///
/// Returns `None` when `epoch_ms` is outside chrono's representable range.
pub fn format_timestamp<Tz>(epoch_ms: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let utc = DateTime::<Utc>::from_timestamp_millis(epoch_ms)?;
    Some(utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string())
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}
