//! Core domain logic for QuickNote.
//! This crate owns the note store and every persistence invariant.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{default_log_level, AppConfig};
pub use logging::{init_logging, logging_status, LoggingError};
pub use model::note::{format_timestamp, Note, NoteDraft, NoteId, NoteValidationError};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use search::substring::SearchQuery;
pub use service::note_store::{NoteStore, StoreError, StoreOperation, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
