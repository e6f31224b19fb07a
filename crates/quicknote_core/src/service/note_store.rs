//! File-backed note store.
//!
//! # Responsibility
//! - Expose initialize/create/list/get/update/delete/search over one SQLite file.
//! - Scope one connection to each call and release it on every exit path.
//! - Convert storage-engine failures into logged `StoreError` values.
//!
//! # Invariants
//! - Initialization is create-if-absent and never destroys existing rows.
//! - No store operation panics or lets a SQLite error escape unlogged.
//! - Not-found is `Ok(None)` / `Ok(false)`, distinct from `Err(StoreError)`.
//! - Note titles and content are never written to logs.

use crate::db::open_db;
use crate::model::note::{Note, NoteDraft, NoteId, NoteValidationError};
use crate::repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
use crate::search::substring::SearchQuery;
use log::{debug, error, info, warn};
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation names used in logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Initialize,
    Create,
    ListAll,
    Get,
    Update,
    Delete,
    Search,
    Count,
}

impl StoreOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::Create => "create",
            Self::ListAll => "list_all",
            Self::Get => "get",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Search => "search",
            Self::Count => "count",
        }
    }
}

impl Display for StoreOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Neutral failure signal returned by every store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Caller supplied a blank title or content.
    #[error("note {operation} rejected: {source}")]
    Validation {
        operation: StoreOperation,
        #[source]
        source: NoteValidationError,
    },
    /// SQLite or schema failure.
    #[error("note {operation} failed: {source}")]
    Storage {
        operation: StoreOperation,
        #[source]
        source: RepoError,
    },
    /// Database directory could not be prepared.
    #[error("note {operation} failed to prepare `{}`: {source}", .path.display())]
    Io {
        operation: StoreOperation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn operation(&self) -> StoreOperation {
        match self {
            Self::Validation { operation, .. }
            | Self::Storage { operation, .. }
            | Self::Io { operation, .. } => *operation,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    fn from_repo(operation: StoreOperation, err: RepoError) -> Self {
        match err {
            RepoError::Validation(source) => Self::Validation { operation, source },
            source => Self::Storage { operation, source },
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_failed",
            Self::Storage { .. } => "storage_failed",
            Self::Io { .. } => "io_failed",
        }
    }
}

/// Note store over one SQLite database file.
#[derive(Debug, Clone)]
pub struct NoteStore {
    db_path: PathBuf,
}

impl NoteStore {
    /// Ensures the database file and schema exist, then returns a ready store.
    ///
    /// Missing parent directories are created. An existing file keeps its
    /// rows; only pending migrations are applied.
    pub fn initialize(db_path: impl Into<PathBuf>) -> StoreResult<Self> {
        let started_at = Instant::now();
        let db_path = db_path.into();

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(source) = std::fs::create_dir_all(parent) {
                let err = StoreError::Io {
                    operation: StoreOperation::Initialize,
                    path: parent.to_path_buf(),
                    source,
                };
                log_failure(StoreOperation::Initialize, started_at, &err);
                return Err(err);
            }
        }

        match open_db(&db_path) {
            Ok(_conn) => {
                info!(
                    "event=store_initialize module=store status=ok duration_ms={} db_path={}",
                    started_at.elapsed().as_millis(),
                    db_path.display()
                );
                Ok(Self { db_path })
            }
            Err(source) => {
                let err = StoreError::from_repo(StoreOperation::Initialize, source.into());
                log_failure(StoreOperation::Initialize, started_at, &err);
                Err(err)
            }
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Inserts a note and returns its newly assigned id.
    pub fn create(&self, title: &str, content: &str) -> StoreResult<NoteId> {
        let draft = NoteDraft::new(title, content);
        self.run(StoreOperation::Create, |repo| repo.create_note(&draft))
    }

    /// Returns every note, most recently updated first.
    pub fn list_all(&self) -> StoreResult<Vec<Note>> {
        self.run(StoreOperation::ListAll, |repo| repo.list_notes())
    }

    /// Point lookup. `Ok(None)` when no note has `id`.
    pub fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        self.run(StoreOperation::Get, |repo| repo.get_note(id))
    }

    /// Replaces title/content. `Ok(false)` when no note has `id`.
    pub fn update(&self, id: NoteId, title: &str, content: &str) -> StoreResult<bool> {
        let draft = NoteDraft::new(title, content);
        self.run(StoreOperation::Update, |repo| repo.update_note(id, &draft))
    }

    /// Hard-deletes a note. `Ok(false)` when no note has `id`.
    pub fn delete(&self, id: NoteId) -> StoreResult<bool> {
        self.run(StoreOperation::Delete, |repo| repo.delete_note(id))
    }

    /// Case-insensitive substring search over title and content.
    ///
    /// Blank `text` returns the same notes as [`NoteStore::list_all`].
    pub fn search(&self, text: &str) -> StoreResult<Vec<Note>> {
        let query = SearchQuery::new(text);
        self.run(StoreOperation::Search, |repo| repo.search_notes(&query))
    }

    pub fn count(&self) -> StoreResult<usize> {
        self.run(StoreOperation::Count, |repo| repo.count_notes())
    }

    fn run<T>(
        &self,
        operation: StoreOperation,
        f: impl FnOnce(&SqliteNoteRepository<'_>) -> RepoResult<T>,
    ) -> StoreResult<T> {
        let started_at = Instant::now();
        let result = open_db(&self.db_path)
            .map_err(RepoError::from)
            .and_then(|conn| {
                let repo = SqliteNoteRepository::try_new(&conn)?;
                f(&repo)
            });

        match result {
            Ok(value) => {
                debug!(
                    "event=store_{} module=store status=ok duration_ms={}",
                    operation,
                    started_at.elapsed().as_millis()
                );
                Ok(value)
            }
            Err(source) => {
                let err = StoreError::from_repo(operation, source);
                log_failure(operation, started_at, &err);
                Err(err)
            }
        }
    }
}

fn log_failure(operation: StoreOperation, started_at: Instant, err: &StoreError) {
    if err.is_validation() {
        warn!(
            "event=store_{} module=store status=rejected duration_ms={} error_code={} error={}",
            operation,
            started_at.elapsed().as_millis(),
            err.error_code(),
            err
        );
    } else {
        error!(
            "event=store_{} module=store status=error duration_ms={} error_code={} error={}",
            operation,
            started_at.elapsed().as_millis(),
            err.error_code(),
            err
        );
    }
}
