//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and search APIs over the `notes` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `NoteDraft::validate()` before SQL mutations.
//! - Read paths reject invalid persisted rows instead of masking them.
//! - Lists are ordered by `updated_at DESC, id DESC`.
//! - `updated_at` never moves backwards on update.

use crate::db::DbError;
use crate::model::note::{now_epoch_ms, Note, NoteDraft, NoteId, NoteValidationError};
use crate::search::substring::SearchQuery;
use rusqlite::{params, Connection, OptionalExtension, Row};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    created_at,
    updated_at
FROM notes";

const NOTE_ORDER_SQL: &str = "ORDER BY updated_at DESC, id DESC";

const REQUIRED_COLUMNS: [&str; 5] = ["id", "title", "content", "created_at", "updated_at"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("{0}")]
    Validation(#[from] NoteValidationError),
    #[error("{0}")]
    Db(#[from] DbError),
    #[error("invalid persisted note data: {0}")]
    InvalidData(String),
    #[error("required table `{0}` is missing")]
    MissingRequiredTable(&'static str),
    #[error("required column `{table}.{column}` is missing")]
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for note operations.
pub trait NoteRepository {
    /// Inserts one note with `created_at = updated_at = now` and returns its id.
    fn create_note(&self, draft: &NoteDraft) -> RepoResult<NoteId>;
    /// Gets one note by id.
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Lists every note, most recently updated first.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
    /// Lists notes accepted by `query`, in list order.
    fn search_notes(&self, query: &SearchQuery) -> RepoResult<Vec<Note>>;
    /// Replaces title/content and refreshes `updated_at`.
    ///
    /// Returns `false` when no row has `id`.
    fn update_note(&self, id: NoteId, draft: &NoteDraft) -> RepoResult<bool>;
    /// Hard-deletes one note. Returns `false` when no row has `id`.
    fn delete_note(&self, id: NoteId) -> RepoResult<bool>;
    /// Counts stored notes.
    fn count_notes(&self) -> RepoResult<usize>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_note_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn create_note(&self, draft: &NoteDraft) -> RepoResult<NoteId> {
        draft.validate()?;

        let now = now_epoch_ms();
        self.conn.execute(
            "INSERT INTO notes (title, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3);",
            params![draft.title.as_str(), draft.content.as_str(), now],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let note = stmt.query_row([id], read_note_row).optional()?;
        note.map(validated).transpose()
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        self.search_notes(&SearchQuery::all())
    }

    fn search_notes(&self, query: &SearchQuery) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} {NOTE_ORDER_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();

        while let Some(row) = rows.next()? {
            let note = validated(read_note_row(row)?)?;
            if query.matches(&note) {
                notes.push(note);
            }
        }

        Ok(notes)
    }

    fn update_note(&self, id: NoteId, draft: &NoteDraft) -> RepoResult<bool> {
        draft.validate()?;

        let changed = self.conn.execute(
            "UPDATE notes
             SET
                title = ?2,
                content = ?3,
                updated_at = MAX(updated_at, ?4)
             WHERE id = ?1;",
            params![id, draft.title.as_str(), draft.content.as_str(), now_epoch_ms()],
        )?;

        Ok(changed > 0)
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn count_notes(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes;", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative note count `{count}`")))
    }
}

fn read_note_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn validated(note: Note) -> RepoResult<Note> {
    note.validate().map_err(|err| {
        RepoError::InvalidData(format!("note {} violates model invariant: {err}", note.id))
    })?;
    if note.updated_at < note.created_at {
        return Err(RepoError::InvalidData(format!(
            "note {} has updated_at {} earlier than created_at {}",
            note.id, note.updated_at, note.created_at
        )));
    }
    Ok(note)
}

fn ensure_note_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "notes")? {
        return Err(RepoError::MissingRequiredTable("notes"));
    }

    for column in REQUIRED_COLUMNS {
        if !table_has_column(conn, "notes", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "notes",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
