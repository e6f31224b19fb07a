//! Use-case API for the presentation layer.
//!
//! # Responsibility
//! - Validate form input before any store call.
//! - Translate store outcomes into display rows and user-facing notices.
//! - Own the open viewer/editor window state.
//!
//! # Invariants
//! - Exported methods never panic and never perform persistence themselves.
//! - Not-found yields a warning notice; store failures yield an error notice.

use crate::form::{Notice, NoteForm};
use crate::window::{OpenWindow, WindowKind, WindowManager};
use log::{info, warn};
use quicknote_core::{AppConfig, Note, NoteId, NoteStore, SearchQuery, StoreResult};

const ROW_PREVIEW_CHARS: usize = 60;

/// Result of a create/update/delete action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub note_id: Option<NoteId>,
    pub notice: Notice,
}

impl ActionResponse {
    fn success(note_id: NoteId, notice: Notice) -> Self {
        Self {
            ok: true,
            note_id: Some(note_id),
            notice,
        }
    }

    fn failure(notice: Notice) -> Self {
        Self {
            ok: false,
            note_id: None,
            notice,
        }
    }
}

/// One line of the note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: NoteId,
    pub title: String,
    pub preview: String,
    pub updated_at: String,
}

impl From<&Note> for NoteRow {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            preview: note.preview(ROW_PREVIEW_CHARS),
            updated_at: note.updated_at_local().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResponse {
    pub rows: Vec<NoteRow>,
    /// Set only when loading failed.
    pub notice: Option<Notice>,
}

/// Full note shown in a viewer or editor window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDetail {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Note> for NoteDetail {
    fn from(note: Note) -> Self {
        let created_at = note.created_at_local().unwrap_or_default();
        let updated_at = note.updated_at_local().unwrap_or_default();
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailResponse {
    pub detail: Option<NoteDetail>,
    /// Window the toolkit should destroy before showing `detail`.
    pub replaced: Option<OpenWindow>,
    pub notice: Option<Notice>,
}

/// Presentation-facing facade over [`NoteStore`].
pub struct NotesShell {
    store: NoteStore,
    windows: WindowManager,
}

impl NotesShell {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store,
            windows: WindowManager::new(),
        }
    }

    /// Initializes the store at the configured path.
    pub fn start(config: &AppConfig) -> StoreResult<Self> {
        let store = NoteStore::initialize(&config.db_path)?;
        info!("event=shell_start module=shell status=ok");
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    /// Saves a new note from the entry form.
    pub fn add_note(&self, form: &NoteForm) -> ActionResponse {
        let Ok(draft) = form.validate() else {
            return ActionResponse::failure(Notice::empty_fields());
        };

        match self.store.create(&draft.title, &draft.content) {
            Ok(id) => ActionResponse::success(
                id,
                Notice::info("Note Saved", "Your note was saved successfully!"),
            ),
            Err(err) => {
                warn!("event=shell_add_note module=shell status=error error={err}");
                ActionResponse::failure(Notice::storage_failure("saved"))
            }
        }
    }

    /// Lists notes, filtered by `query` unless it is blank.
    ///
    /// A non-blank query is forwarded verbatim, surrounding whitespace included.
    pub fn list_notes(&self, query: &str) -> ListResponse {
        let result = if SearchQuery::new(query.trim()).is_unfiltered() {
            self.store.list_all()
        } else {
            self.store.search(query)
        };

        match result {
            Ok(notes) => ListResponse {
                rows: notes.iter().map(NoteRow::from).collect(),
                notice: None,
            },
            Err(err) => {
                warn!("event=shell_list_notes module=shell status=error error={err}");
                ListResponse {
                    rows: Vec::new(),
                    notice: Some(Notice::storage_failure("loaded")),
                }
            }
        }
    }

    pub fn open_viewer(&mut self, id: NoteId) -> DetailResponse {
        self.open_window(WindowKind::Viewer, id)
    }

    pub fn open_editor(&mut self, id: NoteId) -> DetailResponse {
        self.open_window(WindowKind::Editor, id)
    }

    /// Forgets the open window after the toolkit closed it.
    pub fn close_window(&mut self) -> Option<OpenWindow> {
        self.windows.close()
    }

    /// Saves edits to an existing note and closes its editor on success.
    pub fn save_edit(&mut self, id: NoteId, form: &NoteForm) -> ActionResponse {
        let Ok(draft) = form.validate() else {
            return ActionResponse::failure(Notice::empty_fields());
        };

        match self.store.update(id, &draft.title, &draft.content) {
            Ok(true) => {
                self.windows.close_if_showing(id);
                ActionResponse::success(
                    id,
                    Notice::info("Note Updated", "Your changes were saved."),
                )
            }
            Ok(false) => {
                self.windows.close_if_showing(id);
                ActionResponse::failure(Notice::not_found())
            }
            Err(err) => {
                warn!("event=shell_save_edit module=shell status=error error={err}");
                ActionResponse::failure(Notice::storage_failure("updated"))
            }
        }
    }

    /// Deletes a note and closes any window showing it.
    pub fn delete_note(&mut self, id: NoteId) -> ActionResponse {
        match self.store.delete(id) {
            Ok(true) => {
                self.windows.close_if_showing(id);
                ActionResponse::success(id, Notice::info("Note Deleted", "The note was deleted."))
            }
            Ok(false) => ActionResponse::failure(Notice::not_found()),
            Err(err) => {
                warn!("event=shell_delete_note module=shell status=error error={err}");
                ActionResponse::failure(Notice::storage_failure("deleted"))
            }
        }
    }

    fn open_window(&mut self, kind: WindowKind, id: NoteId) -> DetailResponse {
        match self.store.get(id) {
            Ok(Some(note)) => {
                let replaced = self.windows.open(kind, id);
                DetailResponse {
                    detail: Some(NoteDetail::from(note)),
                    replaced,
                    notice: None,
                }
            }
            Ok(None) => DetailResponse {
                detail: None,
                replaced: None,
                notice: Some(Notice::not_found()),
            },
            Err(err) => {
                warn!("event=shell_open_window module=shell status=error error={err}");
                DetailResponse {
                    detail: None,
                    replaced: None,
                    notice: Some(Notice::storage_failure("loaded")),
                }
            }
        }
    }
}
