//! Toolkit-independent coordination between note forms and the note store.
//!
//! A GUI binds its widgets to [`NotesShell`]; every call returns a plain
//! response envelope carrying data for display and a user-facing [`Notice`].

pub mod api;
pub mod form;
pub mod window;

pub use api::{ActionResponse, DetailResponse, ListResponse, NoteDetail, NoteRow, NotesShell};
pub use form::{FormError, Notice, NoticeLevel, NoteForm};
pub use window::{OpenWindow, WindowKind, WindowManager};
