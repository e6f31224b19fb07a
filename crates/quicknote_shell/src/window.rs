//! Viewer/editor window bookkeeping.
//!
//! # Invariants
//! - At most one note window is open at a time.
//! - Opening a window replaces the previous one, which is reported back so
//!   the toolkit can destroy it.

use quicknote_core::NoteId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Viewer,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenWindow {
    pub kind: WindowKind,
    pub note_id: NoteId,
}

/// Tracks the currently open viewer or editor window.
#[derive(Debug, Default)]
pub struct WindowManager {
    current: Option<OpenWindow>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `kind` for `note_id` as the open window and returns the window
    /// it replaced, if any.
    pub fn open(&mut self, kind: WindowKind, note_id: NoteId) -> Option<OpenWindow> {
        self.current.replace(OpenWindow { kind, note_id })
    }

    pub fn close(&mut self) -> Option<OpenWindow> {
        self.current.take()
    }

    /// Closes the open window only when it shows `note_id`.
    pub fn close_if_showing(&mut self, note_id: NoteId) -> Option<OpenWindow> {
        if self.current.is_some_and(|window| window.note_id == note_id) {
            return self.current.take();
        }
        None
    }

    pub fn current(&self) -> Option<&OpenWindow> {
        self.current.as_ref()
    }
}
