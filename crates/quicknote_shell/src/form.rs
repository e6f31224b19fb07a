//! Form input and user-facing notices.

use quicknote_core::NoteDraft;

/// Raw text captured from the title entry and content editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("both title and content are required")]
    EmptyFields,
}

impl NoteForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Converts the form into a store draft.
    ///
    /// Whitespace-only fields count as empty. Accepted text is passed through
    /// unchanged.
    pub fn validate(&self) -> Result<NoteDraft, FormError> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(FormError::EmptyFields);
        }
        Ok(NoteDraft::new(self.title.as_str(), self.content.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Dialog-style message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Error, title, message)
    }

    fn with_level(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub(crate) fn empty_fields() -> Self {
        Self::warning("Empty Fields", "Both title and content are required.")
    }

    pub(crate) fn not_found() -> Self {
        Self::warning("Note Not Found", "The note no longer exists.")
    }

    pub(crate) fn storage_failure(action: &str) -> Self {
        Self::error(
            "Storage Error",
            format!("The note could not be {action}. See the log for details."),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{FormError, NoteForm};

    #[test]
    fn validate_requires_both_fields() {
        assert_eq!(
            NoteForm::new("", "body").validate(),
            Err(FormError::EmptyFields)
        );
        assert_eq!(
            NoteForm::new("title", " \n ").validate(),
            Err(FormError::EmptyFields)
        );
    }

    #[test]
    fn validate_keeps_text_verbatim() {
        let draft = NoteForm::new(" Groceries ", "Milk,\neggs\n")
            .validate()
            .unwrap();
        assert_eq!(draft.title, " Groceries ");
        assert_eq!(draft.content, "Milk,\neggs\n");
    }
}
