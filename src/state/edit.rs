//! Local edits of a submission open in the edit modal

use crate::error::{Error, Result};
use crate::types::{MediaType, Submission};

/// Field of a submission that the owner may edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    /// Work title
    Title,
    /// Author or pen name
    Author,
    /// Main submission media type
    MediaType,
    /// Main submission description
    Description,
    /// Target issue
    Issue,
}

/// Uncommitted edits of one submission
///
/// Starts in preview mode; fields can only change after [`EditSession::begin_edit`].
#[derive(Debug, Clone)]
pub struct EditSession {
    original: Submission,
    edited: Submission,
    issues: Vec<String>,
    editing: bool,
}

impl EditSession {
    /// Open a session on `submission`; `issues` are the titles the work may target
    pub fn new(submission: Submission, issues: Vec<String>) -> Self {
        Self {
            edited: submission.clone(),
            original: submission,
            issues,
            editing: false,
        }
    }

    /// Enter edit mode
    pub const fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Whether the session is in edit mode
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Change one field
    pub fn set_field(&mut self, field: EditableField, value: impl Into<String>) -> Result<()> {
        if !self.editing {
            return Err(Error::NotEditing);
        }

        let value = value.into();
        match field {
            EditableField::Title => self.edited.title = value,
            EditableField::Author => self.edited.author = value,
            EditableField::MediaType => {
                self.edited.main_submission.media_type = MediaType::from(value);
            }
            EditableField::Description => self.edited.main_submission.description = value,
            EditableField::Issue => {
                if !self.issues.is_empty() && !self.issues.contains(&value) {
                    return Err(Error::UnknownIssue(value));
                }
                self.edited.issue = value;
            }
        }
        Ok(())
    }

    /// Whether the edited submission differs from the one the session opened on
    pub fn is_dirty(&self) -> bool {
        self.edited != self.original
    }

    /// Submission as currently edited
    pub const fn current(&self) -> &Submission {
        &self.edited
    }

    /// Leave edit mode and return the edited submission
    pub fn save(&mut self) -> Submission {
        self.editing = false;
        self.edited.clone()
    }

    /// Drop all edits
    pub fn discard(&mut self) {
        self.edited = self.original.clone();
        self.editing = false;
    }
}
