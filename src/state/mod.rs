//! View state for the portal
//!
//! A single [`ViewState`] value is the source of truth for what the rendering
//! layer shows. It is only ever replaced through [`Store::dispatch`], which runs
//! the pure [`reduce`] transition.

mod edit;
mod reducer;
mod store;

pub use edit::{EditSession, EditableField};
pub use reducer::{reduce, Action};
pub use store::{Dispatcher, LoadingGuard, Store};

use crate::filter::{filter_submissions, FilterType};
use crate::types::Submission;
use serde::{Deserialize, Serialize};

/// Top-level mode being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    /// Submission list
    #[default]
    Homepage,
    /// Submit-work form
    Submission,
}

/// Session-wide UI state
///
/// Rebuilt from network data on every load; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Active filter
    pub filter: FilterType,
    /// Title of the issue currently accepting submissions (empty until loaded)
    pub current_issue: String,
    /// Titles of every known issue
    pub issues: Vec<String>,
    /// All of the user's submissions, newest first
    pub all_submissions: Vec<Submission>,
    /// Submission open in the edit modal, if any
    pub edit_modal_submission: Option<Submission>,
    /// Whether a lifecycle operation is outstanding
    pub is_loading: bool,
    /// Rendered mode
    pub view: View,
}

impl ViewState {
    /// Submissions after applying the active filter
    pub fn visible_submissions(&self) -> Vec<Submission> {
        filter_submissions(&self.all_submissions, self.filter, &self.current_issue)
    }

    /// Whether the edit modal is open
    pub const fn is_edit_modal_open(&self) -> bool {
        self.edit_modal_submission.is_some()
    }
}
