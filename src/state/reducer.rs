//! View state transitions

use super::{View, ViewState};
use crate::filter::FilterType;
use crate::types::Submission;
use serde::{Deserialize, Serialize};

/// A state transition request
///
/// Deserializable from the rendering layer's JSON (`{"type": "ChangeFilter", ...}`).
/// Kinds this build does not recognise become [`Action::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Action {
    /// Change how submissions are filtered
    ChangeFilter {
        /// Filter to switch to
        new_filter: FilterType,
    },
    /// Set the current issue title
    SetCurrentIssue {
        /// Issue title
        current_issue: String,
    },
    /// Replace the list of known issue titles
    SetIssues {
        /// Issue titles
        issues: Vec<String>,
    },
    /// Replace all submissions (full replace, never merged)
    UpdateAllSubmissions {
        /// Submissions, newest first
        new_submissions: Vec<Submission>,
    },
    /// Open the edit modal on a submission, or close it with `None`
    ChangeEditModal {
        /// Submission to show
        #[serde(default)]
        submission: Option<Submission>,
    },
    /// Show the loading indicator
    ToggleLoadingOn,
    /// Hide the loading indicator
    ToggleLoadingOff,
    /// Switch the rendered mode
    SwitchView {
        /// Mode to switch to
        new_view: View,
    },
    /// Unrecognised action; leaves the state unchanged
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Action kind, as used on the wire
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ChangeFilter { .. } => "ChangeFilter",
            Self::SetCurrentIssue { .. } => "SetCurrentIssue",
            Self::SetIssues { .. } => "SetIssues",
            Self::UpdateAllSubmissions { .. } => "UpdateAllSubmissions",
            Self::ChangeEditModal { .. } => "ChangeEditModal",
            Self::ToggleLoadingOn => "ToggleLoadingOn",
            Self::ToggleLoadingOff => "ToggleLoadingOff",
            Self::SwitchView { .. } => "SwitchView",
            Self::Unknown => "Unknown",
        }
    }
}

/// Compute the state following `action`
///
/// Total over [`Action`]; `state` is never modified.
pub fn reduce(state: &ViewState, action: Action) -> ViewState {
    match action {
        Action::ChangeFilter { new_filter } => ViewState {
            filter: new_filter,
            ..state.clone()
        },
        Action::SetCurrentIssue { current_issue } => ViewState {
            current_issue,
            ..state.clone()
        },
        Action::SetIssues { issues } => ViewState {
            issues,
            ..state.clone()
        },
        Action::UpdateAllSubmissions { new_submissions } => ViewState {
            all_submissions: new_submissions,
            ..state.clone()
        },
        Action::ChangeEditModal { submission } => ViewState {
            edit_modal_submission: submission,
            ..state.clone()
        },
        Action::ToggleLoadingOn => ViewState {
            is_loading: true,
            ..state.clone()
        },
        Action::ToggleLoadingOff => ViewState {
            is_loading: false,
            ..state.clone()
        },
        Action::SwitchView { new_view } => ViewState {
            view: new_view,
            ..state.clone()
        },
        Action::Unknown => state.clone(),
    }
}
