//! Submission filtering
//!
//! Pure mapping from (submissions, filter mode) to the visible list.

use crate::error::{Error, Result};
use crate::types::{Submission, SubmissionStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the submission list is filtered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// No filtering
    #[default]
    None,
    /// Only approved submissions
    Approved,
    /// Only submissions targeting the current issue
    Current,
    /// A mode this build does not know; behaves as `None`
    #[serde(other)]
    Unknown,
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None | Self::Unknown => "All Submissions",
            Self::Approved => "Approved Works",
            Self::Current => "Current Submissions",
        };
        write!(f, "{label}")
    }
}

impl FromStr for FilterType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "all" => Ok(Self::None),
            "approved" => Ok(Self::Approved),
            "current" => Ok(Self::Current),
            other => Err(Error::InvalidArgument(format!(
                "unknown filter '{other}' (expected none, approved or current)"
            ))),
        }
    }
}

/// Filter submissions for display
///
/// Order is preserved. `current_issue` is only consulted by [`FilterType::Current`].
pub fn filter_submissions(
    submissions: &[Submission],
    filter: FilterType,
    current_issue: &str,
) -> Vec<Submission> {
    match filter {
        FilterType::Approved => submissions
            .iter()
            .filter(|s| s.status == SubmissionStatus::Approved)
            .cloned()
            .collect(),
        FilterType::Current => submissions
            .iter()
            .filter(|s| s.issue == current_issue)
            .cloned()
            .collect(),
        FilterType::None | FilterType::Unknown => submissions.to_vec(),
    }
}
