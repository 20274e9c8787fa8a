//! Error types for submission-portal

use thiserror::Error;

/// Errors raised by the portal core and its collaborators
#[derive(Debug, Error)]
pub enum Error {
    /// Request could not be sent, timed out, or returned a non-success status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Collaborator answered but reported a logical failure
    #[error("API error: {0}")]
    Api(String),

    /// Configuration is invalid or missing
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem error (reading upload files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A user-supplied argument could not be interpreted
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A field was changed while the edit session was not in edit mode
    #[error("submission is not in edit mode")]
    NotEditing,

    /// Issue title is not one of the known issues
    #[error("unknown issue: {0}")]
    UnknownIssue(String),

    /// Submission could not be found
    #[error("submission not found: {0}")]
    SubmissionNotFound(String),
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
