//! Core types for submission-portal

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an uploaded asset
///
/// Open set: values the portal does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    /// Artwork, photography, illustration
    #[default]
    Image,
    /// Prose or poetry
    Writing,
    /// Audio recording
    Audio,
    /// Video recording
    Video,
    /// Any other category reported by the backend
    Other(String),
}

impl From<String> for MediaType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Image" => Self::Image,
            "Writing" => Self::Writing,
            "Audio" => Self::Audio,
            "Video" => Self::Video,
            _ => Self::Other(value),
        }
    }
}

impl From<MediaType> for String {
    fn from(value: MediaType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "Image"),
            Self::Writing => write!(f, "Writing"),
            Self::Audio => write!(f, "Audio"),
            Self::Video => write!(f, "Video"),
            Self::Other(other) => write!(f, "{other}"),
        }
    }
}

/// One uploaded asset and its metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaReference {
    /// Media category
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    /// Free text description
    #[serde(default)]
    pub description: String,
    /// Preview image URL, set once the upload completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Storage URL built from the provider-issued id, set once the upload completed
    #[serde(
        default,
        alias = "contentDriveUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_storage_url: Option<String>,
    /// Client-generated key correlating this reference with its uploaded file;
    /// never sent to the persistence layer
    #[serde(skip)]
    pub upload_token: Option<String>,
}

impl MediaReference {
    /// Create a reference that has not been uploaded yet
    pub fn new(media_type: MediaType, description: impl Into<String>) -> Self {
        Self {
            media_type,
            description: description.into(),
            ..Self::default()
        }
    }

    /// Whether both upload URLs are set
    pub const fn is_uploaded(&self) -> bool {
        self.image_url.is_some() && self.content_storage_url.is_some()
    }
}

/// Review status of a submission, owned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubmissionStatus {
    /// Awaiting review
    #[default]
    Pending,
    /// Accepted for publication
    Approved,
    /// Declined
    Rejected,
    /// Any other status reported by the backend
    Other(String),
}

impl From<String> for SubmissionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pending" => Self::Pending,
            "Approved" => Self::Approved,
            "Rejected" => Self::Rejected,
            _ => Self::Other(value),
        }
    }
}

impl From<SubmissionStatus> for String {
    fn from(value: SubmissionStatus) -> Self {
        value.to_string()
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Approved => write!(f, "Approved"),
            Self::Rejected => write!(f, "Rejected"),
            Self::Other(other) => write!(f, "{other}"),
        }
    }
}

/// A user's creative work
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Identifier assigned by the persistence layer (absent before first save)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Work title
    #[serde(default)]
    pub title: String,
    /// Author or pen name
    #[serde(default)]
    pub author: String,
    /// Publication cycle this work targets
    #[serde(default)]
    pub issue: String,
    /// Review status
    #[serde(default)]
    pub status: SubmissionStatus,
    /// Main piece of work
    pub main_submission: MediaReference,
    /// Supporting references, in upload order
    #[serde(default)]
    pub additional_references: Vec<MediaReference>,
}

impl Submission {
    /// Main submission followed by the additional references
    pub fn media(&self) -> impl Iterator<Item = &MediaReference> {
        std::iter::once(&self.main_submission).chain(self.additional_references.iter())
    }

    /// Mutable variant of [`Submission::media`]
    pub fn media_mut(&mut self) -> impl Iterator<Item = &mut MediaReference> {
        std::iter::once(&mut self.main_submission).chain(self.additional_references.iter_mut())
    }
}

/// Lifecycle status of a publication issue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueStatus {
    /// Currently accepting submissions
    Current,
    /// Already published
    Past,
    /// Announced but not open yet
    Upcoming,
    /// Any other status reported by the backend
    Other(String),
}

impl From<String> for IssueStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Current" => Self::Current,
            "Past" => Self::Past,
            "Upcoming" => Self::Upcoming,
            _ => Self::Other(value),
        }
    }
}

impl From<IssueStatus> for String {
    fn from(value: IssueStatus) -> Self {
        match value {
            IssueStatus::Current => "Current".to_string(),
            IssueStatus::Past => "Past".to_string(),
            IssueStatus::Upcoming => "Upcoming".to_string(),
            IssueStatus::Other(other) => other,
        }
    }
}

/// A publication issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue status
    pub status: IssueStatus,
    /// Issue title, also used as its identifier
    pub title: String,
}

/// One entry returned by the upload collaborator's follow-up read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    /// Storage-provider-issued file id
    pub id: String,
    /// Preview image URL
    pub image_url: String,
    /// Correlation token echoed back from the upload, if supported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Persisted record wrapping a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// The stored submission
    pub submission: Submission,
}

/// Response of the submissions-by-user endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionsResponse {
    /// Whether the backend could serve the request
    pub success: bool,
    /// Records, oldest first
    #[serde(default)]
    pub data: Vec<SubmissionRecord>,
}
