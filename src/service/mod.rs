//! Collaborator services for persistence and file upload
//!
//! The lifecycle controller depends only on these traits; the HTTP
//! implementations talk to the portal's API and upload backend.

mod factory;
mod form;
mod persistence;
mod upload;

pub use factory::{create_services, Services};
pub use form::{UploadFile, UploadForm};
pub use persistence::HttpPersistenceService;
pub use upload::HttpUploadService;

use crate::error::Result;
use crate::types::{Issue, Submission, SubmissionsResponse, UploadResult};
use async_trait::async_trait;

/// Database-backed storage of submissions and issues
#[async_trait]
pub trait PersistenceService: Send + Sync {
    /// All submissions of a user, oldest first
    async fn submissions_by_user(&self, user_id: &str) -> Result<SubmissionsResponse>;

    /// Store a new submission
    async fn add_submission(&self, submission: &Submission) -> Result<()>;

    /// Overwrite an existing submission
    async fn update_submission(&self, submission: &Submission) -> Result<()>;

    /// All publication issues
    async fn issues(&self) -> Result<Vec<Issue>>;
}

/// File storage backend
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Upload files and fields
    async fn upload(&self, form: &UploadForm) -> Result<()>;

    /// Results of the preceding upload, in upload order
    async fn upload_results(&self) -> Result<Vec<UploadResult>>;
}
