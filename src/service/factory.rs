//! Service factory
//!
//! Creates the collaborator services from configuration.

use crate::config::PortalConfig;
use crate::service::{
    HttpPersistenceService, HttpUploadService, PersistenceService, UploadService,
};
use std::sync::Arc;

/// The collaborators used by the lifecycle controller
#[derive(Clone)]
pub struct Services {
    /// Submission and issue storage
    pub persistence: Arc<dyn PersistenceService>,
    /// File upload backend
    pub uploader: Arc<dyn UploadService>,
}

/// Create HTTP-backed services from configuration
pub fn create_services(config: &PortalConfig) -> Services {
    Services {
        persistence: Arc::new(HttpPersistenceService::new(
            config.api_url.as_str(),
            config.timeout,
        )),
        uploader: Arc::new(HttpUploadService::new(
            config.upload_url.as_str(),
            config.timeout,
        )),
    }
}
