//! CLI commands
//!
//! Command implementations for the `portal` binary. The CLI is the rendering
//! layer: it dispatches user intents through the controller and prints state.

mod edit;
mod list;
mod render;
mod style;
mod submit;

pub use edit::{run_edit, EditArgs};
pub use list::{run_issues, run_list};
pub use submit::{run_submit, SubmitArgs};

use render::CliDispatcher;
use std::sync::Arc;
use submission_portal::config::PortalConfig;
use submission_portal::error::Result;
use submission_portal::lifecycle::SubmissionController;
use submission_portal::service::create_services;
use submission_portal::state::Store;

/// One CLI invocation's state and controller
struct Session {
    dispatcher: Arc<CliDispatcher>,
    controller: SubmissionController,
}

impl Session {
    fn open() -> Result<Self> {
        let config = PortalConfig::load()?;
        let services = create_services(&config);
        let dispatcher = Arc::new(CliDispatcher::new(Arc::new(Store::new())));
        let controller = SubmissionController::new(
            services,
            dispatcher.clone(),
            config.storage_url_prefix,
        );

        Ok(Self {
            dispatcher,
            controller,
        })
    }
}
