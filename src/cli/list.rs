//! List and issues commands

use crate::cli::render::{print_issues, print_submissions};
use crate::cli::Session;
use submission_portal::error::Result;
use submission_portal::filter::FilterType;

/// Run the list command
pub async fn run_list(user_id: &str, filter: &str) -> Result<()> {
    let filter: FilterType = filter.parse()?;
    let session = Session::open()?;

    session.controller.on_user_changed(user_id).await;
    session.controller.change_filter(filter);

    print_submissions(&session.dispatcher.snapshot());
    Ok(())
}

/// Run the issues command
pub async fn run_issues() -> Result<()> {
    let session = Session::open()?;

    session.controller.load_current_issue().await;

    print_issues(&session.dispatcher.snapshot());
    Ok(())
}
