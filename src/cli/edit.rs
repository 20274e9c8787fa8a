//! Edit command - change the details of an existing submission

use crate::cli::render::print_submission;
use crate::cli::style::{check, cross, Stylize};
use crate::cli::Session;
use anstream::{eprintln, println};
use submission_portal::error::{Error, Result};
use submission_portal::state::{EditSession, EditableField};

/// Arguments of the edit command
pub struct EditArgs {
    /// User id
    pub user: String,
    /// Submission id
    pub id: String,
    /// New title
    pub title: Option<String>,
    /// New author
    pub author: Option<String>,
    /// New description of the main file
    pub description: Option<String>,
    /// New target issue
    pub issue: Option<String>,
}

/// Run the edit command
pub async fn run_edit(args: EditArgs) -> Result<()> {
    let session = Session::open()?;
    session.controller.on_user_changed(&args.user).await;

    let state = session.dispatcher.snapshot();
    let submission = state
        .all_submissions
        .iter()
        .find(|s| s.id.as_deref() == Some(args.id.as_str()))
        .cloned()
        .ok_or_else(|| Error::SubmissionNotFound(args.id.clone()))?;

    session.controller.open_edit_modal(submission.clone());

    let mut edit = EditSession::new(submission, state.issues.clone());
    edit.begin_edit();

    let changes = [
        (EditableField::Title, args.title),
        (EditableField::Author, args.author),
        (EditableField::Description, args.description),
        (EditableField::Issue, args.issue),
    ];
    for (field, value) in changes {
        if let Some(value) = value {
            if let Err(e) = edit.set_field(field, value) {
                edit.discard();
                session.controller.close_edit_modal(&args.user).await;
                return Err(e);
            }
        }
    }

    if !edit.is_dirty() {
        println!("{}", "Nothing to change".muted());
        session.controller.close_edit_modal(&args.user).await;
        return Ok(());
    }

    let accepted = session.controller.save_edit(&mut edit, &args.user).await;
    session.controller.close_edit_modal(&args.user).await;

    if accepted {
        println!("{} Updated {}", check(), edit.current().title.emphasis());
        print_submission(edit.current());
        Ok(())
    } else {
        eprintln!("{} The update was not accepted", cross());
        Err(Error::Api("update failed".to_string()))
    }
}
