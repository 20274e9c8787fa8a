//! Submit command - upload a new work and store it

use crate::cli::render::print_submissions;
use crate::cli::style::{check, cross, Stylize};
use crate::cli::Session;
use anstream::{eprintln, println};
use std::path::PathBuf;
use submission_portal::error::{Error, Result};
use submission_portal::lifecycle::SubmitOutcome;
use submission_portal::service::{UploadFile, UploadForm};
use submission_portal::types::{MediaReference, MediaType, Submission, SubmissionStatus};

/// Arguments of the submit command
pub struct SubmitArgs {
    /// User id
    pub user: String,
    /// Title of the work
    pub title: String,
    /// Author or pen name
    pub author: String,
    /// Target issue, defaults to the current one
    pub issue: Option<String>,
    /// Main file
    pub file: PathBuf,
    /// Media type of the main file
    pub media_type: String,
    /// Description of the main file
    pub description: String,
    /// Additional references as `<path>[:type[:description]]`
    pub references: Vec<String>,
}

/// An additional reference given on the command line
#[derive(Debug, PartialEq, Eq)]
struct ReferenceArg {
    path: PathBuf,
    media_type: MediaType,
    description: String,
}

fn parse_reference(raw: &str) -> Result<ReferenceArg> {
    let mut parts = raw.splitn(3, ':');
    let path = parts
        .next()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| Error::InvalidArgument(format!("empty reference path in '{raw}'")))?;
    let media_type = parts
        .next()
        .filter(|t| !t.is_empty())
        .map_or(MediaType::Image, |t| MediaType::from(t.to_string()));
    let description = parts.next().unwrap_or_default().to_string();

    Ok(ReferenceArg {
        path: PathBuf::from(path),
        media_type,
        description,
    })
}

/// Run the submit command
pub async fn run_submit(args: SubmitArgs) -> Result<()> {
    let references = args
        .references
        .iter()
        .map(|r| parse_reference(r))
        .collect::<Result<Vec<_>>>()?;

    let session = Session::open()?;
    session.controller.on_user_changed(&args.user).await;

    let issue = match args.issue {
        Some(issue) => issue,
        None => {
            let current = session.dispatcher.snapshot().current_issue.clone();
            if current.is_empty() {
                return Err(Error::InvalidArgument(
                    "no --issue given and no issue is currently open".to_string(),
                ));
            }
            current
        }
    };

    let mut draft = Submission {
        id: None,
        title: args.title,
        author: args.author,
        issue,
        status: SubmissionStatus::Pending,
        main_submission: MediaReference::new(MediaType::from(args.media_type), args.description),
        additional_references: references
            .iter()
            .map(|r| MediaReference::new(r.media_type.clone(), r.description.clone()))
            .collect(),
    };

    let mut form = UploadForm::new(args.user.as_str())
        .field("title", draft.title.as_str())
        .field("author", draft.author.as_str())
        .field("issue", draft.issue.as_str());

    // Attach order must match the media order: main first, then references
    form.attach(UploadFile::from_path(&args.file).await?, &mut draft.main_submission);
    for (reference, target) in references.iter().zip(draft.additional_references.iter_mut()) {
        form.attach(UploadFile::from_path(&reference.path).await?, target);
    }

    session.controller.open_submission_form();
    println!(
        "Submitting {} with {} file{}",
        draft.title.accent(),
        form.files.len(),
        if form.files.len() == 1 { "" } else { "s" }
    );

    let outcome = session.controller.submit_work(form, draft).await;
    println!();
    print_submissions(&session.dispatcher.snapshot());
    println!();

    match outcome {
        SubmitOutcome::Persisted(submission) => {
            println!("{} Submitted {}", check(), submission.title.emphasis());
            Ok(())
        }
        SubmitOutcome::UploadFailed => {
            eprintln!("{} Upload failed; nothing was stored", cross());
            Err(Error::Api("upload failed".to_string()))
        }
        SubmitOutcome::PersistFailed => {
            eprintln!("{} Files uploaded but the submission was not stored", cross());
            Err(Error::Api("storing the submission failed".to_string()))
        }
    }
}
