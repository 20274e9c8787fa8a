//! Rendering of view state to the terminal

use crate::cli::style::{bullet, hyperlink_url, spinner_style, Stream, Stylize};
use anstream::println;
use indicatif::ProgressBar;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use submission_portal::state::{Action, Dispatcher, Store, ViewState};
use submission_portal::types::{Submission, SubmissionStatus};

/// Dispatcher that applies actions to the store and mirrors the loading flag
/// as a terminal spinner
pub struct CliDispatcher {
    store: Arc<Store>,
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliDispatcher {
    /// Wrap `store`
    pub const fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            spinner: Mutex::new(None),
        }
    }

    /// Current state
    pub fn snapshot(&self) -> Arc<ViewState> {
        self.store.snapshot()
    }
}

impl Dispatcher for CliDispatcher {
    fn dispatch(&self, action: Action) {
        self.store.dispatch(action);

        let loading = self.store.snapshot().is_loading;
        let mut spinner = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        match (loading, spinner.is_some()) {
            (true, false) => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(spinner_style());
                bar.set_message("Loading...");
                bar.enable_steady_tick(Duration::from_millis(80));
                *spinner = Some(bar);
            }
            (false, true) => {
                if let Some(bar) = spinner.take() {
                    bar.finish_and_clear();
                }
            }
            _ => {}
        }
    }
}

fn status_label(status: &SubmissionStatus) -> String {
    match status {
        SubmissionStatus::Approved => status.success().to_string(),
        SubmissionStatus::Pending => status.warn().to_string(),
        SubmissionStatus::Rejected => status.error().to_string(),
        SubmissionStatus::Other(_) => status.muted().to_string(),
    }
}

/// Print one submission
pub fn print_submission(submission: &Submission) {
    let id = submission.id.as_deref().unwrap_or("unsaved");
    println!(
        "{} {} by {} [{}]",
        bullet(),
        submission.title.accent(),
        submission.author,
        status_label(&submission.status)
    );
    println!(
        "    {} {}  {} {}",
        "id:".muted(),
        id,
        "issue:".muted(),
        submission.issue
    );
    for media in submission.media() {
        let link = media
            .image_url
            .as_deref()
            .map_or_else(|| "not uploaded".to_string(), |url| hyperlink_url(Stream::Stdout, url));
        println!("    {} {} {}", media.media_type.muted(), media.description, link);
    }
}

/// Print the filtered submission list
pub fn print_submissions(state: &ViewState) {
    println!("{} {}", "My Work".emphasis(), format!("({})", state.filter).muted());
    if !state.current_issue.is_empty() {
        println!("Current issue: {}", state.current_issue.accent());
    }
    println!();

    let visible = state.visible_submissions();
    if visible.is_empty() {
        println!("{}", "You have no submissions".muted());
        return;
    }

    for submission in &visible {
        print_submission(submission);
    }
}

/// Print the known issues, marking the current one
pub fn print_issues(state: &ViewState) {
    println!("{}", "Issues".emphasis());
    if state.issues.is_empty() {
        println!("{}", "No issues found".muted());
        return;
    }

    for title in &state.issues {
        if *title == state.current_issue {
            println!("{} {} {}", bullet(), title.accent(), "(current)".success());
        } else {
            println!("{} {}", bullet(), title);
        }
    }
}
