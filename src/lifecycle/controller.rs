//! Submission lifecycle controller
//!
//! Every operation catches its own failures: errors are logged, the state is
//! left at its last known good value, and the loading flag is always cleared.

use crate::filter::FilterType;
use crate::lifecycle::reconcile_uploads;
use crate::service::{PersistenceService, Services, UploadForm, UploadService};
use crate::state::{Action, Dispatcher, EditSession, LoadingGuard, View};
use crate::types::{IssueStatus, Submission};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Result of [`SubmissionController::submit_work`], for reporting only
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Files uploaded and the record stored
    Persisted(Submission),
    /// Upload or the follow-up read failed; nothing was stored
    UploadFailed,
    /// Files uploaded but storing the record failed
    PersistFailed,
}

/// Orchestrates network side effects and feeds their results into the view state
pub struct SubmissionController {
    persistence: Arc<dyn PersistenceService>,
    uploader: Arc<dyn UploadService>,
    dispatcher: Arc<dyn Dispatcher>,
    storage_url_prefix: String,
}

impl SubmissionController {
    /// Create a controller
    pub fn new(
        services: Services,
        dispatcher: Arc<dyn Dispatcher>,
        storage_url_prefix: impl Into<String>,
    ) -> Self {
        Self {
            persistence: services.persistence,
            uploader: services.uploader,
            dispatcher,
            storage_url_prefix: storage_url_prefix.into(),
        }
    }

    fn dispatch(&self, action: Action) {
        self.dispatcher.dispatch(action);
    }

    /// Refresh the user's submissions
    ///
    /// On failure the current list is kept. Overlapping calls race: whichever
    /// response arrives last wins, regardless of request order.
    pub async fn load_submissions(&self, user_id: &str) {
        let _loading = LoadingGuard::new(self.dispatcher.as_ref());

        match self.persistence.submissions_by_user(user_id).await {
            Ok(response) if response.success => {
                // Server returns oldest first
                let submissions: Vec<Submission> = response
                    .data
                    .into_iter()
                    .rev()
                    .map(|record| record.submission)
                    .collect();
                debug!(user_id, count = submissions.len(), "loaded submissions");
                self.dispatch(Action::UpdateAllSubmissions {
                    new_submissions: submissions,
                });
            }
            Ok(_) => error!(user_id, "failed to connect to database"),
            Err(e) => error!(user_id, "failed to load submissions: {e}"),
        }
    }

    /// Refresh the issue list and the current issue
    ///
    /// If no issue is marked current, the previous current issue is kept.
    pub async fn load_current_issue(&self) {
        let issues = match self.persistence.issues().await {
            Ok(issues) => issues,
            Err(e) => {
                error!("failed to load issues: {e}");
                return;
            }
        };

        self.dispatch(Action::SetIssues {
            issues: issues.iter().map(|i| i.title.clone()).collect(),
        });

        match issues.iter().find(|i| i.status == IssueStatus::Current) {
            Some(current) => self.dispatch(Action::SetCurrentIssue {
                current_issue: current.title.clone(),
            }),
            None => warn!("no issue is marked current"),
        }
    }

    /// Load everything a newly signed-in user needs; both requests run concurrently
    pub async fn on_user_changed(&self, user_id: &str) {
        tokio::join!(self.load_submissions(user_id), self.load_current_issue());
    }

    /// Submit a new work
    ///
    /// Phase 1 uploads the files, then reads back the storage ids and binds
    /// them to `draft`. Phase 2 stores the completed draft. The submission list
    /// is refreshed afterwards whatever happened.
    pub async fn submit_work(&self, form: UploadForm, mut draft: Submission) -> SubmitOutcome {
        self.dispatch(Action::SwitchView {
            new_view: View::Homepage,
        });
        let _loading = LoadingGuard::new(self.dispatcher.as_ref());

        let outcome = self.upload_and_persist(&form, &mut draft).await;
        self.load_submissions(&form.user_id).await;

        outcome
    }

    async fn upload_and_persist(&self, form: &UploadForm, draft: &mut Submission) -> SubmitOutcome {
        info!(title = %draft.title, files = form.files.len(), "uploading submission");

        if let Err(e) = self.uploader.upload(form).await {
            error!("upload failed: {e}");
            return SubmitOutcome::UploadFailed;
        }

        let results = match self.uploader.upload_results().await {
            Ok(results) => results,
            Err(e) => {
                error!("failed to read upload results: {e}");
                return SubmitOutcome::UploadFailed;
            }
        };

        let report = reconcile_uploads(draft, &results, &self.storage_url_prefix);
        debug!(mode = ?report.mode, bound = report.bound, "reconciled upload results");
        if !draft.main_submission.is_uploaded() {
            warn!(title = %draft.title, "main submission has no upload result");
        }

        match self.persistence.add_submission(draft).await {
            Ok(()) => {
                info!(title = %draft.title, "submission stored");
                SubmitOutcome::Persisted(draft.clone())
            }
            Err(e) => {
                error!("failed to store submission: {e}");
                SubmitOutcome::PersistFailed
            }
        }
    }

    /// Show the submit-work form
    pub fn open_submission_form(&self) {
        self.dispatch(Action::SwitchView {
            new_view: View::Submission,
        });
    }

    /// Leave the submit-work form without submitting
    pub fn return_to_homepage(&self) {
        self.dispatch(Action::SwitchView {
            new_view: View::Homepage,
        });
    }

    /// Change the list filter
    pub fn change_filter(&self, filter: FilterType) {
        self.dispatch(Action::ChangeFilter { new_filter: filter });
    }

    /// Open the edit modal on a submission
    pub fn open_edit_modal(&self, submission: Submission) {
        self.dispatch(Action::ChangeEditModal {
            submission: Some(submission),
        });
    }

    /// Close the edit modal, refreshing first so edits are reflected
    pub async fn close_edit_modal(&self, user_id: &str) {
        self.load_submissions(user_id).await;
        self.dispatch(Action::ChangeEditModal { submission: None });
    }

    /// Store the edits of `session` and refresh the list
    ///
    /// Returns whether the backend accepted the update. A session without
    /// changes is closed without any request.
    pub async fn save_edit(&self, session: &mut EditSession, user_id: &str) -> bool {
        if !session.is_dirty() {
            session.save();
            debug!("no changes to save");
            return false;
        }

        let edited = session.save();
        let _loading = LoadingGuard::new(self.dispatcher.as_ref());

        let accepted = match self.persistence.update_submission(&edited).await {
            Ok(()) => true,
            Err(e) => {
                error!(title = %edited.title, "failed to update submission: {e}");
                false
            }
        };
        self.load_submissions(user_id).await;

        accepted
    }
}
