//! Mock collaborator services and a recording dispatcher for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use submission_portal::error::{Error, Result};
use submission_portal::service::{
    PersistenceService, Services, UploadForm, UploadService,
};
use submission_portal::state::{Action, Dispatcher, Store, ViewState};
use submission_portal::types::{
    Issue, Submission, SubmissionRecord, SubmissionsResponse, UploadResult,
};

/// Ordered log of collaborator calls shared by all mocks of one test
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn push(&self, call: &str) {
        self.0.lock().unwrap().push(call.to_string());
    }

    /// All calls in the order they were made
    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    /// Number of calls named `call`
    pub fn count(&self, call: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|c| *c == call).count()
    }
}

/// Queued response for `submissions_by_user`
struct QueuedLoad {
    delay: Duration,
    submissions: Vec<Submission>,
}

/// Mock persistence service
///
/// Stored submissions are served oldest first, like the real backend.
/// Added submissions are appended to the store with a generated id.
///
/// Features:
/// - Call tracking for verification
/// - Queued, delayed responses for race testing
/// - Error injection for failure path testing
pub struct MockPersistenceService {
    log: CallLog,
    stored: Mutex<Vec<Submission>>,
    issues: Mutex<Vec<Issue>>,
    queued_loads: Mutex<VecDeque<QueuedLoad>>,
    // Call tracking
    load_calls: Mutex<Vec<String>>,
    added: Mutex<Vec<Submission>>,
    updated: Mutex<Vec<Submission>>,
    // Error injection
    error_on_load: Mutex<Option<String>>,
    unsuccessful_load: Mutex<bool>,
    error_on_add: Mutex<Option<String>>,
    error_on_update: Mutex<Option<String>>,
    error_on_issues: Mutex<Option<String>>,
}

impl MockPersistenceService {
    /// Create an empty mock logging to `log`
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            stored: Mutex::new(Vec::new()),
            issues: Mutex::new(Vec::new()),
            queued_loads: Mutex::new(VecDeque::new()),
            load_calls: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            error_on_load: Mutex::new(None),
            unsuccessful_load: Mutex::new(false),
            error_on_add: Mutex::new(None),
            error_on_update: Mutex::new(None),
            error_on_issues: Mutex::new(None),
        }
    }

    /// Replace the stored submissions (oldest first)
    pub fn set_stored(&self, submissions: Vec<Submission>) {
        *self.stored.lock().unwrap() = submissions;
    }

    /// Replace the issues
    pub fn set_issues(&self, issues: Vec<Issue>) {
        *self.issues.lock().unwrap() = issues;
    }

    /// Serve `submissions` after `delay` for the next unqueued load
    pub fn queue_load(&self, delay: Duration, submissions: Vec<Submission>) {
        self.queued_loads.lock().unwrap().push_back(QueuedLoad { delay, submissions });
    }

    // === Error injection methods ===

    /// Make `submissions_by_user` return an error
    pub fn fail_load(&self, msg: &str) {
        *self.error_on_load.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `submissions_by_user` answer with `success: false`
    pub fn fail_load_unsuccessful(&self) {
        *self.unsuccessful_load.lock().unwrap() = true;
    }

    /// Make `add_submission` return an error
    pub fn fail_add(&self, msg: &str) {
        *self.error_on_add.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `update_submission` return an error
    pub fn fail_update(&self, msg: &str) {
        *self.error_on_update.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `issues` return an error
    pub fn fail_issues(&self, msg: &str) {
        *self.error_on_issues.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// User ids `submissions_by_user` was called with
    pub fn get_load_calls(&self) -> Vec<String> {
        self.load_calls.lock().unwrap().clone()
    }

    /// Submissions passed to `add_submission`
    pub fn get_added(&self) -> Vec<Submission> {
        self.added.lock().unwrap().clone()
    }

    /// Submissions passed to `update_submission`
    pub fn get_updated(&self) -> Vec<Submission> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl PersistenceService for MockPersistenceService {
    async fn submissions_by_user(&self, user_id: &str) -> Result<SubmissionsResponse> {
        self.log.push("submissions_by_user");
        self.load_calls.lock().unwrap().push(user_id.to_string());

        let queued = self.queued_loads.lock().unwrap().pop_front();
        let submissions = match queued {
            Some(load) => {
                tokio::time::sleep(load.delay).await;
                load.submissions
            }
            None => self.stored.lock().unwrap().clone(),
        };

        // Check for injected error
        if let Some(msg) = self.error_on_load.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }
        if *self.unsuccessful_load.lock().unwrap() {
            return Ok(SubmissionsResponse {
                success: false,
                data: vec![],
            });
        }

        Ok(SubmissionsResponse {
            success: true,
            data: submissions
                .into_iter()
                .map(|submission| SubmissionRecord { submission })
                .collect(),
        })
    }

    async fn add_submission(&self, submission: &Submission) -> Result<()> {
        self.log.push("add_submission");
        self.added.lock().unwrap().push(submission.clone());

        // Check for injected error
        if let Some(msg) = self.error_on_add.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }

        let mut stored = self.stored.lock().unwrap();
        let id = format!("generated-{}", stored.len() + 1);
        stored.push(Submission {
            id: Some(id),
            ..submission.clone()
        });
        Ok(())
    }

    async fn update_submission(&self, submission: &Submission) -> Result<()> {
        self.log.push("update_submission");
        self.updated.lock().unwrap().push(submission.clone());

        // Check for injected error
        if let Some(msg) = self.error_on_update.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }

        let mut stored = self.stored.lock().unwrap();
        if let Some(existing) = stored.iter_mut().find(|s| s.id == submission.id) {
            *existing = submission.clone();
        }
        Ok(())
    }

    async fn issues(&self) -> Result<Vec<Issue>> {
        self.log.push("issues");

        // Check for injected error
        if let Some(msg) = self.error_on_issues.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }

        Ok(self.issues.lock().unwrap().clone())
    }
}

/// Call record for `upload`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCall {
    pub user_id: String,
    pub file_names: Vec<String>,
    pub tokens: Vec<Option<String>>,
}

/// Mock upload service
pub struct MockUploadService {
    log: CallLog,
    results: Mutex<Vec<UploadResult>>,
    // Call tracking
    upload_calls: Mutex<Vec<UploadCall>>,
    // Error injection
    error_on_upload: Mutex<Option<String>>,
    error_on_results: Mutex<Option<String>>,
}

impl MockUploadService {
    /// Create a mock with no results logging to `log`
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            results: Mutex::new(Vec::new()),
            upload_calls: Mutex::new(Vec::new()),
            error_on_upload: Mutex::new(None),
            error_on_results: Mutex::new(None),
        }
    }

    /// Set what `upload_results` returns
    pub fn set_results(&self, results: Vec<UploadResult>) {
        *self.results.lock().unwrap() = results;
    }

    /// Make `upload` return an error
    pub fn fail_upload(&self, msg: &str) {
        *self.error_on_upload.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `upload_results` return an error
    pub fn fail_results(&self, msg: &str) {
        *self.error_on_results.lock().unwrap() = Some(msg.to_string());
    }

    /// All `upload` calls
    pub fn get_upload_calls(&self) -> Vec<UploadCall> {
        self.upload_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UploadService for MockUploadService {
    async fn upload(&self, form: &UploadForm) -> Result<()> {
        self.log.push("upload");
        self.upload_calls.lock().unwrap().push(UploadCall {
            user_id: form.user_id.clone(),
            file_names: form.files.iter().map(|f| f.file_name.clone()).collect(),
            tokens: form.files.iter().map(|f| f.token.clone()).collect(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_upload.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }
        Ok(())
    }

    async fn upload_results(&self) -> Result<Vec<UploadResult>> {
        self.log.push("upload_results");

        // Check for injected error
        if let Some(msg) = self.error_on_results.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }
        Ok(self.results.lock().unwrap().clone())
    }
}

/// Dispatcher that applies actions to a store and records them
#[derive(Default)]
pub struct RecordingDispatcher {
    store: Store,
    actions: Mutex<Vec<Action>>,
}

impl RecordingDispatcher {
    /// Current state
    pub fn state(&self) -> Arc<ViewState> {
        self.store.snapshot()
    }

    /// All dispatched actions in order
    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().unwrap().clone()
    }

    /// Kinds of all dispatched actions in order
    pub fn kinds(&self) -> Vec<&'static str> {
        self.actions.lock().unwrap().iter().map(Action::kind).collect()
    }

    /// Number of dispatched actions of `kind`
    pub fn count(&self, kind: &str) -> usize {
        self.kinds().into_iter().filter(|k| *k == kind).count()
    }
}

impl Dispatcher for RecordingDispatcher {
    fn dispatch(&self, action: Action) {
        self.actions.lock().unwrap().push(action.clone());
        self.store.dispatch(action);
    }
}

/// Mocks wired into a [`Services`] bundle
pub struct MockServices {
    pub log: CallLog,
    pub persistence: Arc<MockPersistenceService>,
    pub uploader: Arc<MockUploadService>,
}

impl MockServices {
    /// Create fresh mocks sharing one call log
    pub fn new() -> Self {
        let log = CallLog::default();
        Self {
            persistence: Arc::new(MockPersistenceService::new(log.clone())),
            uploader: Arc::new(MockUploadService::new(log.clone())),
            log,
        }
    }

    /// Services bundle for a controller
    pub fn services(&self) -> Services {
        Services {
            persistence: self.persistence.clone(),
            uploader: self.uploader.clone(),
        }
    }
}
