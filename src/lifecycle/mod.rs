//! Submission lifecycle
//!
//! Coordinates loading, the two-phase upload-then-persist submission
//! protocol, and edit-modal transitions. All state changes go through a
//! [`Dispatcher`](crate::state::Dispatcher).

mod controller;
mod reconcile;

pub use controller::{SubmissionController, SubmitOutcome};
pub use reconcile::{reconcile_uploads, storage_url, ReconcileMode, ReconcileReport};
