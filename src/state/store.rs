//! State store and dispatch
//!
//! The store owns the current [`ViewState`] snapshot. Readers get an
//! `Arc<ViewState>` and never observe a partially applied transition.

use super::{reduce, Action, ViewState};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::trace;

/// Sink for state transitions
///
/// The lifecycle controller only talks to state through this trait, so tests
/// can observe or record the dispatched actions.
pub trait Dispatcher: Send + Sync {
    /// Apply an action
    fn dispatch(&self, action: Action);
}

/// Owner of the session's [`ViewState`]
pub struct Store {
    state: watch::Sender<Arc<ViewState>>,
}

impl Store {
    /// Create a store holding the default state
    pub fn new() -> Self {
        Self::with_state(ViewState::default())
    }

    /// Create a store holding `state`
    pub fn with_state(state: ViewState) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(state));
        Self { state: tx }
    }

    /// Current state
    pub fn snapshot(&self) -> Arc<ViewState> {
        Arc::clone(&self.state.borrow())
    }

    /// Receiver notified after every dispatch
    pub fn subscribe(&self) -> watch::Receiver<Arc<ViewState>> {
        self.state.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) {
        trace!(action = action.kind(), "dispatch");
        self.state.send_modify(|current| {
            *current = Arc::new(reduce(current, action));
        });
    }
}

/// Keeps the loading indicator on for its lifetime
///
/// Dispatches `ToggleLoadingOn` when created and `ToggleLoadingOff` when
/// dropped, on every exit path.
pub struct LoadingGuard<'a> {
    dispatcher: &'a dyn Dispatcher,
}

impl<'a> LoadingGuard<'a> {
    /// Turn the loading indicator on
    pub fn new(dispatcher: &'a dyn Dispatcher) -> Self {
        dispatcher.dispatch(Action::ToggleLoadingOn);
        Self { dispatcher }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.dispatcher.dispatch(Action::ToggleLoadingOff);
    }
}
