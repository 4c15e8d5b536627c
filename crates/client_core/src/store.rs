use shared::state::{apply, SearchEvent, SearchState};
use tokio::sync::watch;
use tracing::trace;

use crate::Dispatch;

/// Owner of the session's single [`SearchState`]. Writers go through
/// [`Dispatch`]; readers take snapshots or subscribe to changes.
pub struct SearchStore {
    state: watch::Sender<SearchState>,
}

impl SearchStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self { state }
    }

    pub fn snapshot(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }
}

impl Default for SearchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatch for SearchStore {
    fn dispatch(&self, event: SearchEvent) {
        let event_name = event.name();
        self.state.send_modify(|state| {
            let previous = std::mem::take(state);
            *state = apply(previous, event);
        });
        trace!(event = event_name, "applied search event");
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
