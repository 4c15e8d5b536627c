//! Search session state and its transition function.
//!
//! The state is a plain value: [`apply`] consumes the current one and returns
//! its successor. Every event fully determines the resulting status, so the
//! last event applied always wins regardless of what came before it.

use crate::domain::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

impl SearchStatus {
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    pub fn is_loaded(self) -> bool {
        self == Self::Loaded
    }

    pub fn is_errored(self) -> bool {
        self == Self::Errored
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    /// Last successful result set. Kept through later loading and errored
    /// transitions.
    pub results: Vec<Record>,
    pub status: SearchStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    InputChanged(String),
    SearchBegan,
    SearchSucceeded(Vec<Record>),
    SearchFailed,
}

impl SearchEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::InputChanged(_) => "input_changed",
            Self::SearchBegan => "search_began",
            Self::SearchSucceeded(_) => "search_succeeded",
            Self::SearchFailed => "search_failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::SearchSucceeded(_) | Self::SearchFailed)
    }
}

pub fn apply(state: SearchState, event: SearchEvent) -> SearchState {
    match event {
        SearchEvent::InputChanged(query) => SearchState { query, ..state },
        SearchEvent::SearchBegan => SearchState {
            status: SearchStatus::Loading,
            ..state
        },
        SearchEvent::SearchSucceeded(results) => SearchState {
            results,
            status: SearchStatus::Loaded,
            ..state
        },
        SearchEvent::SearchFailed => SearchState {
            status: SearchStatus::Errored,
            ..state
        },
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
