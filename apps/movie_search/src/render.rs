//! Text views for each search status.

use std::fmt::Write as _;

use shared::{
    domain::Record,
    state::{SearchState, SearchStatus},
};

pub const IDLE_PROMPT: &str = "Type a movie name (i.e Marvel Endgame) and press enter.";
pub const LOADING: &str = "Loading...";
pub const ERRORED: &str = "Something went wrong. Please try again.";
pub const NO_RESULTS: &str = "No movies found.";

pub fn render(state: &SearchState, image_base: &str) -> String {
    match state.status {
        SearchStatus::Idle => IDLE_PROMPT.to_string(),
        SearchStatus::Loading => LOADING.to_string(),
        SearchStatus::Errored => ERRORED.to_string(),
        SearchStatus::Loaded if state.results.is_empty() => NO_RESULTS.to_string(),
        SearchStatus::Loaded => state
            .results
            .iter()
            .map(|record| render_card(record, image_base))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn render_card(record: &Record, image_base: &str) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "{}", record.title);
    if let Some(poster) = record.poster_url(image_base) {
        let _ = writeln!(card, "  poster: {poster}");
    }
    let _ = writeln!(card, "  RELEASE DATE: {}", record.release_date);
    let _ = writeln!(card, "  RATING: {}", record.rating);
    if !record.overview.is_empty() {
        let _ = writeln!(card, "  {}", record.overview);
    }
    card
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
