use super::*;
use crate::domain::RecordId;

fn record(id: i64, title: &str) -> Record {
    Record {
        id: RecordId(id),
        title: title.into(),
        release_date: "2019-04-24".into(),
        rating: 7.5,
        overview: String::new(),
        poster_path: Some(format!("/{id}.jpg")),
    }
}

fn sample_states() -> Vec<SearchState> {
    let results = vec![record(1, "Endgame"), record(2, "Infinity War")];
    vec![
        SearchState::default(),
        SearchState {
            query: "marvel".into(),
            results: results.clone(),
            status: SearchStatus::Loading,
        },
        SearchState {
            query: "marvel".into(),
            results: results.clone(),
            status: SearchStatus::Loaded,
        },
        SearchState {
            query: "dc".into(),
            results,
            status: SearchStatus::Errored,
        },
    ]
}

fn sample_events() -> Vec<SearchEvent> {
    vec![
        SearchEvent::InputChanged("Marvel Endgame".into()),
        SearchEvent::InputChanged(String::new()),
        SearchEvent::SearchBegan,
        SearchEvent::SearchSucceeded(vec![record(3, "Iron Man")]),
        SearchEvent::SearchSucceeded(Vec::new()),
        SearchEvent::SearchFailed,
    ]
}

#[test]
fn session_starts_idle_and_empty() {
    let state = SearchState::default();
    assert_eq!(state.status, SearchStatus::Idle);
    assert!(state.query.is_empty());
    assert!(state.results.is_empty());
}

#[test]
fn input_changed_only_touches_query() {
    for state in sample_states() {
        for text in ["", "a", "Marvel Endgame", "  spaced  ", "ünïcödé"] {
            let next = apply(state.clone(), SearchEvent::InputChanged(text.into()));
            assert_eq!(next.query, text);
            assert_eq!(next.status, state.status);
            assert_eq!(next.results, state.results);
        }
    }
}

#[test]
fn search_began_always_loads_and_keeps_stale_results() {
    for state in sample_states() {
        let next = apply(state.clone(), SearchEvent::SearchBegan);
        assert_eq!(next.status, SearchStatus::Loading);
        assert_eq!(next.results, state.results);
        assert_eq!(next.query, state.query);
    }
}

#[test]
fn search_succeeded_replaces_results() {
    let records = vec![record(9, "Thor")];
    for state in sample_states() {
        let next = apply(state.clone(), SearchEvent::SearchSucceeded(records.clone()));
        assert_eq!(next.status, SearchStatus::Loaded);
        assert_eq!(next.results, records);
        assert_eq!(next.query, state.query);
    }
}

#[test]
fn search_succeeded_with_empty_list_clears_results() {
    let state = sample_states().remove(2);
    let next = apply(state, SearchEvent::SearchSucceeded(Vec::new()));
    assert_eq!(next.status, SearchStatus::Loaded);
    assert!(next.results.is_empty());
}

#[test]
fn search_failed_keeps_previous_results() {
    for state in sample_states() {
        let next = apply(state.clone(), SearchEvent::SearchFailed);
        assert_eq!(next.status, SearchStatus::Errored);
        assert_eq!(next.results, state.results);
        assert_eq!(next.query, state.query);
    }
}

#[test]
fn applying_an_event_twice_equals_applying_it_once() {
    for state in sample_states() {
        for event in sample_events() {
            let once = apply(state.clone(), event.clone());
            let twice = apply(once.clone(), event);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn last_terminal_event_wins() {
    let older = vec![record(1, "A")];
    let state = [
        SearchEvent::SearchBegan,
        SearchEvent::SearchBegan,
        SearchEvent::SearchSucceeded(older.clone()),
        SearchEvent::SearchFailed,
    ]
    .into_iter()
    .fold(SearchState::default(), apply);

    assert_eq!(state.status, SearchStatus::Errored);
    assert_eq!(state.results, older);
}

#[test]
fn terminal_events_are_labelled() {
    assert!(SearchEvent::SearchFailed.is_terminal());
    assert!(SearchEvent::SearchSucceeded(Vec::new()).is_terminal());
    assert!(!SearchEvent::SearchBegan.is_terminal());
    assert_eq!(SearchEvent::SearchBegan.name(), "search_began");
}
