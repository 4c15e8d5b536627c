use serde::{Deserialize, Serialize};

use crate::domain::Record;

/// Only one page of results is ever requested.
pub const FIRST_PAGE: u32 = 1;

/// Query string of the catalog search request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchParams {
    pub api_key: String,
    pub language: String,
    pub query: String,
    pub page: u32,
    pub include_adult: bool,
}

impl SearchParams {
    pub fn new(
        api_key: impl Into<String>,
        language: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            language: language.into(),
            query: query.into(),
            page: FIRST_PAGE,
            include_adult: false,
        }
    }
}

/// Body of a successful catalog search. A body without `results` does not
/// decode, which is how a broken response is told apart from an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<Record>,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub total_pages: u32,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
