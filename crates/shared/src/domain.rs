use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);
    };
}

id_newtype!(RecordId);

/// One catalog item as returned by the remote search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(rename = "vote_average", default)]
    pub rating: f64,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl Record {
    /// Records without a poster fragment are never displayed.
    pub fn has_poster(&self) -> bool {
        self.poster_path
            .as_deref()
            .is_some_and(|path| !path.is_empty())
    }

    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        if !self.has_poster() {
            return None;
        }
        self.poster_path
            .as_deref()
            .map(|path| format!("{image_base}{path}"))
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
