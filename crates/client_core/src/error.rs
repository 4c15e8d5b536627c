use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid catalog url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("catalog url '{0}' cannot be used as a base for the search endpoint")]
    NotABase(String),
    #[error("failed to build catalog http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
