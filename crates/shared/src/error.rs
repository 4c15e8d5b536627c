use thiserror::Error;

/// Every way a catalog lookup can fail. All of them surface to the user as the
/// same errored view; the variants exist for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("catalog responded with HTTP {status}")]
    Status { status: u16 },
    #[error("malformed catalog response: {0}")]
    Malformed(String),
}

impl FetchError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn malformed(err: impl std::fmt::Display) -> Self {
        Self::Malformed(err.to_string())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status { .. } => "response",
            Self::Malformed(_) => "malformed_response",
        }
    }
}
