use thiserror::Error;

/// Everything that can go wrong between the form and the rendered list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The trimmed username was empty, nothing was sent.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The backend answered with a non-2xx status.
    #[error("search failed with HTTP {status}")]
    Api { status: u16, detail: Option<String> },

    /// The request never produced a usable body: connect error, read error, bad JSON.
    #[error("{0}")]
    Transport(String),

    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        // keep the whole source chain, e.g. "...: tcp connect error: Connection refused"
        SearchError::Transport(format!("{:#}", anyhow::Error::from(e)))
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        SearchError::Transport(e.to_string())
    }
}
