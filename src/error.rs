use thiserror::Error;

/// Failures a search can hit on its way through the pipeline.
///
/// An empty result set is deliberately not here: zero matches is a valid
/// response (see [`crate::fetcher::FetchOutcome::Empty`]), not a failure.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Bad input, caught locally. Never reaches the backend.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The ranking/index backend could not be reached or answered garbage.
    /// Retryable by the caller; no retries happen here.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        // Covers connect failures, timeouts and JSON decode errors alike:
        // anything the transport gives us that isn't a usable result set.
        SearchError::BackendUnavailable(e.to_string())
    }
}
