use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::config::CONFIG;
use crate::data_models::{Document, RawDocument, SearchRequest};
use crate::error::SearchError;

/// The external ranking/index collaborator. Resolves a term to a ranked
/// document sequence, relevance-descending, at most `limit` entries.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn fetch(&self, term: &str, limit: u32) -> Result<Vec<RawDocument>, SearchError>;
}

/// Shape of the backend's response body.
#[derive(Deserialize)]
struct BackendResponse {
    results: Vec<RawDocument>,
}

/// HTTP implementation of [`SearchBackend`]: issues
/// `GET {base}/search?query=<term>&max=<limit>` against the configured
/// backend. The request timeout doubles as the cancellation bound on the
/// awaited call.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a backend client with an explicit base URL and timeout.
    /// Useful for testing against a local stub server.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build backend HTTP client")?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(HttpBackend { client, base_url })
    }

    /// Build a backend client from environment configuration.
    pub fn from_config() -> Result<Self> {
        Self::new(
            CONFIG.backend_url.clone(),
            Duration::from_millis(CONFIG.backend_timeout_ms),
        )
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    async fn fetch(&self, term: &str, limit: u32) -> Result<Vec<RawDocument>, SearchError> {
        let res = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("query", term), ("max", &limit.to_string())])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(SearchError::BackendUnavailable(format!(
                "backend returned {status}"
            )));
        }

        // Malformed JSON is indistinguishable from a broken backend.
        let body: BackendResponse = res.json().await?;
        Ok(body.results)
    }
}

/// Outcome of a fetch: either decoded documents in ranking order, or the
/// zero-match signal. Empty is a valid response, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Results(Vec<Document>),
    Empty,
}

/// Fetch up to `max_results` documents for the request's term and decode
/// their stored fields before anything downstream sees them.
pub async fn fetch_documents(
    backend: &dyn SearchBackend,
    request: &SearchRequest,
) -> Result<FetchOutcome, SearchError> {
    let mut raw = backend.fetch(&request.term, request.max_results).await?;

    if raw.is_empty() {
        return Ok(FetchOutcome::Empty);
    }
    if raw.len() > request.max_results as usize {
        log::warn!(
            "backend returned {} documents, truncating to {}",
            raw.len(),
            request.max_results
        );
        raw.truncate(request.max_results as usize);
    }

    let docs = raw
        .into_iter()
        .map(|doc| Document {
            url: doc.url,
            title: decode_text(&doc.title),
            preview: decode_text(&doc.preview),
        })
        .collect();

    Ok(FetchOutcome::Results(docs))
}

/// Decode a stored text field: percent-decode first, then substitute the
/// literal `+` the backend uses for spaces. Same order the original index
/// writes them in, so an encoded `%2B` survives as a real plus sign only
/// when the store meant one.
pub fn decode_text(raw: &str) -> String {
    percent_encoding::percent_decode_str(raw)
        .decode_utf8_lossy()
        .replace('+', " ")
}

#[test]
fn test_decode_plus_becomes_space() {
    assert_eq!(decode_text("Hello+World"), "Hello World");
}

#[test]
fn test_decode_percent_sequences() {
    assert_eq!(decode_text("caf%C3%A9"), "café");
    assert_eq!(decode_text("100%25+done"), "100% done");
}

#[test]
fn test_decode_plain_text_is_untouched() {
    assert_eq!(decode_text("plain"), "plain");
    assert_eq!(decode_text(""), "");
}

#[test]
fn test_decode_invalid_utf8_is_lossy_not_fatal() {
    // %FF is not valid UTF-8 on its own; lossy decoding replaces it.
    let decoded = decode_text("bad%FFbyte");
    assert!(decoded.contains('\u{FFFD}'));
}
