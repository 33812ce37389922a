use axum::{Json, Router, extract::Query, routing::get};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use glean::data_models::SearchRequest;
use glean::error::SearchError;
use glean::fetcher::{self, FetchOutcome, HttpBackend, SearchBackend};

mod test_helpers {
    use super::*;
    use std::net::Ipv4Addr;

    /// Spin up a stub index backend on an ephemeral port.
    pub async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    pub fn request(term: &str, max_results: u32) -> SearchRequest {
        SearchRequest {
            term: term.to_string(),
            max_results,
            page_size: 10,
            page: 1,
        }
    }

    pub fn encoded_results(n: usize) -> serde_json::Value {
        let results: Vec<_> = (0..n)
            .map(|i| {
                json!({
                    "url": format!("http://example.com/{i}"),
                    "title": format!("Doc+{i}"),
                    "preview": format!("Preview+{i}"),
                })
            })
            .collect();
        json!({ "results": results })
    }
}

use test_helpers::*;

#[tokio::test]
async fn test_fetch_decodes_stored_fields() {
    let router = Router::new().route(
        "/search",
        get(|| async {
            Json(json!({
                "results": [
                    {
                        "url": "http://example.com/cats",
                        "title": "Hello+World",
                        "preview": "A+cat%2C+maybe+two+%2850%25+off%29"
                    }
                ]
            }))
        }),
    );
    let base = spawn_backend(router).await;
    let backend = HttpBackend::new(&base, Duration::from_secs(1)).unwrap();

    let outcome = fetcher::fetch_documents(&backend, &request("cat", 50))
        .await
        .unwrap();

    let FetchOutcome::Results(docs) = outcome else {
        panic!("expected results");
    };
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].url, "http://example.com/cats");
    assert_eq!(docs[0].title, "Hello World");
    assert_eq!(docs[0].preview, "A cat, maybe two (50% off)");
}

#[tokio::test]
async fn test_fetch_forwards_term_and_limit() {
    let seen: Arc<Mutex<HashMap<String, String>>> = Arc::default();
    let seen_clone = seen.clone();
    let router = Router::new().route(
        "/search",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let seen = seen_clone.clone();
            async move {
                *seen.lock().unwrap() = params;
                Json(encoded_results(1))
            }
        }),
    );
    let base = spawn_backend(router).await;
    let backend = HttpBackend::new(&base, Duration::from_secs(1)).unwrap();

    backend.fetch("black & white cats", 25).await.unwrap();

    let params = seen.lock().unwrap().clone();
    assert_eq!(params.get("query").unwrap(), "black & white cats");
    assert_eq!(params.get("max").unwrap(), "25");
}

#[tokio::test]
async fn test_zero_matches_is_the_empty_signal() {
    let router = Router::new().route("/search", get(|| async { Json(json!({ "results": [] })) }));
    let base = spawn_backend(router).await;
    let backend = HttpBackend::new(&base, Duration::from_secs(1)).unwrap();

    let outcome = fetcher::fetch_documents(&backend, &request("xyzzy", 50))
        .await
        .unwrap();

    assert_eq!(outcome, FetchOutcome::Empty);
}

#[tokio::test]
async fn test_over_returning_backend_is_truncated_to_max() {
    let router = Router::new().route("/search", get(|| async { Json(encoded_results(5)) }));
    let base = spawn_backend(router).await;
    let backend = HttpBackend::new(&base, Duration::from_secs(1)).unwrap();

    let outcome = fetcher::fetch_documents(&backend, &request("cat", 3))
        .await
        .unwrap();

    let FetchOutcome::Results(docs) = outcome else {
        panic!("expected results");
    };
    assert_eq!(docs.len(), 3);
    assert_eq!(docs[2].title, "Doc 2");
}

#[tokio::test]
async fn test_non_2xx_is_backend_unavailable() {
    let router = Router::new().route(
        "/search",
        get(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_backend(router).await;
    let backend = HttpBackend::new(&base, Duration::from_secs(1)).unwrap();

    let err = backend.fetch("cat", 10).await.unwrap_err();
    assert!(matches!(err, SearchError::BackendUnavailable(_)));
}

#[tokio::test]
async fn test_malformed_json_is_backend_unavailable() {
    let router = Router::new().route("/search", get(|| async { "this is not json" }));
    let base = spawn_backend(router).await;
    let backend = HttpBackend::new(&base, Duration::from_secs(1)).unwrap();

    let err = backend.fetch("cat", 10).await.unwrap_err();
    assert!(matches!(err, SearchError::BackendUnavailable(_)));
}

#[tokio::test]
async fn test_slow_backend_times_out_as_backend_unavailable() {
    let router = Router::new().route(
        "/search",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(encoded_results(1))
        }),
    );
    let base = spawn_backend(router).await;
    let backend = HttpBackend::new(&base, Duration::from_millis(100)).unwrap();

    let err = backend.fetch("cat", 10).await.unwrap_err();
    assert!(matches!(err, SearchError::BackendUnavailable(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_backend_unavailable() {
    // Nothing listens here.
    let backend = HttpBackend::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();

    let err = backend.fetch("cat", 10).await.unwrap_err();
    assert!(matches!(err, SearchError::BackendUnavailable(_)));
}
