use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use std::time::Instant;

use crate::error::SearchError;
use crate::fetcher::{self, FetchOutcome};
use crate::pager;
use crate::query;

use super::AppState;
use super::models::{
    DEFAULT_MAX_RESULTS, DEFAULT_PAGE_SIZE, DocumentResult, SearchParams, SearchResponse,
};

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let start = Instant::now();

    let request = query::normalize(
        &params.query,
        params.max.unwrap_or(DEFAULT_MAX_RESULTS),
        params.page_results.unwrap_or(DEFAULT_PAGE_SIZE),
        params.page.unwrap_or(1),
        &state.limits,
    )
    .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    log::info!(
        "search term: {:?}, max: {}, page: {}/{}",
        request.term,
        request.max_results,
        request.page,
        request.page_size
    );

    let outcome = fetcher::fetch_documents(state.backend.as_ref(), &request)
        .await
        .map_err(|e| {
            log::error!("backend fetch failed for {:?}: {e}", request.term);
            match e {
                SearchError::InvalidQuery(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                SearchError::BackendUnavailable(_) => (StatusCode::BAD_GATEWAY, e.to_string()),
            }
        })?;

    // Zero matches and page-overrun both serve as a 200 with empty results;
    // the caller degrades to an empty-results display.
    let all = match outcome {
        FetchOutcome::Results(docs) => docs,
        FetchOutcome::Empty => Vec::new(),
    };
    let total_results = all.len();

    let results: Vec<DocumentResult> = pager::page_slice(&all, request.page, request.page_size)
        .iter()
        .map(|doc| DocumentResult {
            url: doc.url.clone(),
            title: doc.title.clone(),
            preview: doc.preview.clone(),
        })
        .collect();

    Ok(Json(SearchResponse {
        query: request.term,
        results,
        total_results,
        page: request.page,
        page_size: request.page_size,
        processing_time_ms: start.elapsed().as_millis(),
    }))
}
