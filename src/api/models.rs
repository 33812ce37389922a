use serde::{Deserialize, Serialize};

/// Defaults the original frontend sent on every request.
pub const DEFAULT_MAX_RESULTS: u32 = 100;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query-string parameters of `GET /search`. Parameter names are the
/// frontend contract; `pageResults` keeps its camelCase wire name.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub max: Option<u32>,
    #[serde(rename = "pageResults")]
    pub page_results: Option<u32>,
    pub page: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<DocumentResult>,
    pub total_results: usize,
    pub page: u32,
    pub page_size: u32,
    pub processing_time_ms: u128,
}

/// One decoded search result as served to the presentation layer.
#[derive(Debug, Serialize)]
pub struct DocumentResult {
    pub url: String,
    pub title: String,
    pub preview: String,
}
