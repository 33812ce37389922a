use serde::Deserialize;

/// Validated query parameters, produced by the normalizer.
/// `page * page_size` may exceed `max_results`; the pager clips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    pub max_results: u32,
    pub page_size: u32,
    pub page: u32,
}

/// A document exactly as the backend stores it: `title` and `preview` are
/// still URL-encoded, with literal `+` standing in for spaces.
#[derive(Deserialize, Debug, Clone)]
pub struct RawDocument {
    pub url: String,
    pub title: String,
    pub preview: String,
}

/// A decoded search result, safe to hand to callers as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub url: String,
    pub title: String,
    pub preview: String,
}
