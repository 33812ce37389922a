use crate::config::CONFIG;
use crate::data_models::SearchRequest;
use crate::error::SearchError;

/// Upper bounds the normalizer clamps against. Kept as a plain struct so
/// tests don't have to go through the env-backed `CONFIG`.
#[derive(Debug, Clone, Copy)]
pub struct QueryLimits {
    pub max_results_cap: u32,
    pub page_size_cap: u32,
}

impl QueryLimits {
    pub fn from_config() -> Self {
        QueryLimits {
            max_results_cap: CONFIG.max_results_cap,
            page_size_cap: CONFIG.page_size_cap,
        }
    }
}

/// Validate and canonicalize raw query parameters into a [`SearchRequest`].
///
/// The term is trimmed and must be non-empty; `max_results` and `page_size`
/// are clamped into `[1, cap]`; a page below 1 is coerced to 1. Only a blank
/// term is an error, and it fails before the backend is ever contacted.
pub fn normalize(
    term: &str,
    max_results: u32,
    page_size: u32,
    page: u32,
    limits: &QueryLimits,
) -> Result<SearchRequest, SearchError> {
    let term = term.trim();
    if term.is_empty() {
        return Err(SearchError::InvalidQuery(
            "query term must not be empty".to_string(),
        ));
    }

    Ok(SearchRequest {
        term: term.to_string(),
        max_results: max_results.clamp(1, limits.max_results_cap),
        page_size: page_size.clamp(1, limits.page_size_cap),
        page: page.max(1),
    })
}

#[cfg(test)]
fn test_limits() -> QueryLimits {
    QueryLimits {
        max_results_cap: 100,
        page_size_cap: 50,
    }
}

#[test]
fn test_normalize_trims_and_passes_through() {
    let req = normalize("  cat pictures ", 50, 10, 2, &test_limits()).unwrap();
    assert_eq!(req.term, "cat pictures");
    assert_eq!(req.max_results, 50);
    assert_eq!(req.page_size, 10);
    assert_eq!(req.page, 2);
}

#[test]
fn test_normalize_rejects_empty_term() {
    for term in ["", "   ", "\t\n"] {
        let err = normalize(term, 100, 10, 1, &test_limits()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidQuery(_)));
    }
}

#[test]
fn test_normalize_clamps_to_caps() {
    let req = normalize("cat", 10_000, 9_999, 1, &test_limits()).unwrap();
    assert_eq!(req.max_results, 100);
    assert_eq!(req.page_size, 50);
}

#[test]
fn test_normalize_coerces_zeroes_up() {
    let req = normalize("cat", 0, 0, 0, &test_limits()).unwrap();
    assert_eq!(req.max_results, 1);
    assert_eq!(req.page_size, 1);
    assert_eq!(req.page, 1);
}

#[test]
fn test_normalize_allows_page_past_the_results() {
    // page * page_size way beyond max_results is fine; the pager clips.
    let req = normalize("cat", 100, 10, 99, &test_limits()).unwrap();
    assert_eq!(req.page, 99);
}
