use crate::data_models::Document;

/// Slice the requested page out of the full decoded result sequence.
///
/// Returns `[(page-1)*page_size, min(page*page_size, len))`. A page that
/// starts at or past the end yields an empty slice; overrunning the results
/// is a valid, empty response, never an error. Pure function over its
/// inputs, so re-invoking with the same sequence gives the same page.
pub fn page_slice(docs: &[Document], page: u32, page_size: u32) -> &[Document] {
    let start = (page.max(1) as usize - 1).saturating_mul(page_size as usize);
    if start >= docs.len() {
        return &[];
    }
    let end = start.saturating_add(page_size as usize).min(docs.len());
    &docs[start..end]
}

#[cfg(test)]
fn docs(n: usize) -> Vec<Document> {
    (0..n)
        .map(|i| Document {
            url: format!("http://example.com/{i}"),
            title: format!("doc {i}"),
            preview: format!("preview {i}"),
        })
        .collect()
}

#[test]
fn test_first_page_starts_at_index_zero() {
    let all = docs(23);
    let page = page_slice(&all, 1, 10);
    assert_eq!(page.len(), 10);
    assert_eq!(page, &all[0..10]);
}

#[test]
fn test_last_page_is_partial() {
    let all = docs(23);
    let page = page_slice(&all, 3, 10);
    assert_eq!(page.len(), 3);
    assert_eq!(page, &all[20..23]);
}

#[test]
fn test_overrun_page_is_empty_not_an_error() {
    let all = docs(23);
    assert!(page_slice(&all, 5, 10).is_empty());
    assert!(page_slice(&all, u32::MAX, u32::MAX).is_empty());
}

#[test]
fn test_page_never_exceeds_page_size() {
    let all = docs(37);
    for page in 1..=6u32 {
        for page_size in 1..=12u32 {
            assert!(page_slice(&all, page, page_size).len() <= page_size as usize);
        }
    }
}

#[test]
fn test_empty_sequence_yields_empty_page() {
    assert!(page_slice(&[], 1, 10).is_empty());
}

#[test]
fn test_idempotent_for_same_inputs() {
    let all = docs(23);
    let first = page_slice(&all, 2, 10).to_vec();
    let second = page_slice(&all, 2, 10).to_vec();
    assert_eq!(first, second);
}
