//! Search box lifecycle: loading, ready, unavailable.

use crate::common::{blog_corpus, corpus_json, make_raw_doc};
use folio::render::{LOADING_MESSAGE, UNAVAILABLE_MESSAGE};
use folio::{IndexState, SearchBox, SearchConfig, SearchView};

#[test]
fn test_query_while_loading_reports_loading() {
    let mut search_box = SearchBox::default();
    let view = search_box.input("kubernetes");
    assert_eq!(view, SearchView::Loading);
    assert!(view.to_html().contains(LOADING_MESSAGE));
    assert!(matches!(search_box.state(), IndexState::Loading));
}

#[test]
fn test_loading_then_ready() {
    let mut search_box = SearchBox::default();
    assert_eq!(search_box.input("kubernetes"), SearchView::Loading);

    search_box.load_response(200, &corpus_json(&blog_corpus()));
    assert!(matches!(search_box.input("kubernetes"), SearchView::Results(_)));
}

#[test]
fn test_non_2xx_is_terminal() {
    for status in [301, 404, 500, 503] {
        let mut search_box = SearchBox::default();
        let view = search_box.load_response(status, "[]");
        assert_eq!(view, Some(SearchView::Unavailable), "status {}", status);
        assert!(search_box.input("anything").to_html().contains(UNAVAILABLE_MESSAGE));
    }
}

#[test]
fn test_transport_failure_is_terminal() {
    let mut search_box = SearchBox::default();
    assert_eq!(
        search_box.load_failed("NetworkError when attempting to fetch resource."),
        Some(SearchView::Unavailable)
    );
    assert_eq!(search_box.input("cloud"), SearchView::Unavailable);
}

#[test]
fn test_malformed_json_is_terminal() {
    for body in ["", "{", "{\"title\": \"x\"}", "<html></html>"] {
        let mut search_box = SearchBox::default();
        assert_eq!(search_box.load_response(200, body), Some(SearchView::Unavailable), "{:?}", body);
    }
}

#[test]
fn test_entries_missing_fields_are_tolerated() {
    let body = r#"[
        {"title": "Only a title"},
        {"title": "With null excerpt", "excerpt": null, "url": "/b/"},
        {"title": "Complete", "excerpt": "e", "content": "c", "url": "/c/", "date": "2024-01-01"}
    ]"#;
    let mut search_box = SearchBox::default();
    assert_eq!(search_box.load_response(200, body), Some(SearchView::Cleared));
    let index = search_box.index().unwrap();
    assert_eq!(index.len(), 3);
    assert_eq!(index.docs()[1].excerpt, "");
}

#[test]
fn test_late_failure_does_not_replace_results() {
    let mut search_box = SearchBox::default();
    search_box.load_response(200, &corpus_json(&[make_raw_doc("Cloud", "", "")]));
    assert_eq!(search_box.load_failed("aborted"), None);
    assert_eq!(search_box.load_response(500, ""), None);
    assert!(matches!(search_box.input("cloud"), SearchView::Results(_)));
}

#[test]
fn test_huge_query_gets_an_answer_not_an_error() {
    let mut search_box = SearchBox::new(SearchConfig {
        max_query_len: 16,
        ..SearchConfig::default()
    });
    search_box.load_response(200, &corpus_json(&blog_corpus()));
    let huge = "a".repeat(10_000);
    assert_eq!(
        search_box.input(&huge),
        SearchView::NoResults { query: huge.clone() }
    );

    let padded = format!("kubernetes {}", huge);
    assert!(matches!(search_box.input(&padded), SearchView::Results(_)));
}

#[test]
fn test_escape_clears_results_state() {
    let mut search_box = SearchBox::default();
    search_box.load_response(200, &corpus_json(&blog_corpus()));
    search_box.input("cloud");
    assert!(search_box.has_results());
    assert_eq!(search_box.escape(), SearchView::Cleared);
    assert!(!search_box.has_results());
}

#[test]
fn test_view_serializes_with_kind_tag() {
    let view = SearchView::NoResults {
        query: "zz".to_string(),
    };
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["kind"], "noResults");
    assert_eq!(json["query"], "zz");
}
