//! End-to-end search box scenarios.

use crate::common::{make_raw_doc, ready_search_box};
use folio::{SearchBox, SearchView};

#[test]
fn test_single_post_prefix_query_highlights_title() {
    let docs = vec![make_raw_doc(
        "Kubernetes Security",
        "hardening clusters",
        "",
    )];
    let mut search_box = ready_search_box(&docs);

    match search_box.input("kubernet") {
        SearchView::Results(page) => {
            assert_eq!(page.total, 1);
            assert_eq!(page.hits.len(), 1);
            assert_eq!(page.hits[0].title_html, "<mark>Kubernet</mark>es Security");
            assert_eq!(page.hits[0].excerpt_html, "hardening clusters");
            assert!(page.to_html().contains("1 result(s) found"));
        }
        other => panic!("expected results, got {:?}", other),
    }
}

#[test]
fn test_empty_corpus_reports_no_results_with_escaped_query() {
    let mut search_box = ready_search_box(&[]);

    let view = search_box.input("<script>");
    assert_eq!(
        view,
        SearchView::NoResults {
            query: "<script>".to_string()
        }
    );
    let html = view.to_html();
    assert!(html.contains("No results found"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(search_box.has_results());
}

#[test]
fn test_short_queries_never_search() {
    let mut search_box = SearchBox::default();
    // Still loading: a real search would report Loading.
    assert_eq!(search_box.input("k"), SearchView::Cleared);
    assert_eq!(search_box.input("   "), SearchView::Cleared);
    assert_eq!(search_box.input(" k "), SearchView::Cleared);
    assert_eq!(search_box.input("ku"), SearchView::Loading);
}

#[test]
fn test_short_query_clears_previous_results() {
    let mut search_box = ready_search_box(&[make_raw_doc("Cloud Notes", "", "")]);
    assert!(matches!(search_box.input("cloud"), SearchView::Results(_)));
    assert!(search_box.has_results());

    assert_eq!(search_box.input("c"), SearchView::Cleared);
    assert!(!search_box.has_results());
}

#[test]
fn test_typo_within_one_edit_still_finds_post() {
    let mut search_box = ready_search_box(&[make_raw_doc("Kubernetes Security", "", "")]);
    match search_box.input("securty") {
        SearchView::Results(page) => assert_eq!(page.total, 1),
        other => panic!("expected results, got {:?}", other),
    }
}

#[test]
fn test_result_list_capped_but_total_reported() {
    let docs: Vec<_> = (0..25)
        .map(|i| make_raw_doc(&format!("Cloud note {}", i), "", ""))
        .collect();
    let mut search_box = ready_search_box(&docs);

    match search_box.input("cloud") {
        SearchView::Results(page) => {
            assert_eq!(page.total, 25);
            assert_eq!(page.hits.len(), 10);
            assert!(page.to_html().starts_with(
                "<div class=\"search-results-count\">25 result(s) found</div>"
            ));
        }
        other => panic!("expected results, got {:?}", other),
    }
}
