//! Highlighting and result fragments.

use crate::common::{blog_index, make_raw_doc};
use folio::render::highlight_pattern;
use folio::{build_index, escape_html, highlight, search, FieldWeights, ResultPage, SearchConfig};

#[test]
fn test_highlight_wraps_every_occurrence() {
    assert_eq!(
        highlight("Security of security, SECURITY", "security"),
        "<mark>Security</mark> of <mark>security</mark>, <mark>SECURITY</mark>"
    );
}

#[test]
fn test_regex_metacharacters_are_literal() {
    for (text, query, expected) in [
        ("Modern C++ Tips", "c++", "Modern <mark>C++</mark> Tips"),
        ("a.b vs acb", "a.b", "<mark>a.b</mark> vs acb"),
        ("[draft] post", "[draft]", "<mark>[draft]</mark> post"),
        ("x*y and xy", "x*y", "<mark>x*y</mark> and xy"),
        ("cost $100", "$1", "cost <mark>$1</mark>00"),
        ("a|b or a", "a|b", "<mark>a|b</mark> or a"),
        ("back\\slash", "\\", "back<mark>\\</mark>slash"),
    ] {
        assert_eq!(highlight(text, query), expected, "query {:?}", query);
    }
}

#[test]
fn test_unbalanced_query_does_not_fail() {
    assert!(highlight_pattern("(((").is_ok());
    assert_eq!(highlight("f(x", "("), "f<mark>(</mark>x");
}

#[test]
fn test_highlight_output_is_escaped() {
    assert_eq!(
        highlight("<b>bold</b> & more", "bold"),
        "&lt;b&gt;<mark>bold</mark>&lt;/b&gt; &amp; more"
    );
}

#[test]
fn test_query_not_in_text_leaves_text_unmarked() {
    assert_eq!(highlight("Kubernetes", "securty"), "Kubernetes");
}

#[test]
fn test_result_page_markup() {
    let index = build_index(
        vec![make_raw_doc("Cloud and Edge", "a <cloud> & story", "")],
        FieldWeights::default(),
    );
    let hits = search(&index, "cloud", &SearchConfig::default()).unwrap();
    let page = ResultPage::build(&index, &hits, "cloud", 10);
    let html = page.to_html();

    assert!(html.contains("<a href=\"/posts/cloud-and-edge/\"><mark>Cloud</mark> and Edge</a>"));
    assert!(html.contains("a &lt;<mark>cloud</mark>&gt; &amp; story"));
    assert!(html.contains("<span class=\"search-result-date\">2024-01-01</span>"));
}

#[test]
fn test_result_page_limit() {
    let index = blog_index();
    let hits = search(&index, "security", &SearchConfig::default()).unwrap();
    let page = ResultPage::build(&index, &hits, "security", 1);
    assert_eq!(page.total, hits.len());
    assert_eq!(page.hits.len(), 1);
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("<a href=\"x\">&</a>"), "&lt;a href=\"x\"&gt;&amp;&lt;/a&gt;");
}
