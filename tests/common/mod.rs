//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::{build_index, FieldWeights, FilterItem, RawDocument, SearchBox, SearchHit, SearchIndex, Timestamp};

// Re-export canonical test utilities from folio::testing
pub use folio::testing::{corpus_json, make_raw_doc, MemoryStore, RecordingView};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small blog: security, cloud, ML and a couple of odd entries.
pub fn blog_corpus() -> Vec<RawDocument> {
    vec![
        make_raw_doc(
            "Kubernetes Security",
            "Hardening clusters against lateral movement",
            "RBAC, network policies and pod security standards for production clusters.",
        ),
        make_raw_doc(
            "Cloud Security Posture",
            "Continuous review of cloud accounts",
            "Misconfigured buckets remain the most common cloud incident.",
        ),
        make_raw_doc(
            "Gradient Descent from Scratch",
            "Optimization basics for machine learning",
            "We derive the update rule and implement it without any framework.",
        ),
        make_raw_doc(
            "Zero Trust Networks",
            "Never trust, always verify",
            "Segmenting workloads so a compromised kubernetes node stays contained.",
        ),
        make_raw_doc("Modern C++ Tips", "Templates, ranges and (draft) modules", ""),
    ]
}

pub fn blog_index() -> SearchIndex {
    build_index(blog_corpus(), FieldWeights::default())
}

/// A search box that has finished loading `docs`.
pub fn ready_search_box(docs: &[RawDocument]) -> SearchBox {
    let mut search_box = SearchBox::default();
    search_box.load_response(200, &corpus_json(docs));
    search_box
}

/// Titles of `hits`, best first.
pub fn hit_titles(index: &SearchIndex, hits: &[SearchHit]) -> Vec<String> {
    hits.iter()
        .filter_map(|hit| index.doc(hit.doc_id))
        .map(|doc| doc.title.clone())
        .collect()
}

// ============================================================================
// FILTER PANEL
// ============================================================================

/// The posts on the blog index page.
pub fn panel_items() -> Vec<FilterItem> {
    vec![
        FilterItem::new("security,cloud", "Cloud Security Posture", "Continuous review"),
        FilterItem::new("ml", "Gradient Descent", "Optimization basics"),
        FilterItem::new("security,kubernetes", "Kubernetes Security", "Hardening clusters"),
        FilterItem::new("ml,cloud", "Serving Models in the Cloud", "Inference at scale"),
    ]
}

pub fn ms(value: u64) -> Timestamp {
    Timestamp::from_millis(value)
}
