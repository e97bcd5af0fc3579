// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary text at the search box. It must never panic or refuse a
//! query, results must reference real documents in ranked order, and the view
//! must always render.

#![no_main]

use libfuzzer_sys::fuzz_target;
use folio::testing::make_raw_doc;
use folio::{search, SearchBox, SearchConfig, SearchIndex, SearchView};
use std::sync::OnceLock;

fn corpus() -> Vec<folio::RawDocument> {
    vec![
        make_raw_doc("Kubernetes Security", "Hardening clusters", "rbac network policies pods"),
        make_raw_doc("Cloud Security Posture", "Reviews for the cloud", "iam roles buckets"),
        make_raw_doc("Gradient Descent from Scratch", "Optimization basics", "learning rate loss"),
        make_raw_doc("Modern C++ Tips", "Templates & ranges", "constexpr concepts"),
        make_raw_doc("Café Culture", "Über notes on naïve résumé writing", ""),
        make_raw_doc("", "", ""),
    ]
}

fuzz_target!(|query: &[u8]| {
    static INDEX: OnceLock<SearchIndex> = OnceLock::new();
    let config = SearchConfig::default();
    let index = INDEX.get_or_init(|| folio::build_index(corpus(), config.weights));

    let query = String::from_utf8_lossy(query);

    // INVARIANT 1: search never panics and never refuses a query
    let hits = match search(index, &query, &config) {
        Ok(hits) => hits,
        Err(e) => panic!("search failed on {:?}: {}", query, e),
    };

    // INVARIANT 2: every hit names a real document
    for hit in &hits {
        assert!(index.doc(hit.doc_id).is_some(), "dangling doc id {:?}", hit.doc_id);
        assert!(hit.score.is_finite() && hit.score > 0.0, "bad score {}", hit.score);
    }

    // INVARIANT 3: scores never increase down the list
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score, "ranking out of order");
    }

    // INVARIANT 4: the search box always produces a view that renders, never the error view
    let mut search_box = SearchBox::new(config.clone());
    search_box.finish_loading(Ok(corpus()));
    let view = search_box.input(&query);
    assert_ne!(view, SearchView::Error);
    let html = view.to_html();
    if let SearchView::Results(page) = &view {
        assert!(page.hits.len() <= config.result_limit);
        assert!(html.contains("search-results-list"));
    }
});
