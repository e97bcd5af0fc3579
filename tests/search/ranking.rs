//! Ranking: field weights, match kinds, and deterministic tie-breaks.

use crate::common::{blog_index, hit_titles, make_raw_doc};
use folio::{build_index, search, FieldWeights, MatchKind, SearchConfig};

#[test]
fn test_title_beats_excerpt_beats_content() {
    let index = build_index(
        vec![
            make_raw_doc("Notes", "", "observability everywhere"),
            make_raw_doc("Notes", "observability", ""),
            make_raw_doc("Observability", "", ""),
        ],
        FieldWeights::default(),
    );
    let hits = search(&index, "observability", &SearchConfig::default()).unwrap();
    let order: Vec<u32> = hits.iter().map(|h| h.doc_id.get()).collect();
    assert_eq!(order, vec![2, 1, 0]);
}

#[test]
fn test_exact_beats_prefix_in_same_field() {
    let index = build_index(
        vec![
            make_raw_doc("Clusters at scale", "", ""),
            make_raw_doc("Cluster basics", "", ""),
        ],
        FieldWeights::default(),
    );
    let hits = search(&index, "cluster", &SearchConfig::default()).unwrap();
    assert_eq!(hits[0].doc_id.get(), 1);
    assert_eq!(hits[0].kind, MatchKind::Exact);
    assert_eq!(hits[1].kind, MatchKind::Prefix);
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn test_ties_broken_by_corpus_order() {
    let index = build_index(
        vec![
            make_raw_doc("Rust", "", ""),
            make_raw_doc("Rust", "", ""),
            make_raw_doc("Rust", "", ""),
        ],
        FieldWeights::default(),
    );
    let hits = search(&index, "rust", &SearchConfig::default()).unwrap();
    let order: Vec<u32> = hits.iter().map(|h| h.doc_id.get()).collect();
    assert_eq!(order, vec![0, 1, 2]);
    assert!(hits.windows(2).all(|w| w[0].score == w[1].score));
}

#[test]
fn test_scores_sorted_descending() {
    let index = blog_index();
    let hits = search(&index, "security cloud", &SearchConfig::default()).unwrap();
    assert!(!hits.is_empty());
    assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(hit_titles(&index, &hits)[0], "Cloud Security Posture");
}

#[test]
fn test_custom_weights_change_order() {
    let docs = vec![
        make_raw_doc("Notes", "", "observability"),
        make_raw_doc("Notes", "observability", ""),
    ];
    let content_heavy = FieldWeights {
        title: 1.0,
        excerpt: 1.0,
        content: 50.0,
    };
    let index = build_index(docs, content_heavy);
    let hits = search(&index, "observability", &SearchConfig::default()).unwrap();
    assert_eq!(hits[0].doc_id.get(), 0);
}
