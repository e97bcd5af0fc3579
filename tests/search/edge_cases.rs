//! Edge cases: empty indexes, symbols, unicode, and query limits.

use crate::common::{blog_index, hit_titles, make_raw_doc, ready_search_box};
use folio::{
    build_index, search, FieldWeights, MatchKind, SearchConfig, SearchIndex, SearchView,
    MAX_QUERY_TERMS,
};

#[test]
fn test_empty_index_matches_nothing() {
    let index = SearchIndex::empty(FieldWeights::default());
    for query in ["ab", "kubernetes", "++", "日本"] {
        assert!(search(&index, query, &SearchConfig::default()).unwrap().is_empty());
    }
}

#[test]
fn test_symbol_only_query_uses_literal_match() {
    let index = blog_index();
    let hits = search(&index, "++", &SearchConfig::default()).unwrap();
    assert_eq!(hit_titles(&index, &hits), vec!["Modern C++ Tips"]);
    assert_eq!(hits[0].kind, MatchKind::Literal);
}

#[test]
fn test_symbol_query_with_letters_still_finds_post() {
    let index = blog_index();
    let hits = search(&index, "C++", &SearchConfig::default()).unwrap();
    assert!(hit_titles(&index, &hits).contains(&"Modern C++ Tips".to_string()));
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritics_fold_both_ways() {
    let index = build_index(
        vec![make_raw_doc("Café Culture", "", ""), make_raw_doc("Resume tips", "", "")],
        FieldWeights::default(),
    );
    let config = SearchConfig::default();
    assert_eq!(search(&index, "cafe", &config).unwrap()[0].doc_id.get(), 0);
    assert_eq!(search(&index, "résumé", &config).unwrap()[0].doc_id.get(), 1);
}

#[test]
fn test_non_latin_titles() {
    let index = build_index(vec![make_raw_doc("日本語の記事", "", "")], FieldWeights::default());
    let hits = search(&index, "本語", &SearchConfig::default()).unwrap();
    assert_eq!(hits.len(), 1);
}

/// Forty distinct words, well past both query bounds.
fn forty_word_title() -> String {
    (0..40)
        .map(|i| format!("topic{}word", i))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_full_long_title_finds_its_post() {
    let title = forty_word_title();
    let config = SearchConfig::default();
    assert!(title.chars().count() > config.max_query_len);

    let index = build_index(
        vec![make_raw_doc("Kubernetes Security", "", ""), make_raw_doc(&title, "", "")],
        FieldWeights::default(),
    );
    let hits = search(&index, &title, &config).unwrap();
    assert_eq!(hit_titles(&index, &hits), vec![title.clone()]);
}

#[test]
fn test_long_title_in_search_box_shows_results() {
    let title = forty_word_title();
    let mut search_box = ready_search_box(&[make_raw_doc(&title, "an excerpt", "")]);
    match search_box.input(&title) {
        SearchView::Results(page) => {
            assert_eq!(page.total, 1);
            assert_eq!(page.hits[0].title_html, format!("<mark>{}</mark>", title));
        }
        other => panic!("expected results, got {:?}", other),
    }
}

#[test]
fn test_only_leading_distinct_terms_count() {
    let index = blog_index();
    let config = SearchConfig::default();

    let repeated = vec!["ab"; MAX_QUERY_TERMS + 8].join(" ");
    assert!(search(&index, &repeated, &config).is_ok());

    let mut words: Vec<String> = (0..MAX_QUERY_TERMS).map(|i| format!("qzx{}", i)).collect();
    words.insert(0, "kubernetes".to_string());
    let hits = search(&index, &words.join(" "), &config).unwrap();
    assert_eq!(hit_titles(&index, &hits)[0], "Kubernetes Security");
}

#[test]
fn test_greek_fragment_ending_in_sigma() {
    let index = build_index(vec![make_raw_doc("ΑΣΑ", "", "")], FieldWeights::default());
    let hits = search(&index, "ΑΣ", &SearchConfig::default()).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(folio::highlight("ΑΣΑ", "ΑΣ"), "<mark>ΑΣ</mark>Α");
}

#[test]
fn test_whitespace_is_trimmed() {
    let index = blog_index();
    let config = SearchConfig::default();
    assert_eq!(
        search(&index, "  kubernetes  ", &config).unwrap(),
        search(&index, "kubernetes", &config).unwrap()
    );
}

#[test]
fn test_exact_match_disabled_fuzzy() {
    let index = build_index(vec![make_raw_doc("Kubernetes", "", "")], FieldWeights::default());
    let strict = SearchConfig {
        max_edit_distance: 0,
        ..SearchConfig::default()
    };
    assert!(search(&index, "kubernetse", &strict).unwrap().is_empty());
    assert!(search(&index, "kubernets", &strict).unwrap().is_empty());
    assert_eq!(search(&index, "kubernets", &SearchConfig::default()).unwrap().len(), 1);
}
