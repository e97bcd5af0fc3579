//! Filter and search walkthroughs on a rendered post list.

use crate::common::{ms, panel_items, RecordingView};
use folio::{FilterItem, FilterPanel, PanelConfig};

fn two_post_panel() -> FilterPanel<RecordingView> {
    FilterPanel::new(
        vec![
            FilterItem::new("security,cloud", "Cloud Security Posture", "Continuous review"),
            FilterItem::new("ml", "Gradient Descent", "Optimization basics"),
        ],
        RecordingView::default(),
        PanelConfig::default(),
    )
}

fn panel() -> FilterPanel<RecordingView> {
    FilterPanel::new(panel_items(), RecordingView::default(), PanelConfig::default())
}

#[test]
fn test_select_tag_then_all() {
    let mut panel = two_post_panel();

    panel.filter_click("security");
    assert_eq!(panel.visibility(), &[true, false]);
    assert!(panel.view().is_visible(0));
    assert!(!panel.view().is_visible(1));

    panel.filter_click("all");
    assert_eq!(panel.visibility(), &[true, true]);
    assert!(panel.view().hidden.is_empty());
}

#[test]
fn test_search_overrides_active_filter() {
    let mut panel = panel();
    panel.filter_click("ml");
    assert_eq!(panel.visibility(), &[false, true, false, true]);

    panel.search_input("cloud", ms(1_000));
    panel.tick(ms(1_300));

    assert!(panel.is_searching());
    // Post 0 is tagged security,cloud: visible despite the ml filter.
    assert_eq!(panel.visibility(), &[true, false, false, true]);
    assert!(panel.view().searching);
    assert_eq!(panel.view().indicator, None);
    assert_eq!(
        panel.view().results_count.as_deref(),
        Some("Found <strong>2</strong> posts matching \"<strong>cloud</strong>\"")
    );
}

#[test]
fn test_clearing_search_restores_filter_visibility() {
    let mut panel = panel();
    panel.filter_click("security");
    let before = panel.visibility().to_vec();

    panel.search_input("gradient", ms(0));
    panel.tick(ms(300));
    assert_ne!(panel.visibility(), before.as_slice());

    panel.clear_search();
    assert!(!panel.is_searching());
    assert_eq!(panel.visibility(), before.as_slice());
    assert_eq!(panel.current_filter(), "security");
    assert_eq!(panel.view().indicator.as_deref(), Some("security"));
    assert_eq!(panel.view().results_count, None);
    assert!(!panel.view().searching);
}

#[test]
fn test_escape_restores_filter_visibility() {
    let mut panel = panel();
    panel.filter_click("ml");
    let before = panel.visibility().to_vec();

    panel.search_input("kubernetes", ms(0));
    panel.tick(ms(300));
    panel.escape();

    assert_eq!(panel.visibility(), before.as_slice());
    assert_eq!(panel.view().input_clears, 1);
}

#[test]
fn test_emptying_input_restores_filter_visibility() {
    let mut panel = panel();
    panel.filter_click("ml");
    let before = panel.visibility().to_vec();

    panel.search_input("kub", ms(0));
    panel.tick(ms(300));
    panel.search_input("", ms(500));
    assert!(panel.is_searching(), "still searching until the delay passes");
    panel.tick(ms(800));

    assert!(!panel.is_searching());
    assert_eq!(panel.visibility(), before.as_slice());
}

#[test]
fn test_search_matches_title_excerpt_and_tags_case_insensitively() {
    let mut panel = panel();
    for (query, expected) in [
        ("GRADIENT", [false, true, false, false]),
        ("inference", [false, false, false, true]),
        ("Kubernetes", [false, false, true, false]),
        ("  security  ", [true, false, true, false]),
    ] {
        panel.search_input(query, ms(0));
        panel.tick(ms(300));
        assert_eq!(panel.visibility(), &expected, "query {:?}", query);
    }
}

#[test]
fn test_no_results_placeholder_for_search() {
    let mut panel = panel();
    panel.search_input("quantum", ms(0));
    panel.tick(ms(300));

    assert_eq!(panel.visible_count(), 0);
    let placeholder = panel.view().no_results.clone().unwrap();
    assert!(placeholder.contains("No posts found"));
    assert!(placeholder.contains("search: quantum"));
    assert!(panel
        .view()
        .results_count
        .as_deref()
        .unwrap()
        .contains("<strong>0</strong> posts"));
}
