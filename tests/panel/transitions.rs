//! State machine transitions and their page effects.

use crate::common::{ms, panel_items, RecordingView};
use folio::{item_visible, FilterItem, FilterPanel, NullView, PanelConfig};

fn panel() -> FilterPanel<RecordingView> {
    FilterPanel::new(panel_items(), RecordingView::default(), PanelConfig::default())
}

fn searching_panel(term: &str) -> FilterPanel<RecordingView> {
    let mut panel = panel();
    panel.search_input(term, ms(0));
    panel.tick(ms(300));
    assert!(panel.is_searching());
    panel
}

#[test]
fn test_apply_filter_is_noop_while_searching() {
    let mut panel = searching_panel("cloud");
    let visible = panel.visibility().to_vec();
    let view = panel.view().clone();

    assert!(!panel.apply_filter("ml"));
    assert_eq!(panel.visibility(), visible.as_slice());
    assert_eq!(panel.view(), &view);
    assert_eq!(panel.current_filter(), "all");
}

#[test]
fn test_filter_click_while_searching_exits_search_first() {
    let mut panel = searching_panel("cloud");
    panel.filter_click("ml");

    assert!(!panel.is_searching());
    assert_eq!(panel.current_filter(), "ml");
    assert_eq!(panel.visibility(), &[false, true, false, true]);
    assert_eq!(panel.view().input_clears, 1);
    assert_eq!(panel.view().results_count, None);
}

#[test]
fn test_same_filter_twice_is_idempotent() {
    let mut panel = panel();
    panel.filter_click("security");
    let visible = panel.visibility().to_vec();
    let changes = panel.view().indicator_changes;

    panel.filter_click("security");
    assert_eq!(panel.visibility(), visible.as_slice());
    assert_eq!(panel.view().indicator_changes, changes);
    assert_eq!(panel.view().active_filter.as_deref(), Some("security"));
}

#[test]
fn test_debounce_coalesces_keystrokes() {
    let mut panel = panel();
    panel.search_input("k", ms(0));
    panel.search_input("ku", ms(100));
    panel.search_input("kub", ms(200));

    assert!(!panel.tick(ms(300)), "quiet period restarted by each keystroke");
    assert!(!panel.is_searching());
    assert_eq!(panel.pending_deadline(), Some(ms(500)));

    assert!(panel.tick(ms(500)));
    assert_eq!(panel.search_term(), Some("kub"));
    assert!(!panel.tick(ms(900)), "fires once");
}

#[test]
fn test_clear_search_cancels_pending_recompute() {
    let mut panel = searching_panel("cloud");
    panel.search_input("gradient", ms(1_000));
    panel.clear_search();
    assert_eq!(panel.pending_deadline(), None);
    assert!(!panel.tick(ms(2_000)));
    assert!(!panel.is_searching());
}

#[test]
fn test_escape_closes_menu_before_leaving_search() {
    let mut panel = searching_panel("cloud");
    panel.toggle_more_filters();
    assert!(panel.more_filters_open());

    panel.escape();
    assert!(!panel.more_filters_open());
    assert!(panel.is_searching());

    panel.escape();
    assert!(!panel.is_searching());
}

#[test]
fn test_escape_in_filter_mode_without_menu_does_nothing() {
    let mut panel = panel();
    panel.filter_click("ml");
    let view = panel.view().clone();
    panel.escape();
    assert_eq!(panel.view(), &view);
}

#[test]
fn test_more_filters_menu() {
    let mut panel = panel();
    panel.toggle_more_filters();
    assert!(panel.view().more_filters_open);
    panel.toggle_more_filters();
    assert!(!panel.view().more_filters_open);

    panel.toggle_more_filters();
    panel.outside_click();
    assert!(!panel.more_filters_open());

    panel.toggle_more_filters();
    panel.filter_click("ml");
    assert!(!panel.more_filters_open(), "applying a filter closes the menu");
}

#[test]
fn test_scroll_only_for_specific_filters() {
    let mut panel = panel();
    panel.filter_click("all");
    assert_eq!(panel.view().scrolls, 0);
    panel.filter_click("cloud");
    assert_eq!(panel.view().scrolls, 1);

    panel.search_input("cloud", ms(0));
    panel.tick(ms(300));
    assert_eq!(panel.view().scrolls, 1, "search mode never scrolls");
}

#[test]
fn test_clear_filter_shows_everything() {
    let mut panel = panel();
    panel.filter_click("kubernetes");
    assert_eq!(panel.visible_count(), 1);

    panel.clear_filter();
    assert_eq!(panel.current_filter(), "all");
    assert_eq!(panel.visible_count(), 4);
    assert_eq!(panel.view().indicator, None);
}

#[test]
fn test_no_results_placeholder_follows_visible_count() {
    let mut panel = panel();
    panel.filter_click("rust");
    let placeholder = panel.view().no_results.clone().unwrap();
    assert!(placeholder.contains("No posts match \"rust\""));

    panel.filter_click("ml");
    assert_eq!(panel.view().no_results, None);
}

#[test]
fn test_focus_shortcut() {
    let mut panel = panel();
    panel.focus_shortcut();
    assert_eq!(panel.view().focus_requests, 1);
}

#[test]
fn test_custom_all_sentinel() {
    let config = PanelConfig {
        all_filter: "*".to_string(),
        ..PanelConfig::default()
    };
    let mut panel = FilterPanel::new(panel_items(), RecordingView::default(), config);
    assert_eq!(panel.current_filter(), "*");
    panel.filter_click("ml");
    panel.clear_filter();
    assert_eq!(panel.visible_count(), 4);
}

#[test]
fn test_missing_page_targets_degrade_to_noop() {
    let mut panel = FilterPanel::new(panel_items(), NullView, PanelConfig::default());
    panel.filter_click("ml");
    panel.search_input("cloud", ms(0));
    panel.tick(ms(300));
    panel.escape();
    assert_eq!(panel.visibility(), &[false, true, false, true]);
}

#[test]
fn test_tag_filter_is_substring_match() {
    let item = FilterItem::new("cssecurity", "", "");
    assert!(item_visible(&item, "css", None, "all"));
    assert!(item_visible(&item, "security", None, "all"));
    assert!(!item_visible(&item, "CSS", None, "all"), "filters are case-sensitive");
}

#[test]
fn test_items_from_page_attributes() {
    let items: Vec<FilterItem> = serde_json::from_str(
        r#"[{"tags": "ml", "title": "Gradient Descent"}, {"title": null}, {}]"#,
    )
    .unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].tags(), "ml");
    assert_eq!(items[0].excerpt(), "");
    assert_eq!(items[1].title(), "");
    assert!(items[2].matches_filter("all", "all"));
}
