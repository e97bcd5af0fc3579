// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the post filter panel.
//!
//! Drives the panel with arbitrary event sequences and checks, after every
//! event, that item visibility is exactly what the current state implies.

#![no_main]

use arbitrary::Arbitrary;
use folio::{item_visible, FilterItem, FilterPanel, NullView, PanelConfig, Timestamp};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Event {
    FilterClick(u8),
    ApplyFilter(u8),
    ClearFilter,
    Input(String),
    Tick(u16),
    ClearSearch,
    Escape,
    ToggleMore,
    OutsideClick,
}

const FILTERS: &[&str] = &["all", "security", "ml", "cloud", "kubernetes", "rust"];

fuzz_target!(|events: Vec<Event>| {
    let items = vec![
        FilterItem::new("security,cloud", "Cloud Security Posture", "Reviews"),
        FilterItem::new("ml", "Gradient Descent", "From scratch"),
        FilterItem::new("security,kubernetes", "Kubernetes Security", "Hardening"),
        FilterItem::new("ml,cloud", "Serving Models in the Cloud", "Inference at scale"),
        FilterItem::new("", "", ""),
    ];
    let config = PanelConfig::default();
    let all = config.all_filter.clone();
    let mut panel = FilterPanel::new(items, NullView, config);
    let mut now = 0u64;

    for event in events.into_iter().take(64) {
        match event {
            Event::FilterClick(i) => panel.filter_click(FILTERS[i as usize % FILTERS.len()]),
            Event::ApplyFilter(i) => {
                let was_searching = panel.is_searching();
                let before = panel.current_filter().to_string();
                let applied = panel.apply_filter(FILTERS[i as usize % FILTERS.len()]);
                if was_searching {
                    assert!(!applied);
                    assert_eq!(panel.current_filter(), before);
                }
            }
            Event::ClearFilter => panel.clear_filter(),
            Event::Input(value) => {
                let value: String = value.chars().take(64).collect();
                panel.search_input(&value, Timestamp::from_millis(now));
            }
            Event::Tick(ms) => {
                now += u64::from(ms);
                panel.tick(Timestamp::from_millis(now));
            }
            Event::ClearSearch => panel.clear_search(),
            Event::Escape => panel.escape(),
            Event::ToggleMore => panel.toggle_more_filters(),
            Event::OutsideClick => panel.outside_click(),
        }

        for (item, &shown) in panel.items().iter().zip(panel.visibility()) {
            let expected = item_visible(item, panel.current_filter(), panel.search_term(), &all);
            assert_eq!(shown, expected, "visibility drifted after an event");
        }
        assert_eq!(panel.is_searching(), panel.search_term().is_some());
    }
});
