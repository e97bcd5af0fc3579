// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The panel's window onto the page.
//!
//! Every method defaults to doing nothing. A host that cannot find an
//! optional element (no clear button, no results banner) simply leaves that
//! method alone, and the panel keeps working without it.

pub trait PanelView {
    /// Show or hide the post at `index`.
    fn set_item_visible(&mut self, _index: usize, _visible: bool) {}

    /// Mark the control for `filter` as the single active one.
    fn mark_active_filter(&mut self, _filter: &str) {}

    /// Show the active-filter indicator with `filter`, or hide it.
    fn show_active_filter(&mut self, _filter: Option<&str>) {}

    /// Enter or leave the searching look: searching class on the filter bar,
    /// clear-search control shown.
    fn set_searching(&mut self, _searching: bool) {}

    /// Show the search result banner HTML, or hide it.
    fn show_results_count(&mut self, _html: Option<&str>) {}

    /// Insert the no-results placeholder HTML, or remove it.
    fn show_no_results(&mut self, _html: Option<&str>) {}

    /// Open or close the secondary filter menu.
    fn set_more_filters_open(&mut self, _open: bool) {}

    /// Empty the search input.
    fn clear_search_input(&mut self) {}

    /// Scroll the post list into view, leaving `offset` pixels above it.
    fn scroll_to_list(&mut self, _offset: u32) {}

    /// Move keyboard focus to the search input.
    fn focus_search(&mut self) {}
}

/// A view with no page behind it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl PanelView for NullView {}
