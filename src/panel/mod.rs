// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The blog post filter/search panel.
//!
//! Two mutually exclusive modes over a fixed list of rendered posts:
//!
//! - **Filter mode** (initial): one tag filter is active, `"all"` by default.
//! - **Search mode**: entered once a non-empty search term settles (after the
//!   quiescence delay). The filter is suspended, not forgotten; leaving search
//!   mode reapplies it.
//!
//! Visibility is always a pure function of `(filter, search term, item)`;
//! see [`item_visible`]. Page effects go through a [`PanelView`].

mod item;
mod view;

pub use item::{item_visible, FilterItem};
pub use view::{NullView, PanelView};

use std::time::Duration;

use tracing::debug;

use crate::config::PanelConfig;
use crate::render::escape_html;
use crate::timer::{Debouncer, Timestamp};

/// Banner shown above the list while searching.
pub fn results_count_html(count: usize, term: &str) -> String {
    format!(
        "Found <strong>{}</strong> post{} matching \"<strong>{}</strong>\"",
        count,
        if count == 1 { "" } else { "s" },
        escape_html(term)
    )
}

/// Placeholder shown when nothing is visible. `label` is the filter name or
/// `search: <term>`.
pub fn no_results_html(label: &str) -> String {
    format!(
        concat!(
            "<i class=\"fas fa-search\"></i>",
            "<h3>No posts found</h3>",
            "<p>No posts match \"{}\". Try adjusting your filter or search!</p>"
        ),
        escape_html(label)
    )
}

pub struct FilterPanel<V: PanelView> {
    items: Vec<FilterItem>,
    view: V,
    config: PanelConfig,
    current_filter: String,
    /// `Some` while in search mode.
    search_term: Option<String>,
    more_filters_open: bool,
    pending_search: Debouncer<String>,
    visible: Vec<bool>,
}

impl<V: PanelView> FilterPanel<V> {
    /// Start in filter mode with every item visible. The page is assumed to
    /// render that way, so nothing is painted yet.
    pub fn new(items: Vec<FilterItem>, view: V, config: PanelConfig) -> Self {
        let visible = vec![true; items.len()];
        Self {
            pending_search: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            current_filter: config.all_filter.clone(),
            items,
            view,
            config,
            search_term: None,
            more_filters_open: false,
            visible,
        }
    }

    pub fn items(&self) -> &[FilterItem] {
        &self.items
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn current_filter(&self) -> &str {
        &self.current_filter
    }

    pub fn is_searching(&self) -> bool {
        self.search_term.is_some()
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    pub fn more_filters_open(&self) -> bool {
        self.more_filters_open
    }

    /// Current visibility, one flag per item.
    pub fn visibility(&self) -> &[bool] {
        &self.visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Deadline of the pending search recomputation, if one is waiting.
    pub fn pending_deadline(&self) -> Option<Timestamp> {
        self.pending_search.deadline()
    }

    /// A filter control was clicked. Leaves search mode first if needed.
    pub fn filter_click(&mut self, filter: &str) {
        if self.is_searching() {
            self.clear_search();
        }
        self.apply_filter(filter);
    }

    /// Apply `filter`. A no-op (returning false) while in search mode.
    pub fn apply_filter(&mut self, filter: &str) -> bool {
        if self.is_searching() {
            return false;
        }

        self.current_filter = filter.to_string();
        let is_all = filter == self.config.all_filter;

        self.view.mark_active_filter(filter);
        self.view.show_active_filter((!is_all).then_some(filter));

        let count = self.recompute();
        self.update_no_results(count, filter.to_string());

        self.set_more_filters(false);

        if !is_all {
            self.view.scroll_to_list(self.config.scroll_offset);
        }
        debug!(filter, visible = count, "filter applied");
        true
    }

    /// The clear-filter control: back to showing everything.
    pub fn clear_filter(&mut self) {
        let all = self.config.all_filter.clone();
        self.apply_filter(&all);
    }

    /// The search input changed. The term is trimmed and lower-cased, and
    /// applied once input has been quiet for the debounce delay.
    pub fn search_input(&mut self, value: &str, now: Timestamp) -> Timestamp {
        let term = value.trim().to_lowercase();
        self.pending_search.schedule(now, term)
    }

    /// Timer callback: run the pending search if its quiet period is over.
    pub fn tick(&mut self, now: Timestamp) -> bool {
        match self.pending_search.poll(now) {
            Some(term) => {
                self.run_search(&term);
                true
            }
            None => false,
        }
    }

    fn run_search(&mut self, term: &str) {
        if term.is_empty() {
            self.clear_search();
            return;
        }

        self.search_term = Some(term.to_string());
        self.view.set_searching(true);
        self.view.show_active_filter(None);

        let count = self.recompute();
        self.view
            .show_results_count(Some(&results_count_html(count, term)));
        self.update_no_results(count, format!("search: {}", term));
        debug!(term, matches = count, "search applied");
    }

    /// Leave search mode and reapply the filter that was active before it.
    pub fn clear_search(&mut self) {
        self.pending_search.cancel();
        self.view.clear_search_input();
        let was_searching = self.search_term.take().is_some();
        self.view.set_searching(false);
        self.view.show_results_count(None);

        if was_searching {
            let filter = self.current_filter.clone();
            self.apply_filter(&filter);
        }
    }

    /// Escape: close the secondary filter menu if open, else leave search mode.
    pub fn escape(&mut self) {
        if self.more_filters_open {
            self.set_more_filters(false);
        } else if self.is_searching() {
            self.clear_search();
        }
    }

    pub fn toggle_more_filters(&mut self) {
        let open = !self.more_filters_open;
        self.set_more_filters(open);
    }

    /// A click landed outside the filter dropdown.
    pub fn outside_click(&mut self) {
        if self.more_filters_open {
            self.set_more_filters(false);
        }
    }

    /// Ctrl/Cmd+K.
    pub fn focus_shortcut(&mut self) {
        self.view.focus_search();
    }

    fn set_more_filters(&mut self, open: bool) {
        self.more_filters_open = open;
        self.view.set_more_filters_open(open);
    }

    /// Recompute and paint visibility, returning the visible count.
    fn recompute(&mut self) -> usize {
        let mut count = 0;
        for (index, item) in self.items.iter().enumerate() {
            let visible = item_visible(
                item,
                &self.current_filter,
                self.search_term.as_deref(),
                &self.config.all_filter,
            );
            self.visible[index] = visible;
            self.view.set_item_visible(index, visible);
            count += usize::from(visible);
        }
        count
    }

    fn update_no_results(&mut self, count: usize, label: String) {
        if count == 0 {
            self.view.show_no_results(Some(&no_results_html(&label)));
        } else {
            self.view.show_no_results(None);
        }
    }
}
