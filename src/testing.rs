//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::HashMap;

use crate::panel::PanelView;
use crate::theme::PreferenceStore;
use crate::types::RawDocument;

/// Create a raw corpus entry with derived url and date.
///
/// This is the canonical implementation used across all tests.
pub fn make_raw_doc(title: &str, excerpt: &str, content: &str) -> RawDocument {
    let slug: String = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    RawDocument {
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        url: format!("/posts/{}/", slug),
        date: "2024-01-01".to_string(),
    }
}

/// Render raw documents as a corpus JSON body.
pub fn corpus_json(docs: &[RawDocument]) -> String {
    let entries: Vec<serde_json::Value> = docs
        .iter()
        .map(|doc| {
            serde_json::json!({
                "title": doc.title,
                "excerpt": doc.excerpt,
                "content": doc.content,
                "url": doc.url,
                "date": doc.date,
            })
        })
        .collect();
    serde_json::Value::Array(entries).to_string()
}

/// A [`PanelView`] that remembers the last state it was told to show.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingView {
    pub hidden: Vec<usize>,
    pub active_filter: Option<String>,
    pub indicator: Option<String>,
    pub searching: bool,
    pub results_count: Option<String>,
    pub no_results: Option<String>,
    pub more_filters_open: bool,
    pub input_clears: usize,
    pub scrolls: usize,
    pub focus_requests: usize,
    /// Number of times the active-filter indicator actually changed.
    pub indicator_changes: usize,
}

impl RecordingView {
    pub fn is_visible(&self, index: usize) -> bool {
        !self.hidden.contains(&index)
    }
}

impl PanelView for RecordingView {
    fn set_item_visible(&mut self, index: usize, visible: bool) {
        self.hidden.retain(|&i| i != index);
        if !visible {
            self.hidden.push(index);
            self.hidden.sort_unstable();
        }
    }

    fn mark_active_filter(&mut self, filter: &str) {
        self.active_filter = Some(filter.to_string());
    }

    fn show_active_filter(&mut self, filter: Option<&str>) {
        let next = filter.map(str::to_string);
        if next != self.indicator {
            self.indicator_changes += 1;
            self.indicator = next;
        }
    }

    fn set_searching(&mut self, searching: bool) {
        self.searching = searching;
    }

    fn show_results_count(&mut self, html: Option<&str>) {
        self.results_count = html.map(str::to_string);
    }

    fn show_no_results(&mut self, html: Option<&str>) {
        self.no_results = html.map(str::to_string);
    }

    fn set_more_filters_open(&mut self, open: bool) {
        self.more_filters_open = open;
    }

    fn clear_search_input(&mut self) {
        self.input_clears += 1;
    }

    fn scroll_to_list(&mut self, _offset: u32) {
        self.scrolls += 1;
    }

    fn focus_search(&mut self) {
        self.focus_requests += 1;
    }
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
