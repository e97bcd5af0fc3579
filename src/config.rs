// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for every feature, with the site's defaults.
//!
//! All structs deserialize with `#[serde(default)]`, so a page script or a
//! `--config` file only needs to name the values it changes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Relative field weights. Higher weight means a match in that field counts for more.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct FieldWeights {
    pub title: f64,
    pub excerpt: f64,
    pub content: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 10.0,
            excerpt: 3.0,
            content: 1.0,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Trimmed queries shorter than this (in chars) clear results instead of searching.
    pub min_query_len: usize,
    /// Hits rendered per query. The total count is reported regardless.
    pub result_limit: usize,
    /// Edit budget for the fuzzy expansion of each query term.
    pub max_edit_distance: usize,
    /// Chars of a query the matcher looks at. Anything past this is ignored.
    pub max_query_len: usize,
    pub weights: FieldWeights,
    /// Where the page fetches the corpus from.
    pub corpus_path: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            result_limit: 10,
            max_edit_distance: 1,
            max_query_len: 256,
            weights: FieldWeights::default(),
            corpus_path: "/search.json".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    /// Quiescence delay before a search input is applied.
    pub debounce_ms: u64,
    /// Pixels left above the post list when scrolling it into view.
    pub scroll_offset: u32,
    /// Sentinel filter that shows every item.
    pub all_filter: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            scroll_offset: 100,
            all_filter: "all".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub search: SearchConfig,
    pub panel: PanelConfig,
    /// Minimum spacing of reading-progress updates while scrolling (one frame).
    pub progress_interval_ms: u64,
    /// Duration of the stat-counter animation.
    pub counter_duration_ms: u64,
    pub theme_storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            panel: PanelConfig::default(),
            progress_interval_ms: 16,
            counter_duration_ms: 2000,
            theme_storage_key: crate::theme::STORAGE_KEY.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }
}
