// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading progress through an article.

use std::time::Duration;

use crate::timer::{Throttle, Timestamp};

/// Layout numbers, all in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArticleGeometry {
    pub scroll_top: f64,
    pub article_top: f64,
    pub article_height: f64,
    pub viewport_height: f64,
}

/// Fraction of the article read, in `[0, 1]`.
///
/// 0 while the article top is below the scroll position, 1 once its bottom
/// edge is in view. An article no taller than the viewport jumps straight
/// from 0 to 1 when its top is reached.
pub fn reading_progress(geometry: &ArticleGeometry) -> f64 {
    let scrollable = geometry.article_height - geometry.viewport_height;
    let scrolled = geometry.scroll_top - geometry.article_top;

    if scrollable <= 0.0 || !scrollable.is_finite() {
        return if scrolled >= 0.0 { 1.0 } else { 0.0 };
    }

    let progress = scrolled / scrollable;
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Scroll and resize handling for the progress bar.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    throttle: Throttle,
    progress: f64,
}

impl ProgressTracker {
    pub fn new(interval: Duration) -> Self {
        Self {
            throttle: Throttle::new(interval),
            progress: 0.0,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Bar width as a CSS percentage.
    pub fn width_percent(&self) -> f64 {
        self.progress * 100.0
    }

    /// A scroll event. At most one update per interval; `None` when dropped.
    pub fn on_scroll(&mut self, now: Timestamp, geometry: &ArticleGeometry) -> Option<f64> {
        if !self.throttle.try_fire(now) {
            return None;
        }
        Some(self.update(geometry))
    }

    /// Resize (and the initial paint) always update.
    pub fn on_resize(&mut self, geometry: &ArticleGeometry) -> f64 {
        self.update(geometry)
    }

    fn update(&mut self, geometry: &ArticleGeometry) -> f64 {
        self.progress = reading_progress(geometry);
        self.progress
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(16))
    }
}
