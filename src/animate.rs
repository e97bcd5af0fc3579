// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scroll-triggered reveal animations.

use std::collections::HashSet;
use std::hash::Hash;
use std::time::Duration;

/// Counter frame interval.
pub const FRAME: Duration = Duration::from_millis(16);

/// A stat counter counting up from 0 to `target`, one value per frame.
///
/// Intermediate frames show the floor of the running total; the last frame
/// shows exactly `target`. The iterator ends after that frame.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration) -> Self {
        let frames = duration.as_millis() as f64 / FRAME.as_millis() as f64;
        Self {
            target,
            step: target as f64 / frames,
            current: 0.0,
            done: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Per-frame increment.
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.current += self.step;
        // A NaN step (zero target over zero duration) also lands here.
        if self.current.is_nan() || self.current >= self.target as f64 {
            self.done = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as u64)
        }
    }
}

/// Elements that have already played their entrance animation.
#[derive(Debug, Clone)]
pub struct RevealSet<K> {
    seen: HashSet<K>,
}

impl<K: Eq + Hash> RevealSet<K> {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// `key` entered the viewport. True only the first time.
    pub fn reveal(&mut self, key: K) -> bool {
        self.seen.insert(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.seen.contains(key)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl<K: Eq + Hash> Default for RevealSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Skill bar width from its `data-width` attribute, as a percentage.
///
/// Accepts a number with an optional trailing `%`. Anything outside
/// `0..=100` or unparseable yields `None` and the bar is left alone.
pub fn skill_width(data_width: &str) -> Option<f64> {
    let value = data_width.trim();
    let value = value.strip_suffix('%').unwrap_or(value).trim_end();
    let width: f64 = value.parse().ok()?;
    (0.0..=100.0).contains(&width).then_some(width)
}
