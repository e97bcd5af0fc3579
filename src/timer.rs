// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cancellable one-shot timers on caller-supplied time.
//!
//! Nothing here reads a clock. The host passes the current [`Timestamp`] with
//! every event (in the browser that is `performance.now()`), and polls pending
//! timers when its own timer fires. Tests advance time by passing bigger
//! numbers.

use std::ops::Add;
use std::time::Duration;

/// Milliseconds since page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub fn from_millis(ms: u64) -> Self {
        Timestamp(ms)
    }

    /// Convert a JS high-resolution timestamp, truncating to whole milliseconds.
    pub fn from_js(ms: f64) -> Self {
        if ms.is_finite() && ms > 0.0 {
            Timestamp(ms as u64)
        } else {
            Timestamp(0)
        }
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Time elapsed since `earlier`, zero if `earlier` is in the future.
    pub fn since(self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        let ms = u64::try_from(rhs.as_millis()).unwrap_or(u64::MAX);
        Timestamp(self.0.saturating_add(ms))
    }
}

/// Trailing-edge debounce: fires once, `wait` after the last `schedule`.
///
/// At most one value is pending. Scheduling again replaces it and pushes the
/// deadline out.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(Timestamp, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Start (or restart) the timer with `value`. Returns the deadline.
    pub fn schedule(&mut self, now: Timestamp, value: T) -> Timestamp {
        let deadline = now + self.wait;
        self.pending = Some((deadline, value));
        deadline
    }

    /// Drop the pending value, if any, without firing.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Timestamp> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Fire if the deadline has passed. Each scheduled value fires at most once.
    pub fn poll(&mut self, now: Timestamp) -> Option<T> {
        let due = matches!(&self.pending, Some((deadline, _)) if now >= *deadline);
        if due {
            self.cancel()
        } else {
            None
        }
    }
}

/// Leading-edge throttle: at most one firing per `interval`.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_fired: Option<Timestamp>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    /// One animation frame at 60 Hz.
    pub fn per_frame() -> Self {
        Self::new(Duration::from_millis(16))
    }

    /// Returns true (and starts a new window) if the call may run now.
    pub fn try_fire(&mut self, now: Timestamp) -> bool {
        match self.last_fired {
            Some(last) if now.since(last) < self.interval => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}
