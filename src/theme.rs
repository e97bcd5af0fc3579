// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Light/dark theme selection.
//!
//! An explicit choice is stored under [`STORAGE_KEY`] and wins over the OS
//! colour scheme. Without one, the page follows the OS, including live
//! changes to it; following the OS never writes the store.

use std::fmt;

use tracing::{debug, warn};

/// Key the explicit preference is stored under.
pub const STORAGE_KEY: &str = "theme-preference";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The stored and `data-theme` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but the two literals is rejected.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_os(prefers_dark: bool) -> Theme {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle control, naming what a click will do.
    pub fn aria_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light mode",
            Theme::Light => "Switch to dark mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key/value storage (browser local storage, or a map in tests).
///
/// Storage that is unavailable or full is the host's problem: `set` and
/// `remove` are fire-and-forget.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// The theme toggle and its OS listener.
#[derive(Debug)]
pub struct ThemeSwitch<S: PreferenceStore> {
    store: S,
    key: String,
    os_prefers_dark: bool,
    applied: Theme,
}

impl<S: PreferenceStore> ThemeSwitch<S> {
    pub fn new(store: S, os_prefers_dark: bool) -> Self {
        Self::with_key(store, STORAGE_KEY, os_prefers_dark)
    }

    pub fn with_key(store: S, key: impl Into<String>, os_prefers_dark: bool) -> Self {
        let mut switch = Self {
            store,
            key: key.into(),
            os_prefers_dark,
            applied: Theme::from_os(os_prefers_dark),
        };
        switch.applied = switch.resolve();
        debug!(theme = %switch.applied, "initial theme");
        switch
    }

    /// The explicit preference, if a valid one is stored.
    pub fn stored(&self) -> Option<Theme> {
        let value = self.store.get(&self.key)?;
        let theme = Theme::parse(&value);
        if theme.is_none() {
            warn!(value = %value, "ignoring unrecognized stored theme");
        }
        theme
    }

    fn resolve(&self) -> Theme {
        self.stored()
            .unwrap_or_else(|| Theme::from_os(self.os_prefers_dark))
    }

    /// The theme currently on the page.
    pub fn applied(&self) -> Theme {
        self.applied
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Explicit user toggle: flip the applied theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.applied.toggled();
        self.store.set(&self.key, next.as_str());
        self.applied = next;
        debug!(theme = %next, "theme toggled");
        next
    }

    /// The OS colour scheme changed. Followed only without a stored choice.
    pub fn os_preference_changed(&mut self, prefers_dark: bool) -> Theme {
        self.os_prefers_dark = prefers_dark;
        if self.stored().is_none() {
            self.applied = Theme::from_os(prefers_dark);
        }
        self.applied
    }

    /// Forget the explicit choice and go back to following the OS.
    pub fn clear_preference(&mut self) -> Theme {
        self.store.remove(&self.key);
        self.applied = Theme::from_os(self.os_prefers_dark);
        self.applied
    }
}
