// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Nothing here is fatal to a page. Corpus failures leave search inert, a
//! query before the index is ready gets a "still loading" message, and a
//! matching failure turns into a generic error message. The controllers in
//! `search` and `panel` convert these into view states; only the CLI ever
//! surfaces them as process failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The corpus endpoint answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The host could not complete the corpus request at all.
    #[error("corpus request failed: {0}")]
    Transport(String),

    /// The corpus body was not a JSON array.
    #[error("invalid corpus JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The index cannot serve queries yet (see `IndexState::ready`).
    #[error("search index still loading")]
    NotReady,

    /// A query could not be turned into a highlight pattern.
    #[error("query rejected: {0}")]
    Query(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Coarse category, for log fields and user-facing messages.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Http { .. } | Error::Transport(_) | Error::Parse(_) => "data-unavailable",
            Error::NotReady => "not-ready",
            Error::Query(_) => "query-execution",
            Error::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
