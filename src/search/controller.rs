// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The site search box: index lifecycle plus keystroke handling.
//!
//! The index starts out `Loading`. The corpus fetch completion is the only
//! transition out of it, to `Ready` or `Unavailable`. Every input event maps
//! to a [`SearchView`] the host paints into the results region; nothing here
//! returns an error to the page.

use tracing::{debug, error, warn};

use crate::config::SearchConfig;
use crate::corpus::corpus_from_response;
use crate::error::{Error, Result};
use crate::index::{build_index, SearchIndex};
use crate::render::{ResultPage, SearchView};
use crate::types::RawDocument;

use super::search;

/// Where the search index is in its one-way lifecycle.
#[derive(Debug)]
pub enum IndexState {
    Loading,
    Ready(SearchIndex),
    Unavailable,
}

impl IndexState {
    /// The index, if queries can run against it yet.
    pub fn ready(&self) -> Result<&SearchIndex> {
        match self {
            IndexState::Ready(index) => Ok(index),
            IndexState::Loading | IndexState::Unavailable => Err(Error::NotReady),
        }
    }
}

/// State owned by one search box on one page.
#[derive(Debug)]
pub struct SearchBox {
    config: SearchConfig,
    state: IndexState,
    has_results: bool,
}

impl SearchBox {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            state: IndexState::Loading,
            has_results: false,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn state(&self) -> &IndexState {
        &self.state
    }

    pub fn index(&self) -> Option<&SearchIndex> {
        self.state.ready().ok()
    }

    /// Whether the results container should carry its "has results" state.
    pub fn has_results(&self) -> bool {
        self.has_results
    }

    /// Corpus load finished, one way or the other.
    ///
    /// Returns the view to paint, or `None` when the display should be left
    /// alone: a failure that arrives after an index is already serving is
    /// logged and ignored.
    pub fn finish_loading(&mut self, corpus: Result<Vec<RawDocument>>) -> Option<SearchView> {
        match corpus {
            Ok(docs) => {
                self.state = IndexState::Ready(build_index(docs, self.config.weights));
                self.has_results = false;
                Some(SearchView::Cleared)
            }
            Err(e) if matches!(self.state, IndexState::Ready(_)) => {
                warn!(error = %e, "ignoring corpus failure after index became ready");
                None
            }
            Err(e) => {
                error!(error = %e, category = e.category(), "error loading search index");
                self.state = IndexState::Unavailable;
                Some(SearchView::Unavailable)
            }
        }
    }

    /// Feed a completed corpus response (status plus body text).
    pub fn load_response(&mut self, status: u16, body: &str) -> Option<SearchView> {
        self.finish_loading(corpus_from_response(status, body))
    }

    /// The corpus request never completed.
    pub fn load_failed(&mut self, reason: impl Into<String>) -> Option<SearchView> {
        self.finish_loading(Err(Error::Transport(reason.into())))
    }

    /// The input value changed.
    pub fn input(&mut self, value: &str) -> SearchView {
        let query = value.trim();
        if query.chars().count() < self.config.min_query_len {
            self.has_results = false;
            return SearchView::Cleared;
        }
        self.perform(query)
    }

    /// Escape pressed in the input: the host empties the field, we clear results.
    pub fn escape(&mut self) -> SearchView {
        self.has_results = false;
        SearchView::Cleared
    }

    fn perform(&mut self, query: &str) -> SearchView {
        let index = match self.state.ready() {
            Ok(index) => index,
            Err(e) => {
                debug!(category = e.category(), "query while index not ready");
                return match self.state {
                    IndexState::Unavailable => SearchView::Unavailable,
                    _ => SearchView::Loading,
                };
            }
        };

        match search(index, query, &self.config) {
            Ok(hits) if hits.is_empty() => {
                self.has_results = true;
                SearchView::NoResults {
                    query: query.to_string(),
                }
            }
            Ok(hits) => {
                self.has_results = true;
                SearchView::Results(ResultPage::build(index, &hits, query, self.config.result_limit))
            }
            Err(e) => {
                error!(error = %e, category = e.category(), "search error");
                SearchView::Error
            }
        }
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
