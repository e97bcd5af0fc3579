// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning ranked hits into HTML fragments.
//!
//! Highlighting marks every case-insensitive occurrence of the literal query
//! in a title or excerpt. The query is escaped before it becomes a pattern, so
//! `c++` or `(draft)` highlight exactly those characters. All text, marked or
//! not, is HTML-escaped on the way out.

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::index::SearchIndex;
use crate::types::{MatchKind, SearchHit};

pub const LOADING_MESSAGE: &str = "Search index still loading...";
pub const UNAVAILABLE_MESSAGE: &str = "Failed to load search index.";
pub const ERROR_MESSAGE: &str = "Search error occurred";

/// Escape text for inclusion in HTML element content.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

fn escape_attribute(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// Case-insensitive matcher for the literal query text.
pub fn highlight_pattern(query: &str) -> Result<Regex> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::Query(e.to_string()))
}

/// Escape `text` and wrap each match of `pattern` in `<mark>`.
pub fn highlight_with(pattern: &Regex, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for m in pattern.find_iter(text) {
        if m.start() == m.end() {
            continue;
        }
        out.push_str(&escape_html(&text[last..m.start()]));
        out.push_str("<mark>");
        out.push_str(&escape_html(m.as_str()));
        out.push_str("</mark>");
        last = m.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

/// Highlight every case-insensitive occurrence of `query` in `text`.
///
/// An empty query or a pattern the engine refuses leaves the text unmarked
/// (but still escaped).
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() || text.is_empty() {
        return escape_html(text);
    }
    match highlight_pattern(query) {
        Ok(pattern) => highlight_with(&pattern, text),
        Err(_) => escape_html(text),
    }
}

/// One result, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedHit {
    pub title_html: String,
    pub excerpt_html: String,
    pub url: String,
    pub date: String,
    pub score: f64,
    pub kind: MatchKind,
}

/// The first `limit` hits of a query, plus the total match count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub query: String,
    pub total: usize,
    pub hits: Vec<RenderedHit>,
}

impl ResultPage {
    /// Render the first `limit` hits. A query the highlighter cannot turn
    /// into a pattern still renders, just without marks.
    pub fn build(index: &SearchIndex, hits: &[SearchHit], query: &str, limit: usize) -> Self {
        let pattern = match highlight_pattern(query) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!(error = %e, "rendering results without highlights");
                None
            }
        };
        let mark = |text: &str| match &pattern {
            Some(pattern) => highlight_with(pattern, text),
            None => escape_html(text),
        };
        let rendered = hits
            .iter()
            .take(limit)
            .filter_map(|hit| index.doc(hit.doc_id).map(|doc| (hit, doc)))
            .map(|(hit, doc)| RenderedHit {
                title_html: mark(&doc.title),
                excerpt_html: mark(&doc.excerpt),
                url: doc.url.clone(),
                date: doc.date.clone(),
                score: hit.score,
                kind: hit.kind,
            })
            .collect();
        Self {
            query: query.to_string(),
            total: hits.len(),
            hits: rendered,
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<div class=\"search-results-count\">{} result(s) found</div>",
            self.total
        );
        html.push_str("<ul class=\"search-results-list\">");
        for hit in &self.hits {
            html.push_str(&format!(
                concat!(
                    "<li class=\"search-result-item\">",
                    "<h3 class=\"search-result-title\"><a href=\"{}\">{}</a></h3>",
                    "<div class=\"search-result-meta\"><span class=\"search-result-date\">{}</span></div>",
                    "<p class=\"search-result-excerpt\">{}</p>",
                    "</li>"
                ),
                escape_attribute(&hit.url),
                hit.title_html,
                escape_html(&hit.date),
                hit.excerpt_html,
            ));
        }
        html.push_str("</ul>");
        html
    }
}

/// What the search results region should show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SearchView {
    /// Nothing: no query, a too-short query, or a fresh index.
    Cleared,
    Loading,
    Unavailable,
    NoResults { query: String },
    Results(ResultPage),
    Error,
}

impl SearchView {
    pub fn to_html(&self) -> String {
        match self {
            SearchView::Cleared => String::new(),
            SearchView::Loading => message(LOADING_MESSAGE, false),
            SearchView::Unavailable => message(UNAVAILABLE_MESSAGE, true),
            SearchView::Error => message(ERROR_MESSAGE, true),
            SearchView::NoResults { query } => {
                let text = format!("No results found for \"{}\"", escape_html(query));
                format!("<div class=\"search-message\">{}</div>", text)
            }
            SearchView::Results(page) => page.to_html(),
        }
    }
}

fn message(text: &str, is_error: bool) -> String {
    let class = if is_error {
        "search-message error"
    } else {
        "search-message"
    };
    format!("<div class=\"{}\">{}</div>", class, escape_html(text))
}
