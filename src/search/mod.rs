// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine.
//!
//! Each query term is expanded against the vocabulary, the way a search box
//! user expects: the term itself, every term it is a prefix of, every term
//! within one typo of it, and every term that contains it mid-word. A document
//! matches if any expansion of any query term lands in it. Its score for a
//! query term is the best-scoring expansion; scores for separate terms add.
//!
//! Queries with no word characters at all ("C++", "::") fall back to a literal
//! substring scan of the normalized fields.
//!
//! Work is linear in vocabulary size (fuzzy scan) plus postings touched, so a
//! keystroke on a personal site finishes well inside one frame.

pub mod controller;

pub use controller::{IndexState, SearchBox};

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::fuzzy::levenshtein_distance_within;
use crate::index::SearchIndex;
use crate::scoring::ranking::rank_hits;
use crate::scoring::{expansion_boost, field_weight, idf, posting_score, LITERAL_MATCH_BOOST};
use crate::types::{DocId, FieldType, MatchKind, SearchHit};
use crate::utils::{normalize, tokenize};

/// Distinct query terms matched; later ones are ignored.
pub const MAX_QUERY_TERMS: usize = 32;

/// One vocabulary term reached from a query term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expansion {
    pub term_idx: u32,
    pub kind: MatchKind,
    pub boost: f64,
}

/// Expand one normalized query term into the vocabulary terms it reaches.
///
/// A vocabulary term reached several ways keeps its strongest expansion.
/// Results come back in vocabulary order.
pub fn expand_term(index: &SearchIndex, term: &str, max_edits: usize) -> Vec<Expansion> {
    let mut best: HashMap<u32, Expansion> = HashMap::new();
    let mut offer = |term_idx: u32, kind: MatchKind, distance: usize| {
        let boost = expansion_boost(kind, distance);
        best.entry(term_idx)
            .and_modify(|e| {
                if boost > e.boost {
                    *e = Expansion { term_idx, kind, boost };
                }
            })
            .or_insert(Expansion { term_idx, kind, boost });
    };

    for fragment in index.terms_containing(term) {
        let vocab_term = &index.vocabulary()[fragment.term_idx as usize];
        let kind = match (fragment.at_start, vocab_term.len() == term.len()) {
            (true, true) => MatchKind::Exact,
            (true, false) => MatchKind::Prefix,
            (false, _) => MatchKind::Infix,
        };
        offer(fragment.term_idx, kind, 0);
    }

    if max_edits > 0 {
        for (term_idx, vocab_term) in index.vocabulary().iter().enumerate() {
            if let Some(distance) = levenshtein_distance_within(term, vocab_term, max_edits) {
                if distance > 0 {
                    offer(term_idx as u32, MatchKind::Fuzzy, distance);
                }
            }
        }
    }

    let mut expansions: Vec<Expansion> = best.into_values().collect();
    expansions.sort_by_key(|e| e.term_idx);
    expansions
}

/// Per-document running totals across query terms.
struct ScoreAccumulator {
    scores: Vec<Option<(f64, MatchKind)>>,
}

impl ScoreAccumulator {
    fn new(num_docs: usize) -> Self {
        Self {
            scores: vec![None; num_docs],
        }
    }

    fn add(&mut self, doc_id: DocId, score: f64, kind: MatchKind) {
        let slot = &mut self.scores[doc_id.as_usize()];
        *slot = Some(match *slot {
            Some((total, best_kind)) => (total + score, best_kind.min(kind)),
            None => (score, kind),
        });
    }

    fn into_hits(self) -> Vec<SearchHit> {
        self.scores
            .into_iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                slot.map(|(score, kind)| SearchHit {
                    doc_id: DocId(i as u32),
                    score,
                    kind,
                })
            })
            .collect()
    }
}

/// Score one query term against every document it reaches.
fn score_term(index: &SearchIndex, term: &str, max_edits: usize, acc: &mut ScoreAccumulator) {
    let num_docs = index.len();
    // Best (score, kind) per document for this query term.
    let mut per_doc: HashMap<DocId, (f64, MatchKind)> = HashMap::new();

    for expansion in expand_term(index, term, max_edits) {
        let list = index.postings_at(expansion.term_idx);
        let term_idf = idf(list.doc_freq, num_docs);

        // Postings are sorted by doc, so per-doc sums are contiguous runs.
        let mut run: Option<(DocId, f64)> = None;
        let mut flush = |run: Option<(DocId, f64)>| {
            if let Some((doc_id, raw)) = run {
                let score = raw * expansion.boost;
                per_doc
                    .entry(doc_id)
                    .and_modify(|best| {
                        if score > best.0 {
                            *best = (score, expansion.kind);
                        }
                    })
                    .or_insert((score, expansion.kind));
            }
        };
        for posting in &list.postings {
            let contribution = posting_score(index.weights(), posting, term_idf);
            run = match run {
                Some((doc_id, sum)) if doc_id == posting.doc_id => Some((doc_id, sum + contribution)),
                previous => {
                    flush(previous);
                    Some((posting.doc_id, contribution))
                }
            };
        }
        flush(run);
    }

    for (doc_id, (score, kind)) in per_doc {
        acc.add(doc_id, score, kind);
    }
}

/// Literal fallback: the whole normalized query as a substring of a field.
fn score_literal(index: &SearchIndex, needle: &str, acc: &mut ScoreAccumulator) {
    if needle.is_empty() {
        return;
    }
    for doc in index.docs() {
        let score: f64 = FieldType::ALL
            .into_iter()
            .filter(|&field| index.normalized_field(doc.id, field).contains(needle))
            .map(|field| field_weight(index.weights(), field) * LITERAL_MATCH_BOOST)
            .sum();
        if score > 0.0 {
            acc.add(doc.id, score, MatchKind::Literal);
        }
    }
}

/// First `max_chars` chars of `query`.
fn clip(query: &str, max_chars: usize) -> &str {
    match query.char_indices().nth(max_chars) {
        Some((end, _)) => &query[..end],
        None => query,
    }
}

/// Distinct terms in first-seen order.
fn distinct_terms(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|term| seen.insert(term.clone()))
        .collect()
}

/// Run a query, returning every matching document best first.
///
/// The caller decides how many to show. Work is bounded without refusing
/// anything: only the first `config.max_query_len` chars and the first
/// [`MAX_QUERY_TERMS`] distinct terms are matched. Terms are ORed, so a long
/// query still finds every document its leading terms reach.
pub fn search(index: &SearchIndex, query: &str, config: &SearchConfig) -> Result<Vec<SearchHit>> {
    let trimmed = query.trim();
    let query = clip(trimmed, config.max_query_len);
    if query.len() < trimmed.len() {
        debug!(kept = config.max_query_len, "query clipped");
    }

    let mut terms = distinct_terms(query);
    terms.truncate(MAX_QUERY_TERMS);

    let mut acc = ScoreAccumulator::new(index.len());
    if terms.is_empty() {
        score_literal(index, &normalize(query), &mut acc);
    } else {
        for term in &terms {
            score_term(index, term, config.max_edit_distance, &mut acc);
        }
    }

    let mut hits = acc.into_hits();
    rank_hits(&mut hits);
    debug!(query, terms = terms.len(), hits = hits.len(), "search");
    Ok(hits)
}

impl SearchIndex {
    /// Shorthand for [`search`].
    pub fn search(&self, query: &str, config: &SearchConfig) -> Result<Vec<SearchHit>> {
        search(self, query, config)
    }
}
