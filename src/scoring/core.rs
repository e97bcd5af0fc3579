// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Three factors multiply into a posting's contribution:
//!
//! ```text
//! score(term, doc) = Σ_fields weight(field) × √tf × idf(term)
//! ```
//!
//! and the expansion that reached the term scales the whole thing:
//!
//! | Expansion | Boost            |
//! |-----------|------------------|
//! | Exact     | 1.0              |
//! | Prefix    | 0.6              |
//! | Fuzzy     | 1 / (1 + d)      |
//! | Infix     | 0.25             |
//! | Literal   | 0.5              |
//!
//! A one-edit typo scores 0.5, under a completion and over a mid-word hit.

use crate::config::FieldWeights;
use crate::types::{FieldType, MatchKind, Posting};

/// Boost for a vocabulary term equal to the query term.
pub const EXACT_MATCH_BOOST: f64 = 1.0;

/// Boost for a vocabulary term that starts with the query term.
pub const PREFIX_MATCH_BOOST: f64 = 0.6;

/// Boost for a vocabulary term that contains the query term past its start.
pub const INFIX_MATCH_BOOST: f64 = 0.25;

/// Boost for a whole-query substring hit on a normalized field.
pub const LITERAL_MATCH_BOOST: f64 = 0.5;

/// Weight of a field under the configured weights.
#[inline]
pub fn field_weight(weights: &FieldWeights, field: FieldType) -> f64 {
    match field {
        FieldType::Title => weights.title,
        FieldType::Excerpt => weights.excerpt,
        FieldType::Content => weights.content,
    }
}

/// Inverse document frequency, BM25 flavour.
///
/// Strictly positive whenever `doc_freq <= num_docs`, so a term that occurs
/// everywhere still counts for something.
#[inline]
pub fn idf(doc_freq: usize, num_docs: usize) -> f64 {
    let n = num_docs as f64;
    let df = doc_freq as f64;
    (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
}

/// Fuzzy boost: decreases with edit distance, never reaches zero.
#[inline]
pub fn fuzzy_boost(distance: usize) -> f64 {
    1.0 / (1.0 + distance as f64)
}

/// Boost for a match kind. `distance` only matters for `Fuzzy`.
pub fn expansion_boost(kind: MatchKind, distance: usize) -> f64 {
    match kind {
        MatchKind::Exact => EXACT_MATCH_BOOST,
        MatchKind::Prefix => PREFIX_MATCH_BOOST,
        MatchKind::Fuzzy => fuzzy_boost(distance),
        MatchKind::Infix => INFIX_MATCH_BOOST,
        MatchKind::Literal => LITERAL_MATCH_BOOST,
    }
}

/// Contribution of one posting, before the expansion boost.
#[inline]
pub fn posting_score(weights: &FieldWeights, posting: &Posting, idf: f64) -> f64 {
    field_weight(weights, posting.field) * f64::from(posting.frequency).sqrt() * idf
}
