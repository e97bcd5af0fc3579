// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search hits get sorted.

use crate::types::SearchHit;
use std::cmp::Ordering;

/// Compare two hits for ranking.
///
/// Sort order:
/// 1. **Score** - descending, higher wins
/// 2. **Doc ID** - ascending, i.e. corpus order, for determinism
///
/// Incomparable scores (NaN) are treated as equal and fall through to doc id.
pub fn compare_hits(a: &SearchHit, b: &SearchHit) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.doc_id.cmp(&b.doc_id),
    }
}

/// Sort hits best first.
pub fn rank_hits(hits: &mut [SearchHit]) {
    hits.sort_by(compare_hits);
}
