// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! The query engine compares each query term against the whole vocabulary, so
//! the comparison has to reject non-matches cheaply. A personal site has a few
//! thousand distinct terms at most; a bounded DP per term is plenty.

mod levenshtein;

pub use levenshtein::*;
