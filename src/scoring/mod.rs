// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A document's score for one query term is the best of its expansions
//! (exact, prefix, fuzzy, infix), each expansion scored by where the term
//! landed: title beats excerpt beats content. Scores for separate query terms
//! add up. Ties go to corpus order.

mod core;
pub mod ranking;

pub use self::core::*;
