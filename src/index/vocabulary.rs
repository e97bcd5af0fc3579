// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array over the vocabulary.
//!
//! Every suffix of every term, sorted. A prefix query is a binary search for
//! suffixes at offset 0; an infix query is the same search without the offset
//! restriction. Vocabularies on personal sites are small (a few thousand
//! terms), so a comparison sort at build time is fine.

use crate::types::VocabSuffixEntry;

/// A term that contains a query fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentMatch {
    pub term_idx: u32,
    /// The fragment occurs at the start of the term.
    pub at_start: bool,
}

/// Build the sorted suffix table for a sorted, deduplicated vocabulary.
///
/// Offsets are byte offsets on char boundaries.
pub fn build_vocab_suffixes(vocabulary: &[String]) -> Vec<VocabSuffixEntry> {
    let mut entries: Vec<VocabSuffixEntry> = vocabulary
        .iter()
        .enumerate()
        .flat_map(|(term_idx, term)| {
            term.char_indices().map(move |(offset, _)| VocabSuffixEntry {
                term_idx: term_idx as u32,
                offset: offset as u32,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        suffix_at(vocabulary, a)
            .cmp(suffix_at(vocabulary, b))
            .then(a.term_idx.cmp(&b.term_idx))
            .then(a.offset.cmp(&b.offset))
    });
    entries
}

#[inline]
pub fn suffix_at<'a>(vocabulary: &'a [String], entry: &VocabSuffixEntry) -> &'a str {
    &vocabulary[entry.term_idx as usize][entry.offset as usize..]
}

/// All terms containing `fragment`, each reported once, in vocabulary order.
///
/// A term that contains the fragment both at its start and later is reported
/// as a start match.
pub fn terms_containing(
    vocabulary: &[String],
    suffixes: &[VocabSuffixEntry],
    fragment: &str,
) -> Vec<FragmentMatch> {
    if fragment.is_empty() {
        return Vec::new();
    }

    let first = suffixes.partition_point(|e| suffix_at(vocabulary, e) < fragment);

    let mut matches: Vec<FragmentMatch> = suffixes[first..]
        .iter()
        .take_while(|e| suffix_at(vocabulary, e).starts_with(fragment))
        .map(|e| FragmentMatch {
            term_idx: e.term_idx,
            at_start: e.offset == 0,
        })
        .collect();

    // Start matches sort first within a term so dedup keeps them.
    matches.sort_by(|a, b| a.term_idx.cmp(&b.term_idx).then(b.at_start.cmp(&a.at_start)));
    matches.dedup_by_key(|m| m.term_idx);
    matches
}
