// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction.
//!
//! One pass over the corpus: assign dense ids in corpus order, tokenize title,
//! excerpt and content separately, and record per-field term frequencies. The
//! sorted vocabulary and its suffix table come last. The result is immutable;
//! a new corpus means a new index.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **DENSE_IDS**: `docs[i].id == DocId(i)` for every `i`
//! 2. **POSTING_LIST_SORTED**: each posting list is sorted by `(doc_id, field)`
//! 3. **DOC_FREQ_CORRECT**: `doc_freq` equals the count of distinct doc ids
//! 4. **VOCAB_SORTED**: `vocabulary` is sorted, deduplicated, and has exactly the
//!    keys of `terms`

mod vocabulary;

pub use vocabulary::FragmentMatch;

use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

use crate::config::FieldWeights;
use crate::types::{
    DocId, Document, FieldType, Posting, PostingList, RawDocument, VocabSuffixEntry,
};
use crate::utils::{normalize, tokenize};

/// Term counts for one field of one document, in first-seen order.
type FieldTerms = Vec<(String, u32)>;

/// The built, queryable index.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    docs: Vec<Document>,
    /// Normalized title/excerpt/content, kept for literal matching.
    normalized: Vec<[String; 3]>,
    /// Posting lists, parallel to `vocabulary`.
    postings: Vec<PostingList>,
    vocabulary: Vec<String>,
    vocab_suffixes: Vec<VocabSuffixEntry>,
    weights: FieldWeights,
}

impl SearchIndex {
    /// An index over nothing. Every query against it matches nothing.
    pub fn empty(weights: FieldWeights) -> Self {
        build_index(Vec::new(), weights)
    }

    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn doc(&self, id: DocId) -> Option<&Document> {
        self.docs.get(id.as_usize())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn weights(&self) -> &FieldWeights {
        &self.weights
    }

    /// Sorted, deduplicated terms.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Position of `term` in the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<u32> {
        self.vocabulary
            .binary_search_by(|probe| probe.as_str().cmp(term))
            .ok()
            .map(|idx| idx as u32)
    }

    /// Postings for the term at `term_idx`.
    pub fn postings_at(&self, term_idx: u32) -> &PostingList {
        &self.postings[term_idx as usize]
    }

    /// Postings for `term`, if it was indexed.
    pub fn postings(&self, term: &str) -> Option<&PostingList> {
        self.term_index(term).map(|idx| self.postings_at(idx))
    }

    /// Total number of postings across all terms.
    pub fn posting_count(&self) -> usize {
        self.postings.iter().map(|list| list.postings.len()).sum()
    }

    /// Terms that contain `fragment`, at their start or inside.
    pub fn terms_containing(&self, fragment: &str) -> Vec<FragmentMatch> {
        vocabulary::terms_containing(&self.vocabulary, &self.vocab_suffixes, fragment)
    }

    /// Normalized text of one field, as used for literal matching.
    pub fn normalized_field(&self, id: DocId, field: FieldType) -> &str {
        &self.normalized[id.as_usize()][field_slot(field)]
    }
}

fn field_slot(field: FieldType) -> usize {
    match field {
        FieldType::Title => 0,
        FieldType::Excerpt => 1,
        FieldType::Content => 2,
    }
}

/// Count terms in one field, preserving first-seen order for determinism.
fn count_terms(text: &str) -> FieldTerms {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: FieldTerms = Vec::new();
    for word in tokenize(text) {
        match positions.get(&word) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }
    counts
}

/// Per-document analysis: normalized fields plus term counts per field.
fn analyze(doc: &Document) -> ([String; 3], [FieldTerms; 3]) {
    let normalized = FieldType::ALL.map(|field| normalize(doc.field(field)));
    let terms = FieldType::ALL.map(|field| count_terms(doc.field(field)));
    (normalized, terms)
}

/// Build an index over `raw`, assigning ids in input order.
///
/// Never fails: an empty corpus gives an index that matches nothing, and
/// documents with empty fields simply contribute no terms for those fields.
pub fn build_index(raw: Vec<RawDocument>, weights: FieldWeights) -> SearchIndex {
    // INVARIANT: DENSE_IDS
    let docs: Vec<Document> = raw
        .into_iter()
        .enumerate()
        .map(|(i, raw)| Document::from_raw(DocId(i as u32), raw))
        .collect();

    #[cfg(feature = "parallel")]
    let analyzed: Vec<([String; 3], [FieldTerms; 3])> = docs.par_iter().map(analyze).collect();
    #[cfg(not(feature = "parallel"))]
    let analyzed: Vec<([String; 3], [FieldTerms; 3])> = docs.iter().map(analyze).collect();

    // Merge sequentially in (doc, field) order, which keeps every posting list sorted.
    let mut terms: HashMap<String, Vec<Posting>> = HashMap::new();
    let mut normalized = Vec::with_capacity(docs.len());
    for (doc_idx, (fields_normalized, field_terms)) in analyzed.into_iter().enumerate() {
        normalized.push(fields_normalized);
        for (field, counts) in FieldType::ALL.into_iter().zip(field_terms) {
            for (term, frequency) in counts {
                terms.entry(term).or_default().push(Posting {
                    doc_id: DocId(doc_idx as u32),
                    field,
                    frequency,
                });
            }
        }
    }

    // INVARIANT: VOCAB_SORTED
    let mut entries: Vec<(String, Vec<Posting>)> = terms.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut vocabulary = Vec::with_capacity(entries.len());
    let mut postings = Vec::with_capacity(entries.len());
    for (term, list) in entries {
        vocabulary.push(term);
        postings.push(posting_list(list));
    }

    let vocab_suffixes = vocabulary::build_vocab_suffixes(&vocabulary);

    info!(
        docs = docs.len(),
        terms = vocabulary.len(),
        suffixes = vocab_suffixes.len(),
        "search index built"
    );

    SearchIndex {
        docs,
        normalized,
        postings,
        vocabulary,
        vocab_suffixes,
        weights,
    }
}

fn posting_list(postings: Vec<Posting>) -> PostingList {
    // INVARIANT: DOC_FREQ_CORRECT (postings arrive sorted by doc)
    let doc_freq = postings
        .iter()
        .enumerate()
        .filter(|(i, p)| *i == 0 || postings[i - 1].doc_id != p.doc_id)
        .count();
    PostingList { postings, doc_freq }
}
