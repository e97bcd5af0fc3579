//! The building blocks of the search index.
//!
//! A corpus arrives as loosely-shaped JSON (`RawDocument`), gets a dense id in
//! corpus order (`Document`), and is broken into per-field postings. Queries
//! come back out as `SearchHit`s: a document id and a relevance score.
//!
//! # Invariants
//!
//! - **Document**: `docs[i].id == DocId(i)`. Ids are assigned by the builder,
//!   never read from the source data, and are dense over `0..N`.
//! - **Posting**: `doc_id < docs.len() ∧ frequency > 0`. One posting per
//!   `(term, document, field)` triple.
//! - **PostingList**: sorted by `(doc_id, field)`, `doc_freq` equals the number
//!   of distinct documents in the list.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe document identifier.
///
/// Dense and zero-based in corpus order. Stable only for the lifetime of the
/// index that assigned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Create a new DocId, validating it's within bounds.
    #[inline]
    pub fn new(id: u32, num_docs: usize) -> Option<Self> {
        if (id as usize) < num_docs {
            Some(DocId(id))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for usize {
    fn from(id: DocId) -> Self {
        id.0 as usize
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// One entry of the corpus file, as the site generator wrote it.
///
/// Every field is optional on the wire. Missing or `null` strings become empty
/// so a single sloppy entry never takes down the whole build.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RawDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
}

/// Accept `null` anywhere a string is expected.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A document as held by a built index.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    /// Display-only metadata, never searched.
    pub url: String,
    pub date: String,
}

impl Document {
    pub(crate) fn from_raw(id: DocId, raw: RawDocument) -> Self {
        Self {
            id,
            title: raw.title,
            excerpt: raw.excerpt,
            content: raw.content,
            url: raw.url,
            date: raw.date,
        }
    }

    /// Text of a searchable field.
    pub fn field(&self, field: FieldType) -> &str {
        match field {
            FieldType::Title => &self.title,
            FieldType::Excerpt => &self.excerpt,
            FieldType::Content => &self.content,
        }
    }
}

// =============================================================================
// FIELDS AND POSTINGS
// =============================================================================

/// Which part of a document a term came from.
///
/// Declaration order is weight order: Title > Excerpt > Content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Title,
    Excerpt,
    Content,
}

impl FieldType {
    /// All searchable fields, strongest first.
    pub const ALL: [FieldType; 3] = [FieldType::Title, FieldType::Excerpt, FieldType::Content];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Title => "title",
            FieldType::Excerpt => "excerpt",
            FieldType::Content => "content",
        }
    }
}

/// A term occurrence summary: how often a term appears in one field of one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Posting {
    pub doc_id: DocId,
    pub field: FieldType,
    pub frequency: u32,
}

/// All postings for one term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    pub postings: Vec<Posting>,
    /// Number of distinct documents containing the term.
    pub doc_freq: usize,
}

/// Pointer into the vocabulary: the suffix of `vocabulary[term_idx]` starting at
/// byte `offset` (always a char boundary). Sorted lexicographically, these give
/// prefix and infix lookup over terms with one binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabSuffixEntry {
    pub term_idx: u32,
    pub offset: u32,
}

// =============================================================================
// RESULTS
// =============================================================================

/// How a query term reached an indexed term.
///
/// Ordered from strongest to weakest evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Prefix,
    Fuzzy,
    Infix,
    /// Whole-query substring match on a field, used when the query has no word characters.
    Literal,
}

/// A ranked match: document plus relevance score. Higher scores rank first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f64,
    /// The strongest match kind that contributed to the score.
    pub kind: MatchKind,
}
