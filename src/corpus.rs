//! Corpus loading: from a fetch response (or file) to raw documents.
//!
//! The corpus is a JSON array generated by the site build. A bad status or an
//! unparseable body fails the whole load; a bad individual entry does not.
//! Entries that aren't objects are dropped with a warning, and missing fields
//! default to empty strings (see `RawDocument`).

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::RawDocument;

/// Parse a corpus body.
///
/// Fails only when the body is not a JSON array.
pub fn parse_corpus(body: &str) -> Result<Vec<RawDocument>> {
    let entries: Vec<Value> = serde_json::from_str(body)?;
    let total = entries.len();

    let docs: Vec<RawDocument> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            if !entry.is_object() {
                warn!(position, "skipping corpus entry that is not an object");
                return None;
            }
            match serde_json::from_value::<RawDocument>(entry) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    warn!(position, error = %e, "skipping malformed corpus entry");
                    None
                }
            }
        })
        .collect();

    debug!(entries = total, kept = docs.len(), "parsed corpus");
    Ok(docs)
}

/// Interpret a completed corpus request.
///
/// Any status outside 200..=299 is a hard failure, whatever the body says.
pub fn corpus_from_response(status: u16, body: &str) -> Result<Vec<RawDocument>> {
    if !(200..300).contains(&status) {
        return Err(Error::Http { status });
    }
    parse_corpus(body)
}

/// Read a corpus file from disk.
pub fn load_corpus_file(path: impl AsRef<Path>) -> Result<Vec<RawDocument>> {
    let body = std::fs::read_to_string(path)?;
    parse_corpus(&body)
}
