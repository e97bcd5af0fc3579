//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Lowercasing picks ς or σ by position in the word, so a query fragment
/// and the word it came from can disagree. Both fold to σ.
const FINAL_SIGMA: char = 'ς';

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// This enables matching between ASCII and accented versions:
/// - "café" → "cafe"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase, folding final sigma
/// 4. Collapse whitespace
///
/// # Algorithm (without unicode-normalization, e.g. slim WASM builds)
///
/// 1. Lowercase only (assumes input is pre-normalized or ASCII)
/// 2. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .replace(FINAL_SIGMA, "σ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .replace(FINAL_SIGMA, "σ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Word boundary detection: checks if character is a word separator.
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Split text into normalized words.
///
/// Index and query go through the same function, so "Kubernetes," in a title
/// and "kubernetes" in a query land on the same term.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(is_word_boundary)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
