// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for result highlighting.
//!
//! Highlighted output goes straight into the page, so whatever the text and
//! query, the only markup in it may be our own `<mark>` tags.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    query: String,
}

fuzz_target!(|input: HighlightInput| {
    let text = &input.text[..floor_boundary(&input.text, 2000)];
    let query = &input.query[..floor_boundary(&input.query, 100)];

    let html = folio::highlight(text, query);

    // INVARIANT 1: removing our marks leaves exactly the escaped text
    let stripped = html.replace("<mark>", "").replace("</mark>", "");
    assert_eq!(stripped, folio::escape_html(text));

    // INVARIANT 2: no raw angle brackets survive outside our tags
    assert!(!stripped.contains('<') && !stripped.contains('>'));

    // INVARIANT 3: tags are balanced and never nested
    let mut open = false;
    let mut rest = html.as_str();
    while let Some(pos) = rest.find('<') {
        rest = &rest[pos..];
        if rest.starts_with("<mark>") {
            assert!(!open, "nested mark");
            open = true;
            rest = &rest["<mark>".len()..];
        } else if rest.starts_with("</mark>") {
            assert!(open, "unbalanced close");
            open = false;
            rest = &rest["</mark>".len()..];
        } else {
            panic!("unexpected markup in {:?}", html);
        }
    }
    assert!(!open, "unclosed mark");
});

fn floor_boundary(s: &str, max: usize) -> usize {
    let mut end = s.len().min(max);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}
