// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filterable post items and the two visibility predicates.

use serde::Deserialize;

/// One already-rendered post in the list.
///
/// `tags` is the raw `data-tags` attribute, matched as a plain string.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "ItemAttributes")]
pub struct FilterItem {
    tags: String,
    title: String,
    excerpt: String,
    /// Lower-cased tags, title, excerpt for search mode.
    folded: [String; 3],
}

/// Wire shape of an item as read from the page.
#[derive(Deserialize)]
struct ItemAttributes {
    #[serde(default)]
    tags: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    excerpt: Option<String>,
}

impl From<ItemAttributes> for FilterItem {
    fn from(attrs: ItemAttributes) -> Self {
        FilterItem::new(
            attrs.tags.unwrap_or_default(),
            attrs.title.unwrap_or_default(),
            attrs.excerpt.unwrap_or_default(),
        )
    }
}

impl FilterItem {
    pub fn new(tags: impl Into<String>, title: impl Into<String>, excerpt: impl Into<String>) -> Self {
        let tags = tags.into();
        let title = title.into();
        let excerpt = excerpt.into();
        let folded = [tags.to_lowercase(), title.to_lowercase(), excerpt.to_lowercase()];
        Self {
            tags,
            title,
            excerpt,
            folded,
        }
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    /// Filter mode: the sentinel shows everything, any other filter is a
    /// substring test on the raw tag string. "css" matches "cssecurity".
    pub fn matches_filter(&self, filter: &str, all_filter: &str) -> bool {
        filter == all_filter || self.tags.contains(filter)
    }

    /// Search mode: `term` (already lower-cased) is a substring of the tags,
    /// title or excerpt.
    pub fn matches_search(&self, term: &str) -> bool {
        self.folded.iter().any(|text| text.contains(term))
    }
}

/// Visibility of one item as a pure function of the panel state.
///
/// `search_term` set means search mode, and the filter is ignored.
pub fn item_visible(
    item: &FilterItem,
    current_filter: &str,
    search_term: Option<&str>,
    all_filter: &str,
) -> bool {
    match search_term {
        Some(term) => item.matches_search(term),
        None => item.matches_filter(current_filter, all_filter),
    }
}
