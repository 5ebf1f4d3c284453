// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Query-time substring search.
//!
//! There is no index: every search is a linear scan over the scoped records,
//! and results keep enumeration order. Matching is a case-insensitive
//! substring test against two resolved texts:
//!
//! - display text: `title`, else `fields.name`, else `fields.label`
//! - free text: `fields.description`, else `fields.body`
//!
//! A candidate is skipped when absent or empty.

use tasks_core::Minion;

fn first_text<'a>(minion: &'a Minion, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| minion.field_str(key).filter(|s| !s.is_empty()))
}

/// Resolved display text of a record
pub fn display_text(minion: &Minion) -> Option<&str> {
    if !minion.title.is_empty() {
        return Some(minion.title.as_str());
    }
    first_text(minion, &["name", "label"])
}

/// Resolved free text of a record
pub fn body_text(minion: &Minion) -> Option<&str> {
    first_text(minion, &["description", "body"])
}

/// Whether `query` occurs (case-insensitively) in the display or free text.
///
/// An empty query matches every record.
pub fn matches(minion: &Minion, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [display_text(minion), body_text(minion)]
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains(&needle))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
