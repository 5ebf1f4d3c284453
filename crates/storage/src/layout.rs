// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sharded on-disk layout.
//!
//! A record with id `abcd1234-...` lives at `<root>/ab/cd/abcd1234-....json`:
//! the first two pairs of hex digits (dashes removed) name the shard
//! directories. The record's type is stored in the body, not the path.

use std::path::{Path, PathBuf};

pub const RECORD_EXT: &str = "json";

/// Ids must be hex digits and dashes, with at least four hex digits.
///
/// This also keeps ids from escaping the store root.
pub fn is_valid_id(id: &str) -> bool {
    id.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
        && id.chars().filter(char::is_ascii_hexdigit).count() >= 4
}

/// The two shard directory names for `id`
pub fn shard_dirs(id: &str) -> Option<(String, String)> {
    if !is_valid_id(id) {
        return None;
    }
    let hex: String = id.chars().filter(|c| *c != '-').take(4).collect();
    let (outer, inner) = hex.split_at(2);
    Some((outer.to_string(), inner.to_string()))
}

/// Full path of the record file for `id` under `root`
pub fn record_path(root: &Path, id: &str) -> Option<PathBuf> {
    let (outer, inner) = shard_dirs(id)?;
    Some(root.join(outer).join(inner).join(format!("{id}.{RECORD_EXT}")))
}

/// Whether a directory entry name looks like a shard directory
pub fn is_shard_name(name: &str) -> bool {
    name.len() == 2 && name.chars().all(|c| c.is_ascii_hexdigit())
}

/// Record id encoded in a file name (`<id>.json`), skipping temp files
pub fn id_from_file_name(name: &str) -> Option<&str> {
    let id = name.strip_suffix(".json")?;
    if name.starts_with('.') || !is_valid_id(id) {
        return None;
    }
    Some(id)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
