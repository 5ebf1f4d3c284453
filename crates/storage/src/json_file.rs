// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-JSON-file-per-record storage in the sharded layout.
//!
//! Writes go to a hidden temp file in the shard directory, are synced, then
//! renamed over the record path, so readers see either the old or the new
//! record. Concurrent writers to the same id are last-write-wins; there is no
//! locking.

use crate::layout;
use crate::{ListFilter, StorageAdapter, StoreError};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tasks_core::Minion;

/// Sharded JSON file store rooted at a directory
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    /// Open (creating if needed) a store at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the record for `id` lives (whether or not it exists)
    pub fn path_for(&self, id: &str) -> Option<PathBuf> {
        layout::record_path(&self.root, id)
    }

    fn read(path: &Path) -> Result<Minion, StoreError> {
        let content = fs::read(path)?;
        serde_json::from_slice(&content)
            .map_err(|source| StoreError::CorruptRecord { path: path.to_path_buf(), source })
    }

    /// Whether the record's own id agrees with the file it was read from
    fn matches_file_name(path: &Path, minion: &Minion) -> bool {
        let expected = path.file_stem().and_then(|s| s.to_str());
        if expected == Some(minion.id.as_str()) {
            return true;
        }
        tracing::warn!(
            path = %path.display(),
            id = %minion.id,
            "skipping record whose id does not match its file name"
        );
        false
    }

    /// Record files in sorted shard/file-name order
    fn record_paths(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut paths = Vec::new();
        for outer in sorted_entries(&self.root, true)? {
            for inner in sorted_entries(&outer, true)? {
                for file in sorted_entries(&inner, false)? {
                    let is_record = file
                        .file_name()
                        .and_then(|n| n.to_str())
                        .and_then(layout::id_from_file_name)
                        .is_some();
                    if is_record {
                        paths.push(file);
                    }
                }
            }
        }
        Ok(paths)
    }

    /// Remove shard directories left empty by a delete
    fn prune_empty_shards(&self, record: &Path) {
        let mut dir = record.parent();
        for _ in 0..2 {
            let Some(d) = dir else { return };
            let empty = fs::read_dir(d).map(|mut it| it.next().is_none()).unwrap_or(false);
            if !empty {
                return;
            }
            if let Err(e) = fs::remove_dir(d) {
                tracing::debug!(path = %d.display(), error = %e, "failed to prune shard directory");
                return;
            }
            dir = d.parent();
        }
    }
}

/// Child entries of `dir`, sorted by name; `dirs` selects shard directories
/// vs. files. A missing directory yields nothing.
fn sorted_entries(dir: &Path, dirs: bool) -> Result<Vec<PathBuf>, StoreError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let mut paths: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if dirs {
                is_dir && entry.file_name().to_str().is_some_and(layout::is_shard_name)
            } else {
                !is_dir
            }
        })
        .map(|entry| entry.path())
        .collect();
    paths.sort();
    Ok(paths)
}

impl StorageAdapter for JsonFileStorage {
    fn get(&self, id: &str) -> Result<Option<Minion>, StoreError> {
        let Some(path) = self.path_for(id) else {
            return Ok(None);
        };
        match Self::read(&path) {
            Ok(minion) => Ok(Self::matches_file_name(&path, &minion).then_some(minion)),
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&self, minion: &Minion) -> Result<(), StoreError> {
        let id = minion.id.as_str();
        let path = self.path_for(id).ok_or_else(|| StoreError::InvalidId(id.to_string()))?;
        let dir = path.parent().ok_or_else(|| StoreError::InvalidId(id.to_string()))?;
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(minion)
            .map_err(|source| StoreError::Encode { id: id.to_string(), source })?;
        let tmp_path = dir.join(format!(".{id}.{}.tmp", std::process::id()));

        let written = File::create(&tmp_path)
            .and_then(|mut file| {
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&tmp_path, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::debug!(id, path = %path.display(), "wrote record");
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let path = self.path_for(id).ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id.to_string()));
            }
            Err(e) => return Err(e.into()),
        }
        tracing::debug!(id, "deleted record");
        self.prune_empty_shards(&path);
        Ok(())
    }

    fn list(&self, filter: &ListFilter) -> Result<Vec<Minion>, StoreError> {
        let mut out = Vec::new();
        for path in self.record_paths()? {
            if filter.is_full(out.len()) {
                break;
            }
            let minion = match Self::read(&path) {
                Ok(m) => m,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "skipping unreadable record"
                    );
                    continue;
                }
            };
            if Self::matches_file_name(&path, &minion) && filter.matches(&minion) {
                out.push(minion);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "json_file_tests.rs"]
mod tests;
