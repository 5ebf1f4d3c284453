// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process storage, used by tests and as a scratch store.

use crate::{ListFilter, StorageAdapter, StoreError};
use indexmap::IndexMap;
use parking_lot::Mutex;
use tasks_core::Minion;

/// Insertion-ordered in-memory store
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<IndexMap<String, Minion>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, id: &str) -> Result<Option<Minion>, StoreError> {
        Ok(self.records.lock().get(id).cloned())
    }

    fn set(&self, minion: &Minion) -> Result<(), StoreError> {
        self.records.lock().insert(minion.id.to_string(), minion.clone());
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.records
            .lock()
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list(&self, filter: &ListFilter) -> Result<Vec<Minion>, StoreError> {
        let records = self.records.lock();
        let mut out = Vec::new();
        for minion in records.values() {
            if filter.is_full(out.len()) {
                break;
            }
            if filter.matches(minion) {
                out.push(minion.clone());
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
