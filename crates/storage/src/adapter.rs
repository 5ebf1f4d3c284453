// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::{search, ListFilter, StoreError};
use tasks_core::Minion;

/// Persistence backend for records.
///
/// Implementations own the persisted representation; callers hold copies and
/// write back through [`set`](StorageAdapter::set). A `set` followed by a
/// `get` of the same id observes the write. Listing order is unspecified but
/// stable for an unchanged store.
pub trait StorageAdapter {
    /// Fetch a record. A missing id is `Ok(None)`, not an error.
    fn get(&self, id: &str) -> Result<Option<Minion>, StoreError>;

    /// Insert or overwrite a record. Readers never observe a partial write.
    fn set(&self, minion: &Minion) -> Result<(), StoreError>;

    /// Remove a record permanently; [`StoreError::NotFound`] if absent.
    fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Records passing `filter`, capped at `filter.limit`.
    fn list(&self, filter: &ListFilter) -> Result<Vec<Minion>, StoreError>;

    /// Records in `filter`'s scope whose display or free text contains
    /// `query`, in listing order, capped at `filter.limit`.
    fn search(&self, query: &str, filter: &ListFilter) -> Result<Vec<Minion>, StoreError> {
        let mut hits: Vec<Minion> = self
            .list(&filter.unlimited())?
            .into_iter()
            .filter(|m| search::matches(m, query))
            .collect();
        if let Some(limit) = filter.limit {
            hits.truncate(limit);
        }
        Ok(hits)
    }
}

impl<S: StorageAdapter + ?Sized> StorageAdapter for &S {
    fn get(&self, id: &str) -> Result<Option<Minion>, StoreError> {
        (**self).get(id)
    }

    fn set(&self, minion: &Minion) -> Result<(), StoreError> {
        (**self).set(minion)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        (**self).delete(id)
    }

    fn list(&self, filter: &ListFilter) -> Result<Vec<Minion>, StoreError> {
        (**self).list(filter)
    }

    fn search(&self, query: &str, filter: &ListFilter) -> Result<Vec<Minion>, StoreError> {
        (**self).search(query, filter)
    }
}
