// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Equality filters for listing records.

use tasks_core::{Minion, Status};

/// Field-equality filter plus an optional result cap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub minion_type_id: Option<String>,
    pub status: Option<Status>,
    pub limit: Option<usize>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_type(mut self, minion_type_id: impl Into<String>) -> Self {
        self.minion_type_id = Some(minion_type_id.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Same predicates, no cap
    pub fn unlimited(&self) -> Self {
        Self { limit: None, ..self.clone() }
    }

    /// Whether `minion` passes the type and status predicates (ignores limit)
    pub fn matches(&self, minion: &Minion) -> bool {
        let type_ok = match &self.minion_type_id {
            Some(ty) => *ty == minion.minion_type_id,
            None => true,
        };
        let status_ok = match self.status {
            Some(status) => status == minion.status,
            None => true,
        };
        type_ok && status_ok
    }

    /// True once `count` results satisfy the cap
    pub fn is_full(&self, count: usize) -> bool {
        self.limit.is_some_and(|limit| count >= limit)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
