// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::{EngineError, Tasks};
use serde::Serialize;
use std::collections::HashMap;
use tasks_core::{Clock, IdGen};
use tasks_storage::{ListFilter, StorageAdapter};

/// Record count for one registered type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub slug: String,
    pub name: String,
    pub icon: String,
    pub count: usize,
}

/// Per-type record counts in registry order.
///
/// `total` sums the registered types only; records of unregistered types are
/// not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub types: Vec<TypeCount>,
    pub total: usize,
}

impl<S, C, G> Tasks<S, C, G>
where
    S: StorageAdapter,
    C: Clock,
    G: IdGen,
{
    pub fn stats(&self) -> Result<Stats, EngineError> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for minion in self.list(&ListFilter::new())? {
            *counts.entry(minion.minion_type_id).or_default() += 1;
        }

        let types: Vec<TypeCount> = self
            .registry()
            .iter()
            .map(|ty| TypeCount {
                slug: ty.slug.clone(),
                name: ty.name.clone(),
                icon: ty.icon.clone(),
                count: counts.get(&ty.id).copied().unwrap_or(0),
            })
            .collect();
        let total = types.iter().map(|t| t.count).sum();
        Ok(Stats { types, total })
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
