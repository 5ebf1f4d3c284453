// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The "what is blocking this task" join between tasks and dependency records.
//!
//! A task is blocked when its own `fields.status` is `blocked`; the envelope
//! status is not consulted. Each dependency record whose `taskId` names the
//! task contributes one blocker, in dependency enumeration order.
//! Tombstoned tasks and dependencies are left out.

use crate::{EngineError, Tasks};
use serde::Serialize;
use tasks_core::{catalog, Clock, IdGen, Minion, MinionId};
use tasks_storage::{ListFilter, StorageAdapter};

/// Value of a task's `status` field that marks it blocked
pub const BLOCKED: &str = "blocked";

/// One dependency record naming what a task waits on
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blocker {
    pub dependency_id: MinionId,
    pub depends_on_task_id: Option<String>,
    /// The dependency's own `type` field (`blocks`, `relates-to`)
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockedTask {
    pub task: Minion,
    /// May be empty: blocked with no recorded dependencies
    pub blockers: Vec<Blocker>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedReport {
    pub tasks: Vec<BlockedTask>,
    /// Live dependency records seen across the whole store
    pub dependency_records: usize,
}

impl BlockedReport {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

pub fn is_blocked(task: &Minion) -> bool {
    !task.is_deleted() && task.field_str("status") == Some(BLOCKED)
}

/// Join `tasks` against `dependencies`, keeping input order on both sides
pub fn resolve_blocked(tasks: Vec<Minion>, dependencies: &[Minion]) -> BlockedReport {
    let live: Vec<&Minion> = dependencies.iter().filter(|d| !d.is_deleted()).collect();
    let tasks = tasks
        .into_iter()
        .filter(is_blocked)
        .map(|task| {
            let blockers = live
                .iter()
                .filter(|d| d.field_str("taskId") == Some(task.id.as_str()))
                .map(|d| Blocker {
                    dependency_id: d.id.clone(),
                    depends_on_task_id: d.field_str("dependsOnTaskId").map(str::to_string),
                    kind: d.field_str("type").map(str::to_string),
                })
                .collect();
            BlockedTask { task, blockers }
        })
        .collect();
    BlockedReport { tasks, dependency_records: live.len() }
}

impl<S, C, G> Tasks<S, C, G>
where
    S: StorageAdapter,
    C: Clock,
    G: IdGen,
{
    /// Every blocked task with the dependency records that name it
    pub fn blocked(&self) -> Result<BlockedReport, EngineError> {
        let tasks = self.list(&self.filter(Some(catalog::TASK))?)?;
        let dependencies = match self.registry().get_by_slug(catalog::TASK_DEPENDENCY) {
            Some(ty) => self.list(&ListFilter::new().of_type(&ty.id))?,
            None => Vec::new(),
        };
        Ok(resolve_blocked(tasks, &dependencies))
    }
}

#[cfg(test)]
#[path = "blocked_tests.rs"]
mod tests;
