// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Composite task workflows: complete, assign, comment.

use crate::{EngineError, Tasks};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tasks_core::{catalog, Clock, IdGen, Minion, MinionUpdate, NewMinion, Status};
use tasks_storage::StorageAdapter;

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `value` if it is one of `allowed`, else the default
fn choice(
    what: &str,
    value: Option<String>,
    allowed: &[&str],
    default: &str,
) -> Result<String, EngineError> {
    match value {
        None => Ok(default.to_string()),
        Some(v) if allowed.contains(&v.as_str()) => Ok(v),
        Some(v) => Err(EngineError::MalformedInput(format!(
            "invalid {what} '{v}' (expected one of: {})",
            allowed.join(", ")
        ))),
    }
}

/// Outcome details recorded when completing a task
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    /// `success` (default), `partial`, or `failed`
    pub result: Option<String>,
    pub summary: Option<String>,
    pub lessons: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Completed {
    pub task: Minion,
    pub outcome: Minion,
}

#[derive(Debug, Clone, Default)]
pub struct Assignment {
    /// `human` or `agent` (default)
    pub assignee_type: Option<String>,
    /// `owner` (default), `collaborator`, `reviewer`, or `observer`
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Comment {
    /// Defaults to the configured actor
    pub author_id: Option<String>,
    /// `human` or `agent` (default)
    pub author_type: Option<String>,
}

impl<S, C, G> Tasks<S, C, G>
where
    S: StorageAdapter,
    C: Clock,
    G: IdGen,
{
    /// Mark a task done, then record a `task-outcome` for it.
    ///
    /// The task write happens first; if it fails no outcome is created. If
    /// the outcome write fails the completed task stays as written and
    /// [`EngineError::OutcomeNotRecorded`] is returned.
    pub fn complete(&self, task_id: &str, outcome: Outcome) -> Result<Completed, EngineError> {
        let result = choice("result", outcome.result, catalog::OUTCOME_RESULTS, "success")?;
        let outcome_type = self.resolve_type(catalog::TASK_OUTCOME)?;

        let now = self.clock().now();
        let task = self.update(
            task_id,
            MinionUpdate::new()
                .field("status", "done")
                .field("completedAt", timestamp(now))
                .status(Status::Completed),
        )?;

        let input = NewMinion::new()
            .title(format!("Outcome: {}", task.title))
            .field("taskId", task_id)
            .field("result", result)
            .field("summary", outcome.summary.unwrap_or_default())
            .field("artifactIds", "")
            .field("lessons", outcome.lessons.unwrap_or_default());
        let outcome = self.insert(outcome_type, input).map_err(|source| {
            tracing::warn!(task_id, error = %source, "task completed without an outcome record");
            EngineError::OutcomeNotRecorded { task_id: task_id.to_string(), source }
        })?;

        Ok(Completed { task, outcome })
    }

    /// Record an assignment of an existing task to `assignee_id`
    pub fn assign(
        &self,
        task_id: &str,
        assignee_id: &str,
        assignment: Assignment,
    ) -> Result<Minion, EngineError> {
        let assignee_type =
            choice("assignee type", assignment.assignee_type, catalog::ASSIGNEE_TYPES, "agent")?;
        let role = choice("role", assignment.role, catalog::ASSIGNMENT_ROLES, "owner")?;
        let task = self.get(task_id)?;
        let ty = self.resolve_type(catalog::TASK_ASSIGNMENT)?;

        let input = NewMinion::new()
            .title(format!("Assignment: {} → {assignee_id}", task.title))
            .field("taskId", task_id)
            .field("assigneeId", assignee_id)
            .field("assigneeType", assignee_type)
            .field("assignedAt", timestamp(self.clock().now()))
            .field("assignedBy", self.actor())
            .field("role", role);
        Ok(self.insert(ty, input)?)
    }

    /// Leave a comment on `task_id`. The task is not required to exist.
    pub fn comment(
        &self,
        task_id: &str,
        body: &str,
        comment: Comment,
    ) -> Result<Minion, EngineError> {
        let author_type =
            choice("author type", comment.author_type, catalog::ASSIGNEE_TYPES, "agent")?;
        let author = comment.author_id.unwrap_or_else(|| self.actor().to_string());
        let ty = self.resolve_type(catalog::TASK_COMMENT)?;

        let input = NewMinion::new()
            .title(format!("Comment on {task_id}"))
            .field("taskId", task_id)
            .field("authorId", author.as_str())
            .field("authorType", author_type)
            .field("body", body)
            .field("createdAt", timestamp(self.clock().now()))
            .field("resolvedAt", "")
            .created_by(author);
        Ok(self.insert(ty, input)?)
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
