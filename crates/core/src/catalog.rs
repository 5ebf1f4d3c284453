// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The built-in catalog of task-management record types.

use crate::schema::{FieldDef, MinionType};

pub const TASK: &str = "task";
pub const TASK_LIST: &str = "task-list";
pub const TASK_DEPENDENCY: &str = "task-dependency";
pub const RECURRING_TASK: &str = "recurring-task";
pub const TASK_ASSIGNMENT: &str = "task-assignment";
pub const TASK_CHECKPOINT: &str = "task-checkpoint";
pub const TASK_HISTORY_ENTRY: &str = "task-history-entry";
pub const TASK_COMMENT: &str = "task-comment";
pub const TASK_OUTCOME: &str = "task-outcome";

/// Values of a task's own `status` field
pub const TASK_FIELD_STATUSES: &[&str] = &["todo", "in_progress", "blocked", "done", "cancelled"];
pub const ASSIGNEE_TYPES: &[&str] = &["human", "agent"];
pub const ASSIGNMENT_ROLES: &[&str] = &["owner", "collaborator", "reviewer", "observer"];
pub const DEPENDENCY_KINDS: &[&str] = &["blocks", "relates-to"];
pub const OUTCOME_RESULTS: &[&str] = &["success", "partial", "failed"];

/// Type ids are the slug under a `tasks-` namespace.
fn base(slug: &str, name: &str) -> MinionType {
    MinionType::new(format!("tasks-{slug}"), slug, name)
}

// Built-in fields are labeled with their own name.

fn string(name: &str) -> FieldDef {
    FieldDef::string(name).label(name)
}

fn boolean(name: &str) -> FieldDef {
    FieldDef::boolean(name).label(name)
}

fn select(name: &str, options: &[&str]) -> FieldDef {
    FieldDef::select(name, options).label(name)
}

pub fn task() -> MinionType {
    base(TASK, "Task")
        .description("A unit of work to be done, assignable to a human or agent.")
        .icon("✅")
        .field(string("title"))
        .field(string("description"))
        .field(
            select("status", TASK_FIELD_STATUSES)
                .description("Workflow state; `blocked` marks the task as blocked"),
        )
        .field(select("priority", &["low", "medium", "high", "urgent"]))
        .field(string("assigneeId"))
        .field(select("assigneeType", ASSIGNEE_TYPES))
        .field(string("createdBy"))
        .field(string("createdAt"))
        .field(string("dueAt"))
        .field(string("completedAt"))
        .field(string("tags"))
        .field(string("parentTaskId"))
        .field(string("contextRefType"))
        .field(string("contextRefId"))
}

pub fn task_list() -> MinionType {
    base(TASK_LIST, "Task list")
        .description("An ordered or unordered collection of tasks with a shared purpose.")
        .icon("📋")
        .field(string("name"))
        .field(string("description"))
        .field(string("taskIds").description("Comma-separated task ids"))
        .field(boolean("ordered"))
        .field(string("ownerId"))
        .field(string("groupId"))
}

pub fn task_dependency() -> MinionType {
    base(TASK_DEPENDENCY, "Task dependency")
        .description("A blocking or relational dependency between two tasks.")
        .icon("🔗")
        .field(string("taskId").required().description("The dependent task"))
        .field(string("dependsOnTaskId").required().description("The task it waits on"))
        .field(select("type", DEPENDENCY_KINDS))
}

pub fn recurring_task() -> MinionType {
    base(RECURRING_TASK, "Recurring task")
        .description("A task template that spawns new instances on a schedule.")
        .icon("🔁")
        .field(string("templateTaskId"))
        .field(string("schedule"))
        .field(string("nextRunAt"))
        .field(string("lastRunAt"))
        .field(string("spawnedTaskIds"))
        .field(select("status", &["active", "paused"]))
}

pub fn task_assignment() -> MinionType {
    base(TASK_ASSIGNMENT, "Task assignment")
        .description("An explicit assignment of a task to a person or agent with a role.")
        .icon("👤")
        .field(string("taskId").required())
        .field(string("assigneeId").required())
        .field(select("assigneeType", ASSIGNEE_TYPES))
        .field(string("assignedAt"))
        .field(string("assignedBy"))
        .field(select("role", ASSIGNMENT_ROLES))
}

pub fn task_checkpoint() -> MinionType {
    base(TASK_CHECKPOINT, "Task checkpoint")
        .description("A named milestone or progress marker within a task.")
        .icon("🚩")
        .field(string("taskId").required())
        .field(string("label").required())
        .field(string("completedAt"))
        .field(string("notes"))
}

pub fn task_history_entry() -> MinionType {
    base(TASK_HISTORY_ENTRY, "Task history entry")
        .description("An immutable log of a single field change on a task.")
        .icon("🕰️")
        .field(string("taskId").required())
        .field(string("changedAt"))
        .field(string("changedBy"))
        .field(string("field").required())
        .field(string("from"))
        .field(string("to"))
}

pub fn task_comment() -> MinionType {
    base(TASK_COMMENT, "Task comment")
        .description("A comment or note left on a task by a human or agent.")
        .icon("💬")
        .field(string("taskId").required())
        .field(string("authorId"))
        .field(select("authorType", ASSIGNEE_TYPES))
        .field(string("body").required())
        .field(string("createdAt"))
        .field(string("resolvedAt"))
}

pub fn task_outcome() -> MinionType {
    base(TASK_OUTCOME, "Task outcome")
        .description(
            "The recorded result of a completed or failed task, including lessons learned.",
        )
        .icon("🎯")
        .field(string("taskId").required())
        .field(select("result", OUTCOME_RESULTS).required())
        .field(string("summary"))
        .field(string("artifactIds"))
        .field(string("lessons").description("Lessons for the agent learning loop"))
}

/// All built-in types, in display order.
pub fn catalog() -> Vec<MinionType> {
    vec![
        task(),
        task_list(),
        task_dependency(),
        recurring_task(),
        task_assignment(),
        task_checkpoint(),
        task_history_entry(),
        task_comment(),
        task_outcome(),
    ]
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
