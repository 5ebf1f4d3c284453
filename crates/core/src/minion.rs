// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record instances ("minions") and their lifecycle.
//!
//! A [`Minion`] carries an envelope (title, status, priority, tags,
//! attribution, timestamps) plus a flat `fields` map shaped by its type's
//! schema. The envelope `status` and any `status` inside `fields` are
//! independent values.

use crate::id::MinionId;
use crate::schema::MinionType;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema-shaped field values, in insertion order
pub type Fields = IndexMap<String, Value>;

crate::string_enum! {
    /// Lifecycle tag on the record envelope.
    pub enum Status("status") {
        Active => "active",
        Todo => "todo",
        InProgress => "in_progress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Active
    }
}

crate::string_enum! {
    pub enum Priority("priority") {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
}

/// A persisted record instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Minion {
    pub id: MinionId,
    pub minion_type_id: String,
    pub title: String,
    #[serde(default)]
    pub fields: Fields,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    /// Tombstone set by [`Minion::soft_delete`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<String>,
}

/// Input for creating a record
#[derive(Debug, Clone, Default)]
pub struct NewMinion {
    pub title: Option<String>,
    pub fields: Fields,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub tags: Vec<String>,
    pub created_by: Option<String>,
}

impl NewMinion {
    pub fn new() -> Self {
        Self::default()
    }

    crate::setters! {
        into {
            fields: Fields,
            tags: Vec<String>,
        }
        option {
            title: String,
            status: Status,
            priority: Priority,
            created_by: String,
        }
    }

    /// Set a single field value
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// Partial update applied by [`Minion::update`].
///
/// `fields` are merged over the existing map; every other `Some` replaces the
/// envelope value.
#[derive(Debug, Clone, Default)]
pub struct MinionUpdate {
    pub title: Option<String>,
    pub fields: Fields,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub tags: Option<Vec<String>>,
}

impl MinionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    crate::setters! {
        into {
            fields: Fields,
        }
        option {
            title: String,
            status: Status,
            priority: Priority,
            tags: Vec<String>,
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.fields.is_empty()
            && self.status.is_none()
            && self.priority.is_none()
            && self.tags.is_none()
    }
}

/// Non-empty string field value, if present
fn text_field<'a>(fields: &'a Fields, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str).filter(|s| !s.is_empty())
}

impl Minion {
    /// Build a new record of type `ty`.
    ///
    /// The title falls back to `fields.title`, then `fields.name`, then the
    /// type's display name. Fields are not validated here.
    pub fn create(input: NewMinion, ty: &MinionType, id: MinionId, now: DateTime<Utc>) -> Self {
        let title = input
            .title
            .filter(|t| !t.is_empty())
            .or_else(|| text_field(&input.fields, "title").map(str::to_string))
            .or_else(|| text_field(&input.fields, "name").map(str::to_string))
            .unwrap_or_else(|| ty.name.clone());

        Self {
            id,
            minion_type_id: ty.id.clone(),
            title,
            fields: input.fields,
            status: input.status.unwrap_or_default(),
            priority: input.priority,
            tags: input.tags,
            created_at: now,
            updated_at: now,
            updated_by: input.created_by.clone(),
            created_by: input.created_by,
            deleted_at: None,
            deleted_by: None,
        }
    }

    /// Apply `update` in place, stamping `updated_at` / `updated_by`.
    pub fn update(&mut self, update: MinionUpdate, by: &str, now: DateTime<Utc>) {
        if let Some(title) = update.title {
            self.title = title;
        }
        self.fields.extend(update.fields);
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = Some(priority);
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.touch(by, now);
    }

    /// Mark the record deleted without removing it.
    ///
    /// The status becomes [`Status::Cancelled`]; the tombstone records who
    /// deleted it and when.
    pub fn soft_delete(&mut self, by: &str, now: DateTime<Utc>) {
        self.status = Status::Cancelled;
        self.deleted_at = Some(now);
        self.deleted_by = Some(by.to_string());
        self.touch(by, now);
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// String value of a field, if it is a string
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    fn touch(&mut self, by: &str, now: DateTime<Utc>) {
        self.updated_at = now;
        self.updated_by = Some(by.to_string());
    }
}

#[cfg(test)]
#[path = "minion_tests.rs"]
mod tests;
