// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record-type schemas.
//!
//! A [`MinionType`] is plain data: every generic operation (create, validate,
//! list, display) dispatches over the schema value instead of per-type code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to parse one of the fixed string vocabularies (status, priority, ...).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {what} '{value}' (expected one of: {})", expected.join(", "))]
pub struct ParseEnumError {
    pub what: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

crate::string_enum! {
    /// Declared value kind of a schema field.
    pub enum FieldType("field type") {
        String => "string",
        Number => "number",
        Boolean => "boolean",
        /// A string drawn from a suggested option list (not enforced)
        Select => "select",
    }
}

/// One field declaration within a [`MinionType`] schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Suggested values for `select` fields; display only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            label: None,
            required: false,
            description: None,
            options: Vec::new(),
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Number)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Boolean)
    }

    pub fn select(name: impl Into<String>, options: &[&str]) -> Self {
        let mut def = Self::new(name, FieldType::Select);
        def.options = options.iter().map(|o| o.to_string()).collect();
        def
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    crate::setters! {
        option {
            label: String,
            description: String,
        }
    }
}

/// Schema and display metadata for one record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinionType {
    /// Globally unique type identifier (stored in each record)
    pub id: String,
    /// Short, URL-safe lookup key used on the command line
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub schema: Vec<FieldDef>,
}

impl MinionType {
    pub fn new(id: impl Into<String>, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            schema: Vec::new(),
        }
    }

    crate::setters! {
        into {
            description: String,
            icon: String,
        }
    }

    pub fn field(mut self, def: FieldDef) -> Self {
        self.schema.push(def);
        self
    }

    /// Look up a field declaration by name
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.schema.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.schema.iter().map(|f| f.name.as_str())
    }

    /// First field name declared more than once, if any
    pub fn duplicate_field(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.field_names().find(|name| !seen.insert(*name))
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
