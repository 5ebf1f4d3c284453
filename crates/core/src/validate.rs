// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schema conformance checks for a record's field map.
//!
//! Validation is pure and never blocks a write by itself; callers decide
//! whether a failed [`Validation`] matters.

use crate::minion::Fields;
use crate::schema::{FieldDef, FieldType};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// What is wrong with a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A required field is absent (or null)
    Missing,
    /// The field is not declared by the schema
    Unknown,
    /// The value's kind does not match the declared type
    TypeMismatch { expected: FieldType, actual: &'static str },
}

/// A validation error attributed to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    #[serde(flatten)]
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, kind: FieldErrorKind) -> Self {
        let message = match &kind {
            FieldErrorKind::Missing => format!("missing field: {field}"),
            FieldErrorKind::Unknown => format!("unknown field: {field}"),
            FieldErrorKind::TypeMismatch { expected, actual } => {
                format!("expected {expected}, got {actual}")
            }
        };
        Self { field: field.to_string(), kind, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of validating a field map against a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl Validation {
    fn from_errors(errors: Vec<FieldError>) -> Self {
        Self { valid: errors.is_empty(), errors }
    }
}

/// JSON kind name used in mismatch messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn conforms(field_type: FieldType, value: &Value) -> bool {
    match field_type {
        FieldType::Number => value.is_number(),
        FieldType::Boolean => value.is_boolean(),
        FieldType::String | FieldType::Select => {
            matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
        }
    }
}

/// Check `fields` against `schema`.
///
/// Errors are reported in three passes: missing required fields (schema
/// order), undeclared fields (map order), then kind mismatches (schema order).
/// Null values count as absent.
pub fn validate_fields(fields: &Fields, schema: &[FieldDef]) -> Validation {
    let mut errors = Vec::new();

    for def in schema.iter().filter(|d| d.required) {
        if matches!(fields.get(&def.name), None | Some(Value::Null)) {
            errors.push(FieldError::new(&def.name, FieldErrorKind::Missing));
        }
    }

    for key in fields.keys() {
        if !schema.iter().any(|d| &d.name == key) {
            errors.push(FieldError::new(key, FieldErrorKind::Unknown));
        }
    }

    for def in schema {
        let Some(value) = fields.get(&def.name) else { continue };
        if value.is_null() || conforms(def.field_type, value) {
            continue;
        }
        errors.push(FieldError::new(
            &def.name,
            FieldErrorKind::TypeMismatch { expected: def.field_type, actual: value_kind(value) },
        ));
    }

    Validation::from_errors(errors)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
