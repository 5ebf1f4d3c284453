// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-demand schema validation of a record document.

use crate::{EngineError, Tasks};
use serde_json::Value;
use tasks_core::{validate_fields, Clock, Fields, IdGen, MinionType};
use tasks_storage::StorageAdapter;

/// A document that passed validation
#[derive(Debug, Clone, Copy)]
pub struct Checked<'a> {
    pub minion_type: &'a MinionType,
    pub field_count: usize,
}

impl<S, C, G> Tasks<S, C, G>
where
    S: StorageAdapter,
    C: Clock,
    G: IdGen,
{
    /// Parse `text` as a record document and validate it
    pub fn validate_json(&self, text: &str) -> Result<Checked<'_>, EngineError> {
        let doc: Value = serde_json::from_str(text)
            .map_err(|e| EngineError::MalformedInput(format!("invalid JSON: {e}")))?;
        self.validate_document(&doc)
    }

    /// Validate a record document's `fields` against its type's schema.
    ///
    /// The type is resolved from `minionTypeId`, falling back to a `type`
    /// slug. A missing `fields` key validates as an empty map.
    pub fn validate_document(&self, doc: &Value) -> Result<Checked<'_>, EngineError> {
        let obj = doc
            .as_object()
            .ok_or_else(|| EngineError::MalformedInput("expected a JSON object".to_string()))?;

        let ty = match (obj.get("minionTypeId"), obj.get("type")) {
            (Some(Value::String(id)), _) => {
                self.registry().get_by_id(id).ok_or_else(|| EngineError::UnknownType {
                    slug: id.clone(),
                    available: self.registry().slugs().into_iter().map(str::to_string).collect(),
                })?
            }
            (_, Some(Value::String(slug))) => self.resolve_type(slug)?,
            _ => {
                return Err(EngineError::MalformedInput(
                    "document has no minionTypeId or type".to_string(),
                ))
            }
        };

        let fields: Fields = match obj.get("fields") {
            None | Some(Value::Null) => Fields::new(),
            Some(Value::Object(map)) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            Some(_) => {
                return Err(EngineError::MalformedInput("`fields` must be an object".to_string()))
            }
        };

        let validation = validate_fields(&fields, &ty.schema);
        if !validation.valid {
            return Err(EngineError::ValidationFailed(validation.errors));
        }
        Ok(Checked { minion_type: ty, field_count: fields.len() })
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
