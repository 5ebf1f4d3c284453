// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory catalog of record types.
//!
//! The registry is an ordinary value: callers construct it (usually via
//! [`TypeRegistry::with_catalog`]) and pass it where needed. Nothing here is
//! persisted.

use crate::catalog;
use crate::schema::MinionType;
use thiserror::Error;

/// Errors from registering a type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("type slug '{0}' is already registered")]
    DuplicateType(String),
    #[error("type id '{0}' is already registered")]
    DuplicateTypeId(String),
    #[error("type '{slug}' declares field '{field}' more than once")]
    DuplicateField { slug: String, field: String },
}

/// Lookup table of [`MinionType`]s, in registration order
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<MinionType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in catalog
    pub fn with_catalog() -> Self {
        Self { types: catalog::catalog() }
    }

    /// Add a type. Slugs and ids must be unique, field names unique per type.
    pub fn register(&mut self, ty: MinionType) -> Result<(), RegistryError> {
        if self.get_by_slug(&ty.slug).is_some() {
            return Err(RegistryError::DuplicateType(ty.slug));
        }
        if self.get_by_id(&ty.id).is_some() {
            return Err(RegistryError::DuplicateTypeId(ty.id));
        }
        if let Some(field) = ty.duplicate_field() {
            return Err(RegistryError::DuplicateField {
                slug: ty.slug.clone(),
                field: field.to_string(),
            });
        }
        self.types.push(ty);
        Ok(())
    }

    /// Exact, case-sensitive slug match
    pub fn get_by_slug(&self, slug: &str) -> Option<&MinionType> {
        self.types.iter().find(|t| t.slug == slug)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&MinionType> {
        self.types.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MinionType> {
        self.types.iter()
    }

    pub fn slugs(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.slug.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
