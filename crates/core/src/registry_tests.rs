// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::schema::FieldDef;

fn note() -> MinionType {
    MinionType::new("x-note", "note", "Note").field(FieldDef::string("body"))
}

#[test]
fn empty_registry_resolves_nothing() {
    let registry = TypeRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.get_by_slug("task").is_none());
}

#[test]
fn catalog_registry_resolves_by_slug_and_id() {
    let registry = TypeRegistry::with_catalog();
    assert_eq!(registry.len(), 9);
    assert_eq!(registry.get_by_slug("task").map(|t| t.id.as_str()), Some("tasks-task"));
    assert_eq!(registry.get_by_id("tasks-task-comment").map(|t| t.slug.as_str()), Some("task-comment"));
}

#[test]
fn slug_lookup_is_case_sensitive() {
    let registry = TypeRegistry::with_catalog();
    assert!(registry.get_by_slug("Task").is_none());
}

#[test]
fn register_adds_type() {
    let mut registry = TypeRegistry::new();
    registry.register(note()).unwrap();
    assert_eq!(registry.slugs(), vec!["note"]);
}

#[test]
fn register_rejects_duplicate_slug() {
    let mut registry = TypeRegistry::new();
    registry.register(note()).unwrap();

    let mut other = note();
    other.id = "x-other".to_string();
    assert_eq!(registry.register(other), Err(RegistryError::DuplicateType("note".to_string())));
    assert_eq!(registry.len(), 1);
}

#[test]
fn register_rejects_duplicate_id() {
    let mut registry = TypeRegistry::with_catalog();
    let clash = MinionType::new("tasks-task", "task-2", "Task 2");
    assert_eq!(
        registry.register(clash),
        Err(RegistryError::DuplicateTypeId("tasks-task".to_string()))
    );
}

#[test]
fn register_rejects_duplicate_field_names() {
    let mut registry = TypeRegistry::new();
    let ty = note().field(FieldDef::number("body"));
    assert_eq!(
        registry.register(ty),
        Err(RegistryError::DuplicateField { slug: "note".to_string(), field: "body".to_string() })
    );
}

#[test]
fn registries_are_isolated() {
    let mut a = TypeRegistry::new();
    let b = TypeRegistry::new();
    a.register(note()).unwrap();
    assert!(b.get_by_slug("note").is_none());
}
