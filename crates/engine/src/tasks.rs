// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record operations over a type registry and a storage backend.
//!
//! `create` and `update` do not validate fields against the type's schema;
//! drift is tolerated at write time and checked on demand with
//! [`Tasks::validate_document`].

use crate::EngineError;
use tasks_core::{
    Clock, IdGen, Minion, MinionType, MinionUpdate, NewMinion, SystemClock, TypeRegistry,
    UuidIdGen,
};
use tasks_storage::{ListFilter, StorageAdapter, StoreError};

/// Attribution used when no actor is configured
pub const DEFAULT_ACTOR: &str = "cli";

/// Service facade over the registry, store, clock, and id source
pub struct Tasks<S, C = SystemClock, G = UuidIdGen> {
    registry: TypeRegistry,
    storage: S,
    clock: C,
    ids: G,
    actor: String,
}

impl<S: StorageAdapter> Tasks<S> {
    /// Wire up with the system clock and random ids
    pub fn open(registry: TypeRegistry, storage: S) -> Self {
        Self::new(registry, storage, SystemClock, UuidIdGen)
    }
}

impl<S, C, G> Tasks<S, C, G>
where
    S: StorageAdapter,
    C: Clock,
    G: IdGen,
{
    pub fn new(registry: TypeRegistry, storage: S, clock: C, ids: G) -> Self {
        Self { registry, storage, clock, ids, actor: DEFAULT_ACTOR.to_string() }
    }

    /// Attribute writes to `actor` (`createdBy`, `updatedBy`, `deletedBy`)
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Look up a type by slug, listing the known slugs on failure
    pub fn resolve_type(&self, slug: &str) -> Result<&MinionType, EngineError> {
        self.registry.get_by_slug(slug).ok_or_else(|| EngineError::UnknownType {
            slug: slug.to_string(),
            available: self.registry.slugs().into_iter().map(str::to_string).collect(),
        })
    }

    /// The registered type a record conforms to, if any
    pub fn type_of(&self, minion: &Minion) -> Option<&MinionType> {
        self.registry.get_by_id(&minion.minion_type_id)
    }

    /// A list filter scoped to the type named by `slug` (all types if `None`)
    pub fn filter(&self, slug: Option<&str>) -> Result<ListFilter, EngineError> {
        let filter = ListFilter::new();
        match slug {
            Some(slug) => Ok(filter.of_type(&self.resolve_type(slug)?.id)),
            None => Ok(filter),
        }
    }

    /// Create and persist a record of the type named by `slug`
    pub fn create(&self, slug: &str, input: NewMinion) -> Result<Minion, EngineError> {
        let ty = self.resolve_type(slug)?;
        Ok(self.insert(ty, input)?)
    }

    /// Build and persist a record of `ty`, attributing it to the actor unless
    /// the input names a creator
    pub(crate) fn insert(
        &self,
        ty: &MinionType,
        mut input: NewMinion,
    ) -> Result<Minion, StoreError> {
        if input.created_by.is_none() {
            input.created_by = Some(self.actor.clone());
        }
        let minion = Minion::create(input, ty, self.ids.next(), self.clock.now());
        self.storage.set(&minion)?;
        tracing::debug!(id = %minion.id, minion_type = %ty.slug, "created record");
        Ok(minion)
    }

    /// Fetch a record; a missing id is [`EngineError::NotFound`]
    pub fn get(&self, id: &str) -> Result<Minion, EngineError> {
        self.storage.get(id)?.ok_or_else(|| EngineError::NotFound(id.to_string()))
    }

    /// Apply `update` to an existing record and persist it
    pub fn update(&self, id: &str, update: MinionUpdate) -> Result<Minion, EngineError> {
        let mut minion = self.get(id)?;
        minion.update(update, &self.actor, self.clock.now());
        self.storage.set(&minion)?;
        tracing::debug!(id, "updated record");
        Ok(minion)
    }

    /// Tombstone a record; it stays readable with status `cancelled`
    pub fn soft_delete(&self, id: &str) -> Result<Minion, EngineError> {
        let mut minion = self.get(id)?;
        minion.soft_delete(&self.actor, self.clock.now());
        self.storage.set(&minion)?;
        tracing::debug!(id, by = %self.actor, "soft-deleted record");
        Ok(minion)
    }

    /// Remove a record permanently
    pub fn hard_delete(&self, id: &str) -> Result<(), EngineError> {
        self.storage.delete(id)?;
        Ok(())
    }

    pub fn list(&self, filter: &ListFilter) -> Result<Vec<Minion>, EngineError> {
        Ok(self.storage.list(filter)?)
    }

    /// Case-insensitive substring search over display and free text
    pub fn search(&self, query: &str, filter: &ListFilter) -> Result<Vec<Minion>, EngineError> {
        Ok(self.storage.search(query, filter)?)
    }
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;
