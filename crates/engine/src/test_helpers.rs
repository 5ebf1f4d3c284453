// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for the engine crate.

use crate::Tasks;
use std::io;
use tasks_core::{FakeClock, Minion, SequentialIdGen, TypeRegistry};
use tasks_storage::{ListFilter, MemoryStorage, StorageAdapter, StoreError};

/// Convenience alias for the fully-typed test engine.
pub(crate) type TestTasks<S = MemoryStorage> = Tasks<S, FakeClock, SequentialIdGen>;

/// Test context holding the engine and its clock.
pub(crate) struct TestContext<S: StorageAdapter = MemoryStorage> {
    pub tasks: TestTasks<S>,
    pub clock: FakeClock,
}

/// Engine over the built-in catalog and an in-memory store.
pub(crate) fn setup() -> TestContext {
    setup_with(MemoryStorage::new())
}

pub(crate) fn setup_with<S: StorageAdapter>(storage: S) -> TestContext<S> {
    let clock = FakeClock::new();
    let registry = TypeRegistry::with_catalog();
    let tasks =
        Tasks::new(registry, storage, clock.clone(), SequentialIdGen::new()).with_actor("tester");
    TestContext { tasks, clock }
}

/// In-memory store whose writes fail for one record type
pub(crate) struct FailingStorage {
    pub inner: MemoryStorage,
    pub fail_type_id: String,
}

impl FailingStorage {
    pub fn failing_on(type_id: &str) -> Self {
        Self { inner: MemoryStorage::new(), fail_type_id: type_id.to_string() }
    }
}

impl StorageAdapter for FailingStorage {
    fn get(&self, id: &str) -> Result<Option<Minion>, StoreError> {
        self.inner.get(id)
    }

    fn set(&self, minion: &Minion) -> Result<(), StoreError> {
        if minion.minion_type_id == self.fail_type_id {
            return Err(StoreError::Io(io::Error::other("disk full")));
        }
        self.inner.set(minion)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.inner.delete(id)
    }

    fn list(&self, filter: &ListFilter) -> Result<Vec<Minion>, StoreError> {
        self.inner.list(filter)
    }
}
