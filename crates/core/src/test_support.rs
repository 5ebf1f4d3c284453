// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::catalog;
use crate::clock::{Clock, FakeClock};
use crate::id::{IdGen, SequentialIdGen};
use crate::minion::{Minion, NewMinion, Status};
use crate::schema::MinionType;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core record types.
pub mod strategies {
    use crate::minion::{Fields, NewMinion, Priority, Status};
    use proptest::prelude::*;
    use serde_json::Value;

    pub fn arb_status() -> impl Strategy<Value = Status> {
        proptest::sample::select(Status::ALL.to_vec())
    }

    pub fn arb_priority() -> impl Strategy<Value = Option<Priority>> {
        proptest::option::of(proptest::sample::select(Priority::ALL.to_vec()))
    }

    /// Printable titles, including non-ASCII
    pub fn arb_title() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 é✅_-]{0,40}"
    }

    /// Scalar field values that survive a JSON round trip exactly
    pub fn arb_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            arb_title().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            any::<bool>().prop_map(Value::from),
        ]
    }

    pub fn arb_fields() -> impl Strategy<Value = Fields> {
        proptest::collection::vec(("[a-zA-Z][a-zA-Z0-9]{0,11}", arb_value()), 0..8)
            .prop_map(|pairs| pairs.into_iter().collect::<Fields>())
    }

    pub fn arb_tags() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[a-z][a-z0-9-]{0,9}", 0..4)
    }

    /// Record inputs covering every envelope field
    pub fn arb_new_minion() -> impl Strategy<Value = NewMinion> {
        (arb_title(), arb_fields(), arb_status(), arb_priority(), arb_tags()).prop_map(
            |(title, fields, status, priority, tags)| NewMinion {
                title: Some(title),
                fields,
                status: Some(status),
                priority,
                tags,
                created_by: Some("tester".to_string()),
            },
        )
    }
}

// ── Record factory functions ────────────────────────────────────────────────

/// Deterministic record factory: sequential ids, fixed clock.
#[derive(Clone, Default)]
pub struct Factory {
    pub ids: SequentialIdGen,
    pub clock: FakeClock,
}

impl Factory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn make(&self, ty: &MinionType, input: NewMinion) -> Minion {
        Minion::create(input, ty, self.ids.next(), self.clock.now())
    }

    pub fn task(&self, title: &str) -> Minion {
        self.make(&catalog::task(), NewMinion::new().title(title).status(Status::Todo))
    }

    /// A task whose own `status` field is `blocked`
    pub fn blocked_task(&self, title: &str) -> Minion {
        self.make(&catalog::task(), NewMinion::new().title(title).field("status", "blocked"))
    }

    pub fn dependency(&self, task: &Minion, depends_on: &Minion, kind: &str) -> Minion {
        self.make(
            &catalog::task_dependency(),
            NewMinion::new()
                .field("taskId", task.id.as_str())
                .field("dependsOnTaskId", depends_on.id.as_str())
                .field("type", kind),
        )
    }
}
