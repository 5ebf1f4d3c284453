// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tasks-core: record types, schemas, and validation for the tasks CLI

pub mod macros;

pub mod catalog;
pub mod clock;
pub mod id;
pub mod minion;
pub mod registry;
pub mod schema;
pub mod validate;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use id::{IdGen, MinionId, SequentialIdGen, UuidIdGen};
pub use minion::{Fields, Minion, MinionUpdate, NewMinion, Priority, Status};
pub use registry::{RegistryError, TypeRegistry};
pub use schema::{FieldDef, FieldType, MinionType, ParseEnumError};
pub use validate::{validate_fields, FieldError, FieldErrorKind, Validation};
