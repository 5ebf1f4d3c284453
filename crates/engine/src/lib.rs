// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tasks-engine: record operations, relational queries, and task workflows
//! composed over a type registry and a storage backend

mod blocked;
mod document;
mod error;
mod stats;
mod tasks;
mod workflow;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use blocked::{resolve_blocked, BlockedReport, BlockedTask, Blocker};
pub use document::Checked;
pub use error::EngineError;
pub use stats::{Stats, TypeCount};
pub use tasks::{Tasks, DEFAULT_ACTOR};
pub use workflow::{Assignment, Comment, Completed, Outcome};
