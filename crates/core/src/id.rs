// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record identifiers and ID generation abstractions

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identifier of a stored record.
///
/// Rendered as a canonical hyphenated UUID (128 random bits). The hex digits
/// with dashes removed drive the on-disk sharding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinionId(String);

impl MinionId {
    /// Generate a new random identifier
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap an existing string (parsing/deserialization, CLI arguments)
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier with dashes removed.
    pub fn hex(&self) -> String {
        self.0.chars().filter(|c| *c != '-').collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for MinionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MinionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MinionId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for MinionId {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

impl AsRef<str> for MinionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for MinionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MinionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::borrow::Borrow<str> for MinionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for MinionId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

/// Source of fresh record identifiers
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> MinionId;
}

/// Random UUIDv4 identifiers
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next(&self) -> MinionId {
        MinionId::new()
    }
}

/// Deterministic identifiers for tests.
///
/// Produces UUID-shaped ids (`00000000-0000-4000-8000-000000000001`, ...) so
/// they shard like real ones. Clones share the counter.
#[derive(Clone, Debug, Default)]
pub struct SequentialIdGen {
    counter: Arc<Mutex<u64>>,
}

impl SequentialIdGen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> MinionId {
        let mut counter = self.counter.lock();
        *counter += 1;
        MinionId::from_string(format!("00000000-0000-4000-8000-{:012x}", *counter))
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
