// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod assign;
pub mod blocked;
pub mod comment;
pub mod complete;
pub mod create;
pub mod delete;
pub mod info;
pub mod list;
pub mod search;
pub mod show;
pub mod stats;
pub mod types;
pub mod update;
pub mod validate;

use anyhow::Result;
use tasks_core::TypeRegistry;
use tasks_engine::Tasks;
use tasks_storage::JsonFileStorage;

use crate::env;
use crate::exit_error::ExitError;

/// The engine as wired for CLI use
pub type Store = Tasks<JsonFileStorage>;

/// Open the store under [`env::store_dir`], creating it if missing
pub fn open_store() -> Result<Store> {
    let root = env::store_dir();
    let storage = JsonFileStorage::open(&root).map_err(|e| {
        ExitError::failure(format!("cannot open store {}: {e}", root.display()))
    })?;
    let actor = env::actor();
    tracing::debug!(root = %root.display(), %actor, "opened store");
    Ok(Tasks::open(TypeRegistry::with_catalog(), storage).with_actor(actor))
}
