// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// CLI version (from Cargo.toml)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Store root used when `MINIONS_STORE` is unset
pub const DEFAULT_STORE: &str = ".minions";

/// Store root: `MINIONS_STORE` > `.minions` under the working directory
pub fn store_dir() -> PathBuf {
    std::env::var("MINIONS_STORE")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE))
}

/// Attribution for writes made through the CLI (`MINIONS_ACTOR`, default `cli`)
pub fn actor() -> String {
    std::env::var("MINIONS_ACTOR")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| tasks_engine::DEFAULT_ACTOR.to_string())
}

/// Tracing filter directive (`TASKS_LOG`, default `warn`)
pub fn log_filter() -> String {
    std::env::var("TASKS_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "warn".to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
