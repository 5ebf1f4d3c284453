// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use tasks_core::FieldError;
use tasks_storage::StoreError;
use thiserror::Error;

/// Errors surfaced by [`Tasks`](crate::Tasks) operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown type: {slug}")]
    UnknownType { slug: String, available: Vec<String> },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{} validation error(s)", .0.len())]
    ValidationFailed(Vec<FieldError>),
    #[error("corrupt record at {}: {source}", path.display())]
    CorruptRecord {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// The task was marked complete but its outcome record could not be
    /// written. The task update is not rolled back.
    #[error("task {task_id} was completed but its outcome was not recorded: {source}")]
    OutcomeNotRecorded {
        task_id: String,
        #[source]
        source: StoreError,
    },
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for EngineError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => EngineError::NotFound(id),
            StoreError::CorruptRecord { path, source } => {
                EngineError::CorruptRecord { path, source }
            }
            other => EngineError::Store(other),
        }
    }
}
