// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;
use tasks_engine::EngineError;

/// Exit code for every user-facing failure
pub const FAILURE: i32 = 1;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(FAILURE, message)
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

impl From<EngineError> for ExitError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::UnknownType { slug, available } => {
                Self::failure(format!("unknown type: {slug}\navailable: {}", available.join(", ")))
            }
            EngineError::ValidationFailed(errors) => {
                let lines: Vec<String> = errors.iter().map(|e| format!("  • {e}")).collect();
                let count = errors.len();
                Self::failure(format!("{count} validation error(s):\n{}", lines.join("\n")))
            }
            other => Self::failure(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
