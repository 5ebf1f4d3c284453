// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tasks validate <file>`: check a record document against its type's schema

use std::path::Path;

use anyhow::Result;
use serde_json::json;
use tasks_core::{FieldError, TypeRegistry};
use tasks_engine::{EngineError, Tasks};
use tasks_storage::MemoryStorage;

use crate::color;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

pub fn handle(file: &Path, format: OutputFormat) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| ExitError::failure(format!("cannot read {}: {e}", file.display())))?;

    // Validation never touches the store
    let tasks = Tasks::open(TypeRegistry::with_catalog(), MemoryStorage::new());
    match tasks.validate_json(&text) {
        Ok(checked) => {
            let ty = checked.minion_type;
            match format {
                OutputFormat::Json => {
                    let result = json!({ "valid": true, "type": ty.slug, "errors": [] });
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                OutputFormat::Text => {
                    println!("{} Valid {} {}", color::success("✔"), ty.icon, ty.name);
                }
            }
            Ok(())
        }
        Err(EngineError::ValidationFailed(errors)) => {
            report_errors(&errors, format)?;
            Err(ExitError::failure(format!("{} failed validation", file.display())).into())
        }
        Err(e) => Err(ExitError::from(e).into()),
    }
}

fn report_errors(errors: &[FieldError], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let result = json!({ "valid": false, "errors": errors });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Text => {
            println!("{} {} validation error(s):\n", color::failure("✘"), errors.len());
            for err in errors {
                println!("  {} {}: {}", color::failure("•"), err.field, err.message);
            }
        }
    }
    Ok(())
}
