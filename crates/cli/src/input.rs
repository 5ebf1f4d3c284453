// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field data supplied on the command line.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use tasks_core::Fields;

use crate::exit_error::ExitError;

/// Field data sources, merged in order: `--file`, `--data`, then `--var`
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Field data as a JSON object
    #[arg(short = 'd', long)]
    pub data: Option<String>,
    /// Read field data from a JSON file
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Set a string field (can be repeated: --var key=value)
    #[arg(long = "var", value_parser = parse_key_value)]
    pub var: Vec<(String, String)>,
}

impl FieldArgs {
    pub fn into_fields(self) -> Result<Fields> {
        let mut fields = Fields::new();
        if let Some(path) = &self.file {
            let text = std::fs::read_to_string(path).map_err(|e| {
                ExitError::failure(format!("cannot read {}: {e}", path.display()))
            })?;
            fields.extend(parse_object(&text, &path.display().to_string())?);
        }
        if let Some(data) = &self.data {
            fields.extend(parse_object(data, "--data")?);
        }
        for (k, v) in self.var {
            fields.insert(k, Value::String(v));
        }
        Ok(fields)
    }
}

/// Parse `text` as a JSON object of field values
pub fn parse_object(text: &str, source: &str) -> Result<Fields, ExitError> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        ExitError::failure(format!("malformed input: invalid JSON in {source}: {e}"))
    })?;
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Err(ExitError::failure(format!("malformed input: {source} must be a JSON object"))),
    }
}

pub(crate) fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let pos =
        s.find('=').ok_or_else(|| format!("invalid input format '{}': must be key=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Split a comma-separated tag list, trimming blanks
pub fn split_tags(s: &str) -> Vec<String> {
    s.split(',').map(str::trim).filter(|t| !t.is_empty()).map(str::to_string).collect()
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
