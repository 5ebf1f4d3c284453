// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use serde_json::Value;
use tasks_core::Minion;

use super::open_store;
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, icon_for, slug_for, OutputFormat};

pub fn handle(id: &str, format: OutputFormat) -> Result<()> {
    let store = open_store()?;
    let minion = store.get(id).map_err(ExitError::from)?;
    let registry = store.registry();

    format_or_json(format, &minion, || {
        println!("{}  {}", icon_for(registry, &minion), color::header(&minion.title));
        let meta = [
            format!("Type: {}  ID: {}", slug_for(registry, &minion), minion.id),
            format!(
                "Status: {}  Priority: {}",
                minion.status,
                minion.priority.map(|p| p.as_str()).unwrap_or("-")
            ),
            format!("Created: {}  Updated: {}", minion.created_at, minion.updated_at),
        ];
        for line in meta {
            println!("{}", color::muted(&line));
        }
        if !minion.tags.is_empty() {
            println!("{}", color::muted(&format!("Tags: {}", minion.tags.join(", "))));
        }
        if let Some(at) = minion.deleted_at {
            let by = minion.deleted_by.as_deref().unwrap_or("-");
            println!("{}", color::failure(&format!("Deleted: {at} by {by}")));
        }
        print_fields(&minion);
    })
}

fn print_fields(minion: &Minion) {
    if minion.fields.is_empty() {
        return;
    }
    println!("\nFields:\n");
    for (key, value) in &minion.fields {
        let shown = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        println!("  {} {}: {}", color::muted("•"), color::literal(key), shown);
    }
}
