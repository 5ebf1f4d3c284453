// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use tasks_core::{Minion, TypeRegistry};

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Icon of a record's type, `?` for unregistered types
pub fn icon_for<'a>(registry: &'a TypeRegistry, minion: &Minion) -> &'a str {
    registry.get_by_id(&minion.minion_type_id).map(|t| t.icon.as_str()).unwrap_or("?")
}

/// Slug of a record's type, falling back to the raw type id
pub fn slug_for<'a>(registry: &'a TypeRegistry, minion: &'a Minion) -> &'a str {
    registry
        .get_by_id(&minion.minion_type_id)
        .map(|t| t.slug.as_str())
        .unwrap_or(&minion.minion_type_id)
}

/// Two-line summary of each record: icon, title, status; then id and type
pub fn write_rows(out: &mut dyn Write, registry: &TypeRegistry, minions: &[Minion]) {
    for m in minions {
        let _ = writeln!(
            out,
            "  {}  {} {}",
            icon_for(registry, m),
            color::header(&m.title),
            color::muted(&format!("[{}]", m.status))
        );
        let _ = writeln!(
            out,
            "     {} {}",
            color::muted(m.id.as_str()),
            color::context(slug_for(registry, m))
        );
    }
}

/// Render a list as text or JSON. Handles empty check + format branch.
pub fn handle_list<T: Serialize>(
    format: OutputFormat,
    items: &[T],
    empty_msg: &str,
    render_text: impl FnOnce(&[T], &mut dyn Write),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items)?);
        }
        OutputFormat::Text => {
            if items.is_empty() {
                println!("{}", color::muted(empty_msg));
            } else {
                render_text(items, &mut std::io::stdout());
            }
        }
    }
    Ok(())
}

/// Format-branch helper for non-list commands.
///
/// Renders as JSON when `format` is `Json`, otherwise calls `text_fn`.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            text_fn();
        }
    }
    Ok(())
}

/// A `█` bar of `count` cells, capped at `max`
pub fn bar(count: usize, max: usize) -> String {
    "█".repeat(count.min(max))
}
