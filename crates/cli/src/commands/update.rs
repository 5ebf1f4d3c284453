// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use clap::Args;
use tasks_core::{MinionUpdate, Priority, Status};

use super::open_store;
use crate::color;
use crate::exit_error::ExitError;
use crate::input::{split_tags, FieldArgs};
use crate::output::{format_or_json, icon_for, OutputFormat};

#[derive(Args)]
pub struct UpdateArgs {
    /// Record id
    pub id: String,
    /// Fields to merge over the existing ones
    #[command(flatten)]
    pub fields: FieldArgs,
    #[arg(short = 't', long)]
    pub title: Option<String>,
    #[arg(short = 's', long)]
    pub status: Option<Status>,
    #[arg(short = 'p', long)]
    pub priority: Option<Priority>,
    /// Replace tags (comma-separated)
    #[arg(long)]
    pub tags: Option<String>,
}

pub fn handle(args: UpdateArgs, format: OutputFormat) -> Result<()> {
    let update = MinionUpdate {
        title: args.title,
        fields: args.fields.into_fields()?,
        status: args.status,
        priority: args.priority,
        tags: args.tags.as_deref().map(split_tags),
    };
    if update.is_empty() {
        return Err(ExitError::failure(
            "nothing to update: pass --data, --file, --var, --title, --status, --priority, or --tags",
        )
        .into());
    }

    let store = open_store()?;
    let minion = store.update(&args.id, update).map_err(ExitError::from)?;
    format_or_json(format, &minion, || {
        let icon = icon_for(store.registry(), &minion);
        println!("{} Updated {icon} {}", color::success("✔"), minion.title);
    })
}
