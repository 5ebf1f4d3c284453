// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use clap::Args;
use tasks_core::{NewMinion, Priority, Status};

use super::open_store;
use crate::color;
use crate::exit_error::ExitError;
use crate::input::{split_tags, FieldArgs};
use crate::output::{format_or_json, OutputFormat};

#[derive(Args)]
pub struct CreateArgs {
    /// Type slug (see `tasks types list`)
    #[arg(value_name = "TYPE")]
    pub type_slug: String,
    #[command(flatten)]
    pub fields: FieldArgs,
    /// Record title (defaults to the `title` or `name` field, then the type name)
    #[arg(short = 't', long)]
    pub title: Option<String>,
    /// Envelope status
    #[arg(short = 's', long)]
    pub status: Option<Status>,
    #[arg(short = 'p', long)]
    pub priority: Option<Priority>,
    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

pub fn handle(args: CreateArgs, format: OutputFormat) -> Result<()> {
    let store = open_store()?;
    let mut input = NewMinion::new().fields(args.fields.into_fields()?);
    input.title = args.title;
    input.status = args.status;
    input.priority = args.priority;
    input.tags = args.tags.as_deref().map(split_tags).unwrap_or_default();

    let minion = store.create(&args.type_slug, input).map_err(ExitError::from)?;
    let ty = store.type_of(&minion);
    let path = store.storage().path_for(minion.id.as_str());

    format_or_json(format, &minion, || {
        let (icon, name) =
            ty.map(|t| (t.icon.as_str(), t.name.as_str())).unwrap_or(("?", "record"));
        println!("{} Created {icon} {name}", color::success("✔"));
        println!("  {}    {}", color::muted("ID:"), minion.id);
        println!("  {} {}", color::muted("Title:"), minion.title);
        if let Some(path) = &path {
            println!("  {}  {}", color::muted("Path:"), path.display());
        }
    })
}
