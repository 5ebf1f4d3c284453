// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use clap::Args;
use tasks_core::catalog;
use tasks_engine::Comment;

use super::open_store;
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, OutputFormat};

#[derive(Args)]
pub struct CommentArgs {
    /// Task id (not checked for existence)
    pub task_id: String,
    /// Comment text
    pub body: String,
    /// Author id (defaults to MINIONS_ACTOR)
    #[arg(long)]
    pub author: Option<String>,
    /// Author type
    #[arg(long = "type", default_value = "agent", value_parser = catalog::ASSIGNEE_TYPES.to_vec())]
    pub author_type: String,
}

pub fn handle(args: CommentArgs, format: OutputFormat) -> Result<()> {
    let store = open_store()?;
    let comment = Comment { author_id: args.author, author_type: Some(args.author_type) };
    let record = store.comment(&args.task_id, &args.body, comment).map_err(ExitError::from)?;

    format_or_json(format, &record, || {
        println!("{} Comment added to task {}", color::success("✔"), args.task_id);
        println!("  {} {}", color::muted("ID:"), record.id);
    })
}
