// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use clap::Args;
use tasks_core::catalog;
use tasks_engine::Outcome;

use super::open_store;
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, OutputFormat};

#[derive(Args)]
pub struct CompleteArgs {
    /// Task id
    pub id: String,
    /// Outcome of the work
    #[arg(
        short = 'r',
        long,
        default_value = "success",
        value_parser = catalog::OUTCOME_RESULTS.to_vec()
    )]
    pub result: String,
    /// What was accomplished
    #[arg(long)]
    pub summary: Option<String>,
    /// Lessons for the agent learning loop
    #[arg(long)]
    pub lessons: Option<String>,
}

pub fn handle(args: CompleteArgs, format: OutputFormat) -> Result<()> {
    let store = open_store()?;
    let outcome =
        Outcome { result: Some(args.result), summary: args.summary, lessons: args.lessons };
    let done = store.complete(&args.id, outcome).map_err(ExitError::from)?;

    format_or_json(format, &done, || {
        let result = done.outcome.field_str("result").unwrap_or("-");
        println!("{} Completed {}", color::success("✔"), done.task.title);
        println!("  {}  {}", color::muted("Result:"), result);
        println!("  {} {}", color::muted("Outcome:"), done.outcome.id);
    })
}
