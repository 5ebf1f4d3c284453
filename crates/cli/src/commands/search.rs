// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use anyhow::Result;
use clap::Args;
use tasks_core::Status;

use super::open_store;
use crate::exit_error::ExitError;
use crate::output::{handle_list, write_rows, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Case-insensitive text to find in titles, names, labels, descriptions, or bodies
    pub query: String,
    /// Only records of this type slug
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub type_slug: Option<String>,
    #[arg(short = 's', long)]
    pub status: Option<Status>,
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

pub fn handle(args: SearchArgs, format: OutputFormat) -> Result<()> {
    let store = open_store()?;
    let mut filter = store.filter(args.type_slug.as_deref()).map_err(ExitError::from)?;
    filter.status = args.status;
    filter.limit = args.limit;

    let hits = store.search(&args.query, &filter).map_err(ExitError::from)?;
    let empty = format!("No results for \"{}\".", args.query);
    handle_list(format, &hits, &empty, |items, out| {
        let _ = writeln!(out, "{} result(s) for \"{}\":\n", items.len(), args.query);
        write_rows(out, store.registry(), items);
    })
}
