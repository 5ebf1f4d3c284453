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
pub struct ListArgs {
    /// Only records of this type slug
    #[arg(value_name = "TYPE")]
    pub type_slug: Option<String>,
    /// Only records with this envelope status
    #[arg(short = 's', long)]
    pub status: Option<Status>,
    /// Maximum number of records
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

pub fn handle(args: ListArgs, format: OutputFormat) -> Result<()> {
    let store = open_store()?;
    let mut filter = store.filter(args.type_slug.as_deref()).map_err(ExitError::from)?;
    filter.status = args.status;
    filter.limit = args.limit;

    let minions = store.list(&filter).map_err(ExitError::from)?;
    handle_list(format, &minions, "No records found.", |items, out| {
        let _ = writeln!(out, "{} record(s):\n", items.len());
        write_rows(out, store.registry(), items);
    })
}
