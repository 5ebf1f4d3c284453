// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use clap::Args;
use serde_json::json;

use super::open_store;
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, OutputFormat};

#[derive(Args)]
pub struct DeleteArgs {
    /// Record id
    pub id: String,
    /// Permanently remove the record from disk
    #[arg(long)]
    pub hard: bool,
}

pub fn handle(args: DeleteArgs, format: OutputFormat) -> Result<()> {
    let store = open_store()?;
    if args.hard {
        store.hard_delete(&args.id).map_err(ExitError::from)?;
        let result = json!({ "id": &args.id, "deleted": "hard" });
        return format_or_json(format, &result, || {
            println!("{} Permanently deleted {}", color::success("✔"), args.id);
        });
    }

    let minion = store.soft_delete(&args.id).map_err(ExitError::from)?;
    format_or_json(format, &minion, || {
        println!("{} Soft-deleted {}", color::success("✔"), minion.title);
        println!("  {}", color::muted("Use --hard to permanently remove"));
    })
}
