// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;

use super::open_store;
use crate::color;
use crate::env;
use crate::exit_error::ExitError;
use crate::output::{bar, format_or_json, OutputFormat};

/// Bar cells drawn per type before capping
const BAR_CAP: usize = 30;

pub fn handle(format: OutputFormat) -> Result<()> {
    let store = open_store()?;
    let stats = store.stats().map_err(ExitError::from)?;

    format_or_json(format, &stats, || {
        println!("Record statistics:\n");
        for row in &stats.types {
            let cells = if row.count > 0 {
                color::header(&bar(row.count, BAR_CAP))
            } else {
                color::muted("0")
            };
            println!("  {}  {:<22} {:>4}  {}", row.icon, row.name, row.count, cells);
        }
        println!("\nTotal: {} record(s)", stats.total);
        println!("{}", color::muted(&format!("Store: {}", env::store_dir().display())));
    })
}
