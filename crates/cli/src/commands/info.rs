// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use serde::Serialize;
use tasks_core::catalog;

use crate::color;
use crate::env;
use crate::output::{format_or_json, OutputFormat};

#[derive(Serialize)]
struct Info {
    name: &'static str,
    version: &'static str,
    store: String,
    types: usize,
}

pub fn handle(format: OutputFormat) -> Result<()> {
    let info = Info {
        name: "Minions Tasks",
        version: env::VERSION,
        store: env::store_dir().display().to_string(),
        types: catalog::catalog().len(),
    };
    format_or_json(format, &info, || {
        println!("{}", color::header(info.name));
        println!(
            "{}",
            color::context("Task and work management across agents, humans, and workflows")
        );
        println!();
        println!("  Version: {}", color::literal(info.version));
        println!("  Store:   {}", color::literal(&info.store));
        println!("  Types:   {}", color::literal(&info.types.to_string()));
    })
}
