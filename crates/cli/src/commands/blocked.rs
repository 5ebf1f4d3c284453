// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tasks blocked`: tasks whose `status` field is `blocked`, with what blocks them

use anyhow::Result;
use tasks_engine::BlockedReport;

use super::open_store;
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, OutputFormat};

pub fn handle(format: OutputFormat) -> Result<()> {
    let store = open_store()?;
    let report = store.blocked().map_err(ExitError::from)?;
    format_or_json(format, &report, || print_report(&report))
}

fn print_report(report: &BlockedReport) {
    if report.is_empty() {
        println!("{} No blocked tasks.", color::success("✔"));
        return;
    }
    println!("{} blocked task(s):\n", report.tasks.len());
    for entry in &report.tasks {
        println!("  {}", color::header(&entry.task.title));
        println!("     {}", color::muted(entry.task.id.as_str()));
        for blocker in &entry.blockers {
            println!(
                "     {} blocked by {} ({})",
                color::failure("→"),
                color::muted(blocker.depends_on_task_id.as_deref().unwrap_or("?")),
                blocker.kind.as_deref().unwrap_or("-")
            );
        }
        if entry.blockers.is_empty() {
            println!("     {}", color::context("no dependencies recorded"));
        }
        println!();
    }
    if report.dependency_records == 0 {
        println!("{}", color::muted("No task-dependency records exist."));
    }
}
