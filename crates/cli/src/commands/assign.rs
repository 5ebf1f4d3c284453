// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use clap::Args;
use tasks_core::catalog;
use tasks_engine::Assignment;

use super::open_store;
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, OutputFormat};

#[derive(Args)]
pub struct AssignArgs {
    /// Task id
    pub task_id: String,
    /// Person or agent id
    pub assignee_id: String,
    /// Assignee type
    #[arg(long = "type", default_value = "agent", value_parser = catalog::ASSIGNEE_TYPES.to_vec())]
    pub assignee_type: String,
    #[arg(long, default_value = "owner", value_parser = catalog::ASSIGNMENT_ROLES.to_vec())]
    pub role: String,
}

pub fn handle(args: AssignArgs, format: OutputFormat) -> Result<()> {
    let store = open_store()?;
    let assignment =
        Assignment { assignee_type: Some(args.assignee_type), role: Some(args.role.clone()) };
    let record =
        store.assign(&args.task_id, &args.assignee_id, assignment).map_err(ExitError::from)?;

    format_or_json(format, &record, || {
        println!("{} Assigned task to {}", color::success("✔"), args.assignee_id);
        println!("  {} {}", color::muted("Task:"), args.task_id);
        println!("  {} {}", color::muted("Role:"), args.role);
        println!("  {}   {}", color::muted("ID:"), record.id);
    })
}
