// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tasks: manage task records across agents, humans, and workflows

mod color;
mod commands;
mod env;
mod exit_error;
mod input;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    assign, blocked, comment, complete, create, delete, info, list, search, show, stats, types,
    update, validate,
};
use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "tasks",
    version,
    about = "Task and work management across agents, humans, and workflows",
    styles = color::styles()
)]
struct Cli {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show store location, type count, and version
    Info,
    /// Inspect record type schemas
    Types(types::TypesArgs),
    /// Create a record of the given type
    Create(create::CreateArgs),
    /// List records, optionally filtered by type and status
    #[command(alias = "ls")]
    List(list::ListArgs),
    /// Show a record by id
    Show {
        /// Record id
        id: String,
    },
    /// Update a record's fields or envelope
    Update(update::UpdateArgs),
    /// Soft-delete a record (or remove it with --hard)
    Delete(delete::DeleteArgs),
    /// Search record titles and descriptions
    Search(search::SearchArgs),
    /// List blocked tasks and their blockers
    Blocked,
    /// Mark a task done and record its outcome
    Complete(complete::CompleteArgs),
    /// Assign a task to a person or agent
    Assign(assign::AssignArgs),
    /// Add a comment to a task
    Comment(comment::CommentArgs),
    /// Validate a record JSON file against its type's schema
    Validate {
        /// Path to the record document
        file: PathBuf,
    },
    /// Count records per type
    Stats,
}

fn main() {
    // Usage errors share the exit code of every other failure
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(exit_error::FAILURE);
        }
        Err(e) => e.exit(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env::log_filter()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        let (code, message) = match e.downcast_ref::<ExitError>() {
            Some(exit) => (exit.code, exit.message.clone()),
            None => (exit_error::FAILURE, format!("{e:#}")),
        };
        eprintln!("error: {message}");
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.output;

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Info => info::handle(format),
        Commands::Types(args) => types::handle(args, format),
        Commands::Create(args) => create::handle(args, format),
        Commands::List(args) => list::handle(args, format),
        Commands::Show { id } => show::handle(&id, format),
        Commands::Update(args) => update::handle(args, format),
        Commands::Delete(args) => delete::handle(args, format),
        Commands::Search(args) => search::handle(args, format),
        Commands::Blocked => blocked::handle(format),
        Commands::Complete(args) => complete::handle(args, format),
        Commands::Assign(args) => assign::handle(args, format),
        Commands::Comment(args) => comment::handle(args, format),
        Commands::Validate { file } => validate::handle(&file, format),
        Commands::Stats => stats::handle(format),
    }
}
