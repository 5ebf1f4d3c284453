// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Type catalog commands

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use tasks_core::{FieldType, MinionType, TypeRegistry};
use tasks_engine::EngineError;

use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, handle_list, OutputFormat};

#[derive(Args)]
pub struct TypesArgs {
    #[command(subcommand)]
    pub command: TypesCommand,
}

#[derive(Subcommand)]
pub enum TypesCommand {
    /// List all record types
    #[command(alias = "ls")]
    List,
    /// Show the field schema of a record type
    Show {
        /// Type slug (e.g. task, task-dependency)
        slug: String,
    },
}

pub fn handle(args: TypesArgs, format: OutputFormat) -> Result<()> {
    let registry = TypeRegistry::with_catalog();
    match args.command {
        TypesCommand::List => {
            let types: Vec<&MinionType> = registry.iter().collect();
            handle_list(format, &types, "No types registered.", |types, out| {
                let _ = writeln!(out, "{} types available:\n", types.len());
                for ty in types {
                    let _ = writeln!(
                        out,
                        "  {}  {} {}",
                        ty.icon,
                        color::header(&ty.name),
                        color::muted(&format!("({})", ty.slug))
                    );
                    let _ = writeln!(out, "     {}", color::context(&ty.description));
                    let names: Vec<&str> = ty.field_names().collect();
                    let summary = format!("{} fields: {}", names.len(), names.join(", "));
                    let _ = writeln!(out, "     {}\n", color::muted(&summary));
                }
            })
        }
        TypesCommand::Show { slug } => {
            let ty = registry.get_by_slug(&slug).ok_or_else(|| {
                ExitError::from(EngineError::UnknownType {
                    slug: slug.clone(),
                    available: registry.slugs().into_iter().map(str::to_string).collect(),
                })
            })?;
            format_or_json(format, ty, || print_schema(ty))
        }
    }
}

fn type_color(field_type: FieldType) -> fn(&str) -> String {
    match field_type {
        FieldType::String => color::literal,
        FieldType::Number | FieldType::Boolean => color::context,
        FieldType::Select => color::header,
    }
}

fn print_schema(ty: &MinionType) {
    println!("{}  {}", ty.icon, color::header(&ty.name));
    println!("{}", color::context(&ty.description));
    println!("{}\n", color::muted(&format!("ID: {}  Slug: {}", ty.id, ty.slug)));
    println!("Fields:\n");
    for field in &ty.schema {
        let req = if field.required { color::failure("*") } else { " ".to_string() };
        let mut line = format!(
            "  {req} {}  {}",
            color::header(&field.name),
            type_color(field.field_type)(field.field_type.as_str())
        );
        if !field.options.is_empty() {
            let options = format!("[{}]", field.options.join("|"));
            line.push_str(&format!("  {}", color::muted(&options)));
        }
        if let Some(description) = &field.description {
            line.push_str(&format!("  {}", color::context(description)));
        }
        println!("{line}");
    }
}
