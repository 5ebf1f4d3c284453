//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn tasks_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn tasks_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("create")
        .stdout_has("blocked")
        .stdout_has("complete")
        .stdout_has("validate");
}

#[test]
fn types_help_shows_subcommands() {
    cli().args(&["types", "--help"]).passes().stdout_has("list").stdout_has("show");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.5");
}

#[test]
fn unknown_command_fails() {
    cli().args(&["frobnicate"]).fails().stderr_has("unrecognized subcommand");
}

#[test]
fn invalid_flag_value_fails() {
    let store = Store::empty();
    store
        .tasks()
        .args(&["list", "--status", "bogus"])
        .fails()
        .stderr_has("invalid value 'bogus'");
}

#[test]
fn info_reports_store_and_type_count() {
    let store = Store::empty();
    store
        .tasks()
        .args(&["info"])
        .passes()
        .stdout_has("Minions Tasks")
        .stdout_has(".minions")
        .stdout_has("Types:   9");
}

#[test]
fn types_list_shows_every_catalog_type() {
    let out = cli().args(&["types", "list"]).passes().stdout_has("9 types available");
    for slug in [
        "task",
        "task-list",
        "task-dependency",
        "recurring-task",
        "task-assignment",
        "task-checkpoint",
        "task-history-entry",
        "task-comment",
        "task-outcome",
    ] {
        assert!(out.stdout.contains(&format!("({slug})")), "missing {slug}");
    }
}

#[test]
fn types_show_marks_required_fields() {
    cli()
        .args(&["types", "show", "task-dependency"])
        .passes()
        .stdout_has("ID: tasks-task-dependency  Slug: task-dependency")
        .stdout_has("* taskId")
        .stdout_has("* dependsOnTaskId")
        .stdout_has("[blocks|relates-to]");
}

#[test]
fn types_show_json_is_the_schema() {
    let out = cli().args(&["types", "show", "task-outcome", "-o", "json"]).passes();
    let json = out.json();
    assert_eq!(json["id"], "tasks-task-outcome");
    assert_eq!(json["schema"][1]["name"], "result");
    assert_eq!(json["schema"][1]["required"], true);
}

#[test]
fn types_show_unknown_lists_available() {
    cli()
        .args(&["types", "show", "widget"])
        .fails()
        .stderr_has("error: unknown type: widget")
        .stderr_has("available: task, task-list");
}
