//! `tasks validate` checks a JSON document against its type schema.

use crate::prelude::*;

#[test]
fn valid_document_by_type_id() {
    let store = Store::empty();
    let file = store.file(
        "dep.json",
        r#"{"minionTypeId":"tasks-task-dependency","fields":{"taskId":"a","dependsOnTaskId":"b","type":"blocks"}}"#,
    );
    cli()
        .args(&["validate", file.to_str().unwrap()])
        .passes()
        .stdout_has("Valid 🔗 Task dependency");
}

#[test]
fn valid_document_by_slug_as_json() {
    let store = Store::empty();
    let file = store.file("task.json", r#"{"type":"task","fields":{"title":"ok"}}"#);
    let json = cli().args(&["-o", "json", "validate", file.to_str().unwrap()]).passes().json();
    similar_asserts::assert_eq!(
        json,
        serde_json::json!({ "valid": true, "type": "task", "errors": [] })
    );
}

#[test]
fn invalid_document_lists_every_error() {
    let store = Store::empty();
    let file = store.file(
        "bad.json",
        r#"{"type":"task-outcome","fields":{"result":"great","surprise":1,"summary":[7]}}"#,
    );
    let path = file.to_str().unwrap();
    cli()
        .args(&["validate", path])
        .fails()
        .stdout_has("3 validation error(s)")
        .stdout_has("taskId: missing field: taskId")
        .stdout_has("surprise: unknown field: surprise")
        .stdout_has("summary: expected string, got array")
        .stderr_has(&format!("error: {path} failed validation"));
}

#[test]
fn invalid_document_as_json() {
    let store = Store::empty();
    let file = store.file("bad.json", r#"{"type":"task-comment","fields":{}}"#);
    let out = cli().args(&["-o", "json", "validate", file.to_str().unwrap()]).fails();
    let json = out.json();
    assert_eq!(json["valid"], false);
    let fields: Vec<&str> =
        json["errors"].as_array().unwrap().iter().map(|e| e["field"].as_str().unwrap()).collect();
    assert_eq!(fields, ["taskId", "body"]);
}

#[test]
fn malformed_json_fails() {
    let store = Store::empty();
    let file = store.file("broken.json", "{ nope");
    cli()
        .args(&["validate", file.to_str().unwrap()])
        .fails()
        .stderr_has("error: malformed input");
}

#[test]
fn unknown_type_fails() {
    let store = Store::empty();
    let file = store.file("odd.json", r#"{"type":"widget","fields":{}}"#);
    cli()
        .args(&["validate", file.to_str().unwrap()])
        .fails()
        .stderr_has("unknown type: widget");
}

#[test]
fn missing_file_fails() {
    cli().args(&["validate", "/nonexistent/doc.json"]).fails().stderr_has("cannot read");
}

#[test]
fn validate_does_not_create_a_store() {
    let store = Store::empty();
    let file = store.file("task.json", r#"{"type":"task","fields":{}}"#);
    store.tasks().args(&["validate", file.to_str().unwrap()]).passes();
    assert!(!store.root().exists());
}
