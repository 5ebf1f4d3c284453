//! Record lifecycle specs: create, show, update, list, delete.

use crate::prelude::*;

#[test]
fn create_reports_id_and_sharded_path() {
    let store = Store::empty();
    let out = store
        .tasks()
        .args(&["create", "task", "--title", "Write the release notes"])
        .passes()
        .stdout_has("Created ✅ Task")
        .stdout_has("Title: Write the release notes");
    assert!(out.stdout.contains(&store.root().display().to_string()));
}

#[test]
fn create_json_is_the_record() {
    let store = Store::empty();
    let out = store
        .tasks()
        .args(&[
            "-o", "json", "create", "task", "-t", "Ship it", "--var", "status=todo", "-p", "high",
            "--tags", "release, docs",
        ])
        .passes();
    let json = out.json();
    assert_eq!(json["minionTypeId"], "tasks-task");
    assert_eq!(json["title"], "Ship it");
    assert_eq!(json["fields"]["status"], "todo");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["tags"], serde_json::json!(["release", "docs"]));
    assert_eq!(json["status"], "active");
    assert_eq!(json["createdBy"], "cli");
}

#[test]
fn create_title_falls_back_to_name_field() {
    let store = Store::empty();
    let id = store.create(&["task-list", "--data", r#"{"name":"Sprint 12"}"#]);
    let json = store.tasks().args(&["-o", "json", "show", &id]).passes().json();
    assert_eq!(json["title"], "Sprint 12");
}

#[test]
fn create_reads_fields_from_file() {
    let store = Store::empty();
    let file = store.file("fields.json", r#"{"description":"from a file","status":"todo"}"#);
    let path = file.to_str().unwrap();
    let id = store.create(&["task", "-t", "Filed", "-f", path, "--var", "status=blocked"]);
    let json = store.tasks().args(&["-o", "json", "show", &id]).passes().json();
    assert_eq!(json["fields"]["description"], "from a file");
    assert_eq!(json["fields"]["status"], "blocked");
}

#[test]
fn create_with_unknown_type_lists_available() {
    let store = Store::empty();
    store
        .tasks()
        .args(&["create", "widget", "-t", "x"])
        .fails()
        .stderr_has("error: unknown type: widget")
        .stderr_has("available: task, task-list, task-dependency");
}

#[test]
fn create_with_malformed_data_fails() {
    let store = Store::empty();
    store
        .tasks()
        .args(&["create", "task", "--data", "{not json"])
        .fails()
        .stderr_has("malformed input");
}

#[test]
fn actor_comes_from_the_environment() {
    let store = Store::empty();
    let out = store
        .tasks()
        .env("MINIONS_ACTOR", "agent-7")
        .args(&["-o", "json", "create", "task", "-t", "Mine"])
        .passes();
    assert_eq!(out.json()["createdBy"], "agent-7");
}

#[test]
fn show_prints_envelope_and_fields() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "Inspect me", "--var", "description=details here"]);
    store
        .tasks()
        .args(&["show", &id])
        .passes()
        .stdout_has("Inspect me")
        .stdout_has(&format!("Type: task  ID: {id}"))
        .stdout_has("Status: active  Priority: -")
        .stdout_has("description: details here");
}

#[test]
fn show_missing_record_fails() {
    let store = Store::empty();
    store
        .tasks()
        .args(&["show", "00000000-0000-4000-8000-000000000099"])
        .fails()
        .stderr_has("error: not found: 00000000-0000-4000-8000-000000000099");
}

#[test]
fn update_merges_fields_and_envelope() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "Draft", "--var", "description=keep me"]);
    store
        .tasks()
        .args(&["update", &id, "--var", "status=in_progress", "-t", "Final", "-s", "in_progress"])
        .passes()
        .stdout_has("Updated ✅ Final");

    let json = store.tasks().args(&["-o", "json", "show", &id]).passes().json();
    assert_eq!(json["title"], "Final");
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["fields"]["status"], "in_progress");
    assert_eq!(json["fields"]["description"], "keep me");
}

#[test]
fn update_with_nothing_to_change_fails() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "Idle"]);
    store.tasks().args(&["update", &id]).fails().stderr_has("nothing to update");
}

#[test]
fn update_missing_record_fails() {
    let store = Store::empty();
    store
        .tasks()
        .args(&["update", "abcd-0001", "-t", "x"])
        .fails()
        .stderr_has("not found: abcd-0001");
}

#[test]
fn list_filters_by_type_status_and_limit() {
    let store = Store::empty();
    store.create(&["task", "-t", "First"]);
    store.create(&["task", "-t", "Second", "-s", "todo"]);
    store.create(&["task-list", "-t", "Backlog"]);

    store.tasks().args(&["list"]).passes().stdout_has("3 record(s)");
    store
        .tasks()
        .args(&["ls", "task"])
        .passes()
        .stdout_has("2 record(s)")
        .stdout_lacks("Backlog");
    store
        .tasks()
        .args(&["list", "task", "-s", "todo"])
        .passes()
        .stdout_has("Second")
        .stdout_lacks("First");

    let json = store.tasks().args(&["-o", "json", "list", "-n", "1"]).passes().json();
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[test]
fn list_empty_store() {
    let store = Store::empty();
    store.tasks().args(&["list"]).passes().stdout_has("No records found.");
    let json = store.tasks().args(&["-o", "json", "list"]).passes().json();
    assert_eq!(json, serde_json::json!([]));
}

#[test]
fn list_with_unknown_type_fails() {
    let store = Store::empty();
    store.tasks().args(&["list", "widget"]).fails().stderr_has("unknown type: widget");
}

#[test]
fn soft_delete_keeps_a_tombstone() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "Obsolete"]);
    store
        .tasks()
        .args(&["delete", &id])
        .passes()
        .stdout_has("Soft-deleted Obsolete")
        .stdout_has("Use --hard");

    let json = store.tasks().args(&["-o", "json", "show", &id]).passes().json();
    assert_eq!(json["status"], "cancelled");
    assert_eq!(json["deletedBy"], "cli");
    assert!(json["deletedAt"].is_string());
}

#[test]
fn hard_delete_removes_the_record() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "Gone"]);
    let out = store.tasks().args(&["-o", "json", "delete", &id, "--hard"]).passes();
    let expected = serde_json::json!({ "id": &id, "deleted": "hard" });
    similar_asserts::assert_eq!(out.json(), expected);

    store.tasks().args(&["show", &id]).fails().stderr_has("not found");
    store.tasks().args(&["delete", &id, "--hard"]).fails().stderr_has("not found");
}

#[test]
fn records_survive_across_invocations_as_files() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "Persisted"]);
    let hex: String = id.chars().filter(|c| *c != '-').take(4).collect();
    let path = store.root().join(&hex[..2]).join(&hex[2..]).join(format!("{id}.json"));
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.contains("\"title\": \"Persisted\""));
}
