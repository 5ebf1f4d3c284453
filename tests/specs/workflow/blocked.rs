//! `tasks blocked` joins blocked tasks with their dependency records.

use crate::prelude::*;

fn depend(store: &Store, task: &str, on: &str, kind: &str) -> String {
    let data = format!(r#"{{"taskId":"{task}","dependsOnTaskId":"{on}","type":"{kind}"}}"#);
    store.create(&["task-dependency", "--data", &data])
}

#[test]
fn no_blocked_tasks() {
    let store = Store::empty();
    store.create(&["task", "-t", "Free", "--var", "status=todo"]);
    store.tasks().args(&["blocked"]).passes().stdout_has("No blocked tasks.");
}

#[test]
fn blocked_task_lists_its_blockers() {
    let store = Store::empty();
    let api = store.create(&["task", "-t", "Ship API", "--var", "status=todo"]);
    let ui = store.create(&["task", "-t", "Ship UI", "--var", "status=blocked"]);
    depend(&store, &ui, &api, "blocks");

    store
        .tasks()
        .args(&["blocked"])
        .passes()
        .stdout_has("1 blocked task(s)")
        .stdout_has("Ship UI")
        .stdout_has(&format!("blocked by {api} (blocks)"))
        .stdout_lacks("Ship API");
}

#[test]
fn blocked_task_without_dependencies() {
    let store = Store::empty();
    store.create(&["task", "-t", "Waiting", "--var", "status=blocked"]);
    store
        .tasks()
        .args(&["blocked"])
        .passes()
        .stdout_has("Waiting")
        .stdout_has("no dependencies recorded")
        .stdout_has("No task-dependency records exist.");
}

#[test]
fn blocked_json_report() {
    let store = Store::empty();
    let a = store.create(&["task", "-t", "A", "--var", "status=blocked"]);
    let b = store.create(&["task", "-t", "B"]);
    let dep = depend(&store, &a, &b, "relates-to");

    let json = store.tasks().args(&["-o", "json", "blocked"]).passes().json();
    assert_eq!(json["dependencyRecords"], 1);
    let tasks = json["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["task"]["id"], a.as_str());
    assert_eq!(
        tasks[0]["blockers"],
        serde_json::json!([{ "dependencyId": dep, "dependsOnTaskId": b, "kind": "relates-to" }])
    );
}

#[test]
fn deleted_tasks_are_not_blocked() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "Dropped", "--var", "status=blocked"]);
    store.tasks().args(&["delete", &id]).passes();
    store.tasks().args(&["blocked"]).passes().stdout_has("No blocked tasks.");
}
