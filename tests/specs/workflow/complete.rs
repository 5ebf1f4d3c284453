//! Workflow commands: complete, assign, comment.

use crate::prelude::*;

#[test]
fn complete_marks_done_and_records_outcome() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "Migrate DB", "--var", "status=in_progress"]);
    store
        .tasks()
        .args(&["complete", &id, "--summary", "moved to v2"])
        .passes()
        .stdout_has("Completed Migrate DB")
        .stdout_has("Result:  success");

    let task = store.tasks().args(&["-o", "json", "show", &id]).passes().json();
    assert_eq!(task["status"], "completed");
    assert_eq!(task["fields"]["status"], "done");
    assert!(task["fields"]["completedAt"].as_str().unwrap().ends_with('Z'));

    let outcomes = store.tasks().args(&["-o", "json", "list", "task-outcome"]).passes().json();
    let outcome = &outcomes[0];
    assert_eq!(outcome["title"], "Outcome: Migrate DB");
    assert_eq!(outcome["fields"]["taskId"], id.as_str());
    assert_eq!(outcome["fields"]["result"], "success");
    assert_eq!(outcome["fields"]["summary"], "moved to v2");
}

#[test]
fn complete_json_returns_task_and_outcome() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "Spike"]);
    let json = store
        .tasks()
        .args(&["-o", "json", "complete", &id, "-r", "partial", "--lessons", "timebox it"])
        .passes()
        .json();
    assert_eq!(json["task"]["id"], id.as_str());
    assert_eq!(json["outcome"]["minionTypeId"], "tasks-task-outcome");
    assert_eq!(json["outcome"]["fields"]["result"], "partial");
    assert_eq!(json["outcome"]["fields"]["lessons"], "timebox it");
}

#[test]
fn complete_rejects_unknown_result() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "Spike"]);
    store
        .tasks()
        .args(&["complete", &id, "-r", "great"])
        .fails()
        .stderr_has("invalid value 'great'");
}

#[test]
fn complete_missing_task_fails() {
    let store = Store::empty();
    store.tasks().args(&["complete", "abcd-9999"]).fails().stderr_has("not found: abcd-9999");
    store.tasks().args(&["list"]).passes().stdout_has("No records found.");
}

#[test]
fn assign_records_an_assignment() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "Review PR"]);
    store
        .tasks()
        .args(&["assign", &id, "alice", "--type", "human", "--role", "reviewer"])
        .passes()
        .stdout_has("Assigned task to alice")
        .stdout_has("Role: reviewer");

    let json = store.tasks().args(&["-o", "json", "list", "task-assignment"]).passes().json();
    let fields = &json[0]["fields"];
    assert_eq!(json[0]["title"], "Assignment: Review PR → alice");
    assert_eq!(fields["taskId"], id.as_str());
    assert_eq!(fields["assigneeId"], "alice");
    assert_eq!(fields["assigneeType"], "human");
    assert_eq!(fields["role"], "reviewer");
    assert_eq!(fields["assignedBy"], "cli");
}

#[test]
fn assign_defaults_to_agent_owner() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "Triage"]);
    let json = store.tasks().args(&["-o", "json", "assign", &id, "bot-1"]).passes().json();
    assert_eq!(json["fields"]["assigneeType"], "agent");
    assert_eq!(json["fields"]["role"], "owner");
}

#[test]
fn assign_missing_task_fails() {
    let store = Store::empty();
    store.tasks().args(&["assign", "abcd-0001", "bob"]).fails().stderr_has("not found");
}

#[test]
fn comment_defaults_author_to_actor() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "Discuss"]);
    store
        .tasks()
        .env("MINIONS_ACTOR", "planner")
        .args(&["comment", &id, "Needs a design review"])
        .passes()
        .stdout_has(&format!("Comment added to task {id}"));

    let json = store.tasks().args(&["-o", "json", "list", "task-comment"]).passes().json();
    let comment = &json[0];
    assert_eq!(comment["title"], format!("Comment on {id}"));
    assert_eq!(comment["createdBy"], "planner");
    assert_eq!(comment["fields"]["authorId"], "planner");
    assert_eq!(comment["fields"]["authorType"], "agent");
    assert_eq!(comment["fields"]["body"], "Needs a design review");
}

#[test]
fn comment_with_explicit_author() {
    let store = Store::empty();
    let json = store
        .tasks()
        .args(&["-o", "json", "comment", "abcd-1234", "lgtm"])
        .args(&["--author", "carol", "--type", "human"])
        .passes()
        .json();
    assert_eq!(json["fields"]["taskId"], "abcd-1234");
    assert_eq!(json["fields"]["authorId"], "carol");
    assert_eq!(json["fields"]["authorType"], "human");
}
