use crate::prelude::*;

fn seeded() -> Store {
    let store = Store::empty();
    store.create(&["task", "-t", "Fix login redirect", "-s", "todo"]);
    store.create(&["task", "-t", "Tune cache", "--var", "description=the LOGIN page is slow"]);
    store.create(&["task-list", "--data", r#"{"name":"Login epic"}"#]);
    store.create(&["task", "-t", "Unrelated"]);
    store
}

#[test]
fn search_matches_titles_and_descriptions_case_insensitively() {
    let store = seeded();
    store
        .tasks()
        .args(&["search", "login"])
        .passes()
        .stdout_has("3 result(s) for \"login\"")
        .stdout_has("Fix login redirect")
        .stdout_has("Tune cache")
        .stdout_has("Login epic")
        .stdout_lacks("Unrelated");
}

#[test]
fn search_scoped_by_type_and_status() {
    let store = seeded();
    store
        .tasks()
        .args(&["search", "login", "--type", "task-list"])
        .passes()
        .stdout_has("1 result(s)")
        .stdout_has("Login epic");
    store
        .tasks()
        .args(&["search", "login", "-t", "task", "-s", "todo"])
        .passes()
        .stdout_has("Fix login redirect")
        .stdout_lacks("Tune cache");
}

#[test]
fn search_limit_caps_results() {
    let store = seeded();
    let json = store.tasks().args(&["-o", "json", "search", "login", "-n", "2"]).passes().json();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn search_without_hits() {
    let store = seeded();
    store
        .tasks()
        .args(&["search", "kubernetes"])
        .passes()
        .stdout_has("No results for \"kubernetes\".");
}

#[test]
fn search_with_unknown_type_fails() {
    let store = seeded();
    store.tasks().args(&["search", "x", "-t", "widget"]).fails().stderr_has("unknown type: widget");
}
