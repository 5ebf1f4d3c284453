use crate::prelude::*;

#[test]
fn stats_on_empty_store() {
    let store = Store::empty();
    store
        .tasks()
        .args(&["stats"])
        .passes()
        .stdout_has("Record statistics:")
        .stdout_has("Total: 0 record(s)");
}

#[test]
fn stats_counts_every_type() {
    let store = Store::empty();
    let id = store.create(&["task", "-t", "One"]);
    store.create(&["task", "-t", "Two"]);
    store.tasks().args(&["comment", &id, "hi"]).passes();

    store
        .tasks()
        .args(&["stats"])
        .passes()
        .stdout_has("Total: 3 record(s)")
        .stdout_has("██");

    let json = store.tasks().args(&["-o", "json", "stats"]).passes().json();
    assert_eq!(json["total"], 3);
    let types = json["types"].as_array().unwrap();
    assert_eq!(types.len(), 9);
    let count = |slug: &str| types.iter().find(|t| t["slug"] == slug).unwrap()["count"].clone();
    assert_eq!(count("task"), 2);
    assert_eq!(count("task-comment"), 1);
    assert_eq!(count("task-outcome"), 0);
}
