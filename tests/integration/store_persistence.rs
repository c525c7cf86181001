//! End-to-end persistence tests for the task store over file storage.
//!
//! Each test builds a store on a real temporary directory, exercises it,
//! and checks what lands on disk and what a fresh store restores.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;

use serde_json::Value;
use termtodo_core::{FileStorage, TaskStore};

#[test]
fn session_survives_restart() {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut store = TaskStore::load(FileStorage::new(dir.path()));
    let groceries = store.add_task("Buy groceries").expect("task added");
    store.add_task("Walk the dog").expect("task added");
    let dentist = store.add_task("Call dentist").expect("task added");
    store.complete_task(&groceries);
    store.delete_task(&dentist);
    let expected = store.tasks().to_vec();
    drop(store);

    let restored = TaskStore::load(FileStorage::new(dir.path()));
    assert_eq!(restored.tasks(), expected.as_slice());
    assert_eq!(restored.len(), 2);
    assert_eq!(restored.completed_count(), 1);
}

#[test]
fn snapshot_lands_in_tasks_json() {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut store = TaskStore::load(FileStorage::new(dir.path()));
    store.add_task("Water plants");
    store.add_task("File taxes");

    let raw = fs::read_to_string(dir.path().join("tasks.json")).expect("snapshot file");
    let value: Value = serde_json::from_str(&raw).expect("snapshot is JSON");
    let records = value.as_array().expect("snapshot is an array");
    assert_eq!(records.len(), 2);
    for record in records {
        let object = record.as_object().expect("record is an object");
        assert!(object["id"].is_string());
        assert!(object["text"].is_string());
        assert!(object["completed"].is_boolean());
        assert_eq!(object.len(), 3, "record carries exactly id, text, completed");
    }
    assert_eq!(records[0]["text"], "Water plants");
    assert_eq!(records[1]["text"], "File taxes");
}

#[test]
fn missing_snapshot_starts_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = TaskStore::load(FileStorage::new(dir.path()));
    assert!(store.is_empty());
}

#[test]
fn corrupt_snapshot_starts_empty_and_recovers_on_next_write() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("tasks.json"), "{not json").expect("seed corrupt file");

    let mut store = TaskStore::load(FileStorage::new(dir.path()));
    assert!(store.is_empty(), "corrupt snapshot falls back to empty");

    store.add_task("Start over");
    let restored = TaskStore::load(FileStorage::new(dir.path()));
    assert_eq!(restored.len(), 1);
    assert_eq!(restored.tasks()[0].text, "Start over");
}

#[test]
fn foreign_snapshot_is_restored_verbatim() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("tasks.json"),
        r##"[{"id":"#7","text":"  padded text  ","completed":true}]"##,
    )
    .expect("seed snapshot");

    let store = TaskStore::load(FileStorage::new(dir.path()));
    assert_eq!(store.len(), 1);
    let task = &store.tasks()[0];
    assert_eq!(task.id.as_str(), "#7");
    assert_eq!(task.text, "  padded text  ");
    assert!(task.completed);
}

#[test]
fn blank_add_leaves_no_snapshot_file() {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut store = TaskStore::load(FileStorage::new(dir.path()));
    assert_eq!(store.add_task("   "), None);
    assert_eq!(store.add_task(""), None);

    assert!(!dir.path().join("tasks.json").exists());
}

#[test]
fn storage_write_failures_do_not_crash_the_session() {
    // Root the storage at an existing file so every read and write on
    // the backend fails.
    let blocker = tempfile::NamedTempFile::new().expect("temp file");

    let mut store = TaskStore::load(FileStorage::new(blocker.path()));
    assert!(store.is_empty(), "unreadable backend falls back to empty");

    let id = store.add_task("Keep going").expect("task added in memory");
    assert_eq!(store.len(), 1);
    assert!(store.complete_task(&id));
    assert!(store.tasks()[0].completed, "memory stays authoritative");
}
