//! Integration tests for task persistence
//!
//! Each test reopens a second store on the same file, standing in for a
//! fresh process run.

use tasker::task::TaskStore;
use tempfile::TempDir;

fn tasks_file(temp: &TempDir) -> std::path::PathBuf {
    temp.path().join("tasks.json")
}

#[test]
fn test_reopen_sees_saved_tasks() {
    let temp = TempDir::new().unwrap();
    let path = tasks_file(&temp);

    let mut store = TaskStore::open(path.clone());
    store.add_task("Buy milk");
    store.add_task("Pay bills");
    drop(store);

    let store = TaskStore::open(path);
    let tasks = store.list_tasks(true);
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].description, "Buy milk");
    assert_eq!(tasks[1].description, "Pay bills");
}

#[test]
fn test_ids_continue_after_reopen() {
    let temp = TempDir::new().unwrap();
    let path = tasks_file(&temp);

    let mut store = TaskStore::open(path.clone());
    store.add_task("Buy milk");
    store.add_task("Pay bills");
    drop(store);

    let mut store = TaskStore::open(path);
    assert_eq!(store.add_task("Water plants").id, 3);
}

#[test]
fn test_deleting_middle_task_does_not_disturb_numbering() {
    let temp = TempDir::new().unwrap();
    let path = tasks_file(&temp);

    let mut store = TaskStore::open(path.clone());
    store.add_task("Buy milk");
    store.add_task("Pay bills");
    store.add_task("Water plants");
    assert!(store.delete_task(2));
    drop(store);

    let mut store = TaskStore::open(path);
    assert_eq!(store.add_task("Call plumber").id, 4);
}

#[test]
fn test_next_id_recomputed_from_survivors_after_reopen() {
    let temp = TempDir::new().unwrap();
    let path = tasks_file(&temp);

    let mut store = TaskStore::open(path.clone());
    store.add_task("Buy milk");
    store.add_task("Pay bills");
    assert!(store.delete_task(2));
    drop(store);

    // Only id 1 is on disk, so the counter restarts above it and the
    // freed id comes back into use.
    let mut store = TaskStore::open(path);
    assert_eq!(store.add_task("Water plants").id, 2);
}

#[test]
fn test_completed_state_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let path = tasks_file(&temp);

    let mut store = TaskStore::open(path.clone());
    store.add_task("Buy milk");
    store.add_task("Pay bills");
    assert!(store.complete_task(1));
    drop(store);

    let store = TaskStore::open(path);
    let tasks = store.list_tasks(true);
    assert!(tasks[0].completed);
    assert!(!tasks[1].completed);
}

#[test]
fn test_created_at_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let path = tasks_file(&temp);

    let mut store = TaskStore::open(path.clone());
    let created_at = store.add_task("Buy milk").created_at;
    drop(store);

    let store = TaskStore::open(path);
    assert_eq!(store.list_tasks(true)[0].created_at, created_at);
}

#[test]
fn test_empty_description_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let path = tasks_file(&temp);

    let mut store = TaskStore::open(path.clone());
    store.add_task("");
    drop(store);

    let store = TaskStore::open(path);
    assert_eq!(store.list_tasks(true)[0].description, "");
}

#[test]
fn test_file_format_is_an_array_of_flat_records() {
    let temp = TempDir::new().unwrap();
    let path = tasks_file(&temp);

    let mut store = TaskStore::open(path.clone());
    store.add_task("Buy milk");
    assert!(store.complete_task(1));
    drop(store);

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);

    let record = records[0].as_object().unwrap();
    assert_eq!(record.len(), 4);
    assert_eq!(record["id"].as_u64(), Some(1));
    assert_eq!(record["description"].as_str(), Some("Buy milk"));
    assert_eq!(record["completed"].as_bool(), Some(true));
    assert!(record["created_at"].is_string());
}

#[test]
fn test_hand_edited_file_is_accepted() {
    let temp = TempDir::new().unwrap();
    let path = tasks_file(&temp);

    // A record without created_at, as an older file or a hand edit
    // might leave behind.
    std::fs::write(
        &path,
        r#"[
  {"id": 1, "description": "Buy milk", "completed": false},
  {"id": 4, "description": "Pay bills", "completed": true, "created_at": "2026-08-22T09:15:00+02:00"}
]"#,
    )
    .unwrap();

    let mut store = TaskStore::open(path);
    let tasks = store.list_tasks(true);
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, 1);
    assert!(tasks[1].completed);

    assert_eq!(store.add_task("Water plants").id, 5);
}
