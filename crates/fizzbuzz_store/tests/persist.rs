use std::fs;

use fizzbuzz_store::{load_snapshot, write_snapshot_atomic, CounterSnapshot, StorageError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn missing_file_loads_as_empty_snapshot() {
    let temp = TempDir::new().unwrap();
    let snapshot = load_snapshot(&temp.path().join("absent.json")).unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn snapshot_round_trips_through_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("counters.json");

    let mut snapshot = CounterSnapshot::new();
    snapshot.add_entry("a");
    snapshot.add_entry("a");
    snapshot.add_entry("b");
    write_snapshot_atomic(&path, &snapshot).unwrap();

    let reloaded = load_snapshot(&path).unwrap();
    assert_eq!(reloaded, snapshot);
    assert_eq!(reloaded.count("a"), 2);
    assert_eq!(reloaded.count("b"), 1);
}

#[test]
fn file_layout_matches_counter_map_object() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("counters.json");

    let mut snapshot = CounterSnapshot::new();
    snapshot.add_entry("first");
    snapshot.add_entry("second");
    write_snapshot_atomic(&path, &snapshot).unwrap();

    // Single top-level object, insertion order preserved.
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, r#"{"counterMap":{"first":1,"second":1}}"#);
}

#[test]
fn foreign_file_in_original_layout_is_readable() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("counters.json");
    fs::write(&path, r#"{"counterMap":{"k":3,"j":1}}"#).unwrap();

    let snapshot = load_snapshot(&path).unwrap();
    assert_eq!(snapshot.count("k"), 3);
    assert_eq!(snapshot.most_used(), Some("k"));
}

#[test]
fn corrupt_file_is_an_error_not_an_empty_store() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("counters.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_snapshot(&path).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { .. }), "{err:?}");
}

#[test]
fn write_replaces_existing_file_atomically() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("counters.json");

    let mut snapshot = CounterSnapshot::new();
    snapshot.add_entry("a");
    write_snapshot_atomic(&path, &snapshot).unwrap();
    snapshot.add_entry("a");
    write_snapshot_atomic(&path, &snapshot).unwrap();

    assert_eq!(load_snapshot(&path).unwrap().count("a"), 2);
}

#[test]
fn failed_write_leaves_no_partial_file() {
    let temp = TempDir::new().unwrap();
    // Parent "directory" is actually a file, so the write cannot start.
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();
    let path = blocker.join("counters.json");

    let result = write_snapshot_atomic(&path, &CounterSnapshot::new());
    assert!(result.is_err());
    assert!(!path.exists());
}
