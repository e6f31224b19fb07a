use quicknote_core::{AppConfig, Note, NoteStore, StoreError, StoreOperation};
use rusqlite::Connection;
use std::thread::sleep;
use std::time::Duration;

fn temp_store() -> (tempfile::TempDir, NoteStore) {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::in_dir(dir.path());
    let store = NoteStore::initialize(&config.db_path).unwrap();
    (dir, store)
}

fn ids(notes: &[Note]) -> Vec<i64> {
    notes.iter().map(|note| note.id).collect()
}

#[test]
fn groceries_and_todo_walkthrough() {
    let (_dir, store) = temp_store();

    let groceries = store.create("Groceries", "Milk, eggs").unwrap();
    let todo = store.create("Todo", "Call Alice").unwrap();
    assert_eq!(groceries, 1);
    assert_eq!(todo, 2);

    assert_eq!(ids(&store.search("Alice").unwrap()), vec![todo]);

    assert!(store
        .update(groceries, "Groceries", "Milk, eggs, bread")
        .unwrap());
    assert_eq!(
        store.get(groceries).unwrap().unwrap().content,
        "Milk, eggs, bread"
    );

    assert!(store.delete(todo).unwrap());
    assert_eq!(ids(&store.list_all().unwrap()), vec![groceries]);
}

#[test]
fn created_note_reads_back_with_equal_timestamps() {
    let (_dir, store) = temp_store();

    let id = store.create("Title", "Body").unwrap();
    let note = store.get(id).unwrap().unwrap();
    assert_eq!(note.title, "Title");
    assert_eq!(note.content, "Body");
    assert_eq!(note.created_at, note.updated_at);
}

#[test]
fn update_refreshes_updated_at_and_moves_note_to_front() {
    let (_dir, store) = temp_store();
    let older = store.create("older", "a").unwrap();
    sleep(Duration::from_millis(5));
    let newer = store.create("newer", "b").unwrap();
    assert_eq!(ids(&store.list_all().unwrap()), vec![newer, older]);

    let before = store.get(older).unwrap().unwrap();
    sleep(Duration::from_millis(5));
    assert!(store.update(older, "older", "edited").unwrap());
    let after = store.get(older).unwrap().unwrap();

    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
    assert_eq!(ids(&store.list_all().unwrap()), vec![older, newer]);
}

#[test]
fn missing_ids_are_not_errors() {
    let (_dir, store) = temp_store();
    store.create("one", "row").unwrap();

    assert!(store.get(404).unwrap().is_none());
    assert!(!store.update(404, "t", "c").unwrap());
    assert!(!store.delete(404).unwrap());
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn empty_search_matches_list_all() {
    let (_dir, store) = temp_store();
    store.create("a", "first").unwrap();
    store.create("b", "second").unwrap();

    let all = store.list_all().unwrap();
    assert_eq!(store.search("").unwrap(), all);
    assert!(store.search("zzz").unwrap().is_empty());
}

#[test]
fn search_matches_whitespace_literally() {
    let (_dir, store) = temp_store();
    let brunch = store.create("Eggs benedict", "brunch").unwrap();
    let groceries = store.create("Groceries", "Milk,  eggs").unwrap();

    assert_eq!(ids(&store.search(" eggs").unwrap()), vec![groceries]);
    assert_eq!(ids(&store.search("  ").unwrap()), vec![groceries]);
    assert!(store.search("\t").unwrap().is_empty());
    assert_eq!(ids(&store.search("eggs").unwrap()), vec![groceries, brunch]);
}

#[test]
fn search_is_case_insensitive() {
    let (_dir, store) = temp_store();
    let id = store.create("Straße", "Grüße an Jürgen").unwrap();

    assert_eq!(ids(&store.search("JÜRGEN").unwrap()), vec![id]);
    assert_eq!(ids(&store.search("straße").unwrap()), vec![id]);
}

#[test]
fn blank_fields_are_rejected_as_validation() {
    let (_dir, store) = temp_store();

    let err = store.create("  ", "body").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.operation(), StoreOperation::Create);
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn reinitialize_preserves_existing_notes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("notes.db");

    let first = NoteStore::initialize(&path).unwrap();
    let id = first.create("persisted", "across restarts").unwrap();

    let second = NoteStore::initialize(&path).unwrap();
    assert_eq!(second.get(id).unwrap().unwrap().title, "persisted");
    assert_eq!(second.count().unwrap(), 1);
}

#[test]
fn initialize_rejects_newer_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = NoteStore::initialize(&path).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Storage {
            operation: StoreOperation::Initialize,
            ..
        }
    ));
}

#[test]
fn storage_failures_surface_as_store_errors() {
    let (dir, store) = temp_store();
    store.create("doomed", "row").unwrap();

    let conn = Connection::open(store.db_path()).unwrap();
    conn.execute_batch("DROP TABLE notes;").unwrap();
    drop(conn);

    let err = store.list_all().unwrap_err();
    assert!(matches!(
        err,
        StoreError::Storage {
            operation: StoreOperation::ListAll,
            ..
        }
    ));
    assert!(err.to_string().contains("list_all"));
    drop(dir);
}

#[test]
fn initialize_fails_when_parent_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = NoteStore::initialize(blocker.join("notes.db")).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}
