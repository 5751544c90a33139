//! Integration tests for subject persistence.
//!
//! Exercise the full load → mutate → reload cycle against a real
//! database file, verifying that the collection survives process
//! restarts byte-for-byte.

use studysync_core::{Database, SubjectStore};

#[test]
fn collection_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studysync.db");

    let math_id;
    let history_id;
    {
        let mut store = SubjectStore::load(Database::open_at(&path).unwrap()).unwrap();
        math_id = store.add("Math", 10).unwrap().id;
        history_id = store.add("History", 4).unwrap().id;
        store.adjust_progress(math_id, 3).unwrap();
    }

    let mut store = SubjectStore::load(Database::open_at(&path).unwrap()).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[0].name, "Math");
    assert_eq!(store.list()[0].progress, 3);
    assert_eq!(store.list()[1].name, "History");

    // Edits made after a reload keep persisting.
    store.rename(history_id, "World History").unwrap();
    store.regoal(math_id, 2).unwrap();
    drop(store);

    let store = SubjectStore::load(Database::open_at(&path).unwrap()).unwrap();
    assert_eq!(store.get(history_id).unwrap().name, "World History");
    // Progress was clamped down to the new goal before persisting.
    assert_eq!(store.get(math_id).unwrap().progress, 2);
}

#[test]
fn fresh_database_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studysync.db");
    let store = SubjectStore::load(Database::open_at(&path).unwrap()).unwrap();
    assert!(store.is_empty());
}

#[test]
fn rejected_add_leaves_the_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studysync.db");

    {
        let mut store = SubjectStore::load(Database::open_at(&path).unwrap()).unwrap();
        store.add("Math", 10).unwrap();
        assert!(store.add("", 5).is_err());
        assert!(store.add("Physics", 0).is_err());
    }

    let store = SubjectStore::load(Database::open_at(&path).unwrap()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].name, "Math");
}
