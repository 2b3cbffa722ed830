use notesvault_core::db::kv::{load_collection, save_collection, COMPLAINTS_KEY, NOTES_KEY};
use notesvault_core::db::{open_db, open_db_in_memory};
use notesvault_core::{Complaint, Note};
use rusqlite::params;

fn sample_notes() -> Vec<Note> {
    vec![
        Note::from_submission("CS201", "Data Structures", "AVL Trees", "a/avl.pdf").unwrap(),
        Note::from_submission("MA101", "Calculus", "Limits", "b/limits.pdf").unwrap(),
        Note::from_submission("PH110", "Mechanics", "Kinematics", "c/kinematics.pdf").unwrap(),
    ]
}

#[test]
fn saved_collection_loads_back_equal_in_order() {
    let conn = open_db_in_memory().unwrap();
    let notes = sample_notes();

    save_collection(&conn, NOTES_KEY, &notes).unwrap();
    let loaded: Vec<Note> = load_collection(&conn, NOTES_KEY);

    assert_eq!(loaded, notes);
}

#[test]
fn collection_survives_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vault.db");
    let notes = sample_notes();

    {
        let conn = open_db(&path).unwrap();
        save_collection(&conn, NOTES_KEY, &notes).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let loaded: Vec<Note> = load_collection(&conn, NOTES_KEY);
    assert_eq!(loaded, notes);
}

#[test]
fn absent_key_loads_as_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    let loaded: Vec<Note> = load_collection(&conn, NOTES_KEY);
    assert!(loaded.is_empty());
}

#[test]
fn unparsable_value_loads_as_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_entries (key, value) VALUES (?1, ?2);",
        params![NOTES_KEY, "{not json at all"],
    )
    .unwrap();

    let loaded: Vec<Note> = load_collection(&conn, NOTES_KEY);
    assert!(loaded.is_empty());
}

#[test]
fn structurally_wrong_value_loads_as_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_entries (key, value) VALUES (?1, ?2);",
        params![NOTES_KEY, r#"{"id": "not-a-list"}"#],
    )
    .unwrap();

    let loaded: Vec<Note> = load_collection(&conn, NOTES_KEY);
    assert!(loaded.is_empty());
}

#[test]
fn notes_and_complaints_keys_are_independent() {
    let conn = open_db_in_memory().unwrap();
    let notes = sample_notes();
    let complaints =
        vec![Complaint::from_submission(&notes[0].id, "Ada", "broken link").unwrap()];

    save_collection(&conn, NOTES_KEY, &notes).unwrap();
    save_collection(&conn, COMPLAINTS_KEY, &complaints).unwrap();
    save_collection(&conn, NOTES_KEY, &notes[..1]).unwrap();

    let loaded_notes: Vec<Note> = load_collection(&conn, NOTES_KEY);
    let loaded_complaints: Vec<Complaint> = load_collection(&conn, COMPLAINTS_KEY);
    assert_eq!(loaded_notes.len(), 1);
    assert_eq!(loaded_complaints, complaints);
}
