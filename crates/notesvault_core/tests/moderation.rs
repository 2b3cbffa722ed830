use notesvault_core::db::open_db_in_memory;
use notesvault_core::{
    AdminCredentials, Complaint, ComplaintStore, CredentialGate, ModerationError,
    ModerationService, Note, NoteStore,
};
use rusqlite::Connection;

fn open_service() -> ModerationService<CredentialGate> {
    let mut gate = CredentialGate::new(AdminCredentials::default());
    assert!(gate.login("Admin", "Admin1010"));
    ModerationService::new(gate)
}

#[test]
fn actions_are_rejected_while_gate_is_closed() {
    let conn = open_db_in_memory().unwrap();
    let mut notes = NoteStore::open(&conn);
    let mut complaints = ComplaintStore::open(&conn);
    let note = seed_note(&mut notes);

    let mut service = ModerationService::new(CredentialGate::new(AdminCredentials::default()));

    let err = service
        .delete_note(&mut notes, &mut complaints, &note.id)
        .unwrap_err();
    assert!(matches!(err, ModerationError::NotPermitted));
    assert_eq!(notes.list().len(), 1, "rejected action must not mutate");

    let err = service
        .dismiss_complaint(&mut complaints, "any")
        .unwrap_err();
    assert!(matches!(err, ModerationError::NotPermitted));

    // Wrong credentials keep the gate closed; right ones open it.
    assert!(!service.gate_mut().login("Admin", "nope"));
    assert!(service.gate_mut().login("Admin", "Admin1010"));
    assert!(service
        .delete_note(&mut notes, &mut complaints, &note.id)
        .unwrap());
}

#[test]
fn delete_note_cascades_only_matching_complaints() {
    let conn = open_db_in_memory().unwrap();
    let mut notes = NoteStore::open(&conn);
    let mut complaints = ComplaintStore::open(&conn);

    let target = seed_note(&mut notes);
    let other = notes
        .create("MA101", "Calculus", "Limits", "b/limits.pdf")
        .unwrap();
    complaints.create(&target.id, "Ada", "broken link").unwrap();
    complaints.create(&other.id, "Ben", "wrong file").unwrap();
    complaints.create(&target.id, "", "duplicate").unwrap();

    let service = open_service();
    assert!(service
        .delete_note(&mut notes, &mut complaints, &target.id)
        .unwrap());

    assert_eq!(notes.list().len(), 1);
    assert_eq!(notes.list()[0].id, other.id);
    assert_eq!(complaints.list().len(), 1);
    assert_eq!(complaints.list()[0].note_id, other.id);
}

#[test]
fn repeated_delete_of_same_note_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let mut notes = NoteStore::open(&conn);
    let mut complaints = ComplaintStore::open(&conn);
    let note = seed_note(&mut notes);
    complaints.create(&note.id, "Ada", "broken link").unwrap();

    let service = open_service();
    assert!(service
        .delete_note(&mut notes, &mut complaints, &note.id)
        .unwrap());
    assert!(!service
        .delete_note(&mut notes, &mut complaints, &note.id)
        .unwrap());
    assert!(notes.list().is_empty());
    assert!(complaints.list().is_empty());
}

#[test]
fn cascade_is_visible_after_reopening_both_stores() {
    let conn = open_db_in_memory().unwrap();
    let mut notes = NoteStore::open(&conn);
    let mut complaints = ComplaintStore::open(&conn);
    let note = seed_note(&mut notes);
    complaints.create(&note.id, "Ada", "broken link").unwrap();

    let service = open_service();
    service
        .delete_note(&mut notes, &mut complaints, &note.id)
        .unwrap();

    assert!(NoteStore::open(&conn).list().is_empty());
    assert!(ComplaintStore::open(&conn).list().is_empty());
}

#[test]
fn dismiss_removes_one_complaint_and_never_touches_notes() {
    let conn = open_db_in_memory().unwrap();
    let mut notes = NoteStore::open(&conn);
    let mut complaints = ComplaintStore::open(&conn);

    let note = seed_note(&mut notes);
    let kept = complaints.create(&note.id, "Ada", "broken link").unwrap();
    let dismissed = complaints.create(&note.id, "Ben", "spam").unwrap();
    let notes_before: Vec<Note> = notes.list().to_vec();

    let service = open_service();
    assert!(service
        .dismiss_complaint(&mut complaints, &dismissed.id)
        .unwrap());
    assert!(!service
        .dismiss_complaint(&mut complaints, &dismissed.id)
        .unwrap());

    let remaining: Vec<Complaint> = complaints.list().to_vec();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
    assert_eq!(notes.list(), notes_before.as_slice());
}

#[test]
fn orphan_complaints_are_swept_by_the_next_cascade_for_that_note() {
    let conn = open_db_in_memory().unwrap();
    let mut notes = NoteStore::open(&conn);
    let mut complaints = ComplaintStore::open(&conn);
    let note = seed_note(&mut notes);

    // A complaint may reference a note that is already gone (weak reference).
    complaints.create("gone-note", "Ada", "stale").unwrap();
    complaints.create(&note.id, "Ben", "spam").unwrap();

    let service = open_service();
    assert!(!service
        .delete_note(&mut notes, &mut complaints, "gone-note")
        .unwrap());
    // No note removed, so no cascade ran and the orphan survives until then.
    assert_eq!(complaints.list().len(), 2);
    assert_eq!(count_kv_rows(&conn), 2);
}

fn seed_note(notes: &mut NoteStore<'_>) -> Note {
    notes
        .create("CS201", "Data Structures", "AVL Trees", "a/avl.pdf")
        .unwrap()
}

fn count_kv_rows(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap()
}
