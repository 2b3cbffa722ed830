//! Note collection store.
//!
//! # Responsibility
//! - create/list/delete notes against the persisted `notes_vault_v1` entry.
//!
//! # Invariants
//! - New notes are prepended.
//! - `delete` never touches complaints; the cascade belongs to moderation.

use crate::db::kv::{load_collection, save_collection, NOTES_KEY};
use crate::db::DbResult;
use crate::model::note::Note;
use crate::store::StoreResult;
use log::info;
use rusqlite::Connection;

/// Store owning the Note collection for one vault database.
pub struct NoteStore<'conn> {
    conn: &'conn Connection,
    notes: Vec<Note>,
}

impl<'conn> NoteStore<'conn> {
    /// Opens the store, loading the persisted collection once.
    ///
    /// Absent or corrupt persisted state yields an empty collection.
    pub fn open(conn: &'conn Connection) -> Self {
        let notes = load_collection(conn, NOTES_KEY);
        Self { conn, notes }
    }

    /// Returns all notes, newest first.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// Creates a validated note, prepends it and persists the collection.
    ///
    /// # Errors
    /// - `StoreError::Validation` when any field is blank after trimming;
    ///   the collection is left unchanged.
    /// - `StoreError::Db` when the flush fails; the in-memory collection is
    ///   rolled back so it keeps matching the persisted state.
    pub fn create(
        &mut self,
        sub_code: &str,
        sub_name: &str,
        topic: &str,
        notes_link: &str,
    ) -> StoreResult<Note> {
        let note = Note::from_submission(sub_code, sub_name, topic, notes_link)?;
        self.notes.insert(0, note.clone());
        if let Err(err) = self.flush() {
            self.notes.remove(0);
            return Err(err.into());
        }

        info!(
            "event=note_create module=store status=ok id={} subject={}",
            note.id, note.sub_name
        );
        Ok(note)
    }

    /// Removes the note with the given id.
    ///
    /// Returns whether a removal occurred. The collection is persisted either
    /// way, so repeated calls with the same id are idempotent.
    pub fn delete(&mut self, id: &str) -> DbResult<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() < before;
        self.flush()?;

        info!("event=note_delete module=store status=ok id={id} removed={removed}");
        Ok(removed)
    }

    fn flush(&self) -> DbResult<()> {
        save_collection(self.conn, NOTES_KEY, &self.notes)
    }
}
