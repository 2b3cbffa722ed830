//! Complaint collection store.
//!
//! # Responsibility
//! - create/list/delete complaints against the persisted
//!   `notes_complaints_v1` entry.
//! - Provide the by-note cascade used by moderation.
//!
//! # Invariants
//! - New complaints are prepended.
//! - `note_id` is stored as-is; no existence check against the note store.

use crate::db::kv::{load_collection, save_collection, COMPLAINTS_KEY};
use crate::db::DbResult;
use crate::model::complaint::Complaint;
use crate::store::StoreResult;
use log::info;
use rusqlite::Connection;

/// Store owning the Complaint collection for one vault database.
pub struct ComplaintStore<'conn> {
    conn: &'conn Connection,
    complaints: Vec<Complaint>,
}

impl<'conn> ComplaintStore<'conn> {
    /// Opens the store, loading the persisted collection once.
    ///
    /// Absent or corrupt persisted state yields an empty collection.
    pub fn open(conn: &'conn Connection) -> Self {
        let complaints = load_collection(conn, COMPLAINTS_KEY);
        Self { conn, complaints }
    }

    /// Returns all complaints, newest first.
    pub fn list(&self) -> &[Complaint] {
        &self.complaints
    }

    /// Creates a validated complaint, prepends it and persists.
    ///
    /// # Errors
    /// - `StoreError::Validation` when `reason` is blank after trimming.
    /// - `StoreError::Db` when the flush fails; the in-memory collection is
    ///   rolled back so it keeps matching the persisted state.
    pub fn create(&mut self, note_id: &str, name: &str, reason: &str) -> StoreResult<Complaint> {
        let complaint = Complaint::from_submission(note_id, name, reason)?;
        self.complaints.insert(0, complaint.clone());
        if let Err(err) = self.flush() {
            self.complaints.remove(0);
            return Err(err.into());
        }

        info!(
            "event=complaint_create module=store status=ok id={} note_id={}",
            complaint.id, complaint.note_id
        );
        Ok(complaint)
    }

    /// Removes the complaint with the given id.
    ///
    /// Returns whether a removal occurred; absent ids are a no-op. The
    /// collection is persisted either way.
    pub fn delete(&mut self, id: &str) -> DbResult<bool> {
        let before = self.complaints.len();
        self.complaints.retain(|complaint| complaint.id != id);
        let removed = self.complaints.len() < before;
        self.flush()?;

        info!("event=complaint_delete module=store status=ok id={id} removed={removed}");
        Ok(removed)
    }

    /// Removes every complaint referencing `note_id` and returns the count.
    ///
    /// Cascade helper for the moderation layer; the collection is persisted
    /// even when nothing matched.
    pub fn delete_by_note_id(&mut self, note_id: &str) -> DbResult<usize> {
        let before = self.complaints.len();
        self.complaints
            .retain(|complaint| complaint.note_id != note_id);
        let removed = before - self.complaints.len();
        self.flush()?;

        info!(
            "event=complaint_cascade module=store status=ok note_id={note_id} removed={removed}"
        );
        Ok(removed)
    }

    fn flush(&self) -> DbResult<()> {
        save_collection(self.conn, COMPLAINTS_KEY, &self.complaints)
    }
}
