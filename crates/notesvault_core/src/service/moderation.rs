//! Admin moderation actions over the two stores.
//!
//! # Responsibility
//! - Delete a note together with every complaint referencing it.
//! - Dismiss individual complaints.
//!
//! # Invariants
//! - Every action is refused while the gate is closed.
//! - Note deletion and its complaint cascade form one logical operation:
//!   both collections are persisted before success is reported.
//! - Dismissing a complaint never touches the note collection.

use crate::db::DbError;
use crate::service::gate::AdminGate;
use crate::store::complaint_store::ComplaintStore;
use crate::store::note_store::NoteStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModerationResult<T> = Result<T, ModerationError>;

/// Moderation failure: refused action or persistence failure.
#[derive(Debug)]
pub enum ModerationError {
    /// The capability gate is closed; the action was rejected.
    NotPermitted,
    /// Persistence failed while applying the action.
    Db(DbError),
}

impl Display for ModerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPermitted => write!(f, "admin action rejected: capability gate is closed"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ModerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotPermitted => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for ModerationError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Gate-checked moderation facade over the vault stores.
pub struct ModerationService<G: AdminGate> {
    gate: G,
}

impl<G: AdminGate> ModerationService<G> {
    /// Creates a service using the provided gate implementation.
    pub fn new(gate: G) -> Self {
        Self { gate }
    }

    /// Returns the underlying gate.
    pub fn gate(&self) -> &G {
        &self.gate
    }

    /// Returns the underlying gate for login/logout.
    pub fn gate_mut(&mut self) -> &mut G {
        &mut self.gate
    }

    /// Deletes the note and cascades away every complaint referencing it.
    ///
    /// Returns whether a note was removed; repeat calls with the same id are
    /// no-ops. The cascade only runs when a note was actually removed, so
    /// unrelated complaints are never touched.
    pub fn delete_note(
        &self,
        notes: &mut NoteStore<'_>,
        complaints: &mut ComplaintStore<'_>,
        id: &str,
    ) -> ModerationResult<bool> {
        self.check_gate()?;

        let removed = notes.delete(id)?;
        if removed {
            let cascaded = complaints.delete_by_note_id(id)?;
            info!("event=note_moderated module=service status=ok id={id} cascaded={cascaded}");
        }
        Ok(removed)
    }

    /// Dismisses one complaint; the note collection is never touched.
    ///
    /// Absent ids are a no-op, reported through the returned flag.
    pub fn dismiss_complaint(
        &self,
        complaints: &mut ComplaintStore<'_>,
        id: &str,
    ) -> ModerationResult<bool> {
        self.check_gate()?;

        let removed = complaints.delete(id)?;
        info!("event=complaint_dismissed module=service status=ok id={id} removed={removed}");
        Ok(removed)
    }

    fn check_gate(&self) -> ModerationResult<()> {
        if self.gate.is_admin() {
            Ok(())
        } else {
            Err(ModerationError::NotPermitted)
        }
    }
}
