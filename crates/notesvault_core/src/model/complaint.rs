//! Complaint record: a flag raised against a note.
//!
//! # Invariants
//! - `reason` is non-empty after trimming.
//! - `note_id` is a weak reference: the referent may no longer exist, and
//!   resolution is the presentation layer's lookup, never the core's.

use crate::model::{generate_id, require_field, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A flag raised against a note, carrying a mandatory reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Opaque unique id.
    pub id: String,
    /// Weak reference to the flagged note; stored as-is, never validated.
    pub note_id: String,
    /// Complainant display name; may be empty (presentation shows a default).
    pub name: String,
    /// Why the note was flagged.
    pub reason: String,
    /// Creation timestamp (ISO-8601 on the wire).
    pub created_at: DateTime<Utc>,
}

impl Complaint {
    /// Builds a validated complaint from raw submission fields.
    ///
    /// Only `reason` is mandatory; `note_id` and `name` are trimmed and
    /// stored as-is, empty values included.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyField`] when `reason` is blank.
    pub fn from_submission(
        note_id: &str,
        name: &str,
        reason: &str,
    ) -> Result<Self, ValidationError> {
        let reason = require_field("reason", reason)?;

        Ok(Self {
            id: generate_id(),
            note_id: note_id.trim().to_string(),
            name: name.trim().to_string(),
            reason,
            created_at: Utc::now(),
        })
    }
}
