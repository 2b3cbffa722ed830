//! Note record: a submitted reference to external study material.
//!
//! # Responsibility
//! - Define the persisted Note shape (camelCase wire names).
//! - Validate submissions and derive the display label from the link.
//!
//! # Invariants
//! - All four submitted fields are non-empty after trimming.
//! - `notes_name` is derivable from `notes_link` alone.

use crate::model::{generate_id, require_field, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted reference to study material.
///
/// `notes_link` is an opaque URI handed to the rendering layer for
/// navigation/download; the core never fetches or validates its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Opaque globally unique id.
    pub id: String,
    /// Subject code, e.g. `CS201`.
    pub sub_code: String,
    /// Human-readable subject name; exact-match target of the subject filter.
    pub sub_name: String,
    /// Topic covered by the material.
    pub topic: String,
    /// URI of the material.
    pub notes_link: String,
    /// Display label: last `/`-separated segment of `notes_link`.
    pub notes_name: String,
    /// Creation timestamp (ISO-8601 on the wire).
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Builds a validated note from raw submission fields.
    ///
    /// Fields are trimmed before validation; `notes_name` is derived and
    /// `created_at` stamped here so callers only supply user input.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyField`] naming the first blank field.
    pub fn from_submission(
        sub_code: &str,
        sub_name: &str,
        topic: &str,
        notes_link: &str,
    ) -> Result<Self, ValidationError> {
        let sub_code = require_field("subCode", sub_code)?;
        let sub_name = require_field("subName", sub_name)?;
        let topic = require_field("topic", topic)?;
        let notes_link = require_field("notesLink", notes_link)?;
        let notes_name = derive_notes_name(&notes_link);

        Ok(Self {
            id: generate_id(),
            sub_code,
            sub_name,
            topic,
            notes_link,
            notes_name,
            created_at: Utc::now(),
        })
    }
}

/// Derives the display label for a link.
///
/// Takes the last `/`-separated segment; falls back to the full link when no
/// separator exists or the last segment is empty (trailing slash).
pub fn derive_notes_name(notes_link: &str) -> String {
    match notes_link.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => notes_link.to_string(),
    }
}
