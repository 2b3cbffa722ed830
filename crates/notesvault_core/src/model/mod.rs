//! Domain model for the two persisted vault collections.
//!
//! # Responsibility
//! - Define the Note and Complaint records and their wire shape.
//! - Own submission validation and id generation for new records.
//!
//! # Invariants
//! - `id` values are unique within their collection and never reused.
//! - Required fields are non-empty after trimming.

pub mod complaint;
mod id;
pub mod note;

pub use id::generate_id;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for a user-submitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty after trimming. Carries the wire field name.
    EmptyField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "required field `{field}` must not be empty"),
        }
    }
}

impl Error for ValidationError {}

/// Trims one required submission field, rejecting blank values.
pub(crate) fn require_field(name: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(name));
    }
    Ok(trimmed.to_string())
}
