//! Collection-owning stores over the key-value persistence adapter.
//!
//! # Responsibility
//! - Own the in-memory notes/complaints collections with an explicit
//!   load-once / flush-on-every-mutation lifecycle.
//! - Return semantic results (removed or not) instead of errors for absent
//!   ids.
//!
//! # Invariants
//! - Newly created records are prepended (reverse-chronological order).
//! - `id` uniqueness holds within each collection.

pub mod complaint_store;
pub mod note_store;

use crate::db::DbError;
use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error: rejected submission or persistence failure.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}
