//! Core domain logic for Notes Vault.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use config::{AdminCredentials, VaultConfig, DEFAULT_PAGE_SIZE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::complaint::Complaint;
pub use model::note::Note;
pub use model::{generate_id, ValidationError};
pub use query::engine::{query_notes, subject_options, NotesPage, NotesQuery, QueryEngine};
pub use service::gate::{AdminGate, CredentialGate};
pub use service::moderation::{ModerationError, ModerationResult, ModerationService};
pub use store::complaint_store::ComplaintStore;
pub use store::note_store::NoteStore;
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
