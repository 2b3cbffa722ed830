//! Whole-collection key-value persistence.
//!
//! # Responsibility
//! - Load and save ordered JSON record collections under fixed keys.
//!
//! # Invariants
//! - `load_collection` never fails: absent or corrupt state degrades to an
//!   empty collection.
//! - `save_collection` replaces the stored value in a single statement, so
//!   the swap is atomic from the caller's point of view.
//!
//! Two independent processes writing the same key race on whole-document
//! overwrite (last save wins). That is a documented limitation of the storage
//! model, not something this layer tries to mitigate.

use crate::db::{DbError, DbResult};
use log::{error, warn};
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage key for the notes collection.
pub const NOTES_KEY: &str = "notes_vault_v1";
/// Storage key for the complaints collection.
pub const COMPLAINTS_KEY: &str = "notes_complaints_v1";

/// Loads one record collection, treating corrupt data as "no data".
pub fn load_collection<T: DeserializeOwned>(conn: &Connection, key: &str) -> Vec<T> {
    let raw = match read_value(conn, key) {
        Ok(value) => value,
        Err(err) => {
            error!("event=kv_load module=db status=error key={key} error={err}");
            return Vec::new();
        }
    };

    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(err) => {
            warn!("event=kv_load module=db status=corrupt key={key} error={err}");
            Vec::new()
        }
    }
}

/// Replaces the whole stored collection under `key`.
pub fn save_collection<T: Serialize>(conn: &Connection, key: &str, records: &[T]) -> DbResult<()> {
    let encoded = serde_json::to_string(records).map_err(DbError::Encode)?;
    conn.execute(
        "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
        params![key, encoded],
    )?;
    Ok(())
}

fn read_value(conn: &Connection, key: &str) -> rusqlite::Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM kv_entries WHERE key = ?1;")?;
    let mut rows = stmt.query([key])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(row.get(0)?));
    }
    Ok(None)
}
