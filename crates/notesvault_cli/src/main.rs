//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notesvault_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use notesvault_core::db::open_db_in_memory;
use notesvault_core::{core_version, query_notes, NoteStore, NotesQuery};

fn main() {
    println!("notesvault_core version={}", core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory vault: {err}");
            std::process::exit(1);
        }
    };

    let mut notes = NoteStore::open(&conn);
    if let Err(err) = notes.create(
        "CS201",
        "Data Structures",
        "AVL Trees",
        "https://example.org/files/avl.pdf",
    ) {
        eprintln!("smoke create failed: {err}");
        std::process::exit(1);
    }

    let page = query_notes(notes.list(), &NotesQuery::new("", ""));
    println!(
        "notesvault_core smoke notes={} pages={}",
        page.filtered_count, page.total_pages
    );
}
