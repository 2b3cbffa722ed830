//! Query layer: search, subject filtering and pagination over notes.
//!
//! # Responsibility
//! - Turn (notes, query text, subject filter, page) into one page of results
//!   plus pagination metadata.
//! - Stay rendering-free: callable identically from a UI, a test harness or
//!   a script.

pub mod engine;
