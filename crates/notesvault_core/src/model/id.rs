//! Collision-resistant id generation without central coordination.
//!
//! Ids combine a base-36 unix-millis prefix with a random suffix so that
//! independent running instances can mint ids concurrently. The timestamp
//! keeps ids roughly sortable; the suffix disambiguates ids minted within
//! the same millisecond.

use chrono::Utc;
use uuid::Uuid;

const RANDOM_SUFFIX_LEN: usize = 12;

/// Generates a fresh opaque id for a new vault record.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(RANDOM_SUFFIX_LEN)
        .collect();
    format!("{}{suffix}", to_base36(millis))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}
