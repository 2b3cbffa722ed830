//! Deployment configuration for the vault core.
//!
//! # Responsibility
//! - Hold the runtime-tunable values with defaults matching the original
//!   deployment: page size and the admin credential pair.
//!
//! # Invariants
//! - A `page_size` of 0 is treated as the default by the query layer.

use serde::Deserialize;

/// Notes shown per result page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

const DEFAULT_ADMIN_USERNAME: &str = "Admin";
const DEFAULT_ADMIN_PASSWORD: &str = "Admin1010";

/// Fixed credential pair backing the admin capability gate.
///
/// This feeds a capability gate, not a security boundary: no hashing, no
/// session token, no expiry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

/// Runtime configuration for one vault deployment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Notes per page for query results.
    pub page_size: u32,
    /// Credential pair accepted by the admin gate.
    pub admin: AdminCredentials,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            admin: AdminCredentials::default(),
        }
    }
}
