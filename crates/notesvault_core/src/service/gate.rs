//! Admin capability gate.
//!
//! A binary permission check guarding moderation actions. Explicitly a
//! capability gate, not a security boundary: no hashing, no session token,
//! no expiry.

use crate::config::AdminCredentials;
use log::info;

/// Capability check consulted before every moderation action.
pub trait AdminGate {
    /// Returns whether admin actions are currently permitted.
    fn is_admin(&self) -> bool;
}

/// Gate established by comparing supplied credentials against a fixed
/// configured pair.
#[derive(Debug, Clone)]
pub struct CredentialGate {
    credentials: AdminCredentials,
    authenticated: bool,
}

impl CredentialGate {
    /// Creates a closed gate for the configured credential pair.
    pub fn new(credentials: AdminCredentials) -> Self {
        Self {
            credentials,
            authenticated: false,
        }
    }

    /// Attempts to open the gate; returns whether the credentials matched.
    ///
    /// The username is trimmed before comparison, the password is not. A
    /// failed attempt leaves an already-open gate open.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let matched =
            username.trim() == self.credentials.username && password == self.credentials.password;
        if matched {
            self.authenticated = true;
        }
        info!(
            "event=admin_login module=service status={}",
            if matched { "ok" } else { "rejected" }
        );
        matched
    }

    /// Closes the gate.
    pub fn logout(&mut self) {
        self.authenticated = false;
        info!("event=admin_logout module=service status=ok");
    }
}

impl AdminGate for CredentialGate {
    fn is_admin(&self) -> bool {
        self.authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::{AdminGate, CredentialGate};
    use crate::config::AdminCredentials;

    fn gate() -> CredentialGate {
        CredentialGate::new(AdminCredentials::default())
    }

    #[test]
    fn gate_starts_closed() {
        assert!(!gate().is_admin());
    }

    #[test]
    fn matching_credentials_open_the_gate() {
        let mut gate = gate();
        assert!(gate.login(" Admin ", "Admin1010"));
        assert!(gate.is_admin());
    }

    #[test]
    fn password_is_compared_verbatim() {
        let mut gate = gate();
        assert!(!gate.login("Admin", " Admin1010 "));
        assert!(!gate.is_admin());
    }

    #[test]
    fn failed_attempt_leaves_open_gate_open() {
        let mut gate = gate();
        assert!(gate.login("Admin", "Admin1010"));
        assert!(!gate.login("Admin", "wrong"));
        assert!(gate.is_admin());
    }

    #[test]
    fn logout_closes_the_gate() {
        let mut gate = gate();
        gate.login("Admin", "Admin1010");
        gate.logout();
        assert!(!gate.is_admin());
    }
}
