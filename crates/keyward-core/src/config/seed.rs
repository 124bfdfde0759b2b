//! Startup seeding configuration.

use serde::{Deserialize, Serialize};

/// Optional bootstrap administrator created on first start.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Username of the bootstrap admin.
    #[serde(default)]
    pub admin_username: Option<String>,
    /// Plaintext password of the bootstrap admin.
    #[serde(default)]
    pub admin_password: Option<String>,
    /// Email of the bootstrap admin.
    #[serde(default)]
    pub admin_email: Option<String>,
}

impl SeedConfig {
    /// Returns `(username, password)` when both are configured and non-empty.
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        match (self.admin_username.as_deref(), self.admin_password.as_deref()) {
            (Some(u), Some(p)) if !u.trim().is_empty() && !p.trim().is_empty() => Some((u, p)),
            _ => None,
        }
    }
}

impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field("admin_username", &self.admin_username)
            .field("admin_password", &self.admin_password.as_ref().map(|_| "<redacted>"))
            .field("admin_email", &self.admin_email)
            .finish()
    }
}
