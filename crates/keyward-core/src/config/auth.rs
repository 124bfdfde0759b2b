//! Authentication configuration.

use serde::{Deserialize, Serialize};

const PLACEHOLDER_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";
const PLACEHOLDER_PEPPER: &str = "CHANGE_ME_PEPPER";

/// Authentication and credential configuration.
///
/// Every value here is read once at startup and injected into the token
/// issuer, token validator and password hasher. Rotating `jwt_secret`
/// invalidates every issued token; rotating `pepper` makes every stored
/// hash unverifiable.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA384).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Secret mixed into every password before hashing.
    #[serde(default = "default_pepper")]
    pub pepper: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
    /// Argon2 iteration count.
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_hash_memory")]
    pub hash_memory_kib: u32,
}

impl AuthConfig {
    /// Whether either secret is still the value shipped in the defaults.
    pub fn uses_placeholder_secrets(&self) -> bool {
        self.jwt_secret == PLACEHOLDER_SECRET || self.pepper == PLACEHOLDER_PEPPER
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            pepper: default_pepper(),
            token_ttl_seconds: default_token_ttl(),
            hash_cost: default_hash_cost(),
            hash_memory_kib: default_hash_memory(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("pepper", &"<redacted>")
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .field("hash_cost", &self.hash_cost)
            .field("hash_memory_kib", &self.hash_memory_kib)
            .finish()
    }
}

fn default_jwt_secret() -> String {
    PLACEHOLDER_SECRET.to_string()
}

fn default_pepper() -> String {
    PLACEHOLDER_PEPPER.to_string()
}

fn default_token_ttl() -> u64 {
    86_400
}

fn default_hash_cost() -> u32 {
    7
}

fn default_hash_memory() -> u32 {
    19_456
}
