//! Signed token creation.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use keyward_core::config::AuthConfig;
use keyward_entity::user::UserRole;

use super::TOKEN_ALGORITHM;
use super::claims::Claims;
use crate::error::TokenError;

/// Issues HS384 tokens with a fixed lifetime.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    ttl_seconds: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_seconds: i64::try_from(config.token_ttl_seconds).unwrap_or(i64::MAX / 2),
        }
    }

    /// Token lifetime in seconds.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Issue a token for `subject_id` starting now.
    pub fn issue(&self, subject_id: i64, role: UserRole) -> Result<String, TokenError> {
        self.issue_at(subject_id, role, Utc::now().timestamp())
    }

    /// Issue a token with an explicit issuance time.
    ///
    /// Output is deterministic for identical arguments.
    pub fn issue_at(&self, subject_id: i64, role: UserRole, now: i64) -> Result<String, TokenError> {
        let claims = Claims::new(subject_id, role, now, self.ttl_seconds);
        encode(&Header::new(TOKEN_ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}
