//! Token validation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;

use keyward_core::config::AuthConfig;

use super::TOKEN_ALGORITHM;
use super::claims::{Claims, Identity};
use crate::error::TokenError;

/// The only header field inspected before the signature is checked.
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// Validates tokens issued by [`JwtEncoder`](super::JwtEncoder).
///
/// Checks run in a fixed order: shape, algorithm, signature, freshness.
/// A token that fails an earlier check is never inspected further.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("algorithms", &self.validation.algorithms)
            .finish_non_exhaustive()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        // Freshness is checked against our own clock with zero leeway.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Validate `token` against the current time.
    pub fn validate(&self, token: &str) -> Result<Identity, TokenError> {
        self.validate_at(token, Utc::now().timestamp())
    }

    /// Validate `token` as if the current time were `now`.
    pub fn validate_at(&self, token: &str, now: i64) -> Result<Identity, TokenError> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
            return Err(TokenError::Malformed);
        }

        let header: RawHeader = URL_SAFE_NO_PAD
            .decode(segments[0])
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or(TokenError::Malformed)?;
        if header.alg != "HS384" {
            return Err(TokenError::AlgorithmMismatch);
        }
        if URL_SAFE_NO_PAD.decode(segments[2]).is_err() {
            return Err(TokenError::BadSignature);
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                JwtErrorKind::InvalidSignature => TokenError::BadSignature,
                JwtErrorKind::InvalidAlgorithm => TokenError::AlgorithmMismatch,
                _ => TokenError::Malformed,
            })?
            .claims;

        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        let subject_id = claims
            .user_id
            .parse::<i64>()
            .map_err(|_| TokenError::Malformed)?;

        Ok(Identity {
            subject_id,
            role: claims.role,
        })
    }
}
