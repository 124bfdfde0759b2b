//! Argon2id credential hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use keyward_core::config::AuthConfig;

use crate::error::CredentialError;

/// Hashes `identity ‖ secret ‖ pepper` with Argon2id and a random salt.
///
/// The output is a PHC string carrying salt and cost parameters, so hashes
/// created under an older `hash_cost` keep verifying after it changes.
#[derive(Clone)]
pub struct PasswordHasher {
    pepper: String,
    params: Params,
    /// Hash under the configured cost that no login attempt matches.
    decoy: String,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("t_cost", &self.params.t_cost())
            .field("m_cost", &self.params.m_cost())
            .finish_non_exhaustive()
    }
}

impl PasswordHasher {
    /// Build a hasher from the `auth` configuration section.
    pub fn new(config: &AuthConfig) -> Result<Self, CredentialError> {
        let params = Params::new(config.hash_memory_kib, config.hash_cost, 1, None)
            .map_err(|e| CredentialError::Hashing(e.to_string()))?;
        let mut hasher = Self {
            pepper: config.pepper.clone(),
            params,
            decoy: String::new(),
        };
        hasher.decoy = hasher.hash_material(b"\0keyward-decoy\0")?;
        Ok(hasher)
    }

    fn material(&self, identity: &str, secret: &str) -> String {
        let mut material = String::with_capacity(identity.len() + secret.len() + self.pepper.len());
        material.push_str(identity);
        material.push_str(secret);
        material.push_str(&self.pepper);
        material
    }

    /// Produce a storable hash. Empty `identity` or `secret` is rejected.
    pub fn hash(&self, identity: &str, secret: &str) -> Result<String, CredentialError> {
        if identity.is_empty() || secret.is_empty() {
            return Err(CredentialError::InvalidInput);
        }

        self.hash_material(self.material(identity, secret).as_bytes())
    }

    fn hash_material(&self, material: &[u8]) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        argon2
            .hash_password(material, &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CredentialError::Hashing(e.to_string()))
    }

    /// Check an attempt against a stored hash in constant time.
    ///
    /// Returns `Ok(false)` on mismatch and `CorruptHash` when `hash` is not a
    /// parseable PHC string.
    pub fn verify(&self, hash: &str, identity: &str, secret: &str) -> Result<bool, CredentialError> {
        let parsed = PasswordHash::new(hash).map_err(|e| CredentialError::CorruptHash(e.to_string()))?;

        match Argon2::default().verify_password(self.material(identity, secret).as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(CredentialError::CorruptHash(e.to_string())),
        }
    }

    /// Run a full verification against the decoy hash and reject.
    ///
    /// Used when no stored hash exists for `identity`, so an unknown
    /// account costs the same work as a wrong password.
    pub fn verify_decoy(&self, identity: &str, secret: &str) -> Result<bool, CredentialError> {
        self.verify(&self.decoy, identity, secret)?;
        Ok(false)
    }
}
