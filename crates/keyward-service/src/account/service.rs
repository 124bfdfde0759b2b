//! Login, registration and self-service profile operations.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use keyward_auth::{AccessError, Identity, JwtEncoder, PasswordHasher};
use keyward_core::error::AppError;
use keyward_core::result::AppResult;
use keyward_database::UserStore;
use keyward_entity::user::{CreateUser, UpdateProfile, User, UserRole};

use crate::credentials::{self, normalize_username};

/// A freshly issued token together with the account it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// Signed bearer token.
    pub token: String,
    /// The authenticated account.
    pub user: User,
}

/// Handles the operations a caller performs on their own account.
#[derive(Debug, Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<PasswordHasher>, encoder: Arc<JwtEncoder>) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Authenticate with username and password and issue a token.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller, in both the response and the hashing work spent.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResult> {
        let username = normalize_username(username);
        let password = password.trim();

        let Some(user) = self.users.find_by_username(&username).await? else {
            credentials::verify_decoy(&self.hasher, &username, password).await?;
            debug!(%username, "Login for unknown user");
            return Err(AccessError::InvalidCredentials.into());
        };

        if !credentials::verify(&self.hasher, &user.password_hash, &user.username, password).await? {
            debug!(user_id = user.id, "Login with wrong password");
            return Err(AccessError::InvalidCredentials.into());
        }

        if !user.account_enabled {
            return Err(AccessError::AccountDisabled.into());
        }

        let token = self.encoder.issue(user.id, user.role)?;
        info!(user_id = user.id, "User logged in");
        Ok(LoginResult { token, user })
    }

    /// Create a `default`-role account and log it in.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<LoginResult> {
        let username = normalize_username(username);
        let password = password.trim();

        let password_hash = credentials::hash(&self.hasher, &username, password).await?;
        let user = self
            .users
            .create(CreateUser {
                username,
                email: email.trim().to_string(),
                password_hash,
                role: UserRole::Default,
            })
            .await?;

        let token = self.encoder.issue(user.id, user.role)?;
        info!(user_id = user.id, username = %user.username, "User registered");
        Ok(LoginResult { token, user })
    }

    /// The caller's own account.
    pub async fn profile(&self, identity: &Identity) -> AppResult<User> {
        self.users
            .find_by_id(identity.subject_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Change the caller's email and/or phone number.
    pub async fn update_profile(&self, identity: &Identity, changes: UpdateProfile) -> AppResult<User> {
        let user = self.users.update_profile(identity.subject_id, changes).await?;
        info!(user_id = user.id, "Profile updated");
        Ok(user)
    }

    /// Replace the caller's password.
    ///
    /// The stored username is the hash identity, so the new hash verifies at
    /// the next login.
    pub async fn change_password(&self, identity: &Identity, password: &str) -> AppResult<()> {
        let user = self.profile(identity).await?;
        let password_hash = credentials::hash(&self.hasher, &user.username, password.trim()).await?;
        self.users.update_password(user.id, &password_hash).await?;
        info!(user_id = user.id, "Password changed");
        Ok(())
    }

    /// Soft-delete the caller's account.
    pub async fn delete_account(&self, identity: &Identity) -> AppResult<()> {
        self.users.soft_delete(identity.subject_id).await?;
        info!(user_id = identity.subject_id, "Account deleted");
        Ok(())
    }
}
