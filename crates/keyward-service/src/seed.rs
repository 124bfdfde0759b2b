//! Bootstrap administrator creation.

use std::sync::Arc;

use tracing::info;

use keyward_auth::PasswordHasher;
use keyward_core::config::SeedConfig;
use keyward_core::result::AppResult;
use keyward_database::UserStore;
use keyward_entity::user::{CreateUser, User, UserRole};

use crate::credentials::{self, normalize_username};

/// Create the configured admin account if its username is free.
///
/// Returns the new account, or `None` when seeding is not configured or the
/// username already exists.
pub async fn seed_admin(
    users: &Arc<dyn UserStore>,
    hasher: &Arc<PasswordHasher>,
    config: &SeedConfig,
) -> AppResult<Option<User>> {
    let Some((username, password)) = config.admin_credentials() else {
        return Ok(None);
    };
    let username = normalize_username(username);

    if users.find_by_username(&username).await?.is_some() {
        info!(%username, "Seed admin already present");
        return Ok(None);
    }

    let email = config
        .admin_email
        .clone()
        .unwrap_or_else(|| format!("{username}@keyward.local"));
    let password_hash = credentials::hash(hasher, &username, password.trim()).await?;

    let user = users
        .create(CreateUser {
            username,
            email,
            password_hash,
            role: UserRole::Admin,
        })
        .await?;

    info!(user_id = user.id, username = %user.username, "Seeded admin account");
    Ok(Some(user))
}
