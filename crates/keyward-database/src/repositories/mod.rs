//! Account store trait and its implementations.

pub mod memory;
pub mod user;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use keyward_core::config::DatabaseConfig;
use keyward_core::error::AppError;
use keyward_core::result::AppResult;
use keyward_entity::user::{AdminUpdateUser, CreateUser, UpdateProfile, User};

pub use memory::MemoryUserRepository;
pub use user::PgUserRepository;

/// Persistent storage for user accounts.
///
/// Soft-deleted accounts are invisible to every lookup. Username and email
/// comparisons are case-insensitive.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// Find a live account by id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find a live account by username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// All live accounts ordered by id.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a new account. Duplicate usernames or emails yield `Conflict`.
    async fn create(&self, data: CreateUser) -> AppResult<User>;

    /// Apply self-service profile changes.
    async fn update_profile(&self, id: i64, data: UpdateProfile) -> AppResult<User>;

    /// Replace the stored password hash.
    async fn update_password(&self, id: i64, password_hash: &str) -> AppResult<()>;

    /// Apply administrative changes (role, contact data, enabled flag).
    async fn admin_update(&self, id: i64, data: AdminUpdateUser) -> AppResult<User>;

    /// Mark an account deleted. Its username and email become free again.
    async fn soft_delete(&self, id: i64) -> AppResult<()>;

    /// Verify the backing store is reachable.
    async fn ping(&self) -> AppResult<()>;
}

/// Build the store selected by `database.provider`.
pub async fn connect_user_store(config: &DatabaseConfig) -> AppResult<Arc<dyn UserStore>> {
    let store: Arc<dyn UserStore> = match config.provider.as_str() {
        "postgres" => {
            info!("Initializing PostgreSQL account store");
            let pool = crate::DatabasePool::connect(config).await?;
            if config.run_migrations {
                crate::migration::run_migrations(pool.pool()).await?;
            }
            Arc::new(PgUserRepository::new(pool))
        }
        "memory" => {
            info!("Initializing in-memory account store");
            Arc::new(MemoryUserRepository::new())
        }
        other => {
            return Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: memory, postgres"
            )));
        }
    };
    Ok(store)
}
