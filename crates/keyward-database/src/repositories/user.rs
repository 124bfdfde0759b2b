//! PostgreSQL account store.

use async_trait::async_trait;

use keyward_core::error::{AppError, ErrorKind};
use keyward_core::result::AppResult;
use keyward_entity::user::{AdminUpdateUser, CreateUser, UpdateProfile, User};

use super::UserStore;
use crate::DatabasePool;

/// Account store backed by the `users` table.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    db: DatabasePool,
}

impl PgUserRepository {
    /// Create a repository over an open pool.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

/// Map sqlx failures, turning unique-index violations into `Conflict`.
fn map_write_error(e: sqlx::Error, context: &str) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            let field = match db.constraint() {
                Some("users_email_key") => "Email",
                _ => "Username",
            };
            return AppError::conflict(format!("{field} already in use"));
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), e)
}

fn map_read_error(e: sqlx::Error, context: &str) -> AppError {
    AppError::with_source(ErrorKind::Database, context.to_string(), e)
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| map_read_error(e, "Failed to find user by id"))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE LOWER(username) = LOWER($1) AND deleted_at IS NULL",
        )
        .bind(username)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| map_read_error(e, "Failed to find user by username"))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE deleted_at IS NULL ORDER BY id")
            .fetch_all(self.db.pool())
            .await
            .map_err(|e| map_read_error(e, "Failed to list users"))
    }

    async fn create(&self, data: CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (username, email, password_hash, role)
               VALUES ($1, $2, $3, $4)
               RETURNING *"#,
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| map_write_error(e, "Failed to create user"))
    }

    async fn update_profile(&self, id: i64, data: UpdateProfile) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"UPDATE users SET
                email = COALESCE($2, email),
                phone = COALESCE($3, phone),
                updated_at = NOW()
               WHERE id = $1 AND deleted_at IS NULL
               RETURNING *"#,
        )
        .bind(id)
        .bind(&data.email)
        .bind(&data.phone)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| map_write_error(e, "Failed to update profile"))?
        .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(password_hash)
        .execute(self.db.pool())
        .await
        .map_err(|e| map_write_error(e, "Failed to update password"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found"));
        }
        Ok(())
    }

    async fn admin_update(&self, id: i64, data: AdminUpdateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"UPDATE users SET
                role = COALESCE($2, role),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                account_enabled = COALESCE($5, account_enabled),
                updated_at = NOW()
               WHERE id = $1 AND deleted_at IS NULL
               RETURNING *"#,
        )
        .bind(id)
        .bind(data.role)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.account_enabled)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| map_write_error(e, "Failed to update user"))?
        .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE users SET deleted_at = NOW(), updated_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(self.db.pool())
        .await
        .map_err(|e| map_write_error(e, "Failed to delete user"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found"));
        }
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.ping().await
    }
}
