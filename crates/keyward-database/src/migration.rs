//! Schema migrations for the PostgreSQL account store.

use sqlx::PgPool;
use tracing::info;

use keyward_core::error::{AppError, ErrorKind};

/// Apply every pending migration under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
        })?;

    info!("Account store schema is up to date");
    Ok(())
}
