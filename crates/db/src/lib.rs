//! Postgres persistence for clients, parking lots and occupancies.
//!
//! The [`occupancy::OccupancyManager`] is the only code that changes
//! `parkings.count_available_places` or opens and closes `client_parkings`
//! rows. The repositories expose plain reads and registration inserts.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod occupancy;
pub mod repositories;
pub mod sqlstate;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
