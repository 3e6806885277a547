//! Persistence layer: connection pool, migrations, models, and repositories.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// PostgreSQL error code for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::debug!("Migrations up to date");
    Ok(())
}

/// Whether `err` is a unique-constraint violation, optionally on a specific
/// constraint.
pub fn is_unique_violation(err: &sqlx::Error, constraint: Option<&str>) -> bool {
    let sqlx::Error::Database(db_err) = err else {
        return false;
    };
    if db_err.code().as_deref() != Some(UNIQUE_VIOLATION) {
        return false;
    }
    match constraint {
        Some(name) => db_err.constraint() == Some(name),
        None => true,
    }
}
