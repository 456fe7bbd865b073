//! Database operations over `SQLite`.
//!
//! One repository per entity, each a thin borrow over the shared pool.
//! Queries are runtime-checked (`sqlx::query`) so the whole suite runs
//! against in-memory databases with no external service.
//!
//! # Migrations
//!
//! Migrations live in `crates/api/migrations/` and are embedded into the
//! binary via [`MIGRATOR`]; they run automatically at startup and at the
//! top of every integration test.

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub mod categories;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod users;

/// Embedded migrations from `crates/api/migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if missing and foreign keys are enforced
/// per connection.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
) -> Result<SqlitePool, sqlx::Error> {
    let options = database_url
        .expose_secret()
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
