//! SQLite backend
//!
//! Embedded storage for local deployments. Pools are created from
//! [`DatabaseConfig`] and used directly as a [`QueryExecutor`](crate::data::QueryExecutor).

mod executor;

pub use sqlx::SqlitePool;

use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::core::config::DatabaseConfig;
use crate::data::error::DataError;

/// Open a connection pool for the configured SQLite file
///
/// Creates the database file if it doesn't exist. WAL mode keeps filter
/// reads from blocking on concurrent writes.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DataError> {
    let options = SqliteConnectOptions::new()
        .filename(&config.sqlite_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(config.busy_timeout_secs));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await
        .map_err(DataError::from_sqlite)?;

    tracing::debug!(path = %config.sqlite_path.display(), "SQLite pool connected");
    Ok(pool)
}
