//! PostgreSQL backend
//!
//! For shared multi-user deployments where the attribute tables live in a
//! PostgreSQL database.

mod executor;

pub use sqlx::PgPool;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

use crate::core::config::DatabaseConfig;
use crate::data::error::DataError;

/// Open a connection pool for the configured PostgreSQL URL
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DataError> {
    let url = config
        .postgres_url
        .as_deref()
        .ok_or_else(|| DataError::Config("postgres_url is required for postgres".to_string()))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(url)
        .await
        .map_err(DataError::from_postgres)?;

    tracing::debug!(max_connections = config.max_connections, "PostgreSQL pool connected");
    Ok(pool)
}
