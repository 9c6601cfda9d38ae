//! Data layer
//!
//! - `sql`: dialects used to render attribute predicates
//! - `executor`: the storage execution capability handed to attributes
//! - `sqlite` / `postgres`: sqlx-backed executors and pool setup

pub mod error;
pub mod executor;
pub mod postgres;
pub mod sql;
pub mod sqlite;

pub use error::DataError;
pub use executor::{QueryExecutor, RowId, SqlValue};
pub use sql::{Backend, SqlDialect};

use crate::core::config::DatabaseConfig;

/// Connect to the configured backend
pub async fn connect(config: &DatabaseConfig) -> Result<Box<dyn QueryExecutor>, DataError> {
    match config.backend {
        Backend::Sqlite => {
            let pool = sqlite::connect(config).await?;
            Ok(Box::new(pool))
        }
        Backend::Postgres => {
            let pool = postgres::connect(config).await?;
            Ok(Box::new(pool))
        }
    }
}
