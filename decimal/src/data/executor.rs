//! Storage execution capability
//!
//! Attributes never own a connection. Every operation receives an executor
//! for the duration of the call and issues its statements through it.

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::sql::Backend;

/// Primary key of a row in the attribute's owning table, rendered as text.
pub type RowId = String;

/// A bound statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Text(String),
    Integer(i64),
    Real(f64),
}

/// Executes SQL against a storage backend
///
/// Implemented for `SqlitePool` and `PgPool`. Statements are rendered with
/// the dialect of [`QueryExecutor::backend`].
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Backend this executor talks to
    fn backend(&self) -> Backend;

    /// Run a query projecting a single `id` column and collect the ids
    async fn fetch_ids(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<RowId>, DataError>;

    /// Run a query projecting `id` and a text `value` column
    async fn fetch_values(
        &self,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<Vec<(RowId, Option<String>)>, DataError>;

    /// Run a statement and return the number of rows affected
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64, DataError>;
}
