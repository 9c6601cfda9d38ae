//! [`QueryExecutor`] for PostgreSQL pools

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;
use sqlx::{PgPool, Row};

use crate::data::error::DataError;
use crate::data::executor::{QueryExecutor, RowId, SqlValue};
use crate::data::sql::Backend;

fn bind_params<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &'q [SqlValue],
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        query = match param {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Text(s) => query.bind(s.as_str()),
            SqlValue::Integer(i) => query.bind(*i),
            SqlValue::Real(f) => query.bind(*f),
        };
    }
    query
}

#[async_trait]
impl QueryExecutor for PgPool {
    fn backend(&self) -> Backend {
        Backend::Postgres
    }

    async fn fetch_ids(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<RowId>, DataError> {
        let rows = bind_params(sqlx::query(sql), params)
            .fetch_all(self)
            .await
            .map_err(DataError::from_postgres)?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("id").map_err(DataError::from_postgres))
            .collect()
    }

    async fn fetch_values(
        &self,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<Vec<(RowId, Option<String>)>, DataError> {
        let rows = bind_params(sqlx::query(sql), params)
            .fetch_all(self)
            .await
            .map_err(DataError::from_postgres)?;

        rows.iter()
            .map(|row| {
                let id: String = row.try_get("id").map_err(DataError::from_postgres)?;
                let value: Option<String> =
                    row.try_get("value").map_err(DataError::from_postgres)?;
                Ok((id, value))
            })
            .collect()
    }

    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64, DataError> {
        let result = bind_params(sqlx::query(sql), params)
            .execute(self)
            .await
            .map_err(DataError::from_postgres)?;
        Ok(result.rows_affected())
    }
}
