//! [`QueryExecutor`] for SQLite pools

use async_trait::async_trait;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::{Row, SqlitePool};

use crate::data::error::DataError;
use crate::data::executor::{QueryExecutor, RowId, SqlValue};
use crate::data::sql::Backend;

fn bind_params<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &'q [SqlValue],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
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
impl QueryExecutor for SqlitePool {
    fn backend(&self) -> Backend {
        Backend::Sqlite
    }

    async fn fetch_ids(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<RowId>, DataError> {
        let rows = bind_params(sqlx::query(sql), params)
            .fetch_all(self)
            .await
            .map_err(DataError::from_sqlite)?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("id").map_err(DataError::from_sqlite))
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
            .map_err(DataError::from_sqlite)?;

        rows.iter()
            .map(|row| {
                let id: String = row.try_get("id").map_err(DataError::from_sqlite)?;
                let value: Option<String> = row.try_get("value").map_err(DataError::from_sqlite)?;
                Ok((id, value))
            })
            .collect()
    }

    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64, DataError> {
        let result = bind_params(sqlx::query(sql), params)
            .execute(self)
            .await
            .map_err(DataError::from_sqlite)?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query("CREATE TABLE mm_items (id INTEGER PRIMARY KEY, price DOUBLE NULL DEFAULT NULL)")
            .execute(&pool)
            .await
            .unwrap();
        pool
    }

    #[tokio::test]
    async fn test_execute_reports_rows_affected() {
        let pool = setup_test_pool().await;

        let inserted = pool
            .execute(
                "INSERT INTO mm_items (id, price) VALUES (?, ?), (?, ?)",
                &[
                    SqlValue::Integer(1),
                    SqlValue::Real(2.5),
                    SqlValue::Integer(2),
                    SqlValue::Null,
                ],
            )
            .await
            .unwrap();
        assert_eq!(inserted, 2);
    }

    #[tokio::test]
    async fn test_fetch_ids_binds_text_params() {
        let pool = setup_test_pool().await;
        pool.execute(
            "INSERT INTO mm_items (id, price) VALUES (1, 2.5), (2, 3.0)",
            &[],
        )
        .await
        .unwrap();

        let ids = pool
            .fetch_ids(
                "SELECT CAST(id AS TEXT) AS id FROM mm_items WHERE price = ?",
                &[SqlValue::Text("3.0".to_string())],
            )
            .await
            .unwrap();
        assert_eq!(ids, vec!["2".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_values_keeps_nulls() {
        let pool = setup_test_pool().await;
        pool.execute(
            "INSERT INTO mm_items (id, price) VALUES (1, 2.5), (2, NULL)",
            &[],
        )
        .await
        .unwrap();

        let mut values = pool
            .fetch_values(
                "SELECT CAST(id AS TEXT) AS id, CAST(price AS TEXT) AS value FROM mm_items",
                &[],
            )
            .await
            .unwrap();
        values.sort();

        assert_eq!(
            values,
            vec![
                ("1".to_string(), Some("2.5".to_string())),
                ("2".to_string(), None),
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_sql_surfaces_sqlite_error() {
        let pool = setup_test_pool().await;

        let err = pool
            .fetch_ids("SELECT id FROM missing_table", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Sqlite(_)));
    }

    #[tokio::test]
    async fn test_backend() {
        let pool = setup_test_pool().await;
        assert_eq!(QueryExecutor::backend(&pool), Backend::Sqlite);
    }
}
