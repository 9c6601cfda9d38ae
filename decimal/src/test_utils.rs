//! Test doubles for the storage layer

use std::sync::Mutex;

use async_trait::async_trait;

use crate::data::{Backend, DataError, QueryExecutor, RowId, SqlValue};

/// A statement seen by [`RecordingExecutor`]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

/// Records every statement and answers with canned ids
pub struct RecordingExecutor {
    backend: Backend,
    ids: Vec<RowId>,
    fail: bool,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingExecutor {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            backend: Backend::Sqlite,
            ids: ids.iter().map(|id| id.to_string()).collect(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with a pool timeout
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(&[])
        }
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, sql: &str, params: &[SqlValue]) -> Result<(), DataError> {
        self.calls.lock().unwrap().push(RecordedCall {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        if self.fail {
            return Err(DataError::from_sqlite(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl QueryExecutor for RecordingExecutor {
    fn backend(&self) -> Backend {
        self.backend
    }

    async fn fetch_ids(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<RowId>, DataError> {
        self.record(sql, params)?;
        Ok(self.ids.clone())
    }

    async fn fetch_values(
        &self,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<Vec<(RowId, Option<String>)>, DataError> {
        self.record(sql, params)?;
        Ok(Vec::new())
    }

    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64, DataError> {
        self.record(sql, params)?;
        Ok(1)
    }
}
