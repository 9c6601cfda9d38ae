//! PostgreSQL SQL dialect implementation

use super::SqlDialect;

/// PostgreSQL SQL dialect
pub struct PostgresDialect;

impl SqlDialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn placeholder(&self, index: usize) -> String {
        format!("${}", index)
    }

    fn numeric_param(&self, index: usize) -> String {
        format!("CAST({} AS DOUBLE PRECISION)", self.placeholder(index))
    }

    fn key_param(&self, index: usize) -> String {
        format!("CAST({} AS BIGINT)", self.placeholder(index))
    }
}
