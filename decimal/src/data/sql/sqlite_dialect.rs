//! SQLite SQL dialect implementation

use super::SqlDialect;

/// SQLite SQL dialect
pub struct SqliteDialect;

impl SqlDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn numeric_param(&self, index: usize) -> String {
        // REAL affinity on the column converts a well-formed text operand
        self.placeholder(index)
    }

    fn key_param(&self, index: usize) -> String {
        self.placeholder(index)
    }
}
