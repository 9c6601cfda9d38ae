//! SQL dialect trait for multi-database support
//!
//! This trait defines the interface for generating database-specific SQL syntax.

/// SQL dialect trait for generating database-specific SQL
///
/// Different databases have different syntax for:
/// - Parameter placeholders (? vs $1)
/// - Implicit conversion of text parameters in numeric comparisons
/// - Casting a column to text for LIKE matching
pub trait SqlDialect: Send + Sync {
    /// Get the dialect name
    fn name(&self) -> &'static str;

    /// Generate a parameter placeholder for the given index (1-based)
    ///
    /// - SQLite: Always returns "?"
    /// - PostgreSQL: Returns "$1", "$2", etc.
    fn placeholder(&self, index: usize) -> String;

    /// Placeholder for a text parameter compared against a floating point column
    ///
    /// - SQLite: `?` (column affinity converts the operand)
    /// - PostgreSQL: `CAST($1 AS DOUBLE PRECISION)`
    fn numeric_param(&self, index: usize) -> String;

    /// Placeholder for a text parameter compared against the integer row key
    ///
    /// - SQLite: `?`
    /// - PostgreSQL: `CAST($1 AS BIGINT)`
    fn key_param(&self, index: usize) -> String;

    /// Cast a column to string type
    ///
    /// - SQLite: `CAST(col AS TEXT)`
    /// - PostgreSQL: `CAST(col AS TEXT)`
    fn cast_to_string(&self, col: &str) -> String {
        format!("CAST({} AS TEXT)", col)
    }
}
