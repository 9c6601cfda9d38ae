//! Decimal attribute
//!
//! Stores a floating point number per row and answers numeric filters
//! against it. Comparisons render the value as a float literal; free-text
//! search either falls back to wildcard matching or runs a bound equality
//! query, and non-numeric text never reaches the database.

use async_trait::async_trait;

use super::base::{SimpleAttribute, ValueKind};
use super::descriptor::AttributeDescriptor;
use super::field::{FieldDefinition, FieldOverrides};
use super::filter::{CompareOp, Comparison};
use super::traits::Attribute;
use super::value::{AttrValue, is_numeric};
use crate::data::{DataError, QueryExecutor, RowId, SqlValue};
use crate::utils::sql::has_wildcards;

/// Type tag for decimal attributes
pub const TYPE_NAME: &str = "decimal";

/// Column definition for decimal attributes
pub const SQL_DATA_TYPE: &str = "double NULL default NULL";

const DECIMAL_SETTING_NAMES: &[&str] = &["isunique", "mandatory", "filterable", "searchable"];

#[derive(Debug, Clone)]
pub struct Decimal {
    base: SimpleAttribute,
}

impl Decimal {
    pub fn new(descriptor: AttributeDescriptor) -> Self {
        Self {
            base: SimpleAttribute::new(descriptor, ValueKind::Numeric),
        }
    }

    /// Ids of all rows matching a numeric comparison. One query.
    pub async fn filter(
        &self,
        db: &dyn QueryExecutor,
        comparison: &Comparison,
    ) -> Result<Vec<RowId>, DataError> {
        let descriptor = self.base.descriptor();
        let sql = comparison.to_sql(
            db.backend().dialect(),
            descriptor.table_name(),
            descriptor.column_name(),
        );

        tracing::debug!(sql = %sql, operator = comparison.operator.as_sql(), "Decimal filter");
        db.fetch_ids(&sql, &[]).await
    }
}

#[async_trait]
impl Attribute for Decimal {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn descriptor(&self) -> &AttributeDescriptor {
        self.base.descriptor()
    }

    fn sql_data_type(&self) -> &'static str {
        SQL_DATA_TYPE
    }

    fn attribute_setting_names(&self) -> Vec<&'static str> {
        let mut names = self.base.attribute_setting_names();
        names.extend_from_slice(DECIMAL_SETTING_NAMES);
        names
    }

    fn field_definition(&self, overrides: &FieldOverrides) -> FieldDefinition {
        let mut def = self.base.field_definition(overrides);
        def.input_type = Some("text".to_string());
        def.eval.rgxp = Some("digit".to_string());
        def
    }

    /// Empty strings are stored as NULL; strict SQL modes reject `''` in a
    /// numeric column. Everything else passes through.
    fn serialize_data(&self, value: AttrValue) -> AttrValue {
        if value.is_empty_string() {
            AttrValue::Null
        } else {
            value
        }
    }

    async fn filter_greater_than(
        &self,
        db: &dyn QueryExecutor,
        value: &AttrValue,
        inclusive: bool,
    ) -> Result<Vec<RowId>, DataError> {
        let comparison = Comparison::new(CompareOp::greater_than(inclusive), value.clone());
        self.filter(db, &comparison).await
    }

    async fn filter_less_than(
        &self,
        db: &dyn QueryExecutor,
        value: &AttrValue,
        inclusive: bool,
    ) -> Result<Vec<RowId>, DataError> {
        let comparison = Comparison::new(CompareOp::less_than(inclusive), value.clone());
        self.filter(db, &comparison).await
    }

    async fn filter_not_equal(
        &self,
        db: &dyn QueryExecutor,
        value: &AttrValue,
    ) -> Result<Vec<RowId>, DataError> {
        let comparison = Comparison::new(CompareOp::Ne, value.clone());
        self.filter(db, &comparison).await
    }

    async fn search_for(
        &self,
        db: &dyn QueryExecutor,
        pattern: &str,
    ) -> Result<Vec<RowId>, DataError> {
        if has_wildcards(pattern) {
            return self.base.search_for(db, pattern).await;
        }

        // Without wildcards only a number can equal a decimal value.
        if !is_numeric(pattern) {
            tracing::trace!(pattern, "Non-numeric search pattern, no query issued");
            return Ok(Vec::new());
        }

        let descriptor = self.base.descriptor();
        let dialect = db.backend().dialect();
        let sql = format!(
            "SELECT {} AS id FROM {} AS t WHERE t.{} = {}",
            dialect.cast_to_string("t.id"),
            descriptor.table_name(),
            descriptor.column_name(),
            dialect.numeric_param(1)
        );
        let params = [SqlValue::Text(pattern.to_string())];

        tracing::debug!(sql = %sql, params = ?params, "Decimal search");
        db.fetch_ids(&sql, &params).await
    }

    async fn set_data_for(
        &self,
        db: &dyn QueryExecutor,
        values: &[(RowId, AttrValue)],
    ) -> Result<u64, DataError> {
        let serialized: Vec<(RowId, AttrValue)> = values
            .iter()
            .map(|(id, value)| (id.clone(), self.serialize_data(value.clone())))
            .collect();
        self.base.set_data_for(db, &serialized).await
    }

    async fn get_data_for(
        &self,
        db: &dyn QueryExecutor,
        ids: &[RowId],
    ) -> Result<Vec<(RowId, Option<String>)>, DataError> {
        self.base.get_data_for(db, ids).await
    }
}
