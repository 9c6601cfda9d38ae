//! Attribute trait
//!
//! The contract the host framework's filter and persistence layers program
//! against. Each attribute type implements it; the registry hands out
//! boxed instances.

use async_trait::async_trait;

use super::descriptor::AttributeDescriptor;
use super::field::{FieldDefinition, FieldOverrides};
use super::value::AttrValue;
use crate::data::{DataError, QueryExecutor, RowId};

#[async_trait]
pub trait Attribute: Send + Sync {
    /// Type tag this attribute is registered under
    fn type_name(&self) -> &'static str;

    fn descriptor(&self) -> &AttributeDescriptor;

    /// Column definition used when the column is created
    fn sql_data_type(&self) -> &'static str;

    /// Setting keys this attribute type understands
    fn attribute_setting_names(&self) -> Vec<&'static str>;

    fn field_definition(&self, overrides: &FieldOverrides) -> FieldDefinition;

    /// Normalize a value before it is written
    fn serialize_data(&self, value: AttrValue) -> AttrValue {
        value
    }

    // ==================== Filtering ====================

    /// Ids of rows whose value is greater than `value` (or equal, if inclusive)
    async fn filter_greater_than(
        &self,
        db: &dyn QueryExecutor,
        value: &AttrValue,
        inclusive: bool,
    ) -> Result<Vec<RowId>, DataError>;

    /// Ids of rows whose value is less than `value` (or equal, if inclusive)
    async fn filter_less_than(
        &self,
        db: &dyn QueryExecutor,
        value: &AttrValue,
        inclusive: bool,
    ) -> Result<Vec<RowId>, DataError>;

    /// Ids of rows whose value differs from `value`
    async fn filter_not_equal(
        &self,
        db: &dyn QueryExecutor,
        value: &AttrValue,
    ) -> Result<Vec<RowId>, DataError>;

    /// Ids of rows matching a search pattern (`*` and `?` are wildcards)
    async fn search_for(&self, db: &dyn QueryExecutor, pattern: &str)
    -> Result<Vec<RowId>, DataError>;

    // ==================== Persistence ====================

    /// Write values for the given rows; returns the number of rows updated
    async fn set_data_for(
        &self,
        db: &dyn QueryExecutor,
        values: &[(RowId, AttrValue)],
    ) -> Result<u64, DataError>;

    /// Read stored values (as text) for the given rows
    async fn get_data_for(
        &self,
        db: &dyn QueryExecutor,
        ids: &[RowId],
    ) -> Result<Vec<(RowId, Option<String>)>, DataError>;
}
