//! Generic simple attribute
//!
//! Storage-independent behavior shared by all single-column attribute
//! types: setting names, default field definition, wildcard search and
//! reading/writing the column. Concrete types hold a `SimpleAttribute` and
//! delegate to it for everything they don't override.

use super::descriptor::AttributeDescriptor;
use super::field::{EvalSettings, FieldDefinition, FieldOverrides};
use super::value::AttrValue;
use crate::data::{DataError, QueryExecutor, RowId, SqlDialect, SqlValue};
use crate::utils::sql::wildcard_to_like;

/// Setting keys every attribute carries
pub const BASE_SETTING_NAMES: &[&str] = &[
    "id",
    "pid",
    "sorting",
    "tstamp",
    "name",
    "description",
    "type",
    "colname",
    "isvariant",
];

/// Storage class of the attribute column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Numeric,
}

#[derive(Debug, Clone)]
pub struct SimpleAttribute {
    descriptor: AttributeDescriptor,
    kind: ValueKind,
}

impl SimpleAttribute {
    pub fn new(descriptor: AttributeDescriptor, kind: ValueKind) -> Self {
        Self { descriptor, kind }
    }

    pub fn descriptor(&self) -> &AttributeDescriptor {
        &self.descriptor
    }

    /// Column type used when a type doesn't declare its own
    pub fn sql_data_type(&self) -> &'static str {
        "text NULL"
    }

    pub fn attribute_setting_names(&self) -> Vec<&'static str> {
        BASE_SETTING_NAMES.to_vec()
    }

    /// Default field definition: label plus evaluation flags.
    ///
    /// Mandatory comes from the override when given, else from the
    /// descriptor. Input type and validation are left unset.
    pub fn field_definition(&self, overrides: &FieldOverrides) -> FieldDefinition {
        let d = &self.descriptor;
        FieldDefinition {
            label: [d.name().to_string(), d.description().to_string()],
            input_type: None,
            eval: EvalSettings {
                rgxp: None,
                mandatory: overrides.mandatory.unwrap_or(d.is_mandatory()),
                unique: d.is_unique(),
                readonly: overrides.readonly.unwrap_or(false),
                always_save: overrides.always_save.unwrap_or(false),
                tl_class: overrides.tl_class.clone(),
            },
        }
    }

    /// Wildcard search over the column's text form.
    ///
    /// `*` matches any run of characters and `?` a single one; everything
    /// else matches literally. Case handling follows the backend's LIKE.
    pub async fn search_for(
        &self,
        db: &dyn QueryExecutor,
        pattern: &str,
    ) -> Result<Vec<RowId>, DataError> {
        let dialect = db.backend().dialect();
        let sql = format!(
            "SELECT {} AS id FROM {} AS t WHERE {} LIKE {} ESCAPE '\\'",
            dialect.cast_to_string("t.id"),
            self.descriptor.table_name(),
            dialect.cast_to_string(&format!("t.{}", self.descriptor.column_name())),
            dialect.placeholder(1)
        );
        let params = [SqlValue::Text(wildcard_to_like(pattern))];

        tracing::debug!(sql = %sql, params = ?params, "Wildcard search");
        db.fetch_ids(&sql, &params).await
    }

    /// Write one value per row, one `UPDATE` each.
    ///
    /// Values are written as given; type-specific normalization happens
    /// before this is called.
    pub async fn set_data_for(
        &self,
        db: &dyn QueryExecutor,
        values: &[(RowId, AttrValue)],
    ) -> Result<u64, DataError> {
        let dialect = db.backend().dialect();
        let sql = format!(
            "UPDATE {} SET {} = {} WHERE id = {}",
            self.descriptor.table_name(),
            self.descriptor.column_name(),
            self.value_param(dialect, 1),
            dialect.key_param(2)
        );

        let mut updated = 0;
        for (id, value) in values {
            let params = [value.to_sql_value(), SqlValue::Text(id.clone())];
            tracing::trace!(sql = %sql, params = ?params, "Writing attribute value");
            updated += db.execute(&sql, &params).await?;
        }

        tracing::debug!(
            column = self.descriptor.column_name(),
            rows = updated,
            "Attribute values written"
        );
        Ok(updated)
    }

    /// Read the column as text for the given rows. Unknown ids are skipped.
    pub async fn get_data_for(
        &self,
        db: &dyn QueryExecutor,
        ids: &[RowId],
    ) -> Result<Vec<(RowId, Option<String>)>, DataError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let dialect = db.backend().dialect();
        let keys: Vec<String> = (1..=ids.len()).map(|i| dialect.key_param(i)).collect();
        let sql = format!(
            "SELECT {} AS id, {} AS value FROM {} AS t WHERE t.id IN ({})",
            dialect.cast_to_string("t.id"),
            dialect.cast_to_string(&format!("t.{}", self.descriptor.column_name())),
            self.descriptor.table_name(),
            keys.join(", ")
        );
        let params: Vec<SqlValue> = ids.iter().map(|id| SqlValue::Text(id.clone())).collect();

        tracing::debug!(sql = %sql, count = ids.len(), "Reading attribute values");
        db.fetch_values(&sql, &params).await
    }

    fn value_param(&self, dialect: &dyn SqlDialect, index: usize) -> String {
        match self.kind {
            ValueKind::Text => dialect.placeholder(index),
            ValueKind::Numeric => dialect.numeric_param(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::descriptor::AttributeSettings;
    use crate::data::Backend;
    use crate::test_utils::RecordingExecutor;

    fn attribute(kind: ValueKind) -> SimpleAttribute {
        let descriptor = AttributeDescriptor::from_settings(AttributeSettings {
            type_name: "text".to_string(),
            table: "mm_demo".to_string(),
            colname: "title".to_string(),
            name: Some("Title".to_string()),
            description: Some("Item title".to_string()),
            mandatory: true,
            ..AttributeSettings::default()
        })
        .unwrap();
        SimpleAttribute::new(descriptor, kind)
    }

    #[test]
    fn test_default_sql_data_type() {
        assert_eq!(attribute(ValueKind::Text).sql_data_type(), "text NULL");
    }

    #[test]
    fn test_setting_names() {
        let names = attribute(ValueKind::Text).attribute_setting_names();
        assert_eq!(names.first(), Some(&"id"));
        assert!(names.contains(&"colname"));
        assert!(!names.contains(&"mandatory"));
    }

    #[test]
    fn test_field_definition_defaults() {
        let def = attribute(ValueKind::Text).field_definition(&FieldOverrides::default());
        assert_eq!(def.label, ["Title".to_string(), "Item title".to_string()]);
        assert_eq!(def.input_type, None);
        assert_eq!(def.eval.rgxp, None);
        assert!(def.eval.mandatory);
        assert!(!def.eval.unique);
    }

    #[test]
    fn test_field_definition_overrides() {
        let overrides = FieldOverrides {
            mandatory: Some(false),
            readonly: Some(true),
            tl_class: Some("w50".to_string()),
            ..FieldOverrides::default()
        };
        let def = attribute(ValueKind::Text).field_definition(&overrides);
        assert!(!def.eval.mandatory);
        assert!(def.eval.readonly);
        assert_eq!(def.eval.tl_class.as_deref(), Some("w50"));
    }

    #[tokio::test]
    async fn test_search_for_translates_wildcards() {
        let db = RecordingExecutor::new(&["4"]);
        let ids = attribute(ValueKind::Text)
            .search_for(&db, "fo?_bar*")
            .await
            .unwrap();

        assert_eq!(ids, vec!["4".to_string()]);
        let calls = db.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].sql,
            "SELECT CAST(t.id AS TEXT) AS id FROM mm_demo AS t WHERE CAST(t.title AS TEXT) LIKE ? ESCAPE '\\'"
        );
        assert_eq!(calls[0].params, vec![SqlValue::Text("fo_\\_bar%".to_string())]);
    }

    #[tokio::test]
    async fn test_search_for_uses_dialect_placeholder() {
        let db = RecordingExecutor::new(&[]).with_backend(Backend::Postgres);
        attribute(ValueKind::Text).search_for(&db, "*").await.unwrap();

        assert!(db.calls()[0].sql.contains("LIKE $1 ESCAPE"));
    }

    #[tokio::test]
    async fn test_set_data_for_issues_one_update_per_row() {
        let db = RecordingExecutor::new(&[]);
        let values = vec![
            ("1".to_string(), AttrValue::from("a")),
            ("2".to_string(), AttrValue::Null),
        ];

        let updated = attribute(ValueKind::Text).set_data_for(&db, &values).await.unwrap();

        assert_eq!(updated, 2);
        let calls = db.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].sql, "UPDATE mm_demo SET title = ? WHERE id = ?");
        assert_eq!(
            calls[1].params,
            vec![SqlValue::Null, SqlValue::Text("2".to_string())]
        );
    }

    #[tokio::test]
    async fn test_set_data_for_casts_numeric_values_on_postgres() {
        let db = RecordingExecutor::new(&[]).with_backend(Backend::Postgres);
        let values = vec![("7".to_string(), AttrValue::from("1.5"))];

        attribute(ValueKind::Numeric).set_data_for(&db, &values).await.unwrap();

        assert_eq!(
            db.calls()[0].sql,
            "UPDATE mm_demo SET title = CAST($1 AS DOUBLE PRECISION) WHERE id = CAST($2 AS BIGINT)"
        );
    }

    #[tokio::test]
    async fn test_get_data_for_empty_ids_skips_query() {
        let db = RecordingExecutor::new(&[]);
        let values = attribute(ValueKind::Text).get_data_for(&db, &[]).await.unwrap();

        assert!(values.is_empty());
        assert!(db.calls().is_empty());
    }

    #[tokio::test]
    async fn test_get_data_for_lists_keys() {
        let db = RecordingExecutor::new(&[]);
        let ids = vec!["1".to_string(), "3".to_string()];
        attribute(ValueKind::Text).get_data_for(&db, &ids).await.unwrap();

        let calls = db.calls();
        assert_eq!(
            calls[0].sql,
            "SELECT CAST(t.id AS TEXT) AS id, CAST(t.title AS TEXT) AS value FROM mm_demo AS t WHERE t.id IN (?, ?)"
        );
        assert_eq!(
            calls[0].params,
            vec![SqlValue::Text("1".to_string()), SqlValue::Text("3".to_string())]
        );
    }
}
