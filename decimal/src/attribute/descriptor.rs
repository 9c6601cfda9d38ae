//! Attribute descriptors
//!
//! A descriptor is the immutable configuration of one attribute instance:
//! where it is stored and how it behaves in forms and filters. Table and
//! column names are validated once here; everything that renders SQL reads
//! them from the descriptor and nowhere else.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::AttributeError;
use crate::utils::sql::is_identifier;

/// Raw attribute settings as stored by the host framework
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AttributeSettings {
    /// Attribute type tag (e.g. "decimal")
    #[serde(rename = "type")]
    pub type_name: String,
    /// Owning table
    pub table: String,
    /// Column in the owning table
    pub colname: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub isunique: bool,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default)]
    pub filterable: bool,
    #[serde(default)]
    pub searchable: bool,
    /// Settings not interpreted by this crate
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Immutable per-instance attribute configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDescriptor {
    table_name: String,
    column_name: String,
    name: String,
    description: String,
    is_unique: bool,
    mandatory: bool,
    filterable: bool,
    searchable: bool,
    extra: Map<String, Value>,
}

impl AttributeDescriptor {
    /// Build a descriptor, rejecting missing table or column names and
    /// names that are not plain SQL identifiers.
    pub fn from_settings(settings: AttributeSettings) -> Result<Self, AttributeError> {
        if settings.table.is_empty() {
            return Err(AttributeError::MissingSetting("table"));
        }
        if settings.colname.is_empty() {
            return Err(AttributeError::MissingSetting("colname"));
        }
        if !is_identifier(&settings.table) {
            return Err(AttributeError::InvalidIdentifier {
                kind: "table",
                value: settings.table,
            });
        }
        if !is_identifier(&settings.colname) {
            return Err(AttributeError::InvalidIdentifier {
                kind: "column",
                value: settings.colname,
            });
        }

        let name = settings.name.unwrap_or_else(|| settings.colname.clone());
        Ok(Self {
            table_name: settings.table,
            column_name: settings.colname,
            name,
            description: settings.description.unwrap_or_default(),
            is_unique: settings.isunique,
            mandatory: settings.mandatory,
            filterable: settings.filterable,
            searchable: settings.searchable,
            extra: settings.extra,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// Display name; falls back to the column name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_unique(&self) -> bool {
        self.is_unique
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Look up a setting by its storage key
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "table" => Some(Value::from(self.table_name.as_str())),
            "colname" => Some(Value::from(self.column_name.as_str())),
            "name" => Some(Value::from(self.name.as_str())),
            "description" => Some(Value::from(self.description.as_str())),
            "isunique" => Some(Value::Bool(self.is_unique)),
            "mandatory" => Some(Value::Bool(self.mandatory)),
            "filterable" => Some(Value::Bool(self.filterable)),
            "searchable" => Some(Value::Bool(self.searchable)),
            _ => self.extra.get(key).cloned(),
        }
    }
}
