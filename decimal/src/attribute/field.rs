//! Edit-form field definitions.
//!
//! The host framework renders attribute edit widgets from a field
//! definition. The generic attribute fills in label and evaluation flags;
//! concrete types then set the widget type and validation pattern.

use serde::{Deserialize, Serialize};

/// Field definition handed to the form layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// `[name, description]`
    pub label: [String; 2],
    #[serde(rename = "inputType", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    pub eval: EvalSettings,
}

/// Widget evaluation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvalSettings {
    /// Validation pattern name (e.g. "digit")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgxp: Option<String>,
    pub mandatory: bool,
    pub unique: bool,
    pub readonly: bool,
    #[serde(rename = "alwaysSave")]
    pub always_save: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tl_class: Option<String>,
}

/// Per-context overrides for the field definition (e.g. from a render setting)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FieldOverrides {
    pub mandatory: Option<bool>,
    pub readonly: Option<bool>,
    #[serde(rename = "alwaysSave")]
    pub always_save: Option<bool>,
    pub tl_class: Option<String>,
}
