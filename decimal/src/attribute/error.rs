//! Attribute error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttributeError {
    #[error("Missing attribute setting: {0}")]
    MissingSetting(&'static str),

    #[error("Invalid {kind} name: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("Unknown attribute type: {0}")]
    UnknownType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identifier_display() {
        let err = AttributeError::InvalidIdentifier {
            kind: "column",
            value: "a b".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid column name: \"a b\"");
    }

    #[test]
    fn test_missing_setting_display() {
        let err = AttributeError::MissingSetting("colname");
        assert_eq!(err.to_string(), "Missing attribute setting: colname");
    }
}
