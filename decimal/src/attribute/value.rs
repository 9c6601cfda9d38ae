//! Attribute values and numeric coercion.
//!
//! Values arrive from the host framework untyped: a form field yields text,
//! a filter widget may hand over a number, and a cleared field an empty
//! string. `AttrValue` carries all of these, and the coercion helpers here
//! decide how they become numbers.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::data::SqlValue;

/// Raw attribute value as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl AttrValue {
    /// Coerce to a float the permissive way.
    ///
    /// - numbers convert directly
    /// - booleans become `1.0` / `0.0`, null becomes `0.0`
    /// - text yields its leading numeric prefix (`"12.5kg"` → `12.5`), or
    ///   `0.0` when it has none (`"abc"` → `0.0`)
    ///
    /// Never fails. A non-numeric comparison value therefore filters against
    /// zero instead of being rejected.
    pub fn to_f64_lossy(&self) -> f64 {
        match self {
            AttrValue::Null => 0.0,
            AttrValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            AttrValue::Int(i) => *i as f64,
            AttrValue::Float(f) => *f,
            AttrValue::Text(s) => leading_number(s),
        }
    }

    /// True only for the empty string (not for null, zero or whitespace)
    pub fn is_empty_string(&self) -> bool {
        matches!(self, AttrValue::Text(s) if s.is_empty())
    }

    /// Convert into a bound statement parameter
    pub fn to_sql_value(&self) -> SqlValue {
        match self {
            AttrValue::Null => SqlValue::Null,
            AttrValue::Bool(b) => SqlValue::Integer(i64::from(*b)),
            AttrValue::Int(i) => SqlValue::Integer(*i),
            AttrValue::Float(f) => SqlValue::Real(*f),
            AttrValue::Text(s) => SqlValue::Text(s.clone()),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// Whitespace accepted around numeric strings
const NUMERIC_WS: &str = r"[ \t\n\r\x0B\x0C]*";

/// Unsigned decimal literal: `12`, `12.`, `12.5`, `.5`, with optional exponent
const NUMERIC_BODY: &str = r"[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?";

fn numeric_regex() -> &'static Regex {
    static RE_NUMERIC: OnceLock<Regex> = OnceLock::new();
    RE_NUMERIC.get_or_init(|| {
        Regex::new(&format!("^{ws}{body}{ws}$", ws = NUMERIC_WS, body = NUMERIC_BODY))
            .expect("Invalid regex")
    })
}

fn leading_numeric_regex() -> &'static Regex {
    static RE_LEADING: OnceLock<Regex> = OnceLock::new();
    RE_LEADING.get_or_init(|| {
        Regex::new(&format!("^{ws}({body})", ws = NUMERIC_WS, body = NUMERIC_BODY))
            .expect("Invalid regex")
    })
}

/// Check whether a string is a complete numeric literal.
///
/// Accepts an optional sign, integer or decimal digits (including `.5` and
/// `5.`), an optional exponent, and surrounding whitespace. Hex, `inf` and
/// `nan` are not numeric.
///
/// ```
/// use attribute_decimal::attribute::is_numeric;
///
/// assert!(is_numeric("10"));
/// assert!(is_numeric("-10.5"));
/// assert!(!is_numeric("10*"));
/// assert!(!is_numeric("abc"));
/// ```
pub fn is_numeric(s: &str) -> bool {
    numeric_regex().is_match(s)
}

fn leading_number(s: &str) -> f64 {
    leading_numeric_regex()
        .captures(s)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}
