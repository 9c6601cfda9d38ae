//! Comparison requests
//!
//! A comparison pairs an operator with a raw value. It renders to a row-id
//! query against a table/column pair taken from the attribute descriptor;
//! the value is coerced to a float and rendered as a numeric literal, so it
//! never contributes SQL syntax of its own.

use serde::{Deserialize, Serialize};

use super::value::AttrValue;
use crate::data::SqlDialect;
use crate::utils::sql::float_literal;

/// Comparison operator for numeric filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum CompareOp {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = "!=")]
    Ne,
}

impl CompareOp {
    /// `>` or `>=`
    pub fn greater_than(inclusive: bool) -> Self {
        if inclusive { Self::Gte } else { Self::Gt }
    }

    /// `<` or `<=`
    pub fn less_than(inclusive: bool) -> Self {
        if inclusive { Self::Lte } else { Self::Lt }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Ne => "!=",
        }
    }
}

/// A typed comparison against an attribute column
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Comparison {
    pub operator: CompareOp,
    pub value: AttrValue,
}

impl Comparison {
    pub fn new(operator: CompareOp, value: impl Into<AttrValue>) -> Self {
        Self {
            operator,
            value: value.into(),
        }
    }

    /// Render the row-id query for this comparison.
    ///
    /// `table` and `column` must come from a validated descriptor.
    pub fn to_sql(&self, dialect: &dyn SqlDialect, table: &str, column: &str) -> String {
        format!(
            "SELECT {} AS id FROM {} AS t WHERE t.{} {} {}",
            dialect.cast_to_string("t.id"),
            table,
            column,
            self.operator.as_sql(),
            float_literal(self.value.to_f64_lossy())
        )
    }
}
