//! # Attributes
//!
//! Typed column abstractions over a custom-entity table.
//!
//! - **Descriptor**: where an attribute lives (table, column) and its flags
//! - **Base**: behavior shared by single-column attributes (wildcard search,
//!   reading and writing values, default field definition)
//! - **Decimal**: numeric storage with comparison filters and numeric search
//! - **Registry**: type tag → constructor
//!
//! ## Usage
//!
//! ```ignore
//! let registry = AttributeRegistry::with_defaults();
//! let price = registry.create(settings)?;
//!
//! let cheap = price.filter_less_than(&pool, &AttrValue::from("10"), true).await?;
//! let exact = price.search_for(&pool, "9.5").await?;
//! ```

mod base;
mod decimal;
mod descriptor;
mod error;
mod field;
mod filter;
mod registry;
mod traits;
mod value;

pub use base::{BASE_SETTING_NAMES, SimpleAttribute, ValueKind};
pub use decimal::{Decimal, SQL_DATA_TYPE, TYPE_NAME};
pub use descriptor::{AttributeDescriptor, AttributeSettings};
pub use error::AttributeError;
pub use field::{EvalSettings, FieldDefinition, FieldOverrides};
pub use filter::{CompareOp, Comparison};
pub use registry::{AttributeConstructor, AttributeRegistry};
pub use traits::Attribute;
pub use value::{AttrValue, is_numeric};
