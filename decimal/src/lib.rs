//! Decimal attribute for a metamodel-style CMS.
//!
//! Numeric comparison filters, numeric and wildcard search, and column
//! metadata for a floating point attribute stored in a custom-entity table.

pub mod app;
pub mod attribute;
pub mod core;
pub mod data;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use app::App;
