//! Attribute type registry
//!
//! Maps type tags to constructors. The host framework registers the types
//! it supports once and then builds attribute instances from stored
//! settings.

use std::collections::HashMap;

use super::decimal::{self, Decimal};
use super::descriptor::{AttributeDescriptor, AttributeSettings};
use super::error::AttributeError;
use super::traits::Attribute;

/// Builds an attribute from its validated descriptor
pub type AttributeConstructor = fn(AttributeDescriptor) -> Box<dyn Attribute>;

#[derive(Default)]
pub struct AttributeRegistry {
    constructors: HashMap<String, AttributeConstructor>,
}

impl AttributeRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in `decimal` type
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(decimal::TYPE_NAME, create_decimal);
        registry
    }

    /// Register (or replace) the constructor for a type tag
    pub fn register(&mut self, type_name: impl Into<String>, constructor: AttributeConstructor) {
        let type_name = type_name.into();
        tracing::trace!(type_name = %type_name, "Registering attribute type");
        self.constructors.insert(type_name, constructor);
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    /// Registered type tags, sorted
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build an attribute from stored settings
    pub fn create(&self, settings: AttributeSettings) -> Result<Box<dyn Attribute>, AttributeError> {
        let constructor = self
            .constructors
            .get(&settings.type_name)
            .ok_or_else(|| AttributeError::UnknownType(settings.type_name.clone()))?;
        let descriptor = AttributeDescriptor::from_settings(settings)?;
        Ok(constructor(descriptor))
    }
}

fn create_decimal(descriptor: AttributeDescriptor) -> Box<dyn Attribute> {
    Box::new(Decimal::new(descriptor))
}
