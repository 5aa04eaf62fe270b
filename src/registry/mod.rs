//! Model registry
//!
//! Maps model type identifiers to their descriptors. Hosts build one at
//! startup and pass it to the transformer; resolving an unknown identifier is
//! a typed error rather than a failed instantiation.

use std::collections::HashMap;

use crate::error::{Result, TransformError};

mod descriptor;

pub use descriptor::{ApiModel, ModelDescriptor, TIMESTAMP_FIELDS};

/// Registry of known model types
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    by_name: HashMap<String, ModelDescriptor>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor. A descriptor with the same name is replaced.
    pub fn register(&mut self, descriptor: ModelDescriptor) {
        self.by_name
            .insert(descriptor.name().to_string(), descriptor);
    }

    /// Register a host type through its [`ApiModel`] implementation.
    pub fn register_model<T: ApiModel>(&mut self) {
        self.register(ModelDescriptor::for_model::<T>());
    }

    pub fn with_model(mut self, descriptor: ModelDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    /// Resolve a descriptor by model type identifier.
    pub fn resolve(&self, model_type: &str) -> Result<&ModelDescriptor> {
        self.by_name.get(model_type).ok_or_else(|| {
            tracing::warn!("model type not registered: {}", model_type);
            TransformError::model_not_found(model_type)
        })
    }

    pub fn contains(&self, model_type: &str) -> bool {
        self.by_name.contains_key(model_type)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
