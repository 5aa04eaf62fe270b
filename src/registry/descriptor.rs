//! Model descriptors

use crate::types::Model;

/// Timestamp fields every model accepts regardless of its whitelist.
pub const TIMESTAMP_FIELDS: [&str; 2] = ["created_at", "updated_at"];

/// Implemented by host types that can be materialized from a response.
///
/// `api_attributes` is the only capability the mapper needs: the names it may
/// copy from a document into an instance of this type.
pub trait ApiModel {
    const MODEL_NAME: &'static str;

    fn api_attributes() -> Vec<String>;
}

/// Name and attribute whitelist of a model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    name: String,
    attributes: Vec<String>,
}

impl ModelDescriptor {
    pub fn new<I, S>(name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn for_model<T: ApiModel>() -> Self {
        Self::new(T::MODEL_NAME, T::api_attributes())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared whitelist, without the implicit timestamps.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Whitelist followed by the timestamp fields, duplicates removed.
    pub fn candidate_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::with_capacity(self.attributes.len() + 2);
        for key in self.attributes.iter().map(String::as_str) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        for key in TIMESTAMP_FIELDS {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    pub fn permits(&self, key: &str) -> bool {
        TIMESTAMP_FIELDS.contains(&key) || self.attributes.iter().any(|a| a == key)
    }

    /// Empty instance of this model type.
    pub fn instantiate(&self) -> Model {
        Model::new(self.name.clone())
    }
}
