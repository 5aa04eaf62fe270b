//! Response transformer
//!
//! Decodes a raw JSON response body once per call and converts it into plain
//! values, models, collections or pages.
//!
//! ```rust,ignore
//! let registry = ModelRegistry::new().with_model(ModelDescriptor::new("User", ["name"]));
//! let relations = RelationSpec::new().with("company", "Company");
//!
//! let user = ResponseTransformer::new(body)
//!     .with_envelope_key("data")
//!     .to_model(&registry, "User", &relations)?;
//! ```

use serde_json::Value;

use crate::error::{Result, TransformError};
use crate::pagination::{LengthAwarePage, PageResolver};
use crate::registry::ModelRegistry;
use crate::relations::RelationSpec;
use crate::transformers::document;
use crate::transformers::mapper::ModelMapper;
use crate::transformers::options::TransformOptions;
use crate::types::{Materialized, Model, Transformed};

/// Fields a paginated response must carry.
pub const PAGINATION_FIELDS: [&str; 4] = ["total", "per_page", "current_page", "data"];

/// A raw response body plus the options used to read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseTransformer {
    payload: Option<String>,
    options: TransformOptions,
}

impl ResponseTransformer {
    pub fn new(payload: impl Into<String>) -> Self {
        Self::with_options(payload, TransformOptions::default())
    }

    /// A transformer over a payload that may be absent. Every conversion of
    /// an absent payload yields an empty result.
    pub fn from_optional(payload: Option<String>) -> Self {
        Self {
            payload,
            options: TransformOptions::default(),
        }
    }

    pub fn with_options(payload: impl Into<String>, options: TransformOptions) -> Self {
        Self {
            payload: Some(payload.into()),
            options,
        }
    }

    /// Build a transformer in one call. An empty `envelope_key` means none.
    pub fn set_response(payload: impl Into<String>, envelope_key: &str, detect_errors: bool) -> Self {
        Self::new(payload)
            .with_envelope_key(envelope_key)
            .with_error_detection(detect_errors)
    }

    pub fn with_envelope_key(mut self, key: impl Into<String>) -> Self {
        self.options = self.options.with_envelope_key(key);
        self
    }

    pub fn with_error_detection(mut self, enabled: bool) -> Self {
        self.options = self.options.with_error_detection(enabled);
        self
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Decoded document after error detection and envelope unwrapping.
    /// Error documents are returned unchanged.
    ///
    /// The returned `Value` serves both the object view and the array view
    /// (`value["key"]`, `value[0]`), so there is no separate array accessor.
    #[doc(alias = "to_array")]
    pub fn to_json(&self) -> Option<Value> {
        self.resolve().map(|outcome| match outcome {
            Transformed::Data(doc) | Transformed::ApiError(doc) => doc,
        })
    }

    /// Wrap the document into a list of values.
    pub fn to_collection(&self) -> Transformed<Vec<Value>> {
        match self.resolve() {
            None => Transformed::Data(Vec::new()),
            Some(Transformed::ApiError(doc)) => Transformed::ApiError(doc),
            Some(Transformed::Data(doc)) => Transformed::Data(self.wrap_items(doc)),
        }
    }

    /// Map the document into a list of `model_type` models. An absent or
    /// empty document yields an empty list without consulting `registry`.
    pub fn to_collection_of(&self, registry: &ModelRegistry, model_type: &str) -> Result<Transformed<Vec<Model>>> {
        let doc = match self.resolve() {
            Some(Transformed::ApiError(doc)) => return Ok(Transformed::ApiError(doc)),
            Some(Transformed::Data(doc)) => Some(doc),
            None => None,
        };

        let mapper = ModelMapper::new(registry);
        let models = match doc {
            None => Vec::new(),
            Some(doc) if document::is_empty_value(&doc) => Vec::new(),
            Some(Value::Array(items)) => mapper.map_collection(model_type, &items)?,
            Some(doc) => vec![mapper.map_one(model_type, &doc)?],
        };
        Ok(Transformed::Data(models))
    }

    /// Build a page from a document carrying `total`, `per_page`,
    /// `current_page` and `data`.
    ///
    /// The document's `per_page` wins; `per_page` is used when the document's
    /// value is not a positive integer. Current page and path come from
    /// `resolver`.
    pub fn to_paginated(&self, per_page: u64, resolver: &dyn PageResolver) -> Result<Transformed<LengthAwarePage>> {
        let doc = match self.resolve() {
            Some(Transformed::ApiError(doc)) => return Ok(Transformed::ApiError(doc)),
            Some(Transformed::Data(doc)) => doc,
            None => Value::Null,
        };

        let missing: Vec<&str> = PAGINATION_FIELDS
            .into_iter()
            .filter(|field| document::present(&doc, field).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(TransformError::missing_pagination_fields(missing));
        }

        let total = doc.get("total").and_then(document::as_u64_loose).unwrap_or(0);
        let page_size = doc
            .get("per_page")
            .and_then(document::as_u64_loose)
            .filter(|n| *n > 0)
            .unwrap_or(per_page);
        let items = match doc {
            Value::Object(mut map) => map
                .remove("data")
                .map(document::into_items)
                .unwrap_or_default(),
            _ => Vec::new(),
        };

        Ok(Transformed::Data(LengthAwarePage::new(
            items,
            total,
            page_size,
            resolver.current_page(),
            resolver.current_path(),
        )))
    }

    /// Map the document into `model_type` and attach `relations`.
    ///
    /// A sequence document yields `Many`. An absent or empty document yields
    /// `None` without consulting `registry`.
    pub fn to_model(
        &self,
        registry: &ModelRegistry,
        model_type: &str,
        relations: &RelationSpec,
    ) -> Result<Transformed<Option<Materialized>>> {
        let doc = match self.resolve() {
            Some(Transformed::ApiError(doc)) => return Ok(Transformed::ApiError(doc)),
            Some(Transformed::Data(doc)) => doc,
            None => Value::Null,
        };

        if document::is_empty_value(&doc) {
            return Ok(Transformed::Data(None));
        }

        let mapper = ModelMapper::new(registry);
        let mut materialized = mapper.map_document(model_type, &doc)?;
        if !relations.is_empty() {
            mapper.resolve_into(relations, &doc, &mut materialized)?;
        }
        Ok(Transformed::Data(Some(materialized)))
    }

    /// Decode the payload and apply error detection and the envelope.
    /// `None` means there is no document to work with.
    fn resolve(&self) -> Option<Transformed<Value>> {
        let payload = self.payload.as_deref()?;
        let doc = serde_json::from_str::<Value>(payload).unwrap_or_else(|e| {
            tracing::debug!("response body is not valid JSON: {}", e);
            Value::Null
        });

        if self.options.detect_errors
            && doc.get("errors").is_some_and(|errors| !document::is_empty_value(errors))
        {
            tracing::debug!("response carries an `errors` field; passing it through");
            return Some(Transformed::ApiError(doc));
        }

        let unwrapped = match self.options.envelope_key() {
            Some(key) => {
                let inner = match doc {
                    Value::Object(mut map) => map.remove(key),
                    _ => None,
                };
                let inner = inner.filter(|v| !document::is_empty_value(v));
                if inner.is_none() {
                    tracing::debug!("envelope key `{}` absent or empty", key);
                }
                inner?
            }
            None if doc.is_null() => return None,
            None => doc,
        };
        Some(Transformed::Data(unwrapped))
    }

    fn wrap_items(&self, doc: Value) -> Vec<Value> {
        if document::is_empty_value(&doc) {
            return Vec::new();
        }
        match doc {
            Value::Array(items) if self.options.envelope_key().is_some() => items,
            Value::Array(items) if items.iter().all(document::is_composite) => items,
            Value::Object(map) if map.values().all(document::is_composite) => {
                map.into_iter().map(|(_, v)| v).collect()
            }
            other => vec![other],
        }
    }
}
