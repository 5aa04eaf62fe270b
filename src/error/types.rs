//! Core error types

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Errors produced while transforming a response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The requested model type is not registered.
    #[error("Model type `{0}` not found")]
    ModelNotFound(String),

    /// The document lacks one or more of the fields a page is built from.
    #[error("Missing required fields for pagination: {}", .0.join(", "))]
    MissingPaginationFields(Vec<String>),

    /// A JSON value could not be (de)serialized into the requested shape.
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Coarse error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Model registry lookups.
    Model,
    /// Page construction.
    Pagination,
    /// JSON shape conversions.
    Serialization,
}

impl TransformError {
    pub fn model_not_found(model_type: impl Into<String>) -> Self {
        Self::ModelNotFound(model_type.into())
    }

    pub fn missing_pagination_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingPaginationFields(fields.into_iter().map(Into::into).collect())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModelNotFound(_) => ErrorCategory::Model,
            Self::MissingPaginationFields(_) => ErrorCategory::Pagination,
            Self::JsonError(_) => ErrorCategory::Serialization,
        }
    }
}
