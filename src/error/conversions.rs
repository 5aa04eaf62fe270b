//! Type Conversions for TransformError
//!
//! From implementations for error types raised by the crate's dependencies.

use super::types::TransformError;

impl From<serde_json::Error> for TransformError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
