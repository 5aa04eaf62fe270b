//! Error Handling Module
//!
//! Errors raised while turning a response into models or pages:
//! - `TransformError`, the error enum returned by every fallible operation
//! - `ErrorCategory`, a coarse classification for callers that branch on kind
//! - conversions from `serde_json::Error`
//!
//! Upstream API error envelopes are not errors here. They come back as
//! [`crate::Transformed::ApiError`] so callers decide what to do with them.
//!
//! # Example
//!
//! ```rust,ignore
//! use response_transformer::error::{ErrorCategory, TransformError};
//!
//! let error = TransformError::model_not_found("Invoice");
//! assert_eq!(error.category(), ErrorCategory::Model);
//! ```

mod conversions;
pub mod types;

pub use types::*;
