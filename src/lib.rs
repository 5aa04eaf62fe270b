//! # response-transformer
//!
//! Turns raw HTTP JSON responses into structured values: decoded documents,
//! models filtered through a per-type attribute whitelist, collections of
//! models, and length-aware pages. Nested relations are resolved to any depth
//! and a top-level data envelope can be unwrapped on the way.
//!
//! ```rust,ignore
//! use response_transformer::prelude::*;
//!
//! let registry = ModelRegistry::new()
//!     .with_model(ModelDescriptor::new("Post", ["title"]))
//!     .with_model(ModelDescriptor::new("User", ["name"]));
//!
//! let post = ResponseTransformer::new(body)
//!     .with_envelope_key("data")
//!     .to_model(&registry, "Post", &RelationSpec::new().with("author", "User"))?;
//! ```
//!
//! The crate performs no I/O. Transport, and discovery of the current page
//! from a request, belong to the host.

pub mod error;
pub mod pagination;
pub mod registry;
pub mod relations;
pub mod transformers;
pub mod types;

pub use error::{ErrorCategory, Result, TransformError};
pub use pagination::{LengthAwarePage, PageResolver, RequestPageResolver, StaticPageResolver};
pub use registry::{ApiModel, ModelDescriptor, ModelRegistry};
pub use relations::{RelationEntry, RelationSpec};
pub use transformers::{ModelMapper, ResponseTransformer, TransformOptions};
pub use types::{Materialized, Model, Transformed};

/// Common imports
pub mod prelude {
    pub use crate::error::{Result, TransformError};
    pub use crate::pagination::{LengthAwarePage, PageResolver, RequestPageResolver, StaticPageResolver};
    pub use crate::registry::{ApiModel, ModelDescriptor, ModelRegistry};
    pub use crate::relations::RelationSpec;
    pub use crate::transformers::{ResponseTransformer, TransformOptions};
    pub use crate::types::{Materialized, Model, Transformed};
}
