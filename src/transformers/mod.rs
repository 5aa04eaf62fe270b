//! Transformers layer
//!
//! `ResponseTransformer` decodes a response body and converts it; the
//! `ModelMapper` does the document-to-model work underneath it.

pub(crate) mod document;
pub mod mapper;
pub mod options;
pub mod response;

pub use mapper::ModelMapper;
pub use options::TransformOptions;
pub use response::{PAGINATION_FIELDS, ResponseTransformer};
