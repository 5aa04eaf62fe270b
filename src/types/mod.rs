//! Output types produced by the transformer.

pub mod model;
pub mod transformed;

pub use model::{Materialized, Model};
pub use transformed::Transformed;
