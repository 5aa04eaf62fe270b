//! Pagination
//!
//! `LengthAwarePage` is the value `to_paginated` builds. The current page
//! number and the base path depend on the incoming request, so they come from
//! a [`PageResolver`] supplied by the host.

mod page;
mod resolver;

pub use page::LengthAwarePage;
pub use resolver::{PageResolver, RequestPageResolver, StaticPageResolver};
