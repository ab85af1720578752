//! Resource kinds
//!
//! Identifier types for resource kinds and the resolver used to canonicalize
//! user-supplied resource names into `resource.group` form.

pub mod resolver;
pub mod types;

pub use resolver::{ResourceDescriptor, ResourceResolver, StaticResolver};
pub use types::{GroupResource, GroupVersionResource};
