//! Include/exclude filtering
//!
//! ## Semantics
//!
//! A filter pairs an include set and an exclude set of glob patterns:
//!
//! 1. A candidate matching any exclude pattern is never selected
//! 2. Otherwise it is selected if the includes are empty, contain `*`, or
//!    have a matching pattern
//!
//! `*` may only appear alone in includes and never in excludes. Those rules
//! are checked by the validation functions, not by [`Filter`] itself.
//!
//! ## Example
//!
//! ```
//! use scope_filter::filter::{Filter, validate_includes_excludes};
//!
//! let includes = ["app-*"];
//! let excludes = ["app-legacy"];
//! assert!(validate_includes_excludes(&includes, &excludes).is_empty());
//!
//! let filter = Filter::builder().include(includes).exclude(excludes).build();
//! assert!(filter.should_include("app-web"));
//! assert!(!filter.should_include("app-legacy"));
//! assert!(!filter.should_include("db"));
//! ```

pub mod generate;
pub mod includes_excludes;
pub mod patterns;
pub mod validation;

pub use generate::{canonical_resource, generate_includes_excludes, resource_includes_excludes};
pub use includes_excludes::{Filter, FilterBuilder};
pub use patterns::{PatternSet, WILDCARD};
pub use validation::{
    validate_includes_excludes, validate_namespace_includes_excludes,
    validate_namespace_includes_excludes_with,
};
