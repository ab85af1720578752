//! Scope filtering for namespaces and resource kinds
//!
//! Decides which namespaces or resource kinds an operation should act on,
//! given user-supplied include and exclude lists.
//!
//! ## Features
//!
//! - **Glob patterns** (`*`, `?`, `[...]`, `{a,b}`) in both lists
//! - **Exclude-wins semantics** with `*` or an empty include list meaning "everything"
//! - **Aggregated validation** that reports every problem with a pair of lists
//! - **Resource canonicalization** through a pluggable resolver, keeping
//!   unresolvable names instead of dropping them
//! - **Layered configuration** via TOML files and environment variables
//!
//! ## Example Configuration
//!
//! ```toml
//! [namespaces]
//! include = ["app-web", "app-api"]
//! exclude = ["app-legacy"]
//!
//! [resources]
//! include = ["deploy", "pods"]
//!
//! [[discovery]]
//! group = "apps"
//! version = "v1"
//! resource = "deployments"
//! short_names = ["deploy"]
//! ```
//!
//! Namespace entries may be globs such as `app-*` and filters match them, but
//! namespace validation still reports them as invalid namespace names.

pub mod config;
pub mod error;
pub mod filter;
pub mod namespace;
pub mod resource;

// Re-export main types
pub use config::{AppConfig, load_config};
pub use error::{ConfigError, ResolveError, Violation};
pub use filter::{Filter, FilterBuilder, PatternSet};
pub use resource::{ResourceResolver, StaticResolver};
