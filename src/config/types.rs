//! Configuration types for scope-filter
//!
//! This module defines the configuration structure that can be loaded from
//! TOML files and/or environment variables.

use crate::error::Violation;
use crate::filter::{
    Filter, generate_includes_excludes, resource_includes_excludes, validate_includes_excludes,
    validate_namespace_includes_excludes,
};
use crate::resource::{ResourceDescriptor, StaticResolver};
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Namespaces to include/exclude
    pub namespaces: IncludesExcludesConfig,

    /// Resource kinds to include/exclude
    pub resources: IncludesExcludesConfig,

    /// Resource kinds known to the resolver
    pub discovery: Vec<ResourceDescriptor>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Resolver over the configured resource table
    pub fn resolver(&self) -> StaticResolver {
        StaticResolver::new(self.discovery.iter().cloned())
    }

    /// Namespace filter, entries used verbatim
    pub fn namespace_filter(&self) -> Filter {
        generate_includes_excludes(
            &self.namespaces.include,
            &self.namespaces.exclude,
            str::to_string,
        )
    }

    /// Resource filter, entries canonicalized through [`Self::resolver`]
    pub fn resource_filter(&self) -> Filter {
        resource_includes_excludes(
            &self.resolver(),
            &self.resources.include,
            &self.resources.exclude,
        )
    }

    /// Every problem with the configured namespace and resource lists
    pub fn violations(&self) -> Violations {
        Violations {
            namespaces: validate_namespace_includes_excludes(
                &self.namespaces.include,
                &self.namespaces.exclude,
            ),
            resources: validate_includes_excludes(
                &self.resources.include,
                &self.resources.exclude,
            ),
        }
    }
}

/// Validation results grouped by list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    pub namespaces: Vec<Violation>,
    pub resources: Vec<Violation>,
}

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty() && self.resources.is_empty()
    }

    pub fn len(&self) -> usize {
        self.namespaces.len() + self.resources.len()
    }
}

/// A pair of include/exclude lists as written by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IncludesExcludesConfig {
    /// Patterns to include; empty or `["*"]` means everything
    pub include: Vec<String>,

    /// Patterns to exclude
    pub exclude: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directives (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}
