//! Error types for scope-filter
//!
//! This module defines the error hierarchy used throughout the crate.
//! Matching never fails; errors only surface from configuration loading,
//! identifier resolution and validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {field}")]
    Missing { field: String },
}

/// Failure to turn a raw resource identifier into a group-resource
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("resource '{resource}' not found")]
    NotFound { resource: String },

    #[error("resource '{resource}' is ambiguous, matches: {}", .candidates.join(", "))]
    Ambiguous {
        resource: String,
        candidates: Vec<String>,
    },
}

impl ResolveError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}

/// A single problem found while validating an include/exclude pair
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("includes list must either contain '*' only, or a non-empty list of items")]
    WildcardWithOtherIncludes,

    #[error("excludes list cannot contain '*'")]
    WildcardInExcludes,

    #[error("excludes list cannot contain an item in the includes list: {0}")]
    Overlap(String),

    #[error("invalid namespace {name:?}: {reason}")]
    InvalidNamespace { name: String, reason: String },
}

impl Violation {
    pub fn invalid_namespace(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNamespace {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
