//! Include/exclude filter
//!
//! Everything matched by the includes, except what the excludes match, is
//! selected. Excludes always win. An empty includes set, or one holding the
//! wildcard, selects every candidate not excluded.

use crate::filter::patterns::{PatternSet, WILDCARD};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use tracing::trace;

const EMPTY_INCLUDES: &str = "*";
const EMPTY_EXCLUDES: &str = "<none>";

/// Immutable include/exclude decision oracle
///
/// Built through [`FilterBuilder`] or the generator functions. Nothing here
/// enforces the validator's rules; a filter can hold a pair that
/// [`validate_includes_excludes`](crate::filter::validate_includes_excludes)
/// would reject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    includes: PatternSet,
    excludes: PatternSet,
}

impl Filter {
    pub fn builder() -> FilterBuilder {
        FilterBuilder::new()
    }

    /// Included patterns, sorted
    pub fn includes(&self) -> Vec<String> {
        self.includes.list()
    }

    /// Excluded patterns, sorted
    pub fn excludes(&self) -> Vec<String> {
        self.excludes.list()
    }

    pub fn include_set(&self) -> &PatternSet {
        &self.includes
    }

    pub fn exclude_set(&self) -> &PatternSet {
        &self.excludes
    }

    /// Decide whether a candidate is selected
    pub fn should_include(&self, candidate: &str) -> bool {
        if self.excludes.matches(candidate) {
            trace!(candidate, "Excluded by pattern");
            return false;
        }

        // Empty includes means include everything
        let included = self.includes.is_empty()
            || self.includes.has(WILDCARD)
            || self.includes.matches(candidate);
        trace!(candidate, included, "Checked includes");
        included
    }

    /// True when nothing is excluded and includes are empty or just `*`
    pub fn include_everything(&self) -> bool {
        self.excludes.is_empty() && (self.includes.is_empty() || self.includes.is_wildcard_only())
    }

    /// Comma-separated includes, or `*` when there are none
    pub fn includes_display(&self) -> String {
        join_or(&self.includes, EMPTY_INCLUDES)
    }

    /// Comma-separated excludes, or `<none>` when there are none
    pub fn excludes_display(&self) -> String {
        join_or(&self.excludes, EMPTY_EXCLUDES)
    }
}

fn join_or(set: &PatternSet, empty: &str) -> String {
    if set.is_empty() {
        return empty.to_string();
    }
    set.iter().collect::<Vec<_>>().join(", ")
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "includes: {}; excludes: {}",
            self.includes_display(),
            self.excludes_display()
        )
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Filter", 2)?;
        state.serialize_field("includes", &self.includes())?;
        state.serialize_field("excludes", &self.excludes())?;
        state.end()
    }
}

/// Accumulates patterns and yields a finished [`Filter`]
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    includes: PatternSet,
    excludes: PatternSet,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add include patterns; `*` means "include everything"
    pub fn include<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes.add(items);
        self
    }

    /// Add exclude patterns
    pub fn exclude<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes.add(items);
        self
    }

    pub(crate) fn push_include(&mut self, item: String) {
        self.includes.add([item]);
    }

    pub(crate) fn push_exclude(&mut self, item: String) {
        self.excludes.add([item]);
    }

    pub fn build(self) -> Filter {
        Filter {
            includes: self.includes,
            excludes: self.excludes,
        }
    }
}
