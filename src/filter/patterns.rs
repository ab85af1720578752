//! Glob pattern sets
//!
//! A [`PatternSet`] holds distinct pattern strings, each compiled once as a
//! glob when it is added.

use globset::{GlobBuilder, GlobMatcher};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Pattern that matches every candidate when used alone in includes
pub const WILDCARD: &str = "*";

/// Set of glob-capable patterns keyed by their source text
///
/// A pattern that does not compile as a glob is kept in the set (it still
/// shows up in [`PatternSet::list`] and [`PatternSet::has`]), but it poisons
/// matching: while it is present, [`PatternSet::matches`] returns `false` for
/// every candidate, even ones another pattern would match.
#[derive(Clone, Default)]
pub struct PatternSet {
    patterns: BTreeMap<String, Option<GlobMatcher>>,
}

impl PatternSet {
    /// Create an empty pattern set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert patterns; duplicates are ignored
    pub fn add<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in patterns {
            let pattern = pattern.into();
            if self.patterns.contains_key(&pattern) {
                continue;
            }

            let compiled = match compile(&pattern) {
                Ok(matcher) => Some(matcher),
                Err(e) => {
                    warn!(
                        pattern = %pattern,
                        error = %e,
                        "Pattern is not a valid glob, set will match nothing"
                    );
                    None
                }
            };
            self.patterns.insert(pattern, compiled);
        }
    }

    /// Patterns in ascending order
    pub fn list(&self) -> Vec<String> {
        self.patterns.keys().cloned().collect()
    }

    /// Iterate over patterns in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    /// Number of distinct patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Exact-string membership, no glob evaluation
    pub fn has(&self, pattern: &str) -> bool {
        self.patterns.contains_key(pattern)
    }

    /// Whether the set only holds the wildcard
    pub fn is_wildcard_only(&self) -> bool {
        self.len() == 1 && self.has(WILDCARD)
    }

    /// Check if any pattern, as a glob, matches the whole candidate
    pub fn matches(&self, candidate: &str) -> bool {
        let mut matched = false;
        for compiled in self.patterns.values() {
            match compiled {
                // One uncompilable pattern fails the whole check
                None => return false,
                Some(matcher) => matched = matched || matcher.is_match(candidate),
            }
        }
        matched
    }

    /// Patterns that failed to compile as globs
    pub fn invalid(&self) -> impl Iterator<Item = &str> {
        self.patterns
            .iter()
            .filter(|(_, compiled)| compiled.is_none())
            .map(|(pattern, _)| pattern.as_str())
    }
}

impl PartialEq for PatternSet {
    fn eq(&self, other: &Self) -> bool {
        self.patterns.keys().eq(other.patterns.keys())
    }
}

impl Eq for PatternSet {}

impl fmt::Debug for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.patterns.keys()).finish()
    }
}

impl<S: Into<String>> FromIterator<S> for PatternSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add(iter);
        set
    }
}

/// `*` crosses `/`, and `\` always escapes regardless of platform
fn compile(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    GlobBuilder::new(pattern)
        .literal_separator(false)
        .backslash_escape(true)
        .build()
        .map(|glob| glob.compile_matcher())
}
