//! Filter generation from raw user input
//!
//! Raw entries are mapped through a caller-supplied function into their
//! canonical form before being added to a [`Filter`].

use crate::filter::includes_excludes::{Filter, FilterBuilder};
use crate::filter::patterns::WILDCARD;
use crate::resource::{GroupResource, ResourceResolver};
use tracing::debug;

/// Build a [`Filter`] by mapping every raw entry through `map_fn`
///
/// `*` in includes is kept as-is without calling `map_fn`. `*` in excludes is
/// invalid and silently dropped here; validation is where it gets reported.
/// Entries for which `map_fn` returns an empty string are omitted.
pub fn generate_includes_excludes<I, E, F>(includes: &[I], excludes: &[E], mut map_fn: F) -> Filter
where
    I: AsRef<str>,
    E: AsRef<str>,
    F: FnMut(&str) -> String,
{
    let mut builder = FilterBuilder::new();

    for item in includes.iter().map(AsRef::as_ref) {
        if item == WILDCARD {
            builder.push_include(item.to_string());
            continue;
        }

        let key = map_fn(item);
        if key.is_empty() {
            debug!(item, "Dropping include with no mapping");
            continue;
        }
        builder.push_include(key);
    }

    for item in excludes.iter().map(AsRef::as_ref) {
        if item == WILDCARD {
            continue;
        }

        let key = map_fn(item);
        if key.is_empty() {
            debug!(item, "Dropping exclude with no mapping");
            continue;
        }
        builder.push_exclude(key);
    }

    builder.build()
}

/// Build a resource [`Filter`] keyed by `resource.group` names
///
/// Entries the resolver cannot handle are kept verbatim. Dropping them could
/// leave the includes empty, which would select every resource.
pub fn resource_includes_excludes<R, I, E>(resolver: &R, includes: &[I], excludes: &[E]) -> Filter
where
    R: ResourceResolver + ?Sized,
    I: AsRef<str>,
    E: AsRef<str>,
{
    generate_includes_excludes(includes, excludes, |item| {
        canonical_resource(resolver, item)
    })
}

/// Resolve a raw resource name to `resource.group`, or return it unchanged
pub fn canonical_resource<R>(resolver: &R, item: &str) -> String
where
    R: ResourceResolver + ?Sized,
{
    let query = GroupResource::parse(item).with_version("");
    match resolver.resource_for(&query) {
        Ok(gvr) => gvr.group_resource().to_string(),
        Err(e) => {
            debug!(item, error = %e, "Unable to resolve resource, keeping it as given");
            item.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::resource::GroupVersionResource;

    const NONE: &[&str] = &[];

    struct NothingResolves;

    impl ResourceResolver for NothingResolves {
        fn resource_for(
            &self,
            query: &GroupVersionResource,
        ) -> Result<GroupVersionResource, ResolveError> {
            Err(ResolveError::not_found(query.resource.clone()))
        }
    }

    #[test]
    fn test_identity_mapping() {
        let f = generate_includes_excludes(&["*", "pods"], &["cm"], str::to_string);
        assert_eq!(f.includes(), vec!["*", "pods"]);
        assert_eq!(f.excludes(), vec!["cm"]);
    }

    #[test]
    fn test_wildcard_bypasses_mapping() {
        let f = generate_includes_excludes(&["*"], NONE, |_| panic!("mapped the wildcard"));
        assert_eq!(f.includes(), vec!["*"]);
    }

    #[test]
    fn test_wildcard_dropped_from_excludes() {
        let f = generate_includes_excludes(NONE, &["*", "secrets"], str::to_string);
        assert_eq!(f.excludes(), vec!["secrets"]);
    }

    #[test]
    fn test_empty_mapping_drops_entry() {
        let f = generate_includes_excludes(&["x"], &["y"], |_| String::new());
        assert!(f.includes().is_empty());
        assert!(f.excludes().is_empty());
        assert!(f.include_everything());
    }

    #[test]
    fn test_mapping_collapses_duplicates() {
        let f = generate_includes_excludes(&["po", "pod", "pods"], NONE, |_| "pods".into());
        assert_eq!(f.includes(), vec!["pods"]);
    }

    #[test]
    fn test_unresolved_resources_are_kept() {
        let f = resource_includes_excludes(&NothingResolves, &["widgets"], &["gadgets.acme.io"]);
        assert_eq!(f.includes(), vec!["widgets"]);
        assert_eq!(f.excludes(), vec!["gadgets.acme.io"]);
        assert!(!f.should_include("pods"));
    }
}
