//! Include/exclude list validation
//!
//! Validation never stops at the first problem; every violation found is
//! returned so callers can report them together.

use crate::error::Violation;
use crate::filter::patterns::WILDCARD;
use crate::namespace::{DnsLabelValidator, NamespaceNameValidator};
use std::collections::BTreeSet;

/// Check a raw include/exclude pair for structural problems
///
/// - `*` in includes must be the only entry
/// - `*` is never allowed in excludes
/// - no entry may be both included and excluded (exact string match, so
///   overlapping globs are not detected)
pub fn validate_includes_excludes<I, E>(includes: &[I], excludes: &[E]) -> Vec<Violation>
where
    I: AsRef<str>,
    E: AsRef<str>,
{
    let includes = distinct(includes);
    let excludes = distinct(excludes);
    let mut errs = Vec::new();

    if includes.len() > 1 && includes.contains(WILDCARD) {
        errs.push(Violation::WildcardWithOtherIncludes);
    }

    if excludes.contains(WILDCARD) {
        errs.push(Violation::WildcardInExcludes);
    }

    errs.extend(
        excludes
            .iter()
            .filter(|item| includes.contains(*item))
            .map(|item| Violation::Overlap(item.to_string())),
    );

    errs
}

/// [`validate_includes_excludes`] plus DNS label checks on every namespace
pub fn validate_namespace_includes_excludes<I, E>(includes: &[I], excludes: &[E]) -> Vec<Violation>
where
    I: AsRef<str>,
    E: AsRef<str>,
{
    validate_namespace_includes_excludes_with(&DnsLabelValidator, includes, excludes)
}

/// [`validate_includes_excludes`] plus a caller-supplied name check on every
/// entry except `*`
pub fn validate_namespace_includes_excludes_with<V, I, E>(
    validator: &V,
    includes: &[I],
    excludes: &[E],
) -> Vec<Violation>
where
    V: NamespaceNameValidator + ?Sized,
    I: AsRef<str>,
    E: AsRef<str>,
{
    let mut errs = validate_includes_excludes(includes, excludes);

    // '*' is not a valid namespace name but is allowed here; in excludes it
    // has already been reported above.
    let names = distinct(includes)
        .into_iter()
        .chain(distinct(excludes))
        .filter(|name| *name != WILDCARD);

    for name in names {
        errs.extend(
            validator
                .validate(name, false)
                .into_iter()
                .map(|reason| Violation::invalid_namespace(name, reason)),
        );
    }

    errs
}

fn distinct<S: AsRef<str>>(items: &[S]) -> BTreeSet<&str> {
    items.iter().map(AsRef::as_ref).collect()
}
