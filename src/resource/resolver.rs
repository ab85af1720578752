//! Resource resolution
//!
//! Turns loosely written resource names (short names, singulars, names with
//! or without a group) into fully-qualified resources.

use crate::error::ResolveError;
use crate::resource::types::{GroupResource, GroupVersionResource};
use serde::Deserialize;
use std::collections::BTreeSet;

/// Resolves a (possibly partial) resource into a fully-qualified one
pub trait ResourceResolver {
    /// Look up a resource; empty group or version fields mean "any"
    fn resource_for(
        &self,
        query: &GroupVersionResource,
    ) -> Result<GroupVersionResource, ResolveError>;
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for &R {
    fn resource_for(
        &self,
        query: &GroupVersionResource,
    ) -> Result<GroupVersionResource, ResolveError> {
        (**self).resource_for(query)
    }
}

/// A resource kind known to a [`StaticResolver`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResourceDescriptor {
    /// API group, empty for the core group
    pub group: String,

    /// Preferred API version
    pub version: String,

    /// Plural resource name, e.g. `deployments`
    pub resource: String,

    /// Singular name, e.g. `deployment`
    pub singular: String,

    /// Short names, e.g. `deploy`
    pub short_names: Vec<String>,
}

impl ResourceDescriptor {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            resource: resource.into(),
            ..Default::default()
        }
    }

    pub fn singular(mut self, singular: impl Into<String>) -> Self {
        self.singular = singular.into();
        self
    }

    pub fn short_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.short_names = names.into_iter().map(Into::into).collect();
        self
    }

    fn answers_to(&self, name: &str) -> bool {
        self.resource.eq_ignore_ascii_case(name)
            || (!self.singular.is_empty() && self.singular.eq_ignore_ascii_case(name))
            || self.short_names.iter().any(|s| s.eq_ignore_ascii_case(name))
    }

    fn matches(&self, query: &GroupVersionResource) -> bool {
        (query.group.is_empty() || query.group == self.group)
            && (query.version.is_empty() || query.version == self.version)
            && self.answers_to(&query.resource)
    }

    fn to_gvr(&self) -> GroupVersionResource {
        GroupVersionResource::new(&self.group, &self.version, &self.resource)
    }
}

/// Resolver backed by a fixed table of resource kinds
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    resources: Vec<ResourceDescriptor>,
}

impl StaticResolver {
    pub fn new(resources: impl IntoIterator<Item = ResourceDescriptor>) -> Self {
        Self {
            resources: resources.into_iter().collect(),
        }
    }
}

impl ResourceResolver for StaticResolver {
    fn resource_for(
        &self,
        query: &GroupVersionResource,
    ) -> Result<GroupVersionResource, ResolveError> {
        let matched: Vec<&ResourceDescriptor> =
            self.resources.iter().filter(|r| r.matches(query)).collect();

        let distinct: BTreeSet<GroupResource> =
            matched.iter().map(|r| r.to_gvr().group_resource()).collect();

        match (matched.first(), distinct.len()) {
            (None, _) => Err(ResolveError::not_found(query.group_resource().to_string())),
            (Some(found), 1) => Ok(found.to_gvr()),
            _ => Err(ResolveError::Ambiguous {
                resource: query.group_resource().to_string(),
                candidates: distinct.iter().map(ToString::to_string).collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> StaticResolver {
        StaticResolver::new([
            ResourceDescriptor::new("", "v1", "pods")
                .singular("pod")
                .short_names(["po"]),
            ResourceDescriptor::new("apps", "v1", "deployments")
                .singular("deployment")
                .short_names(["deploy"]),
            ResourceDescriptor::new("", "v1", "events").singular("event"),
            ResourceDescriptor::new("events.k8s.io", "v1", "events").singular("event"),
        ])
    }

    fn lookup(s: &str) -> Result<String, ResolveError> {
        resolver()
            .resource_for(&GroupResource::parse(s).with_version(""))
            .map(|gvr| gvr.group_resource().to_string())
    }

    #[test]
    fn test_resolves_plural_singular_and_short_names() {
        assert_eq!(lookup("pods").unwrap(), "pods");
        assert_eq!(lookup("pod").unwrap(), "pods");
        assert_eq!(lookup("po").unwrap(), "pods");
        assert_eq!(lookup("deploy").unwrap(), "deployments.apps");
        assert_eq!(lookup("Deployment").unwrap(), "deployments.apps");
    }

    #[test]
    fn test_group_qualified_lookup() {
        assert_eq!(lookup("deployments.apps").unwrap(), "deployments.apps");
        assert_eq!(
            lookup("events.events.k8s.io").unwrap(),
            "events.events.k8s.io"
        );
        assert!(matches!(
            lookup("deployments.extensions"),
            Err(ResolveError::NotFound { .. })
        ));
    }

    #[test]
    fn test_unknown_resource() {
        assert_eq!(
            lookup("widgets"),
            Err(ResolveError::NotFound {
                resource: "widgets".into()
            })
        );
    }

    #[test]
    fn test_ambiguous_resource() {
        let err = lookup("events").unwrap_err();
        match err {
            ResolveError::Ambiguous { candidates, .. } => {
                assert_eq!(candidates, vec!["events", "events.events.k8s.io"]);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    #[test]
    fn test_version_constrains_lookup() {
        let r = resolver();
        let found = r
            .resource_for(&GroupVersionResource::new("apps", "v1", "deploy"))
            .unwrap();
        assert_eq!(found, GroupVersionResource::new("apps", "v1", "deployments"));

        assert!(
            r.resource_for(&GroupVersionResource::new("apps", "v1beta1", "deploy"))
                .is_err()
        );
    }
}
