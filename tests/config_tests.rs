//! Configuration loading tests

use scope_filter::config::{LogFormat, load_config_from_str};
use scope_filter::{ConfigError, Violation};

const FULL_CONFIG: &str = r#"
[namespaces]
include = ["app-*", "shared"]
exclude = ["app-legacy"]

[resources]
include = ["deploy", "po", "widgets"]
exclude = ["secrets"]

[[discovery]]
group = "apps"
version = "v1"
resource = "deployments"
singular = "deployment"
short_names = ["deploy"]

[[discovery]]
version = "v1"
resource = "pods"
singular = "pod"
short_names = ["po"]

[[discovery]]
version = "v1"
resource = "secrets"
singular = "secret"

[logging]
level = "debug"
format = "json"
"#;

#[test]
fn test_full_config() {
    let config = load_config_from_str(FULL_CONFIG).unwrap();

    assert_eq!(config.namespaces.include, vec!["app-*", "shared"]);
    assert_eq!(config.resources.exclude, vec!["secrets"]);
    assert_eq!(config.discovery.len(), 3);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);

    // "app-*" is not a DNS label; everything else is clean
    let violations = config.violations();
    assert!(violations.resources.is_empty());
    assert_eq!(violations.namespaces.len(), 1);
    assert!(matches!(
        &violations.namespaces[0],
        Violation::InvalidNamespace { name, .. } if name == "app-*"
    ));
}

#[test]
fn test_namespace_glob_matches_but_is_reported() {
    let config_str = r#"
[namespaces]
include = ["team-*", "shared"]
exclude = ["team-legacy"]
"#;

    let config = load_config_from_str(config_str).unwrap();

    let namespaces = config.namespace_filter();
    assert!(namespaces.should_include("team-web"));
    assert!(!namespaces.should_include("team-legacy"));

    let violations = config.violations();
    assert_eq!(violations.len(), 1);
    assert!(
        violations.namespaces[0]
            .to_string()
            .starts_with("invalid namespace \"team-*\": a lowercase RFC 1123 label")
    );
}

#[test]
fn test_literal_namespaces_are_clean() {
    let config_str = r#"
[namespaces]
include = ["shared", "team-web"]
exclude = ["kube-system"]
"#;

    let config = load_config_from_str(config_str).unwrap();
    assert!(config.violations().is_empty());
}

#[test]
fn test_filters_from_config() {
    let config = load_config_from_str(FULL_CONFIG).unwrap();

    let namespaces = config.namespace_filter();
    assert!(namespaces.should_include("app-web"));
    assert!(namespaces.should_include("shared"));
    assert!(!namespaces.should_include("app-legacy"));
    assert!(!namespaces.should_include("default"));

    let resources = config.resource_filter();
    assert_eq!(
        resources.includes(),
        vec!["deployments.apps", "pods", "widgets"]
    );
    assert!(resources.should_include("deployments.apps"));
    assert!(!resources.should_include("secrets"));
}

#[test]
fn test_empty_config_is_default() {
    let config = load_config_from_str("").unwrap();
    assert!(config.namespace_filter().include_everything());
    assert!(config.discovery.is_empty());
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn test_invalid_log_format() {
    let config_str = r#"
[logging]
format = "xml"
"#;

    let result = load_config_from_str(config_str);
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
fn test_missing_explicit_file() {
    use scope_filter::config::load_config;

    let result = load_config(Some("/nonexistent/scope-filter.toml"));
    assert!(matches!(result, Err(ConfigError::Load(msg)) if msg.contains("not found")));
}

#[test]
#[serial_test::serial]
fn test_load_from_file() {
    use std::fs;
    use scope_filter::config::load_config;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("scope-filter.toml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    let config = load_config(Some(config_path.to_str().unwrap())).unwrap();
    assert_eq!(config.namespaces.exclude, vec!["app-legacy"]);
}

#[test]
#[serial_test::serial]
fn test_env_overrides_file() {
    use std::env;
    use std::fs;
    use scope_filter::config::load_config;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("scope-filter.toml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    unsafe {
        env::set_var("SCOPE_FILTER__LOGGING__LEVEL", "trace");
    }

    let config = load_config(Some(config_path.to_str().unwrap()));

    unsafe {
        env::remove_var("SCOPE_FILTER__LOGGING__LEVEL");
    }

    let config = config.unwrap();
    assert_eq!(config.logging.level, "trace");
    // Untouched keys still come from the file
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
#[serial_test::serial]
fn test_env_list_values() {
    use std::env;
    use std::fs;
    use scope_filter::config::load_config;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("scope-filter.toml");
    fs::write(&config_path, "").unwrap();

    unsafe {
        env::set_var("SCOPE_FILTER__NAMESPACES__EXCLUDE", "kube-system,kube-public");
    }

    let config = load_config(Some(config_path.to_str().unwrap()));

    unsafe {
        env::remove_var("SCOPE_FILTER__NAMESPACES__EXCLUDE");
    }

    let config = config.unwrap();
    assert_eq!(
        config.namespaces.exclude,
        vec!["kube-system", "kube-public"]
    );
    assert!(!config.namespace_filter().should_include("kube-public"));
}
