//! Configuration loader with layered sources
//!
//! Loads configuration from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (SCOPE_FILTER__*)
//! 2. Configuration file (TOML)
//! 3. Default values

use crate::config::types::AppConfig;
use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use std::path::Path;

/// Default configuration file paths to check (in order)
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "scope-filter.toml",
    ".scope-filter.toml",
    "~/.config/scope-filter/config.toml",
    "/etc/scope-filter/config.toml",
];

/// Keys that accept comma-separated lists from the environment
const LIST_KEYS: &[&str] = &[
    "namespaces.include",
    "namespaces.exclude",
    "resources.include",
    "resources.exclude",
];

/// Load configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(toml_str, FileFormat::Toml))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Load configuration from files and environment
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        // Explicit path provided - must exist
        if !Path::new(path).exists() {
            return Err(ConfigError::Load(format!(
                "Configuration file not found: {}",
                path
            )));
        }
        builder = builder.add_source(File::new(path, FileFormat::Toml));
    } else {
        // Try default paths (first existing one wins)
        for path in DEFAULT_CONFIG_PATHS {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
                break;
            }
        }
    }

    // e.g. SCOPE_FILTER__LOGGING__LEVEL, SCOPE_FILTER__NAMESPACES__INCLUDE=a,b
    // Double underscore (__) maps to nested keys (logging.level)
    let mut env = Environment::with_prefix("SCOPE_FILTER")
        .separator("__")
        .list_separator(",")
        .try_parsing(true);
    for key in LIST_KEYS {
        env = env.with_list_parse_key(key);
    }
    builder = builder.add_source(env);

    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate configuration values
///
/// Include/exclude semantics are left to [`AppConfig::violations`]; this only
/// rejects settings that cannot be used at all.
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::Missing {
            field: "logging.level".to_string(),
        });
    }

    for (i, descriptor) in config.discovery.iter().enumerate() {
        if descriptor.resource.is_empty() {
            return Err(ConfigError::Missing {
                field: format!("discovery[{}].resource", i),
            });
        }
        if descriptor.version.is_empty() {
            return Err(ConfigError::Missing {
                field: format!("discovery[{}].version", i),
            });
        }
        if descriptor.resource.contains('.') {
            return Err(ConfigError::Invalid {
                message: format!(
                    "discovery[{}].resource must not contain '.', got: {}",
                    i, descriptor.resource
                ),
            });
        }
    }

    Ok(())
}
