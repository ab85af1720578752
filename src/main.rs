//! scope-filter CLI
//!
//! Validates and evaluates namespace and resource include/exclude lists.

use clap::{Parser, Subcommand};
use scope_filter::{
    AppConfig,
    config::{LogFormat, load_config},
    filter::canonical_resource,
};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// scope-filter - Check which namespaces and resources a scope selects
#[derive(Parser, Debug)]
#[command(name = "scope-filter")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "SCOPE_FILTER_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error), overrides the config file
    #[arg(long, env = "SCOPE_FILTER_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report every problem with the configured lists
    Validate,

    /// Print the effective filters
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decide whether candidates are selected
    Check {
        /// Namespace to check
        #[arg(short, long = "namespace")]
        namespaces: Vec<String>,

        /// Resource to check, resolved before matching
        #[arg(short, long = "resource")]
        resources: Vec<String>,
    },
}

fn init_logging(config: &AppConfig, level_override: Option<&str>) {
    let level = level_override.unwrap_or(&config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn run_validate(config: &AppConfig) -> bool {
    let violations = config.violations();
    for v in &violations.namespaces {
        println!("namespaces: {}", v);
    }
    for v in &violations.resources {
        println!("resources: {}", v);
    }

    // Not a violation, but one bad glob silently disables its whole list
    for (list, filter) in [
        ("namespaces", config.namespace_filter()),
        ("resources", config.resource_filter()),
    ] {
        let bad = filter
            .include_set()
            .invalid()
            .chain(filter.exclude_set().invalid());
        for pattern in bad {
            println!(
                "{}: warning: '{}' is not a valid glob, its list matches nothing",
                list, pattern
            );
        }
    }

    if violations.is_empty() {
        println!("ok");
    } else {
        error!(count = violations.len(), "Configuration has violations");
    }
    violations.is_empty()
}

fn run_show(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let namespaces = config.namespace_filter();
    let resources = config.resource_filter();

    if json {
        let out = serde_json::json!({
            "namespaces": namespaces,
            "resources": resources,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("namespaces: {}", namespaces);
        println!("resources:  {}", resources);
    }
    Ok(())
}

fn run_check(config: &AppConfig, namespaces: &[String], resources: &[String]) {
    let ns_filter = config.namespace_filter();
    for ns in namespaces {
        println!("namespace {}: {}", ns, verdict(ns_filter.should_include(ns)));
    }

    let resolver = config.resolver();
    let res_filter = config.resource_filter();
    for raw in resources {
        let resource = canonical_resource(&resolver, raw);
        debug!(raw = %raw, resource = %resource, "Canonicalized resource");
        println!(
            "resource {} ({}): {}",
            raw,
            resource,
            verdict(res_filter.should_include(&resource))
        );
    }
}

fn verdict(included: bool) -> &'static str {
    if included { "included" } else { "excluded" }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logging needs the config, so load errors go straight to stderr
    let config = load_config(args.config.as_deref())?;
    init_logging(&config, args.log_level.as_deref());

    info!(
        version = env!("CARGO_PKG_VERSION"),
        discovery = config.discovery.len(),
        "Loaded configuration"
    );

    match args.command {
        Command::Validate => {
            if !run_validate(&config) {
                std::process::exit(1);
            }
        }
        Command::Show { json } => run_show(&config, json)?,
        Command::Check {
            namespaces,
            resources,
        } => run_check(&config, &namespaces, &resources),
    }

    Ok(())
}
