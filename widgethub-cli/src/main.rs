//! widgethub - browse, search and release the widget catalog
//!
//! Main entry point

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use widgethub_core::config::HubConfig;
use widgethub_core::Hub;

mod catalog_cli;
mod changelog_cli;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "widgethub",
    about = "Browse, search and release the widget catalog",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "info", global = true)]
    log_level: LogLevel,

    /// Configuration file (defaults to the platform config directory)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file, overrides the one set in the configuration
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Print the category → widget navigation tree
    Tree {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Search widgets by name, description and tags
    Search {
        /// Search query (empty lists every widget)
        query: Option<String>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,

        /// Show at most this many results
        #[clap(long)]
        limit: Option<usize>,
    },

    /// Show the widget and category a route path points at
    Show {
        /// Route path, e.g. /parsers/netris2
        path: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Check the catalog for integrity problems
    Validate,

    /// Regenerate CHANGELOG.md for the latest release
    Changelog(changelog_cli::ChangelogCommand),
}

/// Initialize tracing with CLI flags
///
/// `RUST_LOG` wins over `--log-level` when set.
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration, applying CLI overrides
fn load_config(cli: &Cli) -> Result<HubConfig> {
    let mut config = match &cli.config {
        Some(path) => HubConfig::load_from_path(path)?,
        None => HubConfig::load()?,
    };

    if let Some(catalog) = &cli.catalog {
        config.catalog = Some(catalog.clone());
    }

    debug!("Using catalog: {:?}", config.catalog);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let config = load_config(&cli)?;

    match cli.command {
        Command::Tree { json } => {
            let hub = Hub::from_config(&config)?;
            catalog_cli::execute_tree(&hub, json)
        }
        Command::Search { query, json, limit } => {
            let hub = Hub::from_config(&config)?;
            catalog_cli::execute_search(&hub, query.as_deref().unwrap_or(""), json, limit)
        }
        Command::Show { path, json } => {
            let hub = Hub::from_config(&config)?;
            catalog_cli::execute_show(&hub, &path, json)
        }
        Command::Validate => catalog_cli::execute_validate(&config),
        Command::Changelog(command) => command.execute(config.changelog).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_with_global_flags() {
        let cli = Cli::try_parse_from([
            "widgethub",
            "search",
            "netr",
            "--limit",
            "5",
            "--log-level",
            "debug",
            "--catalog",
            "catalog.yaml",
        ])
        .unwrap();

        assert!(matches!(cli.log_level, LogLevel::Debug));
        assert_eq!(cli.catalog, Some(PathBuf::from("catalog.yaml")));
        match cli.command {
            Command::Search { query, json, limit } => {
                assert_eq!(query.as_deref(), Some("netr"));
                assert!(!json);
                assert_eq!(limit, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_search_without_query() {
        let cli = Cli::try_parse_from(["widgethub", "search", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Search {
                query: None,
                json: true,
                limit: None
            }
        ));
    }

    #[test]
    fn test_parse_changelog() {
        let cli =
            Cli::try_parse_from(["widgethub", "changelog", "--dry-run", "--path", "out.md"])
                .unwrap();
        match cli.command {
            Command::Changelog(command) => {
                assert!(command.dry_run);
                assert_eq!(command.path, Some(PathBuf::from("out.md")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_catalog_flag_overrides_config() {
        let cli = Cli::try_parse_from([
            "widgethub",
            "validate",
            "--config",
            "/nonexistent/widgethub.yaml",
            "--catalog",
            "other.yaml",
        ])
        .unwrap();

        let config = load_config(&cli).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("other.yaml")));
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["widgethub", "tree", "--log-level", "loud"]).is_err());
    }
}
