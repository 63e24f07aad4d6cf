//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Colophon using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Colophon - Catalog to Wikibase Sync Tool
#[derive(Parser, Debug)]
#[command(name = "colophon")]
#[command(version, about, long_about = None)]
#[command(author = "Colophon Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "colophon.toml", env = "COLOPHON_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "COLOPHON_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync a catalog work and its editions to the configured Wikibase
    Sync(commands::sync::SyncArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_sync() {
        let cli = Cli::parse_from(["colophon", "sync"]);
        assert_eq!(cli.config, "colophon.toml");
        assert!(matches!(cli.command, Commands::Sync(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["colophon", "--config", "custom.toml", "sync"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["colophon", "--log-level", "debug", "sync"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_sync_with_source() {
        let cli = Cli::parse_from(["colophon", "sync", "--record", "work.json", "--dry-run"]);
        match cli.command {
            Commands::Sync(args) => {
                assert_eq!(args.record, Some("work.json".to_string()));
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["colophon", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["colophon", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
