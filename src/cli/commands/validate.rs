//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Colophon configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading runs the full validation pass, so a config that loads
        // is a config that is valid.
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Wikibase Endpoint: {}", config.wikibase.endpoint);
        println!("  Wikibase API: {}", config.wikibase.api_url());
        println!("  Wikibase Username: {}", config.wikibase.username);
        println!("  Request Timeout: {}s", config.wikibase.timeout_seconds);
        println!(
            "  Catalog Endpoint: {}",
            config
                .catalog
                .endpoint
                .as_deref()
                .unwrap_or("(not configured)")
        );
        println!(
            "  Properties Mapped: {}",
            config.properties.entries().len()
        );
        for (name, id) in config.entities.entries() {
            println!("  Entity ({}): {}", name, id.as_str());
        }
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!();
        Ok(0)
    }
}
