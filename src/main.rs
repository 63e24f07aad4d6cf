// Colophon - Catalog to Wikibase Sync Tool
// Copyright (c) 2025 Colophon Contributors
// Licensed under the MIT License

use clap::Parser;
use colophon::cli::{Cli, Commands};
use colophon::config::{load_config, LoggingConfig};
use colophon::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // File logging comes from the config file when it is readable. A
    // config that fails to load still gets console logging, so that
    // validate-config can report what is wrong with it.
    let file_config = load_config(&cli.config).ok();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| {
            file_config
                .as_ref()
                .map(|c| c.application.log_level.clone())
        })
        .unwrap_or_else(|| "info".to_string());
    let logging_config: LoggingConfig = file_config.map(|c| c.logging).unwrap_or_default();

    // The guard must stay alive for the duration of the run so buffered
    // file log writes are flushed on exit.
    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Colophon - Catalog to Wikibase Sync Tool"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // Exit with appropriate code
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Sync(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
