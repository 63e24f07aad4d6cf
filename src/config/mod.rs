//! Configuration management for Colophon.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Colophon uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`COLOPHON_*`)
//! - Default values for optional settings
//! - Comprehensive validation
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use colophon::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("colophon.toml")?;
//!
//! // Access configuration sections
//! println!("Target instance: {}", config.wikibase.endpoint);
//! println!("Instance-of property: {}", config.properties.instance_of);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! The configuration is organized into sections:
//!
//! - [`ApplicationConfig`] - Application settings (log level, dry run)
//! - [`WikibaseConfig`] - Target knowledge base connection and credentials
//! - [`CatalogConfig`] - Source catalog endpoint
//! - [`PropertyMap`] - Logical property name to property id mapping
//! - [`EntityMap`] - Constant entity identifiers
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [wikibase]
//! endpoint = "https://test.wikidata.org"
//! username = "SyncBot"
//! password = "${COLOPHON_WIKIBASE_PASSWORD}"
//!
//! [properties]
//! instance_of = "P31"
//! # ... one entry per statement the sync flow can write
//!
//! [entities]
//! written_work = "Q47461344"
//! version = "Q3331189"
//! copyright_license = "Q208934"
//! ```
//!
//! The property and entity identifiers differ between a sandbox instance
//! and the production instance; swapping this file is all it takes to
//! retarget a run.
//!
//! # Validation
//!
//! Configuration is validated on load:
//!
//! ```rust,no_run
//! use colophon::config::load_config;
//!
//! # fn example() {
//! match load_config("colophon.toml") {
//!     Ok(config) => println!("Configuration valid"),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CatalogConfig, ColophonConfig, EntityMap, LoggingConfig, PropertyMap,
    WikibaseConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
