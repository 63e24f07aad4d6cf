//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "colophon.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Colophon configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Generate configuration content
        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        // Write to file
        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - Set COLOPHON_WIKIBASE_USERNAME and COLOPHON_WIKIBASE_PASSWORD");
                println!("  3. Validate configuration: colophon validate-config");
                println!("  4. Sync a record: colophon sync --record work.json");
                println!("     (or fetch one from the catalog: colophon sync --doi 10.1234/example)");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Colophon Configuration File
# Catalog to Wikibase Sync Tool

[application]
log_level = "info"
dry_run = false

[wikibase]
endpoint = "https://test.wikidata.org"
username = "${COLOPHON_WIKIBASE_USERNAME}"
password = "${COLOPHON_WIKIBASE_PASSWORD}"
timeout_seconds = 60

[catalog]
# GraphQL endpoint of the source catalog (only needed for sync --doi)
endpoint = "https://catalog.example.com/graphql"
timeout_seconds = 60

# Property ids below are wikidata.org's; test instances use different ids.
[properties]
instance_of = "P31"
edition_of = "P629"
has_edition = "P747"
title = "P1476"
subtitle = "P1680"
author = "P50"
editor = "P98"
translator = "P655"
contributor = "P767"
main_subject = "P921"
publication_date = "P577"
publisher = "P123"
publication_place = "P291"
page_count = "P1104"
copyright_license = "P275"
isbn_13 = "P212"
lccn = "P1144"
doi = "P356"
url = "P953"

[entities]
written_work = "Q47461344"
version = "Q3331189"
copyright_license = "Q208934"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Colophon Configuration File
# Catalog to Wikibase Sync Tool
#
# This file contains all configuration options with examples and explanations.
#
# Colophon reads bibliographic works from a catalog (a local JSON record or
# a GraphQL API) and creates the matching items and statements in a Wikibase
# instance through the MediaWiki Action API.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (simulate the sync without editing the Wikibase)
dry_run = false

# ============================================================================
# Wikibase Configuration
# ============================================================================
[wikibase]
# Base URL of the target Wikibase instance. The Action API is expected
# at <endpoint>/w/api.php.
endpoint = "https://test.wikidata.org"

# Bot account username (use environment variable)
username = "${COLOPHON_WIKIBASE_USERNAME}"

# Bot account password (use environment variable)
password = "${COLOPHON_WIKIBASE_PASSWORD}"

# Request timeout in seconds
timeout_seconds = 60

# ============================================================================
# Catalog Configuration
# ============================================================================
[catalog]
# GraphQL endpoint of the source catalog. Only required when syncing by
# DOI (sync --doi); records loaded from file (sync --record) work without it.
endpoint = "https://catalog.example.com/graphql"

# Request timeout in seconds
timeout_seconds = 60

# ============================================================================
# Property Mapping
# ============================================================================
# Maps each catalog field to the property id that holds it in the target
# Wikibase. The ids below are wikidata.org's; a test instance such as
# test.wikidata.org assigns its own ids, so adjust them per target.
[properties]
instance_of = "P31"
edition_of = "P629"          # edition or translation of
has_edition = "P747"         # has edition or translation
title = "P1476"
subtitle = "P1680"
author = "P50"
editor = "P98"
translator = "P655"
contributor = "P767"
main_subject = "P921"
publication_date = "P577"
publisher = "P123"
publication_place = "P291"   # place of publication
page_count = "P1104"         # number of pages
copyright_license = "P275"
isbn_13 = "P212"
lccn = "P1144"
doi = "P356"
url = "P953"                 # full work available at URL

# ============================================================================
# Entity Anchors
# ============================================================================
# Items referenced by every sync: the class of a work item, the class of
# an edition item, and the license item linked from each edition.
[entities]
written_work = "Q47461344"      # written work
version = "Q3331189"            # version, edition or translation
copyright_license = "Q208934"   # Creative Commons Attribution-ShareAlike

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local file logging (console logging is always on)
local_enabled = false

# Local log file directory
local_path = "logs"

# Log rotation (daily, hourly or never)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "colophon.toml".to_string(),
            with_examples: false,
            force: false,
        };

        assert_eq!(args.output, "colophon.toml");
        assert!(!args.with_examples);
        assert!(!args.force);
    }

    #[test]
    fn test_generate_minimal_config() {
        let config = InitArgs::generate_minimal_config();
        assert!(config.contains("[application]"));
        assert!(config.contains("[wikibase]"));
        assert!(config.contains("[properties]"));
        assert!(config.contains("[entities]"));
    }

    #[test]
    fn test_generate_config_with_examples() {
        let config = InitArgs::generate_config_with_examples();
        assert!(config.contains("# Colophon Configuration File"));
        assert!(config.contains("instance_of"));
        assert!(config.contains("written_work"));
    }

    #[test]
    fn test_generated_config_parses() {
        // Both templates must stay deserializable as the config schema.
        let minimal: toml::Value = toml::from_str(&InitArgs::generate_minimal_config()).unwrap();
        assert!(minimal.get("properties").is_some());

        let full: toml::Value =
            toml::from_str(&InitArgs::generate_config_with_examples()).unwrap();
        assert!(full.get("entities").is_some());
    }
}
