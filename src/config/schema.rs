//! Configuration schema types
//!
//! This module defines the configuration structure for Colophon. The same
//! sync logic targets a sandbox instance or the production instance of the
//! knowledge base purely by swapping this file: property and constant-entity
//! identifiers differ between instances and are never hardcoded.

use crate::config::SecretString;
use crate::domain::catalog::ContributionRole;
use crate::domain::{EntityId, PropertyId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Main Colophon configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColophonConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Target knowledge base configuration
    pub wikibase: WikibaseConfig,

    /// Source catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logical property name -> property identifier mapping
    pub properties: PropertyMap,

    /// Constant entity identifiers in the target store
    pub entities: EntityMap,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ColophonConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.wikibase.validate()?;
        self.catalog.validate()?;
        self.properties.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (build payloads and plans without writing to the store)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Target knowledge base configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikibaseConfig {
    /// Base URL of the target instance, e.g. `https://test.wikidata.org`
    pub endpoint: String,

    /// Bot or user account name
    pub username: String,

    /// Account password
    /// Stored securely in memory and automatically zeroized on drop
    pub password: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl WikibaseConfig {
    /// Returns the MediaWiki Action API URL for the configured instance
    pub fn api_url(&self) -> String {
        format!("{}/w/api.php", self.endpoint.trim_end_matches('/'))
    }

    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.endpoint.is_empty() {
            return Err("wikibase.endpoint cannot be empty".to_string());
        }

        let url = Url::parse(&self.endpoint)
            .map_err(|e| format!("wikibase.endpoint is not a valid URL: {e}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err("wikibase.endpoint must start with http:// or https://".to_string());
        }

        if self.username.is_empty() {
            return Err("wikibase.username cannot be empty".to_string());
        }

        if self.password.expose_secret().is_empty() {
            return Err("wikibase.password cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("wikibase.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

/// Source catalog configuration
///
/// The endpoint is only required when records are fetched by DOI; syncing
/// from a local record file needs no catalog access at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// GraphQL endpoint of the catalog, e.g. `https://api.thoth.pub/graphql`
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl CatalogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(endpoint) = &self.endpoint {
            let url = Url::parse(endpoint)
                .map_err(|e| format!("catalog.endpoint is not a valid URL: {e}"))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err("catalog.endpoint must start with http:// or https://".to_string());
            }
        }
        Ok(())
    }
}

/// Logical property name -> property identifier mapping
///
/// Every statement the sync flow can write is named here. Identifier
/// formats are checked during deserialization; validation additionally
/// rejects two logical names mapped to the same property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyMap {
    /// "instance of"
    pub instance_of: PropertyId,
    /// "edition or translation of"
    pub edition_of: PropertyId,
    /// "has edition or translation"
    pub has_edition: PropertyId,
    /// "title"
    pub title: PropertyId,
    /// "subtitle"
    pub subtitle: PropertyId,
    /// "author"
    pub author: PropertyId,
    /// "editor"
    pub editor: PropertyId,
    /// "translator"
    pub translator: PropertyId,
    /// "contributor to the creative work"
    pub contributor: PropertyId,
    /// "main subject"
    pub main_subject: PropertyId,
    /// "publication date"
    pub publication_date: PropertyId,
    /// "publisher"
    pub publisher: PropertyId,
    /// "place of publication"
    pub publication_place: PropertyId,
    /// "number of pages"
    pub page_count: PropertyId,
    /// "copyright license"
    pub copyright_license: PropertyId,
    /// "ISBN-13"
    pub isbn_13: PropertyId,
    /// "Library of Congress Control Number"
    pub lccn: PropertyId,
    /// "DOI"
    pub doi: PropertyId,
    /// "full work available at URL"
    pub url: PropertyId,
}

impl PropertyMap {
    /// Returns the relationship property for a contribution role
    pub fn for_role(&self, role: ContributionRole) -> &PropertyId {
        match role {
            ContributionRole::Author => &self.author,
            ContributionRole::Editor => &self.editor,
            ContributionRole::Translator => &self.translator,
            ContributionRole::Contributor => &self.contributor,
        }
    }

    /// Returns every (logical name, property id) pair in the map
    pub fn entries(&self) -> [(&'static str, &PropertyId); 19] {
        [
            ("instance_of", &self.instance_of),
            ("edition_of", &self.edition_of),
            ("has_edition", &self.has_edition),
            ("title", &self.title),
            ("subtitle", &self.subtitle),
            ("author", &self.author),
            ("editor", &self.editor),
            ("translator", &self.translator),
            ("contributor", &self.contributor),
            ("main_subject", &self.main_subject),
            ("publication_date", &self.publication_date),
            ("publisher", &self.publisher),
            ("publication_place", &self.publication_place),
            ("page_count", &self.page_count),
            ("copyright_license", &self.copyright_license),
            ("isbn_13", &self.isbn_13),
            ("lccn", &self.lccn),
            ("doi", &self.doi),
            ("url", &self.url),
        ]
    }

    fn validate(&self) -> Result<(), String> {
        let mut seen: HashMap<&str, &'static str> = HashMap::new();
        for (name, id) in self.entries() {
            if let Some(previous) = seen.insert(id.as_str(), name) {
                return Err(format!(
                    "properties.{previous} and properties.{name} are both mapped to {id}"
                ));
            }
        }
        Ok(())
    }
}

/// Constant entity identifiers in the target store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMap {
    /// The "written work" class entity, object of a work's instance-of
    pub written_work: EntityId,
    /// The "version, edition, or translation" class entity
    pub version: EntityId,
    /// The license entity every edition is published under
    pub copyright_license: EntityId,
}

impl EntityMap {
    /// Returns every (logical name, entity id) pair in the map
    pub fn entries(&self) -> [(&'static str, &EntityId); 3] {
        [
            ("written_work", &self.written_work),
            ("version", &self.version),
            ("copyright_license", &self.copyright_license),
        ]
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
