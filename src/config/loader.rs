//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ColophonConfig;
use crate::config::secret_string;
use crate::domain::errors::ColophonError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ColophonConfig
/// 4. Applies environment variable overrides (COLOPHON_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use colophon::config::loader::load_config;
///
/// let config = load_config("colophon.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ColophonConfig> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(ColophonError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    // Read file contents
    let contents = fs::read_to_string(path).map_err(|e| {
        ColophonError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: ColophonConfig = toml::from_str(&contents)
        .map_err(|e| ColophonError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        ColophonError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Arguments
///
/// * `input` - String containing ${VAR} placeholders
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        // Process non-comment lines for env var substitution
        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ColophonError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the COLOPHON_* prefix
///
/// Environment variables follow the pattern: COLOPHON_<SECTION>_<KEY>
/// For example: COLOPHON_WIKIBASE_ENDPOINT, COLOPHON_APPLICATION_LOG_LEVEL
///
/// # Arguments
///
/// * `config` - Mutable reference to the configuration to update
fn apply_env_overrides(config: &mut ColophonConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("COLOPHON_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("COLOPHON_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Wikibase overrides
    if let Ok(val) = std::env::var("COLOPHON_WIKIBASE_ENDPOINT") {
        config.wikibase.endpoint = val;
    }
    if let Ok(val) = std::env::var("COLOPHON_WIKIBASE_USERNAME") {
        config.wikibase.username = val;
    }
    if let Ok(val) = std::env::var("COLOPHON_WIKIBASE_PASSWORD") {
        config.wikibase.password = secret_string(val);
    }
    if let Ok(val) = std::env::var("COLOPHON_WIKIBASE_TIMEOUT_SECONDS") {
        if let Ok(seconds) = val.parse() {
            config.wikibase.timeout_seconds = seconds;
        }
    }

    // Catalog overrides
    if let Ok(val) = std::env::var("COLOPHON_CATALOG_ENDPOINT") {
        config.catalog.endpoint = Some(val);
    }
    if let Ok(val) = std::env::var("COLOPHON_CATALOG_TIMEOUT_SECONDS") {
        if let Ok(seconds) = val.parse() {
            config.catalog.timeout_seconds = seconds;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("COLOPHON_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("COLOPHON_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("COLOPHON_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
