//! Integration tests for configuration loading and validation
//!
//! Note: Tests in this file take a shared lock because several of them
//! modify process environment variables.

use colophon::config::load_config;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("COLOPHON_APPLICATION_LOG_LEVEL");
    std::env::remove_var("COLOPHON_APPLICATION_DRY_RUN");
    std::env::remove_var("COLOPHON_WIKIBASE_ENDPOINT");
    std::env::remove_var("COLOPHON_WIKIBASE_TIMEOUT_SECONDS");
    std::env::remove_var("COLOPHON_CATALOG_ENDPOINT");
    std::env::remove_var("TEST_WIKIBASE_PASSWORD");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

const PROPERTY_SECTION: &str = r#"
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
"#;

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = format!(
        r#"
[application]
log_level = "debug"
dry_run = true

[wikibase]
endpoint = "https://test.wikidata.org"
username = "SyncBot"
password = "hunter2"
timeout_seconds = 90

[catalog]
endpoint = "https://catalog.example.com/graphql"
timeout_seconds = 30
{PROPERTY_SECTION}
[logging]
local_enabled = true
local_path = "/tmp/colophon"
local_rotation = "never"
"#
    );

    let temp_file = write_config(&toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify application config
    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);

    // Verify wikibase config
    assert_eq!(config.wikibase.endpoint, "https://test.wikidata.org");
    assert_eq!(
        config.wikibase.api_url(),
        "https://test.wikidata.org/w/api.php"
    );
    assert_eq!(config.wikibase.username, "SyncBot");
    assert_eq!(config.wikibase.password.expose_secret(), "hunter2");
    assert_eq!(config.wikibase.timeout_seconds, 90);

    // Verify catalog config
    assert_eq!(
        config.catalog.endpoint.as_deref(),
        Some("https://catalog.example.com/graphql")
    );
    assert_eq!(config.catalog.timeout_seconds, 30);

    // Verify property mapping
    assert_eq!(config.properties.entries().len(), 19);
    assert_eq!(config.properties.instance_of.as_str(), "P31");
    assert_eq!(config.properties.publication_date.as_str(), "P577");
    assert_eq!(config.properties.isbn_13.as_str(), "P212");

    // Verify entity anchors
    assert_eq!(config.entities.written_work.as_str(), "Q47461344");
    assert_eq!(config.entities.version.as_str(), "Q3331189");
    assert_eq!(config.entities.copyright_license.as_str(), "Q208934");

    // Verify logging config
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/colophon");
    assert_eq!(config.logging.local_rotation, "never");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = format!(
        r#"
[wikibase]
endpoint = "https://test.wikidata.org"
username = "SyncBot"
password = "hunter2"
{PROPERTY_SECTION}"#
    );

    let temp_file = write_config(&toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify defaults are applied
    assert_eq!(config.application.log_level, "info");
    assert!(!config.application.dry_run);
    assert_eq!(config.wikibase.timeout_seconds, 60);
    assert!(config.catalog.endpoint.is_none());
    assert_eq!(config.catalog.timeout_seconds, 60);
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "logs");
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_WIKIBASE_PASSWORD", "secret_pass");

    let toml_content = format!(
        r#"
[wikibase]
endpoint = "https://test.wikidata.org"
username = "SyncBot"
password = "${{TEST_WIKIBASE_PASSWORD}}"
{PROPERTY_SECTION}"#
    );

    let temp_file = write_config(&toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.wikibase.password.expose_secret(), "secret_pass");

    std::env::remove_var("TEST_WIKIBASE_PASSWORD");
}

#[test]
fn test_env_var_substitution_missing_var() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = format!(
        r#"
[wikibase]
endpoint = "https://test.wikidata.org"
username = "SyncBot"
password = "${{TEST_WIKIBASE_PASSWORD}}"
{PROPERTY_SECTION}"#
    );

    let temp_file = write_config(&toml_content);
    let result = load_config(temp_file.path());

    let err = result.expect_err("missing variable should fail the load");
    assert!(err.to_string().contains("TEST_WIKIBASE_PASSWORD"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("COLOPHON_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("COLOPHON_WIKIBASE_TIMEOUT_SECONDS", "120");
    std::env::set_var("COLOPHON_CATALOG_ENDPOINT", "https://override.example.com/graphql");

    let toml_content = format!(
        r#"
[application]
log_level = "info"

[wikibase]
endpoint = "https://test.wikidata.org"
username = "SyncBot"
password = "hunter2"
timeout_seconds = 60
{PROPERTY_SECTION}"#
    );

    let temp_file = write_config(&toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify env var overrides took effect
    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.wikibase.timeout_seconds, 120);
    assert_eq!(
        config.catalog.endpoint.as_deref(),
        Some("https://override.example.com/graphql")
    );

    cleanup_env_vars();
}

#[test]
fn test_invalid_log_level_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = format!(
        r#"
[application]
log_level = "verbose"

[wikibase]
endpoint = "https://test.wikidata.org"
username = "SyncBot"
password = "hunter2"
{PROPERTY_SECTION}"#
    );

    let temp_file = write_config(&toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_malformed_property_id_fails_parse() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = format!(
        r#"
[wikibase]
endpoint = "https://test.wikidata.org"
username = "SyncBot"
password = "hunter2"
{PROPERTY_SECTION}"#
    )
    .replace("author = \"P50\"", "author = \"Q50\"");

    let temp_file = write_config(&toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_duplicate_property_mapping_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    // Two logical names mapped to the same property id
    let toml_content = format!(
        r#"
[wikibase]
endpoint = "https://test.wikidata.org"
username = "SyncBot"
password = "hunter2"
{PROPERTY_SECTION}"#
    )
    .replace("editor = \"P98\"", "editor = \"P50\"");

    let temp_file = write_config(&toml_content);
    let result = load_config(temp_file.path());

    let err = result.expect_err("duplicate mapping should fail validation");
    assert!(err.to_string().contains("P50"));
}

#[test]
fn test_missing_required_section_fails_parse() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    // No [properties] or [entities] sections at all
    let toml_content = r#"
[wikibase]
endpoint = "https://test.wikidata.org"
username = "SyncBot"
password = "hunter2"
"#;

    let temp_file = write_config(toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}
