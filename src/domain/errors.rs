//! Domain error types
//!
//! This module defines the error hierarchy for Colophon. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Colophon error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ColophonError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Wikibase-related errors
    #[error("Wikibase error: {0}")]
    Wikibase(#[from] WikibaseError),

    /// Catalog-related errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Record validation errors (missing or malformed required fields)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Wikibase-specific errors
///
/// Errors that occur when talking to the target knowledge base. These
/// errors don't expose the underlying HTTP client types.
#[derive(Debug, Error)]
pub enum WikibaseError {
    /// Failed to reach the Wikibase API
    #[error("Failed to connect to Wikibase: {0}")]
    ConnectionFailed(String),

    /// Login was rejected or a token response had an unexpected shape
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Response body could not be decoded or was missing required fields
    #[error("Invalid response from Wikibase: {0}")]
    InvalidResponse(String),

    /// The API rejected an edit and the error could not be interpreted
    /// as a recoverable duplicate-entity condition
    #[error("Edit rejected by Wikibase ({code}): {info}")]
    EditRejected { code: String, info: String },
}

/// Catalog-specific errors
///
/// Errors that occur when loading or fetching catalog records.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to reach the catalog API
    #[error("Failed to connect to catalog: {0}")]
    ConnectionFailed(String),

    /// The catalog query failed or returned an error payload
    #[error("Catalog query failed: {0}")]
    QueryFailed(String),

    /// No record matched the requested reference
    #[error("Record not found in catalog: {0}")]
    NotFound(String),

    /// Record could not be decoded into the expected shape
    #[error("Invalid catalog record: {0}")]
    InvalidRecord(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ColophonError {
    fn from(err: std::io::Error) -> Self {
        ColophonError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ColophonError {
    fn from(err: serde_json::Error) -> Self {
        ColophonError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ColophonError {
    fn from(err: toml::de::Error) -> Self {
        ColophonError::Configuration(format!("TOML parse error: {err}"))
    }
}
