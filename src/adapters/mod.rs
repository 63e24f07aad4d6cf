//! External system integrations for Colophon.
//!
//! This module provides adapters for the two systems the pipeline talks
//! to:
//!
//! - [`catalog`] - The bibliographic catalog works are read from
//! - [`wikibase`] - The Wikibase instance entities are written to
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external
//! dependencies and enable testing with mock implementations. The
//! Wikibase side is trait-based so the sync pipeline can run against an
//! in-memory store in tests.
//!
//! # Wikibase Adapter
//!
//! ```rust,no_run
//! use colophon::adapters::wikibase::WikibaseClient;
//! use colophon::config::{secret_string, WikibaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WikibaseConfig {
//!     endpoint: "https://test.wikidata.org".to_string(),
//!     username: "SyncBot".to_string(),
//!     password: secret_string("hunter2".to_string()),
//!     timeout_seconds: 60,
//! };
//!
//! let store = WikibaseClient::connect(&config).await?;
//! // Use store for entity creation and claim writes
//! # Ok(())
//! # }
//! ```
//!
//! # Catalog Adapter
//!
//! ```rust,no_run
//! use colophon::adapters::catalog::{load_work, CatalogClient};
//! use colophon::config::CatalogConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // From a record on disk
//! let work = load_work("work.json")?;
//!
//! // Or by DOI over GraphQL
//! let config = CatalogConfig {
//!     endpoint: Some("https://api.catalog.example/graphql".to_string()),
//!     timeout_seconds: 60,
//! };
//! let client = CatalogClient::new(&config)?;
//! let work = client.fetch_work_by_doi("https://doi.org/10.1234/xyz").await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod wikibase;
