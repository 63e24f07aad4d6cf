// Colophon - Catalog to Wikibase Sync Tool
// Copyright (c) 2025 Colophon Contributors
// Licensed under the MIT License

//! # Colophon - Catalog to Wikibase Sync
//!
//! Colophon is a sync tool built in Rust that reads bibliographic works from a
//! scholarly-publishing catalog and creates the matching items and statements
//! in a Wikibase instance through the MediaWiki Action API.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Reading** work records from a local JSON file or a GraphQL catalog API
//! - **Creating** work, edition and person items with labels, descriptions and aliases
//! - **Recovering** from duplicate-entity rejections by reusing the existing item
//! - **Deduplicating** statements against the live claims of each item
//!
//! ## Architecture
//!
//! Colophon follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (payload building, sync orchestration)
//! - [`adapters`] - External integrations (catalog, Wikibase)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use colophon::adapters::catalog::load_work;
//! use colophon::config::load_config;
//! use colophon::core::sync::SyncCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration and the record to sync
//!     let config = load_config("colophon.toml")?;
//!     let work = load_work("work.json")?;
//!
//!     // Log in to the target Wikibase
//!     let coordinator = SyncCoordinator::connect(&config).await?;
//!
//!     // Execute the sync
//!     let summary = coordinator.sync_work(&work).await?;
//!
//!     println!("Wrote {} statements", summary.written_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! ### Duplicate Recovery
//!
//! Wikibase rejects an item whose label and description match an existing
//! item. Colophon parses the identifier of that item out of the rejection and
//! continues the sync against it, which makes re-runs idempotent:
//!
//! ```rust
//! use colophon::adapters::wikibase::extract_entity_id;
//!
//! let info = r#"Item [[Q123|Q123]] already has label "Some Work""#;
//! let id = extract_entity_id(info).unwrap();
//! assert_eq!(id.as_str(), "Q123");
//! ```
//!
//! ### Statement Deduplication
//!
//! Before every statement write the target item's live claims are checked, so
//! a property that already carries a value is never written twice:
//!
//! ```rust
//! use colophon::adapters::wikibase::ClaimSet;
//! use colophon::domain::PropertyId;
//!
//! let author = PropertyId::new("P50").unwrap();
//! let mut claims = ClaimSet::new();
//! claims.insert(author.clone());
//! assert!(claims.contains(&author));
//! ```
//!
//! ### Typed Identifiers
//!
//! Entity and property identifiers are distinct validated types, so a `Q` id
//! can never end up where a `P` id belongs:
//!
//! ```rust
//! use colophon::domain::EntityId;
//!
//! let id: EntityId = "Q42".parse().unwrap();
//! assert_eq!(id.numeric(), 42);
//! ```
//!
//! ## Error Handling
//!
//! Colophon uses the [`domain::ColophonError`] type for all errors:
//!
//! ```rust,no_run
//! use colophon::domain::ColophonError;
//!
//! fn example() -> Result<(), ColophonError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = colophon::config::load_config("colophon.toml")?;
//!     println!("Target: {}", config.wikibase.endpoint);
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Colophon uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting sync");
//! warn!(doi = "10.1234/example", "Record has no subtitle");
//! ```
//!
//! ## See Also
//!
//! - [README](https://github.com/colophon-sync/colophon/blob/main/README.md)

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
