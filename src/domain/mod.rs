//! Domain models and types for Colophon.
//!
//! This module contains the core domain models, types, and business rules for
//! Colophon: the catalog record shapes on the input side, the identifier
//! newtypes on the target-store side, and the error types shared by every
//! layer.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`EntityId`], [`PropertyId`])
//! - **Catalog record models** ([`CatalogWork`], [`CatalogPublication`], [`Contribution`])
//! - **Error types** ([`ColophonError`], [`WikibaseError`], [`CatalogError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Colophon uses the newtype pattern for identifiers to prevent mixing
//! entity and property ids:
//!
//! ```rust
//! use colophon::domain::{EntityId, PropertyId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let entity = EntityId::new("Q42")?;
//! let property = PropertyId::new("P31")?;
//!
//! // This won't compile - type safety prevents mixing ids
//! // let wrong: EntityId = property;  // Compile error!
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ColophonError>`]:
//!
//! ```rust
//! use colophon::domain::Result;
//!
//! fn example() -> Result<()> {
//!     // ColophonError propagates through the ? operator
//!     let config = colophon::config::load_config("colophon.toml")?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use catalog::{
    CatalogPerson, CatalogPublication, CatalogWork, Contribution, ContributionRole, Imprint,
    Publisher, Subject,
};
pub use errors::{CatalogError, ColophonError, WikibaseError};
pub use ids::{EntityId, PropertyId};
pub use result::Result;
