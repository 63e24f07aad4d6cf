//! Catalog adapter.
//!
//! Reads bibliographic works from the catalog, either from a JSON record
//! on disk or over its GraphQL endpoint.

pub mod client;

pub use client::{load_work, CatalogClient};
