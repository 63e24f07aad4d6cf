//! Wikibase adapter.
//!
//! Provides the [`EntityStore`] abstraction the sync pipeline writes
//! through, the Action API wire models, and the authenticated HTTP
//! client that implements the store against a live instance.

pub mod client;
pub mod models;
pub mod store;

pub use client::WikibaseClient;
pub use models::{
    extract_entity_id, ClaimSet, CreateOutcome, EntityPayload, ItemValue, LanguageValue,
    MonolingualText, QuantityValue, StructuredValue, TimeValue, DEFAULT_LANGUAGE,
    GREGORIAN_CALENDAR,
};
pub use store::EntityStore;
