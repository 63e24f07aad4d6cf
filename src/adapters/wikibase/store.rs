//! Storage abstraction over a Wikibase instance.
//!
//! The sync pipeline talks to this trait rather than to a concrete HTTP
//! client, so the write path can be exercised in tests against an
//! in-memory store.

use async_trait::async_trait;

use crate::adapters::wikibase::models::{ClaimSet, CreateOutcome, EntityPayload, StructuredValue};
use crate::domain::{EntityId, PropertyId, Result};

/// An authenticated connection to a Wikibase instance.
///
/// Implementations are expected to hold whatever session state the
/// backing store needs; all methods take `&self` so one connection can be
/// shared across a sync run.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Creates a new item from the given payload.
    ///
    /// When the store rejects the edit because an item with the same
    /// label and description already exists, the existing item's
    /// identifier is returned as [`CreateOutcome::Existing`] rather than
    /// an error, so callers can converge on it.
    ///
    /// # Arguments
    ///
    /// * `payload` - Labels, descriptions, and aliases for the new item
    ///
    /// # Errors
    ///
    /// Returns an error if the edit is rejected for any reason other
    /// than duplication, or if the response cannot be interpreted.
    async fn create_entity(&self, payload: &EntityPayload) -> Result<CreateOutcome>;

    /// Reads the set of properties for which `entity` already holds
    /// statements.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached or the response
    /// cannot be interpreted.
    async fn read_claims(&self, entity: &EntityId) -> Result<ClaimSet>;

    /// Searches for an item by label text and returns the top hit, or
    /// `None` when nothing matches.
    async fn search_entity(&self, query: &str) -> Result<Option<EntityId>>;

    /// Writes a statement whose value is another item.
    ///
    /// # Arguments
    ///
    /// * `subject` - The item the statement is attached to
    /// * `property` - The property of the statement
    /// * `target` - The item the statement points at
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the claim.
    async fn write_statement_item(
        &self,
        subject: &EntityId,
        property: &PropertyId,
        target: &EntityId,
    ) -> Result<()>;

    /// Writes a statement whose value is a plain string.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the claim.
    async fn write_statement_string(
        &self,
        subject: &EntityId,
        property: &PropertyId,
        value: &str,
    ) -> Result<()>;

    /// Writes a statement whose value is a structured shape such as a
    /// date, a quantity, or monolingual text.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the claim.
    async fn write_statement_structured(
        &self,
        subject: &EntityId,
        property: &PropertyId,
        value: &StructuredValue,
    ) -> Result<()>;
}
