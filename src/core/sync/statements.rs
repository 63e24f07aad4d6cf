//! Deduplicating statement writes.
//!
//! A [`StatementWriter`] wraps one subject entity for the duration of a
//! statement pass. It seeds its view of the entity's claims with a
//! single read, checks that view immediately before every write, and
//! folds each successful write back in. Two statements for the same
//! property can therefore never be posted in one pass, regardless of how
//! many source values map to that property.

use tracing::debug;

use crate::adapters::wikibase::{ClaimSet, EntityStore, StructuredValue};
use crate::core::sync::summary::{StatementOutcome, SyncSummary};
use crate::domain::{EntityId, PropertyId, Result};

/// Claim writer for a single subject entity.
pub struct StatementWriter<'a, S: EntityStore + ?Sized> {
    store: &'a S,
    subject: EntityId,
    claims: ClaimSet,
}

impl<'a, S: EntityStore + ?Sized> StatementWriter<'a, S> {
    /// Opens a statement pass over `subject`, reading its current claims.
    ///
    /// # Errors
    ///
    /// Returns an error when the claim read fails.
    pub async fn begin(store: &'a S, subject: EntityId) -> Result<StatementWriter<'a, S>> {
        let claims = store.read_claims(&subject).await?;
        debug!(entity_id = %subject, existing = claims.len(), "statement pass opened");
        Ok(Self {
            store,
            subject,
            claims,
        })
    }

    /// The entity this writer posts claims to.
    pub fn subject(&self) -> &EntityId {
        &self.subject
    }

    /// The store this writer posts through.
    pub fn store(&self) -> &'a S {
        self.store
    }

    /// Whether the subject already holds a claim for `property`, counting
    /// claims written earlier in this pass.
    pub fn has_claim(&self, property: &PropertyId) -> bool {
        self.claims.contains(property)
    }

    /// Writes an item-valued statement unless the property is already
    /// claimed.
    pub async fn write_item(
        &mut self,
        summary: &mut SyncSummary,
        property: &PropertyId,
        label: &str,
        target: &EntityId,
    ) -> Result<()> {
        if self.has_claim(property) {
            self.record_present(summary, property, label);
            return Ok(());
        }

        self.store
            .write_statement_item(&self.subject, property, target)
            .await?;
        self.record_written(summary, property, label);
        Ok(())
    }

    /// Writes a string-valued statement unless the property is already
    /// claimed.
    pub async fn write_string(
        &mut self,
        summary: &mut SyncSummary,
        property: &PropertyId,
        label: &str,
        value: &str,
    ) -> Result<()> {
        if self.has_claim(property) {
            self.record_present(summary, property, label);
            return Ok(());
        }

        self.store
            .write_statement_string(&self.subject, property, value)
            .await?;
        self.record_written(summary, property, label);
        Ok(())
    }

    /// Writes a structured statement unless the property is already
    /// claimed.
    pub async fn write_structured(
        &mut self,
        summary: &mut SyncSummary,
        property: &PropertyId,
        label: &str,
        value: StructuredValue,
    ) -> Result<()> {
        if self.has_claim(property) {
            self.record_present(summary, property, label);
            return Ok(());
        }

        self.store
            .write_statement_structured(&self.subject, property, &value)
            .await?;
        self.record_written(summary, property, label);
        Ok(())
    }

    /// Records that the source offered no usable value for `property`.
    pub fn skip(
        &self,
        summary: &mut SyncSummary,
        property: &PropertyId,
        label: &str,
        reason: impl Into<String>,
    ) {
        let reason = reason.into();
        debug!(entity_id = %self.subject, property = %property, reason = %reason, "statement skipped");
        summary.record_statement(&self.subject, property, label, StatementOutcome::Skipped(reason));
    }

    /// Records a statement whose write is intentionally switched off.
    ///
    /// The claim check still runs, so an entity that already carries the
    /// claim is reported as such rather than as disabled.
    pub fn disabled(&self, summary: &mut SyncSummary, property: &PropertyId, label: &str) {
        let outcome = if self.has_claim(property) {
            StatementOutcome::AlreadyPresent
        } else {
            debug!(entity_id = %self.subject, property = %property, "statement write disabled");
            StatementOutcome::Disabled
        };
        summary.record_statement(&self.subject, property, label, outcome);
    }

    fn record_written(&mut self, summary: &mut SyncSummary, property: &PropertyId, label: &str) {
        self.claims.insert(property.clone());
        summary.record_statement(&self.subject, property, label, StatementOutcome::Written);
    }

    fn record_present(&self, summary: &mut SyncSummary, property: &PropertyId, label: &str) {
        debug!(entity_id = %self.subject, property = %property, "claim already present");
        summary.record_statement(&self.subject, property, label, StatementOutcome::AlreadyPresent);
    }
}
