//! Sync summary and reporting
//!
//! This module defines structures for tracking and reporting what a sync
//! run did to the target store.

use std::time::Duration;

use crate::adapters::wikibase::CreateOutcome;
use crate::domain::{EntityId, PropertyId};

/// What became of one planned statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementOutcome {
    /// The claim was posted to the store.
    Written,
    /// The entity already held a claim for this property; nothing was
    /// written.
    AlreadyPresent,
    /// The source record carried no usable value; the reason says why.
    Skipped(String),
    /// The write for this property is intentionally switched off.
    Disabled,
}

impl std::fmt::Display for StatementOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Written => write!(f, "written"),
            Self::AlreadyPresent => write!(f, "already present"),
            Self::Skipped(reason) => write!(f, "skipped ({})", reason),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// One statement the sync flow considered, and how it was resolved.
#[derive(Debug, Clone)]
pub struct StatementRecord {
    /// The entity the statement belongs to
    pub entity_id: EntityId,

    /// The property of the statement
    pub property: PropertyId,

    /// Human-readable property name, e.g. "publication date"
    pub label: String,

    /// How the statement was resolved
    pub outcome: StatementOutcome,
}

/// Summary of a sync run
#[derive(Debug, Clone, Default)]
pub struct SyncSummary {
    /// The work item the run converged on
    pub work_id: Option<EntityId>,

    /// One edition item per catalog publication, in catalog order
    pub edition_ids: Vec<EntityId>,

    /// Number of items newly created (works, editions, and persons)
    pub entities_created: usize,

    /// Number of items that already existed and were reused
    pub entities_reused: usize,

    /// Every statement the run considered, in the order considered
    pub statements: Vec<StatementRecord>,

    /// Duration of the run
    pub duration: Duration,
}

impl SyncSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record how an entity creation was resolved
    pub fn record_entity(&mut self, outcome: &CreateOutcome) {
        if outcome.was_created() {
            self.entities_created += 1;
        } else {
            self.entities_reused += 1;
        }
    }

    /// Record how one statement was resolved
    pub fn record_statement(
        &mut self,
        entity_id: &EntityId,
        property: &PropertyId,
        label: impl Into<String>,
        outcome: StatementOutcome,
    ) {
        self.statements.push(StatementRecord {
            entity_id: entity_id.clone(),
            property: property.clone(),
            label: label.into(),
            outcome,
        });
    }

    /// Number of claims actually posted
    pub fn written_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, StatementOutcome::Written))
    }

    /// Number of statements skipped because they already existed
    pub fn present_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, StatementOutcome::AlreadyPresent))
    }

    /// Number of statements skipped for lack of a source value
    pub fn skipped_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, StatementOutcome::Skipped(_)))
    }

    /// Number of statements whose write is switched off
    pub fn disabled_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, StatementOutcome::Disabled))
    }

    fn count(&self, matches: impl Fn(&StatementOutcome) -> bool) -> usize {
        self.statements
            .iter()
            .filter(|record| matches(&record.outcome))
            .count()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            work_id = ?self.work_id.as_ref().map(|id| id.as_str()),
            editions = self.edition_ids.len(),
            entities_created = self.entities_created,
            entities_reused = self.entities_reused,
            statements_written = self.written_count(),
            statements_present = self.present_count(),
            statements_skipped = self.skipped_count(),
            statements_disabled = self.disabled_count(),
            duration_secs = self.duration.as_secs(),
            "Sync completed"
        );

        for record in &self.statements {
            tracing::debug!(
                entity_id = %record.entity_id,
                property = %record.property,
                label = %record.label,
                outcome = %record.outcome,
                "Statement"
            );
        }
    }
}
