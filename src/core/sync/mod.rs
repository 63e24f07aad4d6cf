//! Sync orchestration - drives one catalog work into the target store.
//!
//! The coordinator owns the store connection and the property and entity
//! maps, and runs the full flow for a work: create or converge on the
//! work item, write its statements, then do the same for one edition per
//! catalog publication.

pub mod contributors;
pub mod edition;
pub mod statements;
pub mod summary;
pub mod work;

pub use statements::StatementWriter;
pub use summary::{StatementOutcome, StatementRecord, SyncSummary};

use std::time::Instant;

use crate::adapters::wikibase::{EntityStore, WikibaseClient};
use crate::config::{ColophonConfig, EntityMap, PropertyMap};
use crate::domain::{CatalogWork, Result};

/// Sync coordinator
pub struct SyncCoordinator<S> {
    store: S,
    properties: PropertyMap,
    entities: EntityMap,
}

impl SyncCoordinator<WikibaseClient> {
    /// Connects to the configured Wikibase instance and builds a
    /// coordinator around the authenticated session.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection or login handshake fails.
    pub async fn connect(config: &ColophonConfig) -> Result<Self> {
        let store = WikibaseClient::connect(&config.wikibase).await?;
        Ok(Self::new(
            store,
            config.properties.clone(),
            config.entities.clone(),
        ))
    }
}

impl<S: EntityStore> SyncCoordinator<S> {
    /// Builds a coordinator over an already connected store.
    pub fn new(store: S, properties: PropertyMap, entities: EntityMap) -> Self {
        Self {
            store,
            properties,
            entities,
        }
    }

    /// Synchronizes one catalog work and all of its publications.
    ///
    /// The flow:
    /// 1. Create or converge on the work item
    /// 2. Write the work's statement set
    /// 3. For each catalog publication, create or converge on an edition
    ///    item and write its statement set
    /// 4. Report a summary of everything written, skipped, or reused
    ///
    /// # Errors
    ///
    /// Returns the first store or validation error encountered; the
    /// summary of a failed run is lost, but every claim already posted
    /// stays in place and is deduplicated on the next run.
    pub async fn sync_work(&self, work: &CatalogWork) -> Result<SyncSummary> {
        let start_time = Instant::now();
        let mut summary = SyncSummary::new();

        tracing::info!(title = %work.title, doi = %work.doi, "Starting work sync");

        let outcome = work::create_work(&self.store, work).await?;
        summary.record_entity(&outcome);
        let work_id = outcome.into_id();

        work::write_work_statements(
            &self.store,
            &self.properties,
            &self.entities,
            work,
            &work_id,
            &mut summary,
        )
        .await?;

        for publication in &work.publications {
            let outcome = edition::create_edition(&self.store, work, publication).await?;
            summary.record_entity(&outcome);
            let edition_id = outcome.into_id();

            edition::write_edition_statements(
                &self.store,
                &self.properties,
                &self.entities,
                work,
                publication,
                &work_id,
                &edition_id,
                &mut summary,
            )
            .await?;

            summary.edition_ids.push(edition_id);
        }

        summary.work_id = Some(work_id);
        summary.duration = start_time.elapsed();
        summary.log_summary();

        Ok(summary)
    }
}
