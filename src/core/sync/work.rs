//! Work item synchronization.
//!
//! A work item describes the abstract written work, independent of any
//! particular published form. Statement selection follows the WikiProject
//! Books work-item conventions.

use tracing::{info, warn};

use crate::adapters::wikibase::{CreateOutcome, EntityStore, MonolingualText};
use crate::config::{EntityMap, PropertyMap};
use crate::core::payload::work_payload;
use crate::core::sync::contributors::sync_contributors;
use crate::core::sync::statements::StatementWriter;
use crate::core::sync::summary::SyncSummary;
use crate::domain::{CatalogWork, EntityId, Result};

/// Creates (or converges on) the item for a catalog work.
///
/// # Errors
///
/// Returns an error when the payload cannot be built or the store
/// rejects the edit for a reason other than duplication.
pub async fn create_work<S: EntityStore + ?Sized>(
    store: &S,
    work: &CatalogWork,
) -> Result<CreateOutcome> {
    let payload = work_payload(work)?;
    store.create_entity(&payload).await
}

/// Writes the statement set of a work item.
///
/// Every statement is checked against the work's live claim set before
/// writing, so re-running against an already synced work posts nothing.
pub async fn write_work_statements<S: EntityStore + ?Sized>(
    store: &S,
    properties: &PropertyMap,
    entities: &EntityMap,
    work: &CatalogWork,
    work_id: &EntityId,
    summary: &mut SyncSummary,
) -> Result<()> {
    let mut writer = StatementWriter::begin(store, work_id.clone()).await?;

    // instance of 'written work'
    writer
        .write_item(
            summary,
            &properties.instance_of,
            "instance of",
            &entities.written_work,
        )
        .await?;

    // title, as a monolingual value
    writer
        .write_structured(
            summary,
            &properties.title,
            "title",
            MonolingualText::english(work.title.as_str()).into(),
        )
        .await?;

    match &work.subtitle {
        Some(subtitle) => {
            writer
                .write_string(summary, &properties.subtitle, "subtitle", subtitle)
                .await?;
        }
        None => writer.skip(
            summary,
            &properties.subtitle,
            "subtitle",
            "work has no subtitle",
        ),
    }

    sync_contributors(&mut writer, summary, properties, &work.contributions).await?;

    // The primary keyword is surfaced but not yet written; mapping free
    // keyword text onto subject items needs a reconciliation step that
    // does not exist yet.
    match work.primary_keyword() {
        Some(subject) => {
            warn!(
                keyword = %subject.subject_code,
                "main subject identified but not written"
            );
            writer.disabled(summary, &properties.main_subject, "main subject");
        }
        None => writer.skip(
            summary,
            &properties.main_subject,
            "main subject",
            "work has no primary keyword",
        ),
    }

    info!(work_id = %work_id, statements = summary.statements.len(), "work statements synced");
    Ok(())
}
