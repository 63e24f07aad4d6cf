//! Edition item synchronization.
//!
//! One edition item is kept per catalog publication, so the paperback
//! and the PDF of a work land on distinct items. Statement selection
//! follows the WikiProject Books edition-item conventions.

use tracing::info;

use crate::adapters::wikibase::{CreateOutcome, EntityStore, QuantityValue, TimeValue};
use crate::config::{EntityMap, PropertyMap};
use crate::core::payload::edition_payload;
use crate::core::sync::contributors::sync_contributors;
use crate::core::sync::statements::StatementWriter;
use crate::core::sync::summary::{StatementOutcome, SyncSummary};
use crate::domain::{CatalogPublication, CatalogWork, EntityId, Result};

/// Creates (or converges on) the item for one publication of a work.
///
/// # Errors
///
/// Returns an error when the payload cannot be built or the store
/// rejects the edit for a reason other than duplication.
pub async fn create_edition<S: EntityStore + ?Sized>(
    store: &S,
    work: &CatalogWork,
    publication: &CatalogPublication,
) -> Result<CreateOutcome> {
    let payload = edition_payload(work, publication)?;
    store.create_entity(&payload).await
}

/// Writes the statement set of an edition item.
///
/// Each statement is checked against the edition's live claim set
/// immediately before writing. Values with no usable source, and writes
/// that are switched off, are recorded in the summary rather than
/// silently dropped.
pub async fn write_edition_statements<S: EntityStore + ?Sized>(
    store: &S,
    properties: &PropertyMap,
    entities: &EntityMap,
    work: &CatalogWork,
    publication: &CatalogPublication,
    work_id: &EntityId,
    edition_id: &EntityId,
    summary: &mut SyncSummary,
) -> Result<()> {
    let mut writer = StatementWriter::begin(store, edition_id.clone()).await?;

    // instance of 'version, edition, or translation'
    writer
        .write_item(
            summary,
            &properties.instance_of,
            "instance of",
            &entities.version,
        )
        .await?;

    writer
        .write_item(
            summary,
            &properties.edition_of,
            "edition or translation of",
            work_id,
        )
        .await?;

    // The inverse has-edition link on the work is not written; the run
    // records it as switched off.
    summary.record_statement(
        work_id,
        &properties.has_edition,
        "has edition",
        StatementOutcome::Disabled,
    );

    // place of publication, resolved by searching the store for the text
    // before the first comma of the catalog's place field
    if writer.has_claim(&properties.publication_place) {
        summary.record_statement(
            edition_id,
            &properties.publication_place,
            "place of publication",
            StatementOutcome::AlreadyPresent,
        );
    } else {
        let term = work.place_search_term();
        match writer.store().search_entity(term).await? {
            Some(place_id) => {
                writer
                    .write_item(
                        summary,
                        &properties.publication_place,
                        "place of publication",
                        &place_id,
                    )
                    .await?;
            }
            None => writer.skip(
                summary,
                &properties.publication_place,
                "place of publication",
                format!("no item found for \"{}\"", term),
            ),
        }
    }

    writer
        .write_string(
            summary,
            &properties.publisher,
            "publisher",
            work.publisher_name(),
        )
        .await?;

    writer
        .write_structured(
            summary,
            &properties.publication_date,
            "publication date",
            TimeValue::day_precision(work.publication_date).into(),
        )
        .await?;

    writer
        .write_structured(
            summary,
            &properties.page_count,
            "number of pages",
            QuantityValue::count(work.page_count).into(),
        )
        .await?;

    // ISBN-13 writes are switched off; the claim check still runs so an
    // existing ISBN is reported as present.
    match &publication.isbn {
        Some(_) => writer.disabled(summary, &properties.isbn_13, "ISBN-13"),
        None => writer.skip(
            summary,
            &properties.isbn_13,
            "ISBN-13",
            "publication has no ISBN",
        ),
    }

    match &work.lccn {
        Some(lccn) => {
            writer
                .write_string(summary, &properties.lccn, "LCCN", lccn)
                .await?;
        }
        None => writer.skip(summary, &properties.lccn, "LCCN", "work has no LCCN"),
    }

    writer
        .write_string(
            summary,
            &properties.url,
            "full work available at URL",
            work.landing_page.as_str(),
        )
        .await?;

    writer
        .write_string(summary, &properties.doi, "DOI", work.bare_doi())
        .await?;

    writer
        .write_item(
            summary,
            &properties.copyright_license,
            "copyright license",
            &entities.copyright_license,
        )
        .await?;

    sync_contributors(&mut writer, summary, properties, &work.contributions).await?;

    info!(
        edition_id = %edition_id,
        format = %publication.format_label(),
        "edition statements synced"
    );
    Ok(())
}
