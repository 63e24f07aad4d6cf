//! Builders for the entity payloads the sync flow creates.
//!
//! Labels and descriptions double as the duplicate key on the target
//! store: an item whose label and description both match an existing
//! item is rejected as a duplicate, which the sync flow then converges
//! on. Person payloads therefore carry no description at all, so the
//! same name always resolves to the same person item.

use crate::adapters::wikibase::EntityPayload;
use crate::domain::{CatalogPerson, CatalogPublication, CatalogWork, ColophonError, Result};

/// Builds the item payload for a catalog work.
///
/// The label is the work's title. The description names the publisher,
/// and when the work has a subtitle the combined `title: subtitle` form
/// is added as an alias.
///
/// # Errors
///
/// Returns a validation error when the work has a blank title.
pub fn work_payload(work: &CatalogWork) -> Result<EntityPayload> {
    if work.title.trim().is_empty() {
        return Err(ColophonError::Validation(
            "work has no title; a label is required to create an item".to_string(),
        ));
    }

    let mut payload = EntityPayload::new().with_label(work.title.as_str()).with_description(
        format!("written work published by {}", work.publisher_name()),
    );

    if let Some(subtitle) = &work.subtitle {
        payload = payload.with_alias(format!("{}: {}", work.title, subtitle));
    }

    Ok(payload)
}

/// Builds the item payload for one edition of a work.
///
/// The description carries the publication format, so the paperback and
/// the PDF of the same work land on distinct items.
///
/// # Errors
///
/// Returns a validation error when the work has a blank title.
pub fn edition_payload(
    work: &CatalogWork,
    publication: &CatalogPublication,
) -> Result<EntityPayload> {
    if work.title.trim().is_empty() {
        return Err(ColophonError::Validation(
            "work has no title; a label is required to create an item".to_string(),
        ));
    }

    Ok(EntityPayload::new()
        .with_label(work.title.as_str())
        .with_description(format!(
            "{} edition published by {}",
            publication.format_label(),
            work.publisher_name()
        )))
}

/// Builds the item payload for a contributing person.
///
/// The payload is deliberately minimal: the full name as label, plus a
/// `Last, First` alias when the record carries both name parts. No
/// description is set.
///
/// # Errors
///
/// Returns a validation error when the person has a blank name.
pub fn person_payload(person: &CatalogPerson) -> Result<EntityPayload> {
    if person.full_name.trim().is_empty() {
        return Err(ColophonError::Validation(
            "contributor has no name; a label is required to create an item".to_string(),
        ));
    }

    let mut payload = EntityPayload::new().with_label(person.full_name.as_str());

    if let (Some(first), Some(last)) = (&person.first_name, &person.last_name) {
        payload = payload.with_alias(format!("{}, {}", last, first));
    }

    Ok(payload)
}
