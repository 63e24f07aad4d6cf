//! Contributor resolution shared by works and editions.

use tracing::info;

use crate::adapters::wikibase::EntityStore;
use crate::config::PropertyMap;
use crate::core::payload::person_payload;
use crate::core::sync::statements::StatementWriter;
use crate::core::sync::summary::SyncSummary;
use crate::domain::{Contribution, Result};

/// Resolves every contributor to a person item and links each under the
/// property its role maps to.
///
/// Person items are resolved for all contributions, in catalog order,
/// even when the subject already holds a claim for the role's property;
/// resolution keeps the person item converged regardless of what gets
/// linked. The claim check itself is per property, so the first
/// contributor in each role is the one linked in a fresh pass.
pub async fn sync_contributors<S: EntityStore + ?Sized>(
    writer: &mut StatementWriter<'_, S>,
    summary: &mut SyncSummary,
    properties: &PropertyMap,
    contributions: &[Contribution],
) -> Result<()> {
    for contribution in contributions {
        let payload = person_payload(&contribution.person)?;
        let outcome = writer.store().create_entity(&payload).await?;
        summary.record_entity(&outcome);
        let person_id = outcome.into_id();

        let role = contribution.contribution_type;
        info!(
            person_id = %person_id,
            name = %contribution.person.full_name,
            role = %role,
            "contributor resolved"
        );

        let property = properties.for_role(role);
        writer
            .write_item(summary, property, &role.to_string(), &person_id)
            .await?;
    }

    Ok(())
}
