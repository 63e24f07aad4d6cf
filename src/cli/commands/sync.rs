//! Sync command implementation
//!
//! This module implements the `sync` command for syncing a catalog work
//! and its editions into the configured Wikibase instance.

use crate::adapters::catalog::{load_work, CatalogClient};
use crate::adapters::wikibase::{
    ClaimSet, CreateOutcome, EntityPayload, EntityStore, StructuredValue,
};
use crate::config::load_config;
use crate::core::sync::{StatementOutcome, SyncCoordinator};
use crate::domain::{ColophonError, EntityId, PropertyId, Result};
use crate::{log_sync_complete, log_sync_start};
use async_trait::async_trait;
use clap::Args;
use std::sync::atomic::{AtomicU64, Ordering};

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Path to a catalog record file (JSON) to sync
    #[arg(long, value_name = "FILE")]
    pub record: Option<String>,

    /// DOI of the work to fetch from the catalog API
    #[arg(long, value_name = "DOI")]
    pub doi: Option<String>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - simulate the sync without editing the Wikibase
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    /// Execute the sync command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting sync command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        // Apply dry-run flag from CLI
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
        let dry_run = config.application.dry_run;

        // Resolve the work to sync from exactly one source
        let work = match (&self.record, &self.doi) {
            (Some(path), None) => match load_work(path) {
                Ok(work) => work,
                Err(e) => {
                    tracing::error!(error = %e, path = %path, "Failed to load record file");
                    eprintln!("Failed to load record: {e}");
                    return Ok(2);
                }
            },
            (None, Some(doi)) => {
                let client = match CatalogClient::new(&config.catalog) {
                    Ok(c) => c,
                    Err(e) => {
                        tracing::error!(error = %e, "Catalog client configuration error");
                        eprintln!("{e}");
                        return Ok(2);
                    }
                };
                match client.fetch_work_by_doi(doi).await {
                    Ok(work) => work,
                    Err(e) => {
                        tracing::error!(error = %e, doi = %doi, "Failed to fetch work from catalog");
                        eprintln!("Failed to fetch work: {e}");
                        return Ok(4);
                    }
                }
            }
            (Some(_), Some(_)) => {
                eprintln!("Provide either --record or --doi, not both");
                return Ok(2);
            }
            (None, None) => {
                eprintln!("Provide a work to sync with --record <FILE> or --doi <DOI>");
                return Ok(2);
            }
        };

        log_sync_start!(work.title, work.bare_doi());

        // Dry run mode
        if dry_run {
            tracing::info!("Dry run mode enabled - no edits will be made");
            println!("🔍 DRY RUN MODE - No edits will be made to the Wikibase");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !dry_run {
            println!("Sync Configuration:");
            println!("  Work: {}", work.title);
            println!("  DOI: {}", work.bare_doi());
            println!("  Editions: {}", work.publications.len());
            println!("  Target: {}", config.wikibase.endpoint);
            println!();
            print!("Proceed with sync? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Sync cancelled.");
                return Ok(0);
            }
        }

        let summary = if dry_run {
            // The dry-run coordinator runs the full pipeline against an
            // in-memory store, so the reported statements match what a
            // live run would attempt.
            let coordinator = SyncCoordinator::new(
                DryRunStore::new(),
                config.properties.clone(),
                config.entities.clone(),
            );
            match coordinator.sync_work(&work).await {
                Ok(s) => s,
                Err(e) => {
                    tracing::error!(error = %e, "Dry run failed");
                    eprintln!("Dry run failed: {e}");
                    return Ok(5);
                }
            }
        } else {
            tracing::info!("Connecting to Wikibase");
            let coordinator = match SyncCoordinator::connect(&config).await {
                Ok(c) => c,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to connect to Wikibase");
                    eprintln!("Failed to connect to Wikibase: {e}");
                    return Ok(4);
                }
            };

            tracing::info!("Executing sync");
            println!("🚀 Starting sync...");
            println!();

            match coordinator.sync_work(&work).await {
                Ok(s) => s,
                Err(e) => {
                    tracing::error!(error = %e, "Sync failed");
                    eprintln!("Sync failed: {e}");
                    return Ok(5);
                }
            }
        };

        log_sync_complete!(summary.written_count(), summary.duration);

        // Display summary
        println!();
        println!("📊 Sync Summary:");
        if let Some(work_id) = &summary.work_id {
            println!("  Work item: {}", work_id.as_str());
        }
        if !summary.edition_ids.is_empty() {
            let editions: Vec<&str> = summary.edition_ids.iter().map(EntityId::as_str).collect();
            println!("  Edition items: {}", editions.join(", "));
        }
        println!("  Entities created: {}", summary.entities_created);
        println!("  Entities reused: {}", summary.entities_reused);
        println!("  Statements written: {}", summary.written_count());
        println!("  Already present: {}", summary.present_count());
        println!("  Skipped: {}", summary.skipped_count());
        println!("  Disabled: {}", summary.disabled_count());
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();

        if dry_run {
            println!("📝 Planned statements:");
            for record in &summary.statements {
                println!(
                    "  {} {} ({}): {}",
                    record.entity_id.as_str(),
                    record.property.as_str(),
                    record.label,
                    record.outcome
                );
            }
            println!();
            println!("✅ Dry run completed - nothing was written");
            return Ok(0);
        }

        let attention: Vec<_> = summary
            .statements
            .iter()
            .filter(|r| {
                !matches!(
                    r.outcome,
                    StatementOutcome::Written | StatementOutcome::AlreadyPresent
                )
            })
            .collect();
        if !attention.is_empty() {
            println!("⚠️  Statements not written:");
            for record in attention {
                println!(
                    "  - {} on {}: {}",
                    record.label,
                    record.entity_id.as_str(),
                    record.outcome
                );
            }
            println!();
        }

        println!("✅ Sync completed successfully!");
        Ok(0)
    }
}

/// In-memory store used for dry runs
///
/// Entity creation hands out sequential placeholder ids and nothing is
/// written anywhere, so a dry run exercises the full sync pipeline and
/// reports every statement it would write.
struct DryRunStore {
    next_id: AtomicU64,
}

impl DryRunStore {
    fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl EntityStore for DryRunStore {
    async fn create_entity(&self, _payload: &EntityPayload) -> Result<CreateOutcome> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = EntityId::new(format!("Q{id}")).map_err(ColophonError::Validation)?;
        Ok(CreateOutcome::Created(id))
    }

    async fn read_claims(&self, _entity: &EntityId) -> Result<ClaimSet> {
        Ok(ClaimSet::new())
    }

    async fn search_entity(&self, _query: &str) -> Result<Option<EntityId>> {
        Ok(None)
    }

    async fn write_statement_item(
        &self,
        _subject: &EntityId,
        _property: &PropertyId,
        _target: &EntityId,
    ) -> Result<()> {
        Ok(())
    }

    async fn write_statement_string(
        &self,
        _subject: &EntityId,
        _property: &PropertyId,
        _value: &str,
    ) -> Result<()> {
        Ok(())
    }

    async fn write_statement_structured(
        &self,
        _subject: &EntityId,
        _property: &PropertyId,
        _value: &StructuredValue,
    ) -> Result<()> {
        Ok(())
    }
}
