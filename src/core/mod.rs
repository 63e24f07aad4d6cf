//! Core business logic for Colophon.
//!
//! This module contains the sync pipeline that moves catalog works into
//! the target store.
//!
//! # Modules
//!
//! - [`payload`] - Builders for work, edition, and person item payloads
//! - [`sync`] - Sync orchestration, statement deduplication, reporting
//!
//! # Sync Workflow
//!
//! The typical sync workflow:
//!
//! 1. **Fetch**: Read one work from the catalog (record file or DOI)
//! 2. **Create Work**: Post the work payload; converge on the existing
//!    item when the store reports a duplicate
//! 3. **Work Statements**: Write the work's statement set, checking the
//!    live claim set before each write
//! 4. **Editions**: For each catalog publication, create an edition item
//!    and write its statement set the same way
//! 5. **Report**: Summarize everything written, reused, or skipped
//!
//! # Example
//!
//! ```rust,no_run
//! use colophon::adapters::catalog::load_work;
//! use colophon::config::load_config;
//! use colophon::core::sync::SyncCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("colophon.toml")?;
//! let work = load_work("work.json")?;
//!
//! let coordinator = SyncCoordinator::connect(&config).await?;
//! let summary = coordinator.sync_work(&work).await?;
//!
//! println!("Work: {:?}", summary.work_id);
//! println!("Statements written: {}", summary.written_count());
//! # Ok(())
//! # }
//! ```

pub mod payload;
pub mod sync;
