//! seedgen core - synthetic financial fixture generation
//!
//! Laid out hexagonally:
//!
//! - **domain**: fixture records (User, Wallet, Transaction, ...)
//! - **ports**: the `SeedWriter` output trait
//! - **adapters**: hand-authored reference data and JSON files on disk
//! - **services**: recurring expansion, variable synthesis, group synthesis,
//!   the generator pipeline, fixture checks and event logging

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use anyhow::Result;

use adapters::json::JsonSeedStore;
use config::GeneratorConfig;
use services::*;

// Re-export commonly used types at crate root
pub use adapters::reference::ReferenceData;
pub use domain::result::Error;
pub use domain::{SeedSet, Transaction};
pub use services::{EntryPoint, GenerationReport, LogEvent, LoggingService};

/// Main context for seedgen operations
///
/// Holds the resolved configuration and the services built from it.
pub struct SeedgenContext {
    pub config: GeneratorConfig,
    pub generator: GeneratorService,
    pub store: JsonSeedStore,
    pub check_service: CheckService,
}

impl SeedgenContext {
    pub fn from_config(config: GeneratorConfig) -> Self {
        let output_dir = config.output_dir();
        Self {
            generator: GeneratorService::standard(config.clone()),
            store: JsonSeedStore::new(&output_dir),
            check_service: CheckService::new(output_dir),
            config,
        }
    }

    /// Generate the fixture set and write it to the configured directory
    pub fn generate(&self) -> Result<GenerationReport> {
        let (_, report) = self.generator.generate_into(&self.store)?;
        Ok(report)
    }
}
