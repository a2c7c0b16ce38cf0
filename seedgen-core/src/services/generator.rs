//! Generator service - the full fixture pipeline
//!
//! Runs the steps in order: reference data, recurring expansion, variable
//! synthesis, group synthesis, then hands the set to a writer. One seeded
//! RNG is threaded through the random steps.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::adapters::reference::ReferenceData;
use crate::config::GeneratorConfig;
use crate::domain::result;
use crate::domain::SeedSet;
use crate::ports::{SeedWriter, WrittenFile};

use super::groups::synthesize_groups;
use super::recurring::expand_recurring;
use super::variable::synthesize_variable;

/// Summary of a completed generation run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub seed: u64,
    pub transaction_count: usize,
    pub recurring_transactions: usize,
    pub variable_transactions: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// Record count per collection name
    pub records: BTreeMap<String, usize>,
    #[serde(skip)]
    pub files: Vec<WrittenFile>,
}

/// Generator service producing fixture sets from explicit inputs
pub struct GeneratorService {
    config: GeneratorConfig,
    reference: ReferenceData,
}

impl GeneratorService {
    pub fn new(config: GeneratorConfig, reference: ReferenceData) -> Self {
        Self { config, reference }
    }

    /// Service over the standard reference profile
    pub fn standard(config: GeneratorConfig) -> Self {
        Self::new(config, ReferenceData::standard())
    }

    /// Build the whole fixture set in memory
    pub fn generate(&self) -> result::Result<SeedSet> {
        self.config.validate()?;
        self.reference.validate(self.config.max_tags_per_transaction)?;

        let mut rng = StdRng::seed_from_u64(self.config.seed);

        let mut transactions = expand_recurring(&self.reference, &self.config.target_months());
        transactions.extend(synthesize_variable(&self.reference, &self.config, &mut rng)?);

        let groups = synthesize_groups(&self.config, &self.reference.user.currency, &mut rng);

        let reference = self.reference.clone();
        Ok(SeedSet {
            user: reference.user,
            wallets: reference.wallets,
            categories: reference.categories,
            tags: reference.tags,
            recurring: reference.recurring,
            transactions,
            groups: groups.groups,
            members: groups.members,
            accounts: groups.accounts,
        })
    }

    /// Generate and persist through the given writer
    pub fn generate_into(&self, writer: &dyn SeedWriter) -> Result<(SeedSet, GenerationReport)> {
        let seeds = self.generate().context("Failed to generate fixtures")?;
        let files = writer
            .write(&seeds)
            .with_context(|| format!("Failed to write fixtures to {:?}", writer.location()))?;

        let report = self.report(&seeds, writer.location(), files);
        Ok((seeds, report))
    }

    fn report(&self, seeds: &SeedSet, output_dir: PathBuf, files: Vec<WrittenFile>) -> GenerationReport {
        let records = files
            .iter()
            .map(|f| (f.collection.clone(), f.records))
            .collect();

        GenerationReport {
            output_dir,
            seed: self.config.seed,
            transaction_count: seeds.transactions.len(),
            recurring_transactions: seeds.recurring_transaction_count(),
            variable_transactions: seeds.variable_transaction_count(),
            first_date: seeds.transactions.iter().map(|t| t.date).min(),
            last_date: seeds.transactions.iter().map(|t| t.date).max(),
            records,
            files,
        }
    }
}
