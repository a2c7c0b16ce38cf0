//! Generator configuration
//!
//! Read from `seedgen.json` in the seedgen home directory:
//! ```json
//! {
//!   "seed": 42,
//!   "startDate": "2025-06-01",
//!   "endDate": "2025-08-31",
//!   "groupCount": 5,
//!   "membersPerGroup": { "min": 2, "max": 4 }
//! }
//! ```
//! Every field is optional. `SEEDGEN_SEED` and `SEEDGEN_OUTPUT_DIR` override
//! the file, and CLI flags override both.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

pub const SETTINGS_FILE: &str = "seedgen.json";
pub const DEFAULT_SEED: u64 = 42;

/// Inclusive integer range for per-group counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

/// Inclusive float range for uniformly drawn balances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub group_count: u32,
    pub members_per_group: CountRange,
    pub accounts_per_group: CountRange,
    pub account_balance: AmountRange,
    /// Upper bound on tags sampled per variable transaction
    pub max_tags_per_transaction: usize,
    /// Relative weights for drawing 0, 1, 2, ... transactions per day
    pub daily_count_weights: Vec<u32>,
    /// Standard deviation of a variable amount as a fraction of the mean
    pub amount_std_dev_ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 31).expect("valid date"),
            group_count: 5,
            members_per_group: CountRange { min: 2, max: 4 },
            accounts_per_group: CountRange { min: 1, max: 2 },
            account_balance: AmountRange { min: 100.0, max: 5000.0 },
            max_tags_per_transaction: 2,
            daily_count_weights: vec![40, 35, 20, 5],
            amount_std_dev_ratio: 0.3,
            output_dir: None,
        }
    }
}

impl GeneratorConfig {
    /// Load config from the seedgen home directory
    ///
    /// A missing or unreadable settings file yields the defaults. Environment
    /// overrides are applied afterwards and must parse.
    pub fn load(seedgen_dir: &Path) -> Result<Self> {
        let mut config = Self::load_settings(seedgen_dir)?;

        if let Ok(seed) = std::env::var("SEEDGEN_SEED") {
            config.seed = parse_seed(&seed)?;
        }

        Ok(config)
    }

    /// Settings file plus `SEEDGEN_OUTPUT_DIR`, without the seed override
    ///
    /// For commands that only read an existing fixture directory.
    pub fn load_settings(seedgen_dir: &Path) -> Result<Self> {
        let settings_path = seedgen_dir.join(SETTINGS_FILE);

        let mut config: GeneratorConfig = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            GeneratorConfig::default()
        };

        if let Ok(dir) = std::env::var("SEEDGEN_OUTPUT_DIR") {
            if !dir.is_empty() {
                config.output_dir = Some(PathBuf::from(dir));
            }
        }

        Ok(config)
    }

    /// Builder-style seed override
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder-style output directory override
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Resolved output directory: configured value, else `output/` beside
    /// the running executable
    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => default_output_dir(),
        }
    }

    /// Every (year, month) the generation window touches, in order
    pub fn target_months(&self) -> Vec<(i32, u32)> {
        let mut months = Vec::new();
        if self.end_date < self.start_date {
            return months;
        }

        let (mut year, mut month) = (self.start_date.year(), self.start_date.month());
        let last = (self.end_date.year(), self.end_date.month());
        loop {
            months.push((year, month));
            if (year, month) == last {
                break;
            }
            if month == 12 {
                year += 1;
                month = 1;
            } else {
                month += 1;
            }
        }
        months
    }

    /// Self-consistency checks that do not need reference data
    pub fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(Error::validation(format!(
                "end date {} is before start date {}",
                self.end_date, self.start_date
            )));
        }
        if self.group_count == 0 {
            return Err(Error::validation("group count must be at least 1"));
        }
        for (name, range) in [
            ("membersPerGroup", self.members_per_group),
            ("accountsPerGroup", self.accounts_per_group),
        ] {
            if range.min > range.max {
                return Err(Error::validation(format!(
                    "{}: min {} exceeds max {}",
                    name, range.min, range.max
                )));
            }
        }
        let balance = self.account_balance;
        if !(balance.min.is_finite() && balance.max.is_finite()) || balance.min > balance.max {
            return Err(Error::validation(format!(
                "accountBalance: invalid range [{}, {}]",
                balance.min, balance.max
            )));
        }
        if self.daily_count_weights.is_empty() || self.daily_count_weights.iter().all(|w| *w == 0) {
            return Err(Error::validation("dailyCountWeights needs at least one non-zero weight"));
        }
        if !self.amount_std_dev_ratio.is_finite() || self.amount_std_dev_ratio < 0.0 {
            return Err(Error::validation(format!(
                "amountStdDevRatio must be non-negative, got {}",
                self.amount_std_dev_ratio
            )));
        }
        Ok(())
    }
}

fn parse_seed(value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::config(format!("SEEDGEN_SEED is not a number: {}", value)))
}

fn default_output_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("output")))
        .unwrap_or_else(|| PathBuf::from("output"))
}
