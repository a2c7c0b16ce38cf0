//! Check service - fixture health checks
//!
//! Reads a fixture directory back and verifies the referential and
//! polarity invariants the downstream importer relies on.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use crate::adapters::json::JsonSeedStore;
use crate::domain::{CategoryKind, SeedSet};

pub const PASS: &str = "pass";
pub const WARNING: &str = "warning";
pub const ERROR: &str = "error";

/// Check service over one fixture directory
pub struct CheckService {
    output_dir: PathBuf,
}

impl CheckService {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Load the fixture files and run all checks
    pub fn run_checks(&self) -> Result<CheckReport> {
        let seeds = JsonSeedStore::new(&self.output_dir)
            .load()
            .with_context(|| format!("Failed to load fixtures from {:?}", self.output_dir))?;
        Ok(check_seed_set(&seeds))
    }
}

/// Run every check against an in-memory set
pub fn check_seed_set(seeds: &SeedSet) -> CheckReport {
    let mut checks = BTreeMap::new();

    checks.insert("unique_ids".to_string(), check_unique_ids(seeds));
    checks.insert("transaction_references".to_string(), check_transaction_references(seeds));
    checks.insert("amount_polarity".to_string(), check_amount_polarity(seeds));
    checks.insert("recurring_coverage".to_string(), check_recurring_coverage(seeds));
    checks.insert("group_references".to_string(), check_group_references(seeds));
    checks.insert("untagged_transactions".to_string(), check_untagged(seeds));

    let passed = checks.values().filter(|c| c.status == PASS).count() as i64;
    let warnings = checks.values().filter(|c| c.status == WARNING).count() as i64;
    let errors = checks.values().filter(|c| c.status == ERROR).count() as i64;

    CheckReport {
        checks,
        summary: CheckSummary { passed, warnings, errors },
    }
}

fn duplicates(ids: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            dups.insert(id);
        }
    }
    dups.into_iter().collect()
}

fn check_unique_ids(seeds: &SeedSet) -> CheckResult {
    let collections: Vec<(&str, Vec<String>)> = vec![
        ("wallets", duplicates(seeds.wallets.iter().map(|w| w.id.clone()))),
        ("categories", duplicates(seeds.categories.iter().map(|c| c.id.clone()))),
        ("tags", duplicates(seeds.tags.iter().map(|t| t.id.clone()))),
        ("recurring", duplicates(seeds.recurring.iter().map(|r| r.id.clone()))),
        ("transactions", duplicates(seeds.transactions.iter().map(|t| t.id.to_string()))),
        ("groups", duplicates(seeds.groups.iter().map(|g| g.id.clone()))),
        ("members", duplicates(seeds.members.iter().map(|m| m.id.to_string()))),
        ("accounts", duplicates(seeds.accounts.iter().map(|a| a.id.to_string()))),
    ];

    let details: Vec<serde_json::Value> = collections
        .into_iter()
        .flat_map(|(collection, ids)| {
            ids.into_iter()
                .map(move |id| json!({"collection": collection, "id": id}))
        })
        .collect();

    CheckResult::from_details(
        ERROR,
        "All ids are unique within their collection",
        format!("{} duplicate id(s) found", details.len()),
        details,
    )
}

fn check_transaction_references(seeds: &SeedSet) -> CheckResult {
    let categories: HashSet<&str> = seeds.categories.iter().map(|c| c.id.as_str()).collect();
    let wallets: HashSet<&str> = seeds.wallets.iter().map(|w| w.id.as_str()).collect();
    let rules: HashSet<&str> = seeds.recurring.iter().map(|r| r.id.as_str()).collect();

    let mut details = Vec::new();
    for tx in &seeds.transactions {
        let mut missing = Vec::new();
        if tx.user_id != seeds.user.id {
            missing.push(format!("user {}", tx.user_id));
        }
        if !categories.contains(tx.category_id.as_str()) {
            missing.push(format!("category {}", tx.category_id));
        }
        if !wallets.contains(tx.wallet_id.as_str()) {
            missing.push(format!("wallet {}", tx.wallet_id));
        }
        if let Some(rule) = &tx.recurring_id {
            if !rules.contains(rule.as_str()) {
                missing.push(format!("recurring {}", rule));
            }
        }
        if !missing.is_empty() {
            details.push(json!({
                "transaction_id": tx.id.to_string(),
                "missing": missing,
            }));
        }
    }

    CheckResult::from_details(
        ERROR,
        "All transactions reference existing entities",
        format!("{} transaction(s) reference missing entities", details.len()),
        details,
    )
}

fn check_amount_polarity(seeds: &SeedSet) -> CheckResult {
    let details: Vec<serde_json::Value> = seeds
        .transactions
        .iter()
        .filter_map(|tx| {
            let category = seeds.category(&tx.category_id)?;
            let consistent = match category.kind {
                CategoryKind::Income => tx.amount >= Decimal::ZERO,
                CategoryKind::Expense => tx.amount <= Decimal::ZERO,
            };
            if consistent {
                None
            } else {
                Some(json!({
                    "transaction_id": tx.id.to_string(),
                    "category_id": tx.category_id,
                    "amount": tx.amount.to_string(),
                }))
            }
        })
        .collect();

    CheckResult::from_details(
        ERROR,
        "All amounts match their category's polarity",
        format!("{} transaction(s) have the wrong sign", details.len()),
        details,
    )
}

fn check_recurring_coverage(seeds: &SeedSet) -> CheckResult {
    let months: BTreeSet<(i32, u32)> = seeds
        .transactions
        .iter()
        .map(|t| (t.date.year(), t.date.month()))
        .collect();

    let mut details = Vec::new();
    for rule in &seeds.recurring {
        for &(year, month) in &months {
            let count = seeds
                .transactions
                .iter()
                .filter(|t| t.recurring_id.as_deref() == Some(rule.id.as_str()))
                .filter(|t| t.date.year() == year && t.date.month() == month)
                .count();
            if count != 1 {
                details.push(json!({
                    "recurring_id": rule.id,
                    "month": format!("{}-{:02}", year, month),
                    "count": count,
                }));
            }
        }
    }

    CheckResult::from_details(
        WARNING,
        "Every recurring rule occurs once per month",
        format!("{} rule/month pair(s) without exactly one occurrence", details.len()),
        details,
    )
}

fn check_group_references(seeds: &SeedSet) -> CheckResult {
    let groups: HashSet<&str> = seeds.groups.iter().map(|g| g.id.as_str()).collect();

    let members = seeds
        .members
        .iter()
        .filter(|m| !groups.contains(m.group_id.as_str()))
        .map(|m| json!({"member_id": m.id.to_string(), "group_id": m.group_id}));
    let accounts = seeds
        .accounts
        .iter()
        .filter(|a| !groups.contains(a.group_id.as_str()))
        .map(|a| json!({"account_id": a.id.to_string(), "group_id": a.group_id}));
    let details: Vec<serde_json::Value> = members.chain(accounts).collect();

    CheckResult::from_details(
        ERROR,
        "All members and accounts belong to existing groups",
        format!("{} record(s) reference missing groups", details.len()),
        details,
    )
}

fn check_untagged(seeds: &SeedSet) -> CheckResult {
    let variable = seeds.transactions.iter().filter(|t| !t.is_recurring());
    let total = variable.clone().count();
    let untagged = variable.filter(|t| t.tags.is_empty()).count();

    if untagged == 0 {
        return CheckResult {
            status: PASS.to_string(),
            message: "All variable transactions are tagged".to_string(),
            details: None,
        };
    }

    let pct = (untagged as f64 / total as f64 * 100.0) as i64;
    CheckResult {
        status: WARNING.to_string(),
        message: format!("{} variable transaction(s) have no tags ({}% of total)", untagged, pct),
        details: Some(vec![json!({"untagged_count": untagged, "total_count": total})]),
    }
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub checks: BTreeMap<String, CheckResult>,
    pub summary: CheckSummary,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<serde_json::Value>>,
}

impl CheckResult {
    /// Pass when `details` is empty, otherwise fail with `severity`
    fn from_details(
        severity: &str,
        pass_message: &str,
        fail_message: String,
        details: Vec<serde_json::Value>,
    ) -> Self {
        if details.is_empty() {
            Self {
                status: PASS.to_string(),
                message: pass_message.to_string(),
                details: None,
            }
        } else {
            Self {
                status: severity.to_string(),
                message: fail_message,
                details: Some(details),
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub passed: i64,
    pub warnings: i64,
    pub errors: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::services::GeneratorService;

    fn generated() -> SeedSet {
        GeneratorService::standard(GeneratorConfig::default())
            .generate()
            .unwrap()
    }

    #[test]
    fn test_generated_set_has_no_errors() {
        let report = check_seed_set(&generated());
        assert_eq!(report.summary.errors, 0);
        assert_eq!(report.checks["unique_ids"].status, PASS);
        assert_eq!(report.checks["transaction_references"].status, PASS);
        assert_eq!(report.checks["amount_polarity"].status, PASS);
        assert_eq!(report.checks["recurring_coverage"].status, PASS);
        assert_eq!(report.checks["group_references"].status, PASS);
    }

    #[test]
    fn test_wrong_sign_is_an_error() {
        let mut seeds = generated();
        let rent = seeds
            .transactions
            .iter_mut()
            .find(|t| t.recurring_id.as_deref() == Some("r-rent"))
            .unwrap();
        rent.amount = rent.amount.abs();

        let report = check_seed_set(&seeds);
        assert_eq!(report.checks["amount_polarity"].status, ERROR);
        assert_eq!(report.summary.errors, 1);
    }

    #[test]
    fn test_dangling_wallet_and_group_are_errors() {
        let mut seeds = generated();
        seeds.transactions[0].wallet_id = "w-ghost".to_string();
        seeds.members[0].group_id = "group-99".to_string();

        let report = check_seed_set(&seeds);
        assert_eq!(report.checks["transaction_references"].status, ERROR);
        assert_eq!(report.checks["group_references"].status, ERROR);
        let details = report.checks["transaction_references"].details.as_ref().unwrap();
        assert_eq!(details.len(), 1);
    }

    #[test]
    fn test_duplicate_transaction_id_detected() {
        let mut seeds = generated();
        seeds.transactions[1].id = seeds.transactions[0].id;

        let report = check_seed_set(&seeds);
        assert_eq!(report.checks["unique_ids"].status, ERROR);
    }

    #[test]
    fn test_missing_recurring_occurrence_is_a_warning() {
        let mut seeds = generated();
        let idx = seeds
            .transactions
            .iter()
            .position(|t| t.recurring_id.as_deref() == Some("r-spotify"))
            .unwrap();
        seeds.transactions.remove(idx);

        let report = check_seed_set(&seeds);
        assert_eq!(report.checks["recurring_coverage"].status, WARNING);
        assert_eq!(report.summary.errors, 0);
    }
}
