//! Integration tests for the seedgen pipeline
//!
//! Generate into a scratch directory, read the files back as plain JSON,
//! and verify the fixture invariants end to end.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::collections::{HashMap, HashSet};
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde_json::Value;
use tempfile::TempDir;

use seedgen_core::adapters::json::JsonSeedStore;
use seedgen_core::config::GeneratorConfig;
use seedgen_core::services::{check, CheckService, GeneratorService};
use seedgen_core::{ReferenceData, SeedgenContext};

// ============================================================================
// Test Helpers
// ============================================================================

const FILES: [&str; 9] = [
    "user.json",
    "wallets.json",
    "categories.json",
    "tags.json",
    "recurring.json",
    "transactions.json",
    "groups.json",
    "members.json",
    "accounts.json",
];

/// Generate with the given seed into `dir`
fn generate_into(dir: &Path, seed: u64) -> seedgen_core::GenerationReport {
    let config = GeneratorConfig::default().with_seed(seed).with_output_dir(dir);
    SeedgenContext::from_config(config)
        .generate()
        .expect("generation should succeed")
}

fn read_json(dir: &Path, file: &str) -> Value {
    let content = std::fs::read_to_string(dir.join(file)).expect("file exists");
    serde_json::from_str(&content).expect("valid JSON")
}

/// Replace every UUID-valued "id" field so runs can be compared structurally
fn strip_uuids(value: &mut Value) {
    match value {
        Value::Array(items) => items.iter_mut().for_each(strip_uuids),
        Value::Object(map) => {
            if let Some(Value::String(id)) = map.get("id") {
                if uuid::Uuid::parse_str(id).is_ok() {
                    map.insert("id".to_string(), Value::String("<uuid>".to_string()));
                }
            }
            map.values_mut().for_each(strip_uuids);
        }
        _ => {}
    }
}

// ============================================================================
// Output Files
// ============================================================================

#[test]
fn test_all_files_written_as_valid_json() {
    let temp_dir = TempDir::new().unwrap();
    let report = generate_into(temp_dir.path(), 42);

    for file in FILES {
        let value = read_json(temp_dir.path(), file);
        if file == "user.json" {
            assert!(value.is_object(), "{} should be an object", file);
        } else {
            assert!(value.is_array(), "{} should be an array", file);
        }
    }

    let transactions = read_json(temp_dir.path(), "transactions.json");
    assert_eq!(transactions.as_array().unwrap().len(), report.transaction_count);
}

#[test]
fn test_output_directory_created_when_missing() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("seeds").join("output");
    generate_into(&out, 42);
    assert!(out.join("user.json").exists());

    // second run over the existing directory
    generate_into(&out, 42);
}

#[test]
fn test_files_keep_non_ascii_and_indent() {
    let temp_dir = TempDir::new().unwrap();
    generate_into(temp_dir.path(), 42);

    let categories = std::fs::read_to_string(temp_dir.path().join("categories.json")).unwrap();
    assert!(categories.contains("\"Salário\""));
    assert!(categories.starts_with("[\n  {\n    \"id\""));

    let recurring = std::fs::read_to_string(temp_dir.path().join("recurring.json")).unwrap();
    assert!(recurring.contains("Investimento Automático"));
    assert!(recurring.contains("\"amount\": -29.9"));
}

// ============================================================================
// Transactions
// ============================================================================

#[test]
fn test_recurring_rules_once_per_month() {
    let temp_dir = TempDir::new().unwrap();
    generate_into(temp_dir.path(), 42);
    let seeds = JsonSeedStore::new(temp_dir.path()).load().unwrap();

    for rule in &seeds.recurring {
        for month in 6..=8 {
            let hits: Vec<_> = seeds
                .transactions
                .iter()
                .filter(|t| t.recurring_id.as_deref() == Some(rule.id.as_str()))
                .filter(|t| t.date.year() == 2025 && t.date.month() == month)
                .collect();
            assert_eq!(hits.len(), 1, "rule {} month {}", rule.id, month);
            assert!(hits[0].tags.is_empty());
        }
    }
    assert_eq!(seeds.recurring_transaction_count(), 12);
}

#[test]
fn test_transaction_references_and_polarity() {
    let temp_dir = TempDir::new().unwrap();
    generate_into(temp_dir.path(), 42);
    let seeds = JsonSeedStore::new(temp_dir.path()).load().unwrap();
    let reference = ReferenceData::standard();

    let categories: HashSet<_> = seeds.categories.iter().map(|c| c.id.clone()).collect();
    let wallets: HashSet<_> = seeds.wallets.iter().map(|w| w.id.clone()).collect();

    for tx in &seeds.transactions {
        assert!(categories.contains(&tx.category_id));
        assert_eq!(tx.user_id, "test-user-001");

        if tx.is_recurring() {
            assert!(wallets.contains(&tx.wallet_id));
            continue;
        }

        let pattern = reference
            .patterns
            .iter()
            .find(|p| p.category_id == tx.category_id)
            .unwrap();
        assert!(pattern.wallets.contains(&tx.wallet_id));

        if tx.category_id == "c-freelance" {
            assert!(tx.amount.is_sign_positive() || tx.amount.is_zero());
            assert!(tx.description.starts_with("Recebimento") || tx.amount.is_zero());
        } else {
            assert!(tx.amount.is_sign_negative() || tx.amount.is_zero());
            assert_eq!(tx.description, format!("Pagamento - {}", tx.category_id));
        }
    }
}

#[test]
fn test_total_count_is_recurring_plus_bounded_daily_draws() {
    let temp_dir = TempDir::new().unwrap();
    let report = generate_into(temp_dir.path(), 42);

    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
    let days = (end - start).num_days() as usize + 1;
    assert_eq!(days, 92);

    assert_eq!(report.recurring_transactions, 12);
    assert!(report.variable_transactions <= days * 3);
    assert_eq!(report.transaction_count, 12 + report.variable_transactions);
}

#[test]
fn test_same_seed_is_structurally_identical() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let a = generate_into(first.path(), 42);
    let b = generate_into(second.path(), 42);
    assert_eq!(a.transaction_count, b.transaction_count);

    for file in FILES {
        let mut left = read_json(first.path(), file);
        let mut right = read_json(second.path(), file);
        strip_uuids(&mut left);
        strip_uuids(&mut right);
        assert_eq!(left, right, "{} differs between runs", file);
    }
}

#[test]
fn test_different_seed_changes_variable_draws() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    generate_into(first.path(), 42);
    generate_into(second.path(), 4242);

    let mut left = read_json(first.path(), "transactions.json");
    let mut right = read_json(second.path(), "transactions.json");
    strip_uuids(&mut left);
    strip_uuids(&mut right);
    assert_ne!(left, right);
}

// ============================================================================
// Groups
// ============================================================================

#[test]
fn test_groups_members_accounts() {
    let temp_dir = TempDir::new().unwrap();
    generate_into(temp_dir.path(), 42);
    let seeds = JsonSeedStore::new(temp_dir.path()).load().unwrap();

    assert_eq!(seeds.groups.len(), 5);

    let mut members: HashMap<&str, usize> = HashMap::new();
    for m in &seeds.members {
        *members.entry(m.group_id.as_str()).or_default() += 1;
    }
    let mut accounts: HashMap<&str, usize> = HashMap::new();
    for a in &seeds.accounts {
        *accounts.entry(a.group_id.as_str()).or_default() += 1;
        assert_eq!(a.currency, "BRL");
    }

    for group in &seeds.groups {
        let m = members.get(group.id.as_str()).copied().unwrap_or(0);
        let a = accounts.get(group.id.as_str()).copied().unwrap_or(0);
        assert!((2..=4).contains(&m), "group {} has {} members", group.id, m);
        assert!((1..=2).contains(&a), "group {} has {} accounts", group.id, a);
    }
    assert_eq!(members.values().sum::<usize>(), seeds.members.len());
}

// ============================================================================
// Checks
// ============================================================================

#[test]
fn test_check_service_passes_fresh_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = GeneratorConfig::default().with_output_dir(temp_dir.path());
    let ctx = SeedgenContext::from_config(config);
    ctx.generate().unwrap();

    let report = ctx.check_service.run_checks().unwrap();
    assert_eq!(report.summary.errors, 0);
    assert_eq!(report.checks["amount_polarity"].status, check::PASS);
}

#[test]
fn test_check_service_flags_tampered_file() {
    let temp_dir = TempDir::new().unwrap();
    generate_into(temp_dir.path(), 42);

    let mut accounts = read_json(temp_dir.path(), "accounts.json");
    accounts[0]["group_id"] = Value::String("group-77".to_string());
    std::fs::write(
        temp_dir.path().join("accounts.json"),
        serde_json::to_string_pretty(&accounts).unwrap(),
    )
    .unwrap();

    let report = CheckService::new(temp_dir.path().to_path_buf())
        .run_checks()
        .unwrap();
    assert_eq!(report.checks["group_references"].status, check::ERROR);
    assert!(report.summary.errors >= 1);
}

#[test]
fn test_check_service_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = CheckService::new(temp_dir.path().join("nothing-here")).run_checks();
    assert!(result.is_err());
}

#[test]
fn test_generator_with_custom_reference_data() {
    let mut reference = ReferenceData::standard();
    reference.recurring[0].day = 31;

    let seeds = GeneratorService::new(GeneratorConfig::default(), reference)
        .generate()
        .unwrap();
    let salary_days: Vec<_> = seeds
        .transactions
        .iter()
        .filter(|t| t.recurring_id.as_deref() == Some("r-salary"))
        .map(|t| t.date.day())
        .collect();
    assert_eq!(salary_days, vec![30, 31, 31]);
}
