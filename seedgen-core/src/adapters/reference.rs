//! Hand-authored reference data
//!
//! The fixed user, wallets, categories, tags, recurring rules and variable
//! patterns every fixture set is built from. Nothing here is random.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::{
    Category, CategoryKind, Frequency, RecurringRule, Tag, User, VariablePattern, Wallet,
    WalletKind,
};

/// Static inputs to a generation run, passed explicitly to each step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub user: User,
    pub wallets: Vec<Wallet>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub recurring: Vec<RecurringRule>,
    pub patterns: Vec<VariablePattern>,
}

impl ReferenceData {
    /// The standard fixture profile: a BRL user with three wallets
    pub fn standard() -> Self {
        let user = User {
            id: "test-user-001".to_string(),
            name: "Usuário Teste".to_string(),
            email: "teste@teste.com".to_string(),
            currency: "BRL".to_string(),
            timezone: "America/Sao_Paulo".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        };

        let wallet = |id: &str, name: &str, kind: WalletKind, balance: i64| Wallet {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            balance: Decimal::new(balance, 2),
            currency: user.currency.clone(),
        };
        let wallets = vec![
            wallet("w-inter", "Inter", WalletKind::Checking, 50000),
            wallet("w-nubank", "Nubank", WalletKind::Checking, 100000),
            wallet("w-sodexo", "Sodexo (Benefícios)", WalletKind::Benefits, 30000),
        ];

        let category = |id: &str, name: &str, kind: CategoryKind| Category {
            id: id.to_string(),
            name: name.to_string(),
            kind,
        };
        let categories = vec![
            category("c-salary", "Salário", CategoryKind::Income),
            category("c-freelance", "Freelance", CategoryKind::Income),
            category("c-rent", "Aluguel", CategoryKind::Expense),
            category("c-grocery", "Supermercado", CategoryKind::Expense),
            category("c-transport", "Transporte", CategoryKind::Expense),
            category("c-leisure", "Lazer", CategoryKind::Expense),
            category("c-subscriptions", "Assinaturas", CategoryKind::Expense),
            category("c-investments", "Investimentos", CategoryKind::Expense),
        ];

        let tags = [
            ("t-family", "familia"),
            ("t-home", "moradia"),
            ("t-work", "trabalho"),
            ("t-health", "saude"),
            ("t-travel", "viagem"),
            ("t-card", "cartao"),
            ("t-food", "food"),
            ("t-fun", "recreacao"),
        ]
        .into_iter()
        .map(|(id, name)| Tag {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect();

        let rule = |id: &str, name: &str, category_id: &str, cents: i64, wallet_id: &str, day: u32| {
            RecurringRule {
                id: id.to_string(),
                name: name.to_string(),
                category_id: category_id.to_string(),
                amount: Decimal::new(cents, 2),
                wallet_id: wallet_id.to_string(),
                frequency: Frequency::Monthly,
                day,
                kind: if cents >= 0 { CategoryKind::Income } else { CategoryKind::Expense },
            }
        };
        let recurring = vec![
            rule("r-salary", "Salário Mensal", "c-salary", 700000, "w-inter", 5),
            rule("r-rent", "Aluguel", "c-rent", -180000, "w-inter", 2),
            rule("r-spotify", "Spotify/Streaming", "c-subscriptions", -2990, "w-inter", 10),
            rule("r-invest", "Investimento Automático", "c-investments", -50000, "w-nubank", 15),
        ];

        let pattern = |category_id: &str, mean: f64, wallets: &[&str], hints: &[&str]| {
            VariablePattern {
                category_id: category_id.to_string(),
                mean,
                wallets: wallets.iter().map(|w| w.to_string()).collect(),
                tag_hints: hints.iter().map(|t| t.to_string()).collect(),
            }
        };
        // "transporte" is not in the tag pool; hints are never sampled anyway
        let patterns = vec![
            pattern("c-grocery", 120.0, &["w-inter"], &["food", "familia"]),
            pattern("c-transport", 25.0, &["w-inter"], &["transporte"]),
            pattern("c-leisure", 60.0, &["w-inter", "w-nubank"], &["recreacao"]),
            pattern("c-freelance", 800.0, &["w-inter"], &["trabalho"]),
        ];

        Self {
            user,
            wallets,
            categories,
            tags,
            recurring,
            patterns,
        }
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn has_wallet(&self, id: &str) -> bool {
        self.wallets.iter().any(|w| w.id == id)
    }

    /// Names in the tag pool, in declaration order
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.name.clone()).collect()
    }

    /// Check that every rule and pattern points at known categories and wallets
    pub fn validate(&self, max_tags: usize) -> Result<()> {
        for rule in &self.recurring {
            if self.category(&rule.category_id).is_none() {
                return Err(Error::validation(format!(
                    "recurring rule {} references unknown category {}",
                    rule.id, rule.category_id
                )));
            }
            if !self.has_wallet(&rule.wallet_id) {
                return Err(Error::validation(format!(
                    "recurring rule {} references unknown wallet {}",
                    rule.id, rule.wallet_id
                )));
            }
        }

        if self.patterns.is_empty() {
            return Err(Error::validation("at least one variable pattern is required"));
        }
        for pattern in &self.patterns {
            if self.category(&pattern.category_id).is_none() {
                return Err(Error::validation(format!(
                    "pattern references unknown category {}",
                    pattern.category_id
                )));
            }
            if !(pattern.mean.is_finite() && pattern.mean > 0.0) {
                return Err(Error::validation(format!(
                    "pattern {} has non-positive mean {}",
                    pattern.category_id, pattern.mean
                )));
            }
            if pattern.wallets.is_empty() {
                return Err(Error::validation(format!(
                    "pattern {} has no wallets",
                    pattern.category_id
                )));
            }
            if let Some(unknown) = pattern.wallets.iter().find(|w| !self.has_wallet(w)) {
                return Err(Error::validation(format!(
                    "pattern {} references unknown wallet {}",
                    pattern.category_id, unknown
                )));
            }
        }

        if self.tags.is_empty() && max_tags > 0 {
            return Err(Error::validation("tag pool is empty but tag sampling is enabled"));
        }
        Ok(())
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_reference_data_shape() {
        let data = ReferenceData::standard();
        assert_eq!(data.wallets.len(), 3);
        assert_eq!(data.categories.len(), 8);
        assert_eq!(data.tags.len(), 8);
        assert_eq!(data.recurring.len(), 4);
        assert_eq!(data.patterns.len(), 4);
        assert!(data.wallets.iter().all(|w| w.currency == "BRL"));
        assert!(data.validate(2).is_ok());
    }

    #[test]
    fn test_recurring_kind_matches_category() {
        let data = ReferenceData::standard();
        for rule in &data.recurring {
            let category = data.category(&rule.category_id).unwrap();
            assert_eq!(rule.kind, category.kind, "rule {}", rule.id);
        }
    }

    #[test]
    fn test_transport_hint_is_outside_tag_pool() {
        let data = ReferenceData::standard();
        let transport = data
            .patterns
            .iter()
            .find(|p| p.category_id == "c-transport")
            .unwrap();
        assert!(!data.tag_names().contains(&transport.tag_hints[0]));
    }

    #[test]
    fn test_validate_rejects_unknown_pattern_wallet() {
        let mut data = ReferenceData::standard();
        data.patterns[0].wallets.push("w-missing".to_string());
        let err = data.validate(2).unwrap_err();
        assert!(err.to_string().contains("w-missing"));
    }

    #[test]
    fn test_validate_rejects_unknown_rule_category() {
        let mut data = ReferenceData::standard();
        data.recurring[0].category_id = "c-nope".to_string();
        assert!(data.validate(2).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_tag_pool_when_sampling() {
        let mut data = ReferenceData::standard();
        data.tags.clear();
        assert!(data.validate(2).is_err());
        assert!(data.validate(0).is_ok());
    }
}
