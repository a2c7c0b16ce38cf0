//! Transaction domain model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated transaction, never mutated after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: String,
    pub date: NaiveDate,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category_id: String,
    pub wallet_id: String,
    /// Tag names (not ids)
    pub tags: Vec<String>,
    /// Back-reference to the rule this transaction was expanded from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_id: Option<String>,
}

impl Transaction {
    /// Whether this transaction was materialized from a recurring rule
    pub fn is_recurring(&self) -> bool {
        self.recurring_id.is_some()
    }
}
