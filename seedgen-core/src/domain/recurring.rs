//! Recurring rule domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CategoryKind;

/// Repetition period of a recurring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
}

/// A template for a transaction that repeats on a fixed day every month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringRule {
    pub id: String,
    pub name: String,
    pub category_id: String,
    /// Signed: positive for income, negative for expenses
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub wallet_id: String,
    pub frequency: Frequency,
    /// Day of month; values past the end of a month clamp to its last day
    pub day: u32,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}
