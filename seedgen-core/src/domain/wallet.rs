//! Wallet domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of personal wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    Checking,
    /// Meal/food benefit cards
    Benefits,
}

/// A personal balance-holding entity (bank account or benefits card)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WalletKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub currency: String,
}
