//! Group, member and account sample data

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A person belonging to exactly one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub group_id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
    Investment,
}

impl AccountKind {
    pub const ALL: [AccountKind; 3] = [
        AccountKind::Checking,
        AccountKind::Savings,
        AccountKind::Investment,
    ];
}

/// A group-owned account, unrelated to the user's wallets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub group_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub currency: String,
}
