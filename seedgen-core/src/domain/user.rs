//! User domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The single fixture user every transaction belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// ISO 4217 code shared by wallets and group accounts
    pub currency: String,
    pub timezone: String,
    pub start_date: NaiveDate,
}
