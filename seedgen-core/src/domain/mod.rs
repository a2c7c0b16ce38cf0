//! Core domain entities
//!
//! Every fixture record is defined here. These are plain data structures
//! with serialization attributes matching the JSON files the downstream
//! importer reads - no I/O or randomness.

mod user;
mod wallet;
mod category;
mod recurring;
mod pattern;
mod transaction;
mod group;
mod seed_set;
pub mod result;

pub use user::User;
pub use wallet::{Wallet, WalletKind};
pub use category::{Category, CategoryKind, Tag};
pub use recurring::{Frequency, RecurringRule};
pub use pattern::VariablePattern;
pub use transaction::Transaction;
pub use group::{Account, AccountKind, Group, Member};
pub use seed_set::SeedSet;

use rust_decimal::Decimal;

/// Round a raw float draw to a 2-place monetary value
///
/// Non-finite draws collapse to zero.
pub fn money_from_f64(value: f64) -> Decimal {
    use rust_decimal::prelude::FromPrimitive;

    Decimal::from_f64(value)
        .map(|d| d.round_dp(2))
        .unwrap_or(Decimal::ZERO)
}
