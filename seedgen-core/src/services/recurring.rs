//! Recurring rule expansion
//!
//! Each rule becomes exactly one transaction per target month, dated on the
//! rule's day-of-month. Days past the end of a month clamp to its last day.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::adapters::reference::ReferenceData;
use crate::domain::Transaction;

/// Last calendar day of a month, or None if the month itself is invalid
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Date a monthly rule falls on in the given month
pub fn occurrence_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| last_day_of_month(year, month))
}

/// Materialize every recurring rule over the target months, rule-major
pub fn expand_recurring(reference: &ReferenceData, months: &[(i32, u32)]) -> Vec<Transaction> {
    let mut transactions = Vec::with_capacity(reference.recurring.len() * months.len());

    for rule in &reference.recurring {
        for &(year, month) in months {
            let Some(date) = occurrence_date(year, month, rule.day) else {
                continue;
            };
            transactions.push(Transaction {
                id: Uuid::new_v4(),
                user_id: reference.user.id.clone(),
                date,
                description: rule.name.clone(),
                amount: rule.amount,
                category_id: rule.category_id.clone(),
                wallet_id: rule.wallet_id.clone(),
                tags: Vec::new(),
                recurring_id: Some(rule.id.clone()),
            });
        }
    }

    transactions
}
