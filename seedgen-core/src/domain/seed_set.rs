//! The complete set of generated fixture collections

use serde::{Deserialize, Serialize};

use super::{Account, Category, Group, Member, RecurringRule, Tag, Transaction, User, Wallet};

/// Everything one generation run produces, one field per output file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedSet {
    pub user: User,
    pub wallets: Vec<Wallet>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub recurring: Vec<RecurringRule>,
    pub transactions: Vec<Transaction>,
    pub groups: Vec<Group>,
    pub members: Vec<Member>,
    pub accounts: Vec<Account>,
}

impl SeedSet {
    pub fn recurring_transaction_count(&self) -> usize {
        self.transactions.iter().filter(|t| t.is_recurring()).count()
    }

    pub fn variable_transaction_count(&self) -> usize {
        self.transactions.len() - self.recurring_transaction_count()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}
