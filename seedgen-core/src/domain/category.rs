//! Category and tag domain models

use serde::{Deserialize, Serialize};

/// Polarity of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}

impl Category {
    pub fn is_income(&self) -> bool {
        self.kind == CategoryKind::Income
    }
}

/// A tag; only its name ends up on transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_kind_round_trip_lowercase() {
        let json = r#"{"id":"c-salary","name":"Salário","type":"income"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert!(category.is_income());
        assert_eq!(serde_json::to_string(&category).unwrap(), json);
    }
}
