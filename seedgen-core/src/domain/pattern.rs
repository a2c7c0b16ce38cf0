//! Variable transaction pattern

use serde::{Deserialize, Serialize};

/// Category-level template for synthesizing one-off transactions
///
/// Amounts are drawn from a normal distribution centred on `mean`.
/// `tag_hints` is carried for reference only: tag sampling always draws
/// from the full tag pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariablePattern {
    pub category_id: String,
    pub mean: f64,
    /// Wallets a generated transaction may be charged to
    pub wallets: Vec<String>,
    #[serde(default)]
    pub tag_hints: Vec<String>,
}
