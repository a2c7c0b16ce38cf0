//! Variable transaction synthesis
//!
//! Walks every day of the window, draws how many one-off transactions
//! happen that day, and fills each from a randomly chosen pattern.

use chrono::NaiveDate;
use rand::distributions::WeightedIndex;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::adapters::reference::ReferenceData;
use crate::config::GeneratorConfig;
use crate::domain::result::{Error, Result};
use crate::domain::{money_from_f64, Transaction, VariablePattern};

/// Synthesize the variable transactions for the configured window
///
/// Draw order per transaction is pattern, amount, wallet, tag count, tags,
/// so a fixed seed reproduces the same sequence.
pub fn synthesize_variable<R: Rng + ?Sized>(
    reference: &ReferenceData,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<Transaction>> {
    let daily_count = WeightedIndex::new(&config.daily_count_weights)
        .map_err(|e| Error::validation(format!("dailyCountWeights: {}", e)))?;
    let tag_pool = reference.tag_names();

    let mut transactions = Vec::new();
    let mut day = config.start_date;
    while day <= config.end_date {
        let count = daily_count.sample(rng);
        for _ in 0..count {
            let pattern = reference
                .patterns
                .choose(rng)
                .ok_or_else(|| Error::validation("no variable patterns"))?;
            transactions.push(synthesize_one(reference, config, pattern, &tag_pool, day, rng)?);
        }

        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    Ok(transactions)
}

fn synthesize_one<R: Rng + ?Sized>(
    reference: &ReferenceData,
    config: &GeneratorConfig,
    pattern: &VariablePattern,
    tag_pool: &[String],
    date: NaiveDate,
    rng: &mut R,
) -> Result<Transaction> {
    let normal = Normal::new(pattern.mean, pattern.mean * config.amount_std_dev_ratio)
        .map_err(|e| Error::validation(format!("pattern {}: {}", pattern.category_id, e)))?;
    let drawn = money_from_f64(normal.sample(rng));

    let is_income = reference
        .category(&pattern.category_id)
        .map(|c| c.is_income())
        .unwrap_or(false);
    let amount = signed_amount(drawn, is_income);

    let wallet_id = pattern
        .wallets
        .choose(rng)
        .ok_or_else(|| Error::validation(format!("pattern {} has no wallets", pattern.category_id)))?
        .clone();

    let tag_count = rng.gen_range(0..=config.max_tags_per_transaction).min(tag_pool.len());
    let tags: Vec<String> = tag_pool.choose_multiple(rng, tag_count).cloned().collect();

    Ok(Transaction {
        id: Uuid::new_v4(),
        user_id: reference.user.id.clone(),
        date,
        description: describe(amount, &pattern.category_id),
        amount,
        category_id: pattern.category_id.clone(),
        wallet_id,
        tags,
        recurring_id: None,
    })
}

/// Income keeps the magnitude positive; everything else is forced negative
pub fn signed_amount(drawn: Decimal, is_income: bool) -> Decimal {
    if is_income {
        drawn.abs()
    } else {
        -drawn.abs()
    }
}

/// "Recebimento" for money in, "Pagamento" otherwise
pub fn describe(amount: Decimal, category_id: &str) -> String {
    let label = if amount > Decimal::ZERO { "Recebimento" } else { "Pagamento" };
    format!("{} - {}", label, category_id)
}
