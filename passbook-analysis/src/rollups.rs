//! Category and merchant rollups over the debit side of a filtered view.

use std::collections::HashMap;

use passbook_core::{Category, Transaction};
use serde::Serialize;

/// Number of merchants kept by [`rollup_by_merchant`].
pub const TOP_MERCHANTS: usize = 5;

/// Merchant names are cut to this many characters.
pub const MERCHANT_NAME_LEN: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRollup {
    pub category: Category,
    /// Sum of debits in this category
    pub amount: f64,
    /// Share of total spending, one decimal place
    pub percentage: f64,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchantRollup {
    pub name: String,
    pub amount: f64,
    pub count: usize,
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Spending per category, largest first. Credits are ignored.
pub fn rollup_by_category(view: &[Transaction]) -> Vec<CategoryRollup> {
    let mut index: HashMap<Category, usize> = HashMap::new();
    let mut rollups: Vec<CategoryRollup> = Vec::new();
    let mut total = 0.0;

    for txn in view.iter().filter(|t| t.is_debit()) {
        total += txn.debit_amount;
        let i = *index.entry(txn.category).or_insert_with(|| {
            rollups.push(CategoryRollup {
                category: txn.category,
                amount: 0.0,
                percentage: 0.0,
                transactions: Vec::new(),
            });
            rollups.len() - 1
        });
        rollups[i].amount += txn.debit_amount;
        rollups[i].transactions.push(txn.clone());
    }

    for r in &mut rollups {
        r.percentage = round1(r.amount / total * 100.0);
    }
    // stable: ties keep first-seen order
    rollups.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    rollups
}

/// Merchant name from a narration: the second `-` segment, else the whole text,
/// cut to [`MERCHANT_NAME_LEN`] characters.
pub fn merchant_name(narration: &str) -> String {
    let name = narration
        .split('-')
        .nth(1)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| narration.trim());
    name.chars().take(MERCHANT_NAME_LEN).collect()
}

/// Spending per merchant, largest first, at most `limit` entries.
pub fn top_merchants(view: &[Transaction], limit: usize) -> Vec<MerchantRollup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rollups: Vec<MerchantRollup> = Vec::new();

    for txn in view.iter().filter(|t| t.is_debit()) {
        let name = merchant_name(&txn.narration);
        let i = match index.get(&name) {
            Some(&i) => i,
            None => {
                rollups.push(MerchantRollup {
                    name: name.clone(),
                    amount: 0.0,
                    count: 0,
                });
                index.insert(name, rollups.len() - 1);
                rollups.len() - 1
            }
        };
        rollups[i].amount += txn.debit_amount;
        rollups[i].count += 1;
    }

    rollups.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    rollups.truncate(limit);
    rollups
}

/// The five biggest merchants by spending.
pub fn rollup_by_merchant(view: &[Transaction]) -> Vec<MerchantRollup> {
    top_merchants(view, TOP_MERCHANTS)
}
