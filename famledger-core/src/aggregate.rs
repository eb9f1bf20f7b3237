//! Month-bucketed rollup of normalized transactions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::transaction::NormalizedTransaction;

/// Per-calendar-month income, expenses and category totals.
///
/// `income - expenses` may be negative; nothing is clamped here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlyAggregate {
    /// Sum of income amounts
    pub income: f64,
    /// Sum of absolute expense amounts
    pub expenses: f64,
    /// Category -> summed absolute amount (both directions)
    pub categories: BTreeMap<String, f64>,
}

impl MonthlyAggregate {
    /// Net cash flow for the month (may be negative)
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }

    fn add(&mut self, txn: &NormalizedTransaction) {
        if txn.is_income() {
            self.income += txn.amount;
        } else {
            self.expenses += txn.abs_amount();
        }
        *self.categories.entry(txn.category.clone()).or_insert(0.0) += txn.abs_amount();
    }
}

/// Bucket transactions by month key ("YYYY-MM").
///
/// Transactions whose date has fewer than 7 characters are skipped.
pub fn aggregate_by_month(txns: &[NormalizedTransaction]) -> BTreeMap<String, MonthlyAggregate> {
    let mut months: BTreeMap<String, MonthlyAggregate> = BTreeMap::new();
    let mut skipped = 0usize;

    for txn in txns {
        let Some(key) = txn.month_key() else {
            skipped += 1;
            continue;
        };
        months.entry(key.to_string()).or_default().add(txn);
    }

    debug!(months = months.len(), skipped, "aggregated transactions by month");
    months
}

/// The most recent month, by lexicographic max of the zero-padded keys.
pub fn latest_month(
    months: &BTreeMap<String, MonthlyAggregate>,
) -> Option<(&String, &MonthlyAggregate)> {
    months.last_key_value()
}
