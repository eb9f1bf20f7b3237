//! Household month view: fixed versus variable spending and the share of
//! expenses going to children.
//!
//! Keyword matching is a case-insensitive substring test on the description,
//! independent of the category table.

use std::collections::BTreeMap;

use famledger_core::NormalizedTransaction;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Descriptions that mark a recurring, committed expense
pub const FIXED_EXPENSE_KEYWORDS: &[&str] = &[
    "rent",
    "mortgage",
    "utility",
    "electric",
    "water",
    "internet",
    "insurance",
    "phone",
    "cable",
    "subscription",
];

/// Descriptions that mark spending on children
pub const CHILD_SPEND_KEYWORDS: &[&str] = &[
    "child",
    "kid",
    "baby",
    "diaper",
    "toy",
    "school",
    "tuition",
    "education",
    "nursery",
    "preschool",
    "college",
    "camp",
];

/// One month of household cash flow. Money figures are rounded to cents,
/// percentages to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMonthSummary {
    pub month: String,
    pub income: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
    /// Income minus all expenses (may be negative)
    pub surplus: f64,
    /// Surplus as percent of income; 0 when there is no income
    pub savings_rate: f64,
    /// Child-related expenses as percent of all expenses; 0 when there are none
    pub child_spend_pct: f64,
}

pub fn is_fixed_expense(description: &str) -> bool {
    matches_any(description, FIXED_EXPENSE_KEYWORDS)
}

pub fn is_child_related(description: &str) -> bool {
    matches_any(description, CHILD_SPEND_KEYWORDS)
}

fn matches_any(description: &str, keywords: &[&str]) -> bool {
    let lowered = description.to_lowercase();
    keywords.iter().any(|kw| lowered.contains(kw))
}

#[derive(Default)]
struct Totals {
    income: f64,
    expenses: f64,
    fixed: f64,
    child: f64,
}

/// Summarize transactions per month key, in month order.
///
/// Positive amounts are income, negative amounts expenses; zero amounts
/// count for neither. Dates shorter than a month key are skipped, as in
/// the monthly aggregation.
pub fn analyze_family(txns: &[NormalizedTransaction]) -> Vec<FamilyMonthSummary> {
    let mut months: BTreeMap<&str, Totals> = BTreeMap::new();

    for txn in txns {
        let Some(month) = txn.month_key() else {
            continue;
        };
        let totals = months.entry(month).or_default();
        if txn.amount > 0.0 {
            totals.income += txn.amount;
        } else if txn.amount < 0.0 {
            let spent = -txn.amount;
            totals.expenses += spent;
            if is_fixed_expense(&txn.description) {
                totals.fixed += spent;
            }
            if is_child_related(&txn.description) {
                totals.child += spent;
            }
        }
    }

    let summaries: Vec<_> = months
        .into_iter()
        .map(|(month, t)| {
            let surplus = t.income - t.expenses;
            let savings_rate = if t.income != 0.0 {
                surplus / t.income * 100.0
            } else {
                0.0
            };
            let child_spend_pct = if t.expenses != 0.0 {
                t.child / t.expenses * 100.0
            } else {
                0.0
            };
            FamilyMonthSummary {
                month: month.to_string(),
                income: round2(t.income),
                fixed_expenses: round2(t.fixed),
                variable_expenses: round2(t.expenses - t.fixed),
                surplus: round2(surplus),
                savings_rate: round2(savings_rate),
                child_spend_pct: round2(child_spend_pct),
            }
        })
        .collect();

    debug!(months = summaries.len(), "analyzed household months");
    summaries
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
