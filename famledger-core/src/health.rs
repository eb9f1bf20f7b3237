//! Budget health scoring for a single month.

use serde::{Deserialize, Serialize};

use crate::aggregate::MonthlyAggregate;

/// Savings rate at or above which a month is healthy
pub const HEALTHY_SAVINGS_RATE: f64 = 0.30;
/// Savings rate at or above which a month is a warning (below healthy)
pub const WARNING_SAVINGS_RATE: f64 = 0.10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HealthStatus {
    #[serde(rename = "healthy")]
    Healthy,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "risky")]
    Risky,
}

impl HealthStatus {
    pub fn from_savings_rate(rate: f64) -> Self {
        if rate >= HEALTHY_SAVINGS_RATE {
            HealthStatus::Healthy
        } else if rate >= WARNING_SAVINGS_RATE {
            HealthStatus::Warning
        } else {
            HealthStatus::Risky
        }
    }
}

/// Derived health verdict, computed fresh per request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetHealth {
    pub savings_rate: f64,
    pub expense_ratio: f64,
    pub largest_category: Option<String>,
    pub status: HealthStatus,
    /// 0 - 100
    pub health_score: f64,
}

impl BudgetHealth {
    fn zero_income() -> Self {
        Self {
            savings_rate: 0.0,
            expense_ratio: 0.0,
            largest_category: None,
            status: HealthStatus::Risky,
            health_score: 0.0,
        }
    }
}

/// Score one month's aggregate.
///
/// Zero income short-circuits to a risky all-zero verdict.
pub fn analyze(month: &MonthlyAggregate) -> BudgetHealth {
    if month.income == 0.0 {
        return BudgetHealth::zero_income();
    }

    let savings = (month.income - month.expenses).max(0.0);
    let savings_rate = savings / month.income;
    let expense_ratio = month.expenses / month.income;

    BudgetHealth {
        savings_rate,
        expense_ratio,
        largest_category: largest_category(month),
        status: HealthStatus::from_savings_rate(savings_rate),
        health_score: round2((savings_rate * 100.0).clamp(0.0, 100.0)),
    }
}

/// Category with the highest total. Ties go to the lexicographically
/// smallest name (categories iterate in sorted order, only a strictly
/// greater total replaces the current pick).
fn largest_category(month: &MonthlyAggregate) -> Option<String> {
    let mut best: Option<(&String, f64)> = None;
    for (name, total) in &month.categories {
        match best {
            Some((_, best_total)) if *total <= best_total => {}
            _ => best = Some((name, *total)),
        }
    }
    best.map(|(name, _)| name.clone())
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
