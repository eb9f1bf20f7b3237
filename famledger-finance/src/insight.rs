//! Plain-English explanations of a month and a goal's feasibility.
//!
//! Providers must not touch storage or the network and must never invent
//! numbers; everything they say comes from the inputs.

use famledger_core::HorizonResult;
use serde::{Deserialize, Serialize};

use crate::analysis::FamilyMonthSummary;

/// Figures an explanation is built from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FinancialSummary {
    pub income: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
    pub surplus: f64,
    /// Percent of income (0 - 100, negative when overspending)
    pub savings_rate: f64,
}

impl From<&FamilyMonthSummary> for FinancialSummary {
    fn from(month: &FamilyMonthSummary) -> Self {
        Self {
            income: month.income,
            fixed_expenses: month.fixed_expenses,
            variable_expenses: month.variable_expenses,
            surplus: month.surplus,
            savings_rate: month.savings_rate,
        }
    }
}

pub trait InsightProvider: Send + Sync {
    fn generate(&self, summary: &FinancialSummary, goal: &HorizonResult) -> String;
}

/// Template-based provider; no AI, no external calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeterministicProvider;

impl InsightProvider for DeterministicProvider {
    fn generate(&self, summary: &FinancialSummary, goal: &HorizonResult) -> String {
        let required = goal.required_savings_per_month;
        let mut lines = vec![
            format!("The family currently earns {} per month.", money(summary.income)),
            format!(
                "After expenses, the monthly surplus is {} ({:.1}% of income).",
                money(summary.surplus),
                summary.savings_rate
            ),
        ];

        if goal.feasible {
            lines.push(format!(
                "The goal is feasible: you need to save {} each month, which is within the available surplus.",
                money(required)
            ));
            lines.push(
                "You can proceed with the plan. Maintaining the current spending pattern should allow you to reach the target."
                    .to_string(),
            );
        } else {
            lines.push(format!(
                "The goal is not feasible: you would need to save {} each month, which exceeds the current surplus by {}.",
                money(required),
                money(required - summary.surplus)
            ));
            lines.push(format!(
                "Consider reducing variable expenses (currently {} per month) or extending the time horizon to lower the required monthly savings.",
                money(summary.variable_expenses)
            ));
        }

        lines.join(" ")
    }
}

/// Explains a summary with an injected provider (deterministic by default).
pub struct InsightService {
    provider: Box<dyn InsightProvider>,
}

impl Default for InsightService {
    fn default() -> Self {
        Self::new(DeterministicProvider)
    }
}

impl InsightService {
    pub fn new(provider: impl InsightProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
        }
    }

    pub fn explain(&self, summary: &FinancialSummary, goal: &HorizonResult) -> String {
        self.provider.generate(summary, goal)
    }
}

/// `$1,234.56`, `-$80.00`
fn money(amount: f64) -> String {
    let cents = format!("{:.2}", amount.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{frac}")
}
