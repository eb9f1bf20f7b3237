//! Normalized transaction types shared by every pipeline stage

use serde::{Deserialize, Serialize};

/// Income vs. expense, derived solely from the sign of the amount
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl Direction {
    /// `amount > 0` is income; zero and negatives are expenses.
    pub fn from_amount(amount: f64) -> Self {
        if amount > 0.0 {
            Direction::Income
        } else {
            Direction::Expense
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Income => "income",
            Direction::Expense => "expense",
        }
    }
}

/// Category assigned when no keyword rule matches
pub const OTHER_CATEGORY: &str = "Other";

/// A canonical, hashed and classified statement line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedTransaction {
    /// Deterministic content hash of (date, description, amount)
    pub id: String,
    /// Original date string as parsed (YYYY-MM-DD or similar)
    pub date: String,
    /// Human-readable description
    pub description: String,
    /// Positive = income, negative = expense
    pub amount: f64,
    pub direction: Direction,
    /// Rule-based category, or "Other"
    pub category: String,
    /// Reserved; always `None` in this version
    pub subcategory: Option<String>,
    /// Classification confidence (0.0 - 1.0)
    pub confidence: f64,
}

impl NormalizedTransaction {
    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.direction == Direction::Income
    }

    /// Returns true if this is an expense (zero or negative amount)
    pub fn is_expense(&self) -> bool {
        self.direction == Direction::Expense
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }

    /// Calendar month key ("YYYY-MM"), or `None` when the date is too short.
    pub fn month_key(&self) -> Option<&str> {
        let (end, _) = self.date.char_indices().nth(6)?;
        let end = end + self.date[end..].chars().next()?.len_utf8();
        Some(&self.date[..end])
    }
}
