//! Amount-based confidence adjustment.

use famledger_core::OTHER_CATEGORY;

/// Ceiling for uncategorized transactions
pub const OTHER_CAP: f64 = 0.5;
/// Bonus per full $1000 of absolute amount
pub const BONUS_PER_THOUSAND: f64 = 0.1;
pub const MAX_BONUS: f64 = 0.4;

/// Larger amounts raise confidence for matched categories; "Other" is capped
/// at 0.5 regardless of amount. Result is within [0, 1].
pub fn adjust_confidence(category: &str, base: f64, amount: f64) -> f64 {
    if category == OTHER_CATEGORY {
        return base.min(OTHER_CAP);
    }
    let bonus = ((amount.abs() / 1000.0).floor() * BONUS_PER_THOUSAND).min(MAX_BONUS);
    (base + bonus).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amount_no_bonus() {
        assert_eq!(adjust_confidence("Transport", 0.6, -15.5), 0.6);
        assert_eq!(adjust_confidence("Transport", 0.6, 999.99), 0.6);
    }

    #[test]
    fn test_bonus_per_full_thousand() {
        assert!((adjust_confidence("Housing", 0.6, -1000.0) - 0.7).abs() < 1e-9);
        assert!((adjust_confidence("Housing", 0.6, 2999.0) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_bonus_capped() {
        assert_eq!(adjust_confidence("Housing", 0.6, 1_000_000.0), 1.0);
        assert_eq!(adjust_confidence("Housing", 0.9, 50_000.0), 1.0);
    }

    #[test]
    fn test_other_capped() {
        assert_eq!(adjust_confidence("Other", 0.3, 50_000.0), 0.3);
        assert_eq!(adjust_confidence("Other", 0.9, 10.0), 0.5);
    }
}
