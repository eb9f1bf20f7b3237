//! Raw records -> canonical, hashed and classified transactions.

use famledger_core::{Direction, NormalizedTransaction};
use famledger_ingest::RawTransactionRecord;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::category_rules::categorize;
use crate::confidence::adjust_confidence;

/// Hex characters kept from the SHA-256 digest (64 bits)
const ID_HEX_LEN: usize = 16;

/// Stable identifier over `date|description|amount`.
///
/// The amount is rendered by [`float_repr`], so equal inputs hash
/// identically across runs and match ids already issued for the same rows.
pub fn transaction_id(date: &str, description: &str, amount: f64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{date}|{description}|{}", float_repr(amount)).as_bytes());
    let mut id = hex::encode(hasher.finalize());
    id.truncate(ID_HEX_LEN);
    id
}

/// Shortest round-trip rendering of a float: `-15.5`, `1000.0`, and
/// scientific form outside `[1e-4, 1e16)` with a signed, two-digit
/// exponent (`1e+16`, `1e-05`, `1.2345678901234568e+20`).
pub fn float_repr(value: f64) -> String {
    let debug = format!("{value:?}");
    let Some((mantissa, exponent)) = debug.split_once('e') else {
        return debug;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Normalize one record. Missing date/description default to empty; an
/// amount that cannot be coerced becomes 0.0. Any upstream direction is
/// ignored.
pub fn normalize_record(raw: &RawTransactionRecord) -> NormalizedTransaction {
    let date = raw.date.clone().unwrap_or_default();
    let description = raw.description.clone().unwrap_or_default();
    let amount = raw.amount.as_ref().and_then(|a| a.to_f64()).unwrap_or(0.0);

    let cat = categorize(&description);
    let confidence = adjust_confidence(cat.category, cat.base_confidence, amount);
    let id = transaction_id(&date, &description, amount);

    NormalizedTransaction {
        id,
        date,
        description,
        amount,
        direction: Direction::from_amount(amount),
        category: cat.category.to_string(),
        subcategory: None,
        confidence,
    }
}

pub fn normalize(records: &[RawTransactionRecord]) -> Vec<NormalizedTransaction> {
    let out: Vec<_> = records.iter().map(normalize_record).collect();
    debug!(count = out.len(), "normalized transactions");
    out
}
