//! Project raw records down to the fields the normalizer needs.

use crate::types::RawTransactionRecord;

/// Keep exactly `date`, `amount`, `description`, `direction` and `category`;
/// every other key (account numbers, references, ...) is dropped.
pub fn sanitize(records: &[RawTransactionRecord]) -> Vec<RawTransactionRecord> {
    records
        .iter()
        .map(|rec| RawTransactionRecord {
            date: rec.date.clone(),
            description: rec.description.clone(),
            amount: rec.amount.clone(),
            direction: rec.direction.clone(),
            category: rec.category.clone(),
            extra: Default::default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_drops_extra_keys() {
        let rec: RawTransactionRecord = serde_json::from_value(json!({
            "date": "2024-01-02",
            "description": "Grocery store",
            "amount": -54.2,
            "account_number": "000123456789012",
            "reference": "REF-99887766554433",
            "memo": "short"
        }))
        .unwrap();

        let clean = sanitize(&[rec.clone()]);
        assert_eq!(clean.len(), 1);
        assert!(clean[0].extra.is_empty());
        assert_eq!(clean[0].date, rec.date);
        assert_eq!(clean[0].description, rec.description);
        assert_eq!(clean[0].amount, rec.amount);
    }

    #[test]
    fn test_missing_fields_stay_absent() {
        let clean = sanitize(&[RawTransactionRecord::default()]);
        let json = serde_json::to_value(&clean[0]).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["amount", "category", "date", "description", "direction"]);
        assert!(obj.values().all(|v| v.is_null()));
    }

    #[test]
    fn test_input_untouched() {
        let mut rec = RawTransactionRecord::new("2024-01-02", "Rent", -1500.0);
        rec.extra.insert("account".to_string(), json!("1234567890123"));
        let _ = sanitize(std::slice::from_ref(&rec));
        assert_eq!(rec.extra.len(), 1);
    }
}
