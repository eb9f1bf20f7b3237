//! Deterministic category rules: ordered keyword table over lowercased
//! descriptions. First category with any substring hit wins.
//!
//! No ML. The table is immutable and consulted read-only.

use famledger_core::OTHER_CATEGORY;

/// Base confidence for a keyword match
pub const MATCH_CONFIDENCE: f64 = 0.6;
/// Base confidence when nothing matches
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

/// (category, lowercase keywords), in priority order
pub const CATEGORY_RULES: &[(&str, &[&str])] = &[
    ("Food", &["grocery", "restaurant", "cafe", "uber eats", "supermarket"]),
    ("Transport", &["uber", "taxi", "bus", "train", "metro", "fuel"]),
    ("Housing", &["rent", "mortgage", "lease"]),
    ("Utilities", &["electric", "gas", "water", "internet", "phone"]),
    ("Entertainment", &["cinema", "movie", "concert", "netflix", "spotify"]),
    ("Healthcare", &["pharmacy", "hospital", "clinic", "dentist"]),
];

/// Result of categorization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Categorized {
    pub category: &'static str,
    pub base_confidence: f64,
}

/// Categorize a description by keyword table.
pub fn categorize(description: &str) -> Categorized {
    let desc = description.to_lowercase();

    for &(category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|kw| desc.contains(kw)) {
            return Categorized {
                category,
                base_confidence: MATCH_CONFIDENCE,
            };
        }
    }

    Categorized {
        category: OTHER_CATEGORY,
        base_confidence: FALLBACK_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uber_is_transport() {
        let cat = categorize("Uber ride");
        assert_eq!(cat.category, "Transport");
        assert_eq!(cat.base_confidence, 0.6);
    }

    #[test]
    fn test_uber_eats_is_food() {
        // Food precedes Transport in the table
        assert_eq!(categorize("UBER EATS order 123").category, "Food");
    }

    #[test]
    fn test_case_insensitive_substrings() {
        assert_eq!(categorize("NETFLIX.COM").category, "Entertainment");
        assert_eq!(categorize("City Dentistry").category, "Healthcare");
        assert_eq!(categorize("Monthly RENT payment").category, "Housing");
        assert_eq!(categorize("AT&T Phone bill").category, "Utilities");
    }

    #[test]
    fn test_substring_quirks_follow_table_order() {
        // "parent" contains "rent"
        assert_eq!(categorize("Transfer to parent").category, "Housing");
        // "Shell gas station" hits Utilities' "gas" (no Transport keyword)
        assert_eq!(categorize("Shell gas station").category, "Utilities");
    }

    #[test]
    fn test_fallback_other() {
        let cat = categorize("Salary ACME Corp");
        assert_eq!(cat.category, "Other");
        assert_eq!(cat.base_confidence, 0.3);
        assert_eq!(categorize("").category, "Other");
    }
}
