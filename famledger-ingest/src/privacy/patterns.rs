//! Ordered table of sensitive-data patterns.
//!
//! Order matters: each pattern runs over the output of the previous one.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

/// A named detector for one kind of sensitive identifier
#[derive(Debug)]
pub struct SensitivePattern {
    pub name: &'static str,
    pub regex: Regex,
}

impl SensitivePattern {
    /// Placeholder written over every match, e.g. `[REDACTED_EMAIL]`
    pub fn token(&self) -> String {
        format!("[REDACTED_{}]", self.name.to_uppercase())
    }
}

// (name, pattern, case-insensitive)
const PATTERN_TABLE: &[(&str, &str, bool)] = &[
    // Bank account numbers: 8-12 digits
    ("account_number", r"\b\d{8,12}\b", false),
    // Card numbers: 13-19 digits, optional spaces or dashes
    ("card_number", r"\b(?:\d[ -]*?){13,19}\b", false),
    // BSB / routing numbers: 6 digits
    ("bsb", r"\b\d{6}\b", false),
    // IBAN-like: 2 letters then 10-30 alphanumerics
    ("iban", r"\b[A-Z]{2}[0-9A-Z]{10,30}\b", false),
    ("email", r"\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b", true),
];

/// The compiled pattern table, built once.
pub fn sensitive_patterns() -> &'static [SensitivePattern] {
    static PATTERNS: OnceLock<Vec<SensitivePattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        PATTERN_TABLE
            .iter()
            .map(|&(name, pattern, case_insensitive)| SensitivePattern {
                name,
                regex: RegexBuilder::new(pattern)
                    .case_insensitive(case_insensitive)
                    .build()
                    .expect("sensitive pattern"),
            })
            .collect()
    })
}
