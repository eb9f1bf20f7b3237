//! Post-redaction safety check.

use super::patterns::sensitive_patterns;

/// True when no sensitive pattern matches `text`.
pub fn is_safe_for_processing(text: &str) -> bool {
    !sensitive_patterns().iter().any(|p| p.regex.is_match(text))
}
