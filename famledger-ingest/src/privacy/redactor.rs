//! Replace sensitive substrings with typed placeholder tokens.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::patterns::sensitive_patterns;

/// Redacted text plus the names of the patterns that fired
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redaction {
    pub text: String,
    /// Each pattern name at most once, in table order
    pub applied: Vec<String>,
}

/// Scan `text` for every sensitive pattern in table order and replace all
/// matches with the pattern's token.
///
/// Later patterns see the output of earlier ones. No match leaves the text
/// unchanged with an empty `applied` list.
pub fn redact(text: &str) -> Redaction {
    let mut redacted = text.to_string();
    let mut applied = Vec::new();

    for pattern in sensitive_patterns() {
        if !pattern.regex.is_match(&redacted) {
            continue;
        }
        let token = pattern.token();
        redacted = pattern
            .regex
            .replace_all(&redacted, regex::NoExpand(&token))
            .into_owned();
        applied.push(pattern.name.to_string());
    }

    debug!(patterns = ?applied, "redacted statement text");
    Redaction {
        text: redacted,
        applied,
    }
}
