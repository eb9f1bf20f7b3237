//! PII scrubbing: pattern table, text redaction, guardrail check and record sanitizing.

pub mod guardrails;
pub mod patterns;
pub mod redactor;
pub mod sanitizer;

pub use guardrails::is_safe_for_processing;
pub use patterns::{SensitivePattern, sensitive_patterns};
pub use redactor::{Redaction, redact};
pub use sanitizer::sanitize;
