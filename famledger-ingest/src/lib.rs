//! famledger-ingest: document text extraction, PII scrubbing and statement parsers.

pub mod extract;
pub mod parsers;
pub mod privacy;
pub mod types;

pub use extract::{DocumentTextExtractor, PlainTextExtractor, TextExtractor};
pub use parsers::{BankStatementParserV1, ParserRegistry, StatementParser};
pub use privacy::{Redaction, is_safe_for_processing, redact, sanitize};
pub use types::{RawAmount, RawTransactionRecord};
