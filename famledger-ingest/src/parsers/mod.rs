//! Statement parser strategies and the ordered registry that picks one.

pub mod bank_statement_v1;

use anyhow::Result;
use tracing::debug;

use crate::types::RawTransactionRecord;

pub use bank_statement_v1::BankStatementParserV1;

/// A pluggable statement format.
pub trait StatementParser: Send + Sync {
    /// Stable identifier used in logs
    fn name(&self) -> &'static str;

    /// Cheap check whether this parser recognizes the text.
    fn can_handle(&self, text: &str) -> bool;

    /// Best-effort extraction; unrecognized lines are skipped.
    fn extract(&self, text: &str) -> Result<Vec<RawTransactionRecord>>;
}

/// Ordered parser list; the first parser that can handle the text wins.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn StatementParser>>,
}

impl ParserRegistry {
    /// A registry with no parsers
    pub fn empty() -> Self {
        Self { parsers: Vec::new() }
    }

    /// Append a parser (lowest priority so far).
    pub fn with_parser(mut self, parser: impl StatementParser + 'static) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    pub fn select(&self, text: &str) -> Option<&dyn StatementParser> {
        let parser = self
            .parsers
            .iter()
            .find(|p| p.can_handle(text))
            .map(|p| p.as_ref());
        debug!(parser = parser.map(|p| p.name()), "selected statement parser");
        parser
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::empty().with_parser(BankStatementParserV1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysParser;

    impl StatementParser for AlwaysParser {
        fn name(&self) -> &'static str {
            "always"
        }

        fn can_handle(&self, _text: &str) -> bool {
            true
        }

        fn extract(&self, _text: &str) -> Result<Vec<RawTransactionRecord>> {
            Ok(vec![RawTransactionRecord::new("2024-01-01", "fixed", 1.0)])
        }
    }

    #[test]
    fn test_default_registry() {
        let registry = ParserRegistry::default();
        assert_eq!(registry.names(), ["bank_statement_v1"]);
        assert_eq!(
            registry.select("Opening Balance 100.00").map(|p| p.name()),
            Some("bank_statement_v1")
        );
        assert!(registry.select("hello world").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let registry = ParserRegistry::default().with_parser(AlwaysParser);
        assert_eq!(registry.select("DEBIT").map(|p| p.name()), Some("bank_statement_v1"));
        assert_eq!(registry.select("no keywords").map(|p| p.name()), Some("always"));
    }

    #[test]
    fn test_empty_registry() {
        assert!(ParserRegistry::empty().select("balance").is_none());
    }
}
