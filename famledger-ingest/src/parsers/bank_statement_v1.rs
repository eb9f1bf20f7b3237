//! Generic line-oriented bank statement parser (text)
//!
//! Recognizes statements by keyword and pulls rows shaped like:
//!   2024-03-01   Uber ride                 -15.50
//!   2024/03/02   Salary ACME               2500.00    3100.00
//!
//! The amount may be negative and may carry two decimals. Trailing columns
//! (running balance etc.) are ignored.

use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;

use super::StatementParser;
use crate::types::{RawAmount, RawTransactionRecord};

const KEYWORDS: &[&str] = &["balance", "transaction", "debit", "credit"];

fn line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // DATE DESCRIPTION AMOUNT
        Regex::new(concat!(
            r"(?P<date>\d{4}[-/]\d{2}[-/]\d{2})\s+",
            r"(?P<desc>.+?)\s+",
            r"(?P<amount>-?\d+(?:\.\d{2})?)",
        ))
        .expect("statement line regex")
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BankStatementParserV1;

impl StatementParser for BankStatementParserV1 {
    fn name(&self) -> &'static str {
        "bank_statement_v1"
    }

    fn can_handle(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        KEYWORDS.iter().any(|kw| lowered.contains(kw))
    }

    fn extract(&self, text: &str) -> Result<Vec<RawTransactionRecord>> {
        let mut out = Vec::new();

        for line in text.lines() {
            let Some(caps) = line_re().captures(line) else {
                continue;
            };
            let amount: f64 = match caps["amount"].parse() {
                Ok(a) => a,
                Err(_) => continue,
            };

            out.push(RawTransactionRecord {
                date: Some(caps["date"].to_string()),
                description: Some(caps["desc"].trim().to_string()),
                amount: Some(RawAmount::Number(amount)),
                ..RawTransactionRecord::default()
            });
        }

        Ok(out)
    }
}
