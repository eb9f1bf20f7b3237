//! CSV export of normalized transactions for downstream loaders.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use famledger_core::NormalizedTransaction;
use serde::Serialize;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    date: &'a str,
    description: &'a str,
    amount: f64,
    direction: &'static str,
    category: &'a str,
    confidence: f64,
}

impl<'a> From<&'a NormalizedTransaction> for CsvRow<'a> {
    fn from(txn: &'a NormalizedTransaction) -> Self {
        Self {
            id: &txn.id,
            date: &txn.date,
            description: &txn.description,
            amount: txn.amount,
            direction: txn.direction.as_str(),
            category: &txn.category,
            confidence: txn.confidence,
        }
    }
}

/// Write one header row plus one row per transaction.
pub fn write_transactions_csv<W: Write>(writer: W, txns: &[NormalizedTransaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for txn in txns {
        wtr.serialize(CsvRow::from(txn))
            .with_context(|| format!("write row {}", txn.id))?;
    }
    wtr.flush().context("flush csv")?;
    Ok(())
}

pub fn export_transactions_csv(path: impl AsRef<Path>, txns: &[NormalizedTransaction]) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())
        .with_context(|| format!("create {}", path.as_ref().display()))?;
    write_transactions_csv(file, txns)
}
