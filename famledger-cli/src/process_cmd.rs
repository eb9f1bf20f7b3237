use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local, NaiveDate};
use famledger_core::{GoalRequest, HorizonGoal, SavingsGoal, evaluate_horizon};
use famledger_finance::{
    FinancialSummary, InsightService, Pipeline, PipelineResult, analyze_family, export_transactions_csv,
};
use famledger_ingest::{DocumentTextExtractor, TextExtractor, redact as redact_text};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;

/// Horizon used by `--explain` when the goal has no usable target date
const DEFAULT_HORIZON_MONTHS: u32 = 12;

#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub path: PathBuf,
    pub goal: Option<PathBuf>,
    pub pretty: bool,
    pub csv_out: Option<PathBuf>,
    pub explain: bool,
}

pub fn run(cfg: &Config, opts: &ProcessOptions) -> Result<()> {
    let goal = opts.goal.as_deref().map(read_goal).transpose()?;

    let pipeline = Pipeline::default().with_default_what_if(cfg.simulation);
    let result = pipeline.process(&opts.path, goal.as_ref());

    if let Some(csv_path) = &opts.csv_out {
        export_transactions_csv(csv_path, &result.transactions_normalized)?;
        info!(
            path = %csv_path.display(),
            rows = result.transactions_normalized.len(),
            "wrote transactions csv"
        );
    }

    let json = if opts.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    if opts.explain {
        let today = Local::now().date_naive();
        match explanation(&result, goal.as_ref(), today) {
            Some(text) => eprintln!("\n{text}"),
            None => warn!("nothing to explain: need a goal file and at least one month of transactions"),
        }
    }

    Ok(())
}

pub fn redact(path: &Path) -> Result<()> {
    let text = DocumentTextExtractor.extract_text(path);
    if text.is_empty() {
        bail!("no text extracted from {}", path.display());
    }
    let redaction = redact_text(&text);
    println!("{}", redaction.text);
    if redaction.applied.is_empty() {
        eprintln!("\nNo sensitive patterns found.");
    } else {
        eprintln!("\nRedacted: {}", redaction.applied.join(", "));
    }
    Ok(())
}

fn read_goal(path: &Path) -> Result<Value> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse goal json {}", path.display()))
}

/// Plain-English verdict for the latest month against the goal's remaining
/// amount, spread over the months left until its target date.
fn explanation(result: &PipelineResult, goal: Option<&Value>, today: NaiveDate) -> Option<String> {
    let month = result.latest_month()?;
    let household = analyze_family(&result.transactions_normalized)
        .into_iter()
        .find(|m| m.month == month)?;

    let request = GoalRequest::from_json(goal?).ok()?;
    let goal = SavingsGoal::try_from(request).ok()?;

    let horizon = HorizonGoal {
        monthly_surplus: household.surplus,
        target_amount: goal.remaining(),
        time_horizon_months: goal
            .target_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map_or(DEFAULT_HORIZON_MONTHS, |target| months_until(today, target)),
    };
    let verdict = match evaluate_horizon(&horizon) {
        Ok(verdict) => verdict,
        Err(err) => {
            warn!(error = %err, "cannot evaluate goal horizon");
            return None;
        }
    };

    let summary = FinancialSummary::from(&household);
    Some(format!(
        "{} ({month}): {}",
        goal.name,
        InsightService::default().explain(&summary, &verdict)
    ))
}

/// Whole calendar months from `from` to `to`, at least one.
fn months_until(from: NaiveDate, to: NaiveDate) -> u32 {
    let months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    u32::try_from(months.max(1)).unwrap_or(1)
}
