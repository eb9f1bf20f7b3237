//! Document -> structured result, stage by stage.
//!
//! extract -> redact -> parse -> sanitize -> normalize -> aggregate ->
//! health (latest month) -> optional goal projection/simulation.
//!
//! Every stage degrades locally: a failed extraction is empty text, an
//! unknown format is an empty transaction list, a malformed goal drops the
//! goal sub-result. `process` always returns a complete result.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;

use famledger_core::{
    BudgetHealth, GoalProjection, GoalRequest, MonthlyAggregate, NormalizedTransaction,
    SavingsGoal, WhatIf, aggregate_by_month, analyze, latest_month, try_project, try_simulate,
};
use famledger_ingest::{
    DocumentTextExtractor, ParserRegistry, RawTransactionRecord, TextExtractor,
    is_safe_for_processing, redact, sanitize,
};
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::normalizer::normalize;

/// Outcome of an optional stage: a value, or an explicit skip with a reason.
#[derive(Debug, Clone, PartialEq)]
pub enum StageOutcome<T> {
    Computed(T),
    Skipped { reason: String },
}

impl<T> StageOutcome<T> {
    pub fn from_result<E: Display>(stage: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(value) => StageOutcome::Computed(value),
            Err(err) => {
                warn!(stage, error = %err, "optional stage skipped");
                StageOutcome::Skipped {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn computed(&self) -> Option<&T> {
        match self {
            StageOutcome::Computed(value) => Some(value),
            StageOutcome::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, StageOutcome::Skipped { .. })
    }
}

impl<T: Serialize> Serialize for StageOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StageOutcome::Computed(value) => value.serialize(serializer),
            StageOutcome::Skipped { .. } => serializer.serialize_none(),
        }
    }
}

/// Goal sub-result; skipped parts are omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalOutcome {
    #[serde(skip_serializing_if = "StageOutcome::is_skipped")]
    pub projection: StageOutcome<GoalProjection>,
    #[serde(skip_serializing_if = "StageOutcome::is_skipped")]
    pub simulation: StageOutcome<GoalProjection>,
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResult {
    pub redactions: Vec<String>,
    pub transactions_normalized: Vec<NormalizedTransaction>,
    pub monthly_summary: BTreeMap<String, MonthlyAggregate>,
    /// Health of the most recent month; `{}` in JSON when there is none
    #[serde(serialize_with = "health_or_empty")]
    pub budget_health: Option<BudgetHealth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalOutcome>,
}

impl PipelineResult {
    /// Key of the month `budget_health` describes
    pub fn latest_month(&self) -> Option<&str> {
        latest_month(&self.monthly_summary).map(|(key, _)| key.as_str())
    }
}

fn health_or_empty<S: Serializer>(
    health: &Option<BudgetHealth>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match health {
        Some(h) => h.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

/// The orchestrator: an extractor plus a parser registry.
pub struct Pipeline {
    extractor: Box<dyn TextExtractor>,
    registry: ParserRegistry,
    default_what_if: WhatIf,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(DocumentTextExtractor, ParserRegistry::default())
    }
}

impl Pipeline {
    pub fn new(extractor: impl TextExtractor + 'static, registry: ParserRegistry) -> Self {
        Self {
            extractor: Box::new(extractor),
            registry,
            default_what_if: WhatIf::default(),
        }
    }

    /// Simulation adjustments used when a goal payload carries no `what_if`.
    pub fn with_default_what_if(mut self, what_if: WhatIf) -> Self {
        self.default_what_if = what_if;
        self
    }

    /// Run the full pipeline on a document.
    pub fn process(&self, path: &Path, goal: Option<&Value>) -> PipelineResult {
        let text = self.extractor.extract_text(path);
        if text.is_empty() {
            warn!(path = %path.display(), "no text extracted; continuing with empty document");
        }
        self.process_text(&text, goal)
    }

    /// Run every stage after extraction.
    pub fn process_text(&self, text: &str, goal: Option<&Value>) -> PipelineResult {
        let redaction = redact(text);
        if !is_safe_for_processing(&redaction.text) {
            warn!("redacted text still matches a sensitive pattern");
        }

        let raw = self.parse(&redaction.text);
        let transactions = normalize(&sanitize(&raw));
        let monthly_summary = aggregate_by_month(&transactions);

        let budget_health = latest_month(&monthly_summary).map(|(month, aggregate)| {
            let health = analyze(aggregate);
            debug!(month = %month, status = ?health.status, score = health.health_score, "scored budget health");
            health
        });

        let goal = goal.and_then(|payload| self.goal_outcome(payload));

        info!(
            redactions = redaction.applied.len(),
            transactions = transactions.len(),
            months = monthly_summary.len(),
            goal = goal.is_some(),
            "pipeline finished"
        );

        PipelineResult {
            redactions: redaction.applied,
            transactions_normalized: transactions,
            monthly_summary,
            budget_health,
            goal,
        }
    }

    fn parse(&self, text: &str) -> Vec<RawTransactionRecord> {
        let Some(parser) = self.registry.select(text) else {
            debug!("no parser matched statement text");
            return Vec::new();
        };
        match parser.extract(text) {
            Ok(records) => {
                debug!(parser = parser.name(), records = records.len(), "parsed statement");
                records
            }
            Err(err) => {
                warn!(parser = parser.name(), error = %format!("{err:#}"), "parser failed");
                Vec::new()
            }
        }
    }

    /// Build and evaluate the goal sub-result. `None` when the payload cannot
    /// be turned into a valid goal.
    pub fn goal_outcome(&self, payload: &Value) -> Option<GoalOutcome> {
        let request = match GoalRequest::from_json(payload) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "ignoring malformed goal payload");
                return None;
            }
        };
        let what_if = request.what_if.unwrap_or(self.default_what_if);
        let goal = match SavingsGoal::try_from(request) {
            Ok(goal) => goal,
            Err(err) => {
                warn!(error = %err, "ignoring invalid goal");
                return None;
            }
        };

        Some(GoalOutcome {
            projection: StageOutcome::from_result("projection", try_project(&goal)),
            simulation: StageOutcome::from_result("simulation", try_simulate(&goal, &what_if)),
        })
    }
}

/// Process a document with the default extractor and parsers.
pub fn process(path: &Path, goal: Option<&Value>) -> PipelineResult {
    Pipeline::default().process(path, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use famledger_core::HealthStatus;
    use serde_json::json;

    struct FixedText(&'static str);

    impl TextExtractor for FixedText {
        fn extract_text(&self, _path: &Path) -> String {
            self.0.to_string()
        }
    }

    const STATEMENT: &str = "\
Transaction history for jane@example.com
2024-01-03 Salary ACME 4000.00
2024-01-05 Monthly rent -1500.00
2024-01-09 Grocery store -250.00
2024-02-01 Salary ACME 4000.00
2024-02-02 Uber ride -15.50
2024-02-03 Netflix -12.99
2024-02-04 Monthly rent -1500.00
";

    fn pipeline(text: &'static str) -> Pipeline {
        Pipeline::new(FixedText(text), ParserRegistry::default())
    }

    #[test]
    fn test_end_to_end_text() {
        let result = pipeline(STATEMENT).process(Path::new("ignored.txt"), None);

        assert_eq!(result.redactions, vec!["email"]);
        assert_eq!(result.transactions_normalized.len(), 7);
        assert_eq!(result.monthly_summary.len(), 2);
        assert_eq!(result.latest_month(), Some("2024-02"));

        let feb = &result.monthly_summary["2024-02"];
        assert_eq!(feb.income, 4000.0);
        assert!((feb.expenses - 1528.49).abs() < 1e-9);

        let health = result.budget_health.as_ref().unwrap();
        assert_eq!(health.status, HealthStatus::Healthy);
        assert_eq!(health.largest_category.as_deref(), Some("Other"));
        assert!(result.goal.is_none());
    }

    #[test]
    fn test_empty_text_degrades() {
        let result = pipeline("").process(Path::new("missing.pdf"), None);
        assert!(result.redactions.is_empty());
        assert!(result.transactions_normalized.is_empty());
        assert!(result.monthly_summary.is_empty());
        assert!(result.budget_health.is_none());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["budget_health"], json!({}));
        assert!(json.get("goal").is_none());
    }

    #[test]
    fn test_no_parser_match() {
        let result = pipeline("2024-01-03 Salary 4000.00").process(Path::new("x"), None);
        assert!(result.transactions_normalized.is_empty());
    }

    #[test]
    fn test_goal_projection_and_simulation() {
        let goal = json!({
            "name": "Emergency fund",
            "target_amount": 10000,
            "current_amount": 0,
            "monthly_contribution": 500,
            "what_if": {"extra_monthly_savings": 500}
        });
        let result = pipeline(STATEMENT).process(Path::new("x"), Some(&goal));
        let outcome = result.goal.unwrap();

        let projection = outcome.projection.computed().unwrap();
        assert_eq!(projection.months_required, 20);
        assert_eq!(projection.years_required, 1.67);
        assert_eq!(outcome.simulation.computed().unwrap().months_required, 10);
    }

    #[test]
    fn test_default_what_if_applies() {
        let goal = json!({"target_amount": 1200, "monthly_contribution": 100});
        let pipeline = pipeline(STATEMENT).with_default_what_if(WhatIf {
            extra_monthly_income: 100.0,
            ..WhatIf::default()
        });
        let outcome = pipeline.goal_outcome(&goal).unwrap();
        assert_eq!(outcome.projection.computed().unwrap().months_required, 12);
        assert_eq!(outcome.simulation.computed().unwrap().months_required, 6);
    }

    #[test]
    fn test_malformed_goal_omitted() {
        for goal in [json!({"name": "x"}), json!({"target_amount": -5}), json!("nope")] {
            let result = pipeline(STATEMENT).process(Path::new("x"), Some(&goal));
            assert!(result.goal.is_none());
            assert_eq!(result.transactions_normalized.len(), 7);
        }
    }

    #[test]
    fn test_failed_sub_stage_is_skipped_not_fatal() {
        let goal = json!({
            "target_amount": 1e300,
            "monthly_contribution": 1e-300
        });
        let result = pipeline(STATEMENT).process(Path::new("x"), Some(&goal));
        let outcome = result.goal.clone().unwrap();
        assert!(outcome.projection.is_skipped());
        assert!(outcome.simulation.is_skipped());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["goal"], json!({}));
    }

    #[test]
    fn test_non_positive_contribution_is_a_value() {
        let goal = json!({"target_amount": 1000, "monthly_contribution": 0});
        let result = pipeline(STATEMENT).process(Path::new("x"), Some(&goal));
        let outcome = result.goal.unwrap();
        assert_eq!(outcome.projection, StageOutcome::Computed(GoalProjection::NOT_ACHIEVABLE));
    }

    #[test]
    fn test_ids_stable_across_runs() {
        let a = pipeline(STATEMENT).process(Path::new("x"), None);
        let b = pipeline(STATEMENT).process(Path::new("x"), None);
        let ids_a: Vec<_> = a.transactions_normalized.iter().map(|t| &t.id).collect();
        let ids_b: Vec<_> = b.transactions_normalized.iter().map(|t| &t.id).collect();
        assert_eq!(ids_a, ids_b);
    }
}
