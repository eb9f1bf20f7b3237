//! famledger-finance: category rules, normalization, household analysis, pipeline orchestration, insights and export

pub mod analysis;
pub mod category_rules;
pub mod confidence;
pub mod export;
pub mod insight;
pub mod normalizer;
pub mod pipeline;

pub use analysis::{
    CHILD_SPEND_KEYWORDS, FIXED_EXPENSE_KEYWORDS, FamilyMonthSummary, analyze_family, is_child_related,
    is_fixed_expense,
};
pub use category_rules::{CATEGORY_RULES, Categorized, categorize};
pub use confidence::adjust_confidence;
pub use export::{export_transactions_csv, write_transactions_csv};
pub use insight::{DeterministicProvider, FinancialSummary, InsightProvider, InsightService};
pub use normalizer::{float_repr, normalize, normalize_record, transaction_id};
pub use pipeline::{GoalOutcome, Pipeline, PipelineResult, StageOutcome, process};
