//! famledger-core: value types, monthly aggregation, budget health and goal projection

pub mod aggregate;
pub mod error;
pub mod goals;
pub mod health;
pub mod transaction;

pub use aggregate::{MonthlyAggregate, aggregate_by_month, latest_month};
pub use error::{Error, Result};
pub use goals::{
    GoalProjection, GoalRequest, HorizonGoal, HorizonResult, SavingsGoal, WhatIf, estimated_completion,
    evaluate_horizon, meets_target_date, project, recommend, simulate, try_project, try_simulate,
};
pub use health::{BudgetHealth, HealthStatus, analyze};
pub use transaction::{Direction, NormalizedTransaction, OTHER_CATEGORY};
