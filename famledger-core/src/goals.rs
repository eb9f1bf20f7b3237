//! Savings goal projection, what-if simulation and rule-based recommendations.
//!
//! Pure arithmetic: no interest, no inflation. A non-positive monthly
//! contribution yields the "not achievable" sentinel rather than an error.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::health::round2;

/// Flat monthly increase tried by [`recommend`]
pub const FLAT_INCREASE: f64 = 200.0;
/// Proportional contribution boost tried by [`recommend`]
pub const BOOST_FRACTION: f64 = 0.10;

/// A household savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    /// May be zero or negative (goal then is not achievable)
    pub monthly_contribution: f64,
    /// Advisory only (YYYY-MM-DD); never used in projection arithmetic
    pub target_date: Option<String>,
}

impl SavingsGoal {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        target_amount: f64,
        current_amount: f64,
        monthly_contribution: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target_amount,
            current_amount,
            monthly_contribution,
            target_date: None,
        }
    }

    pub fn with_target_date(mut self, target_date: impl Into<String>) -> Self {
        self.target_date = Some(target_date.into());
        self
    }

    /// Amount still to be saved, never negative
    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }

    /// Copy of this goal with a different contribution
    fn with_contribution(&self, monthly_contribution: f64) -> Self {
        Self {
            monthly_contribution,
            ..self.clone()
        }
    }
}

/// Time-to-goal estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalProjection {
    pub months_required: u32,
    pub years_required: f64,
    pub is_achievable: bool,
}

impl GoalProjection {
    /// Sentinel for a non-positive contribution
    pub const NOT_ACHIEVABLE: GoalProjection = GoalProjection {
        months_required: 0,
        years_required: 0.0,
        is_achievable: false,
    };

    fn from_months(months: u32) -> Self {
        Self {
            months_required: months,
            years_required: round2(f64::from(months) / 12.0),
            is_achievable: true,
        }
    }
}

/// Hypothetical monthly adjustments for [`simulate`]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WhatIf {
    pub extra_monthly_savings: f64,
    pub extra_monthly_income: f64,
    pub reduced_monthly_expenses: f64,
}

impl WhatIf {
    /// Net change to the monthly contribution
    pub fn contribution_delta(&self) -> f64 {
        self.extra_monthly_savings + self.extra_monthly_income - self.reduced_monthly_expenses
    }

    fn is_finite(&self) -> bool {
        self.extra_monthly_savings.is_finite()
            && self.extra_monthly_income.is_finite()
            && self.reduced_monthly_expenses.is_finite()
    }
}

/// Goal payload as supplied by callers (JSON/CLI), before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub monthly_contribution: f64,
    #[serde(default)]
    pub target_date: Option<String>,
    /// Adjustments for the simulation sub-result
    #[serde(default)]
    pub what_if: Option<WhatIf>,
}

impl GoalRequest {
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }
}

impl TryFrom<GoalRequest> for SavingsGoal {
    type Error = Error;

    fn try_from(req: GoalRequest) -> Result<Self> {
        if !(req.target_amount.is_finite() && req.target_amount >= 0.0) {
            return Err(Error::InvalidGoal(format!(
                "target_amount must be a non-negative number, got {}",
                req.target_amount
            )));
        }
        if !(req.current_amount.is_finite() && req.current_amount >= 0.0) {
            return Err(Error::InvalidGoal(format!(
                "current_amount must be a non-negative number, got {}",
                req.current_amount
            )));
        }
        if !req.monthly_contribution.is_finite() {
            return Err(Error::NonFiniteAmount("monthly contribution"));
        }

        Ok(SavingsGoal {
            id: req.id.unwrap_or_default(),
            name: req.name.unwrap_or_else(|| "Savings goal".to_string()),
            target_amount: req.target_amount,
            current_amount: req.current_amount,
            monthly_contribution: req.monthly_contribution,
            target_date: req.target_date,
        })
    }
}

/// Estimate how long it will take to reach the goal.
pub fn project(goal: &SavingsGoal) -> GoalProjection {
    if goal.monthly_contribution <= 0.0 {
        return GoalProjection::NOT_ACHIEVABLE;
    }
    // Float-to-int casts saturate; try_project rejects the overflow case.
    let months = (goal.remaining() / goal.monthly_contribution).ceil() as u32;
    GoalProjection::from_months(months)
}

/// Checked [`project`]: rejects non-finite inputs and month counts past `u32`.
pub fn try_project(goal: &SavingsGoal) -> Result<GoalProjection> {
    if !goal.target_amount.is_finite() || !goal.current_amount.is_finite() {
        return Err(Error::NonFiniteAmount("goal amounts"));
    }
    if !goal.monthly_contribution.is_finite() {
        return Err(Error::NonFiniteAmount("monthly contribution"));
    }
    if goal.monthly_contribution > 0.0 {
        let months = (goal.remaining() / goal.monthly_contribution).ceil();
        if months > f64::from(u32::MAX) {
            return Err(Error::ProjectionOverflow(months));
        }
    }
    Ok(project(goal))
}

/// What-if projection with an adjusted contribution. The goal is not mutated;
/// a negative effective contribution yields the not-achievable sentinel.
pub fn simulate(goal: &SavingsGoal, what_if: &WhatIf) -> GoalProjection {
    project(&goal.with_contribution(goal.monthly_contribution + what_if.contribution_delta()))
}

/// Checked [`simulate`].
pub fn try_simulate(goal: &SavingsGoal, what_if: &WhatIf) -> Result<GoalProjection> {
    if !what_if.is_finite() {
        return Err(Error::NonFiniteAmount("simulation adjustments"));
    }
    try_project(&goal.with_contribution(goal.monthly_contribution + what_if.contribution_delta()))
}

/// Rule-based suggestions to reach the goal sooner.
pub fn recommend(goal: &SavingsGoal) -> Vec<String> {
    let baseline = project(goal);
    if !baseline.is_achievable {
        return vec!["Increase monthly contribution above 0 to make the goal achievable.".to_string()];
    }

    let mut out = Vec::new();

    let flat = project(&goal.with_contribution(goal.monthly_contribution + FLAT_INCREASE));
    if let Some(saved) = months_saved(&baseline, &flat) {
        out.push(format!(
            "Increase monthly savings by ${FLAT_INCREASE:.0} to reach the goal {saved} month(s) earlier."
        ));
    }

    let boost = goal.monthly_contribution * BOOST_FRACTION;
    let boosted = project(&goal.with_contribution(goal.monthly_contribution + boost));
    if let Some(saved) = months_saved(&baseline, &boosted) {
        out.push(format!(
            "Reduce expenses by 10% (≈${boost:.2} extra savings) to reach the goal {saved} month(s) earlier."
        ));
    }

    out
}

fn months_saved(baseline: &GoalProjection, alternative: &GoalProjection) -> Option<u32> {
    baseline
        .months_required
        .checked_sub(alternative.months_required)
        .filter(|saved| *saved > 0)
}

/// Calendar month in which an achievable projection completes.
pub fn estimated_completion(projection: &GoalProjection, from: NaiveDate) -> Option<NaiveDate> {
    if !projection.is_achievable {
        return None;
    }
    from.checked_add_months(Months::new(projection.months_required))
}

/// Whether the projection finishes on or before the goal's advisory target date.
///
/// `None` when there is no parseable target date.
pub fn meets_target_date(
    goal: &SavingsGoal,
    projection: &GoalProjection,
    from: NaiveDate,
) -> Option<bool> {
    let target = NaiveDate::parse_from_str(goal.target_date.as_deref()?, "%Y-%m-%d").ok()?;
    Some(estimated_completion(projection, from).is_some_and(|done| done <= target))
}

/// Fixed-horizon feasibility input: can the monthly surplus cover the target
/// within the given number of months?
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HorizonGoal {
    pub monthly_surplus: f64,
    pub target_amount: f64,
    pub time_horizon_months: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HorizonResult {
    pub required_savings_per_month: f64,
    /// Negative = shortfall
    pub shortfall_or_surplus: f64,
    pub feasible: bool,
}

pub fn evaluate_horizon(goal: &HorizonGoal) -> Result<HorizonResult> {
    if !(goal.target_amount.is_finite() && goal.target_amount > 0.0) {
        return Err(Error::InvalidGoal("target amount must be positive".to_string()));
    }
    if goal.time_horizon_months == 0 {
        return Err(Error::InvalidGoal("time horizon must be at least one month".to_string()));
    }
    if !goal.monthly_surplus.is_finite() {
        return Err(Error::NonFiniteAmount("monthly surplus"));
    }

    let required = goal.target_amount / f64::from(goal.time_horizon_months);
    let diff = goal.monthly_surplus - required;
    Ok(HorizonResult {
        required_savings_per_month: round2(required),
        shortfall_or_surplus: round2(diff),
        feasible: diff >= 0.0,
    })
}
