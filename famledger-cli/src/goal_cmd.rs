use anyhow::Result;
use chrono::{Local, NaiveDate};
use famledger_core::{
    GoalProjection, GoalRequest, SavingsGoal, WhatIf, estimated_completion, meets_target_date,
    recommend as recommendations, try_project, try_simulate,
};
use serde_json::{Value, json};

pub fn project(request: &GoalRequest) -> Result<()> {
    let goal = SavingsGoal::try_from(request.clone())?;
    let projection = try_project(&goal)?;
    print_json(&report(&goal, &projection, None, today()))
}

pub fn simulate(request: &GoalRequest, what_if: &WhatIf) -> Result<()> {
    let goal = SavingsGoal::try_from(request.clone())?;
    let projection = try_simulate(&goal, what_if)?;
    print_json(&report(&goal, &projection, Some(what_if), today()))
}

pub fn recommend(request: &GoalRequest) -> Result<()> {
    let goal = SavingsGoal::try_from(request.clone())?;
    let tips = recommendations(&goal);
    if tips.is_empty() {
        println!("No changes needed: current plan is already the fastest of the options tried.");
    }
    for tip in tips {
        println!("- {tip}");
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn report(
    goal: &SavingsGoal,
    projection: &GoalProjection,
    what_if: Option<&WhatIf>,
    from: NaiveDate,
) -> Value {
    let mut out = json!({
        "goal": goal,
        "projection": projection,
        "estimated_completion": estimated_completion(projection, from)
            .map(|d| d.format("%Y-%m").to_string()),
        "meets_target_date": meets_target_date(goal, projection, from),
    });
    if let Some(what_if) = what_if {
        out["what_if"] = json!(what_if);
    }
    out
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> SavingsGoal {
        SavingsGoal::new("g", "Emergency fund", 10000.0, 0.0, 500.0).with_target_date("2026-01-01")
    }

    fn from() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_report_projection() {
        let g = goal();
        let projection = try_project(&g).unwrap();
        let out = report(&g, &projection, None, from());

        assert_eq!(out["projection"]["months_required"], 20);
        assert_eq!(out["projection"]["years_required"], 1.67);
        assert_eq!(out["estimated_completion"], "2025-11");
        assert_eq!(out["meets_target_date"], true);
        assert!(out.get("what_if").is_none());
    }

    #[test]
    fn test_report_simulation() {
        let g = goal();
        let what_if = WhatIf {
            extra_monthly_savings: 100.0,
            extra_monthly_income: 0.0,
            reduced_monthly_expenses: 0.0,
        };
        let projection = try_simulate(&g, &what_if).unwrap();
        let out = report(&g, &projection, Some(&what_if), from());

        assert_eq!(out["projection"]["months_required"], 17);
        assert_eq!(out["what_if"]["extra_monthly_savings"], 100.0);
    }

    #[test]
    fn test_report_not_achievable() {
        let g = SavingsGoal::new("g", "Car", 5000.0, 0.0, 0.0);
        let projection = try_project(&g).unwrap();
        let out = report(&g, &projection, None, from());

        assert_eq!(out["projection"]["is_achievable"], false);
        assert!(out["estimated_completion"].is_null());
        assert!(out["meets_target_date"].is_null());
    }

    #[test]
    fn test_invalid_request_is_an_error() {
        let request = GoalRequest {
            target_amount: -1.0,
            ..GoalRequest::default()
        };
        assert!(project(&request).is_err());
    }
}
