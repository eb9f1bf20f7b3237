use std::io::Write;
use std::path::Path;

use famledger_core::{Direction, HealthStatus, OTHER_CATEGORY};
use famledger_finance::pipeline::{Pipeline, process};
use serde_json::json;

const STATEMENT: &str = "\
ACME BANK - STATEMENT OF ACCOUNT
Account holder contact: household@example.org
Account 123456789 BSB 062000
Date        Description                    Amount      Balance
2024-01-02  Opening balance                0.00        500.00
2024-01-03  Salary ACME Pty                5200.00     5700.00
2024-01-04  Monthly rent                   -1800.00    3900.00
2024-01-10  Woolworths supermarket         -212.40     3687.60
2024-01-15  Electric bill                  -140.00     3547.60
2024/02/01  Salary ACME Pty                5200.00     8747.60
2024/02/03  Monthly rent                   -1800.00    6947.60
2024/02/08  Uber ride                      -15.50      6932.10
2024/02/09  City Pharmacy                  -42.00      6890.10
2024/02/20  Cinema tickets                 -36.00      6854.10
Closing balance                                        6854.10
";

fn statement_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(STATEMENT.as_bytes()).unwrap();
    file
}

/// Real-file regression: statement text -> full result.
#[test]
fn test_process_statement_file() {
    let file = statement_file();
    let result = process(file.path(), None);

    assert_eq!(result.redactions, vec!["account_number", "bsb", "email"]);
    assert_eq!(result.transactions_normalized.len(), 10);
    assert_eq!(result.monthly_summary.len(), 2);

    let jan = &result.monthly_summary["2024-01"];
    assert_eq!(jan.income, 5200.0);
    assert!((jan.expenses - 2152.40).abs() < 1e-9);
    assert_eq!(jan.categories["Housing"], 1800.0);
    assert!((jan.categories["Food"] - 212.40).abs() < 1e-9);
    assert_eq!(jan.categories["Utilities"], 140.0);

    // Keys keep the statement's separator; "2024/02" sorts after "2024-01".
    let feb = &result.monthly_summary["2024/02"];
    assert_eq!(feb.income, 5200.0);
    assert!((feb.expenses - 1893.50).abs() < 1e-9);

    let health = result.budget_health.as_ref().unwrap();
    assert_eq!(result.latest_month(), Some("2024/02"));
    assert_eq!(health.status, HealthStatus::Healthy);
    assert_eq!(health.largest_category.as_deref(), Some(OTHER_CATEGORY));
    assert_eq!(health.health_score, 63.59);
}

#[test]
fn test_transaction_invariants() {
    let file = statement_file();
    let result = process(file.path(), None);

    for txn in &result.transactions_normalized {
        assert_eq!(txn.direction == Direction::Income, txn.amount > 0.0);
        assert!((0.0..=1.0).contains(&txn.confidence));
        if txn.category == OTHER_CATEGORY {
            assert!(txn.confidence <= 0.5);
        }
        assert!(txn.subcategory.is_none());
    }

    let opening = &result.transactions_normalized[0];
    assert_eq!(opening.amount, 0.0);
    assert_eq!(opening.direction, Direction::Expense);

    let rent = result
        .transactions_normalized
        .iter()
        .find(|t| t.description == "Monthly rent")
        .unwrap();
    assert_eq!(rent.category, "Housing");
    assert!((rent.confidence - 0.7).abs() < 1e-9);
}

#[test]
fn test_reprocessing_is_idempotent() {
    let file = statement_file();
    let first = process(file.path(), None);
    let second = process(file.path(), None);
    assert_eq!(first, second);
}

#[test]
fn test_result_json_shape() {
    let file = statement_file();
    let goal = json!({
        "id": "g-1",
        "name": "Emergency fund",
        "target_amount": 10000,
        "current_amount": 0,
        "monthly_contribution": 500,
        "target_date": "2026-01-01"
    });
    let result = Pipeline::default().process(file.path(), Some(&goal));
    let json = serde_json::to_value(&result).unwrap();

    for key in ["redactions", "transactions_normalized", "monthly_summary", "budget_health", "goal"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["goal"]["projection"], json!({
        "months_required": 20,
        "years_required": 1.67,
        "is_achievable": true
    }));
    assert_eq!(json["goal"]["simulation"]["months_required"], 20);
    assert_eq!(json["transactions_normalized"][2]["direction"], "expense");
    assert_eq!(json["budget_health"]["status"], "healthy");
}

#[test]
fn test_oversized_amount_keeps_canonical_id() {
    let result = Pipeline::default()
        .process_text("balance\n2024-01-01 Transfer 123456789012345678901.00", None);

    assert!(result.redactions.is_empty());
    let txn = &result.transactions_normalized[0];
    assert_eq!(txn.amount, 1.2345678901234568e20);
    assert_eq!(txn.id, "ffa5a122833cf210");
}

#[test]
fn test_missing_document_degrades() {
    let result = process(Path::new("/definitely/not/here.pdf"), None);
    assert!(result.transactions_normalized.is_empty());
    assert!(result.monthly_summary.is_empty());
    assert!(result.budget_health.is_none());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["budget_health"], json!({}));
    assert_eq!(json["redactions"], json!([]));
}
