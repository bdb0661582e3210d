#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Transaction ───────────────────────────────────────────────

fn make_txn(amount: Decimal) -> Transaction {
    Transaction {
        date: "2026-01-15".into(),
        description: "Test".into(),
        category: "Misc".into(),
        amount,
    }
}

#[test]
fn test_income() {
    let txn = make_txn(dec!(100.00));
    assert!(txn.is_income());
    assert!(!txn.is_expense());
}

#[test]
fn test_expense() {
    let txn = make_txn(dec!(-50.00));
    assert!(!txn.is_income());
    assert!(txn.is_expense());
}

#[test]
fn test_zero_is_neither() {
    let txn = make_txn(Decimal::ZERO);
    assert!(!txn.is_income());
    assert!(!txn.is_expense());
}

#[test]
fn test_abs_amount() {
    assert_eq!(make_txn(dec!(-42.99)).abs_amount(), dec!(42.99));
    assert_eq!(make_txn(dec!(42.99)).abs_amount(), dec!(42.99));
    assert_eq!(make_txn(Decimal::ZERO).abs_amount(), Decimal::ZERO);
}

// ── AuditReport ───────────────────────────────────────────────

fn make_report() -> AuditReport {
    AuditReport {
        burn_rate_percentage: 41.5,
        vola_verdict_score: 62.0,
        asset_accumulation_summary: "Coinbase transfers treated as capital deployment.".into(),
        detailed_reasoning: "## Audit\nSpend discipline is mediocre.".into(),
        leakage_items: vec![LeakageItem {
            item: "Uber Eats".into(),
            reason: "Frequent delivery markup".into(),
            alternative: "Batch-cook twice a week".into(),
        }],
        category_spending: vec![CategorySpending {
            category: "Dining".into(),
            total: 45.20,
        }],
    }
}

#[test]
fn test_report_wire_names_are_camel_case() {
    let json = serde_json::to_value(make_report()).unwrap();
    let obj = json.as_object().unwrap();
    for key in [
        "burnRatePercentage",
        "volaVerdictScore",
        "assetAccumulationSummary",
        "detailedReasoning",
        "leakageItems",
        "categorySpending",
    ] {
        assert!(obj.contains_key(key), "missing wire field {key}");
    }
}

#[test]
fn test_report_round_trip() {
    let report = make_report();
    let json = serde_json::to_string(&report).unwrap();
    let back: AuditReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_burn_critical_threshold() {
    let mut report = make_report();
    report.burn_rate_percentage = 40.0;
    assert!(!report.burn_is_critical());
    report.burn_rate_percentage = 40.1;
    assert!(report.burn_is_critical());
}

// ── HistoryEntry ──────────────────────────────────────────────

#[test]
fn test_history_entry_has_fresh_id_and_timestamp() {
    let a = HistoryEntry::new(make_report(), "date,amount".into());
    let b = HistoryEntry::new(make_report(), "date,amount".into());
    assert_ne!(a.id, b.id);
    assert!(chrono::DateTime::parse_from_rfc3339(&a.timestamp).is_ok());
}

#[test]
fn test_history_entry_round_trip() {
    let entry = HistoryEntry::new(make_report(), "date,description,category,amount".into());
    let json = serde_json::to_string(&entry).unwrap();
    let back: HistoryEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entry);
}

#[test]
fn test_short_timestamp() {
    let mut entry = HistoryEntry::new(make_report(), String::new());
    entry.timestamp = "2026-01-16T09:30:00+00:00".into();
    assert_eq!(entry.short_timestamp(), "2026-01-16 09:30");
}

#[test]
fn test_short_timestamp_falls_back_on_garbage() {
    let mut entry = HistoryEntry::new(make_report(), String::new());
    entry.timestamp = "not a timestamp".into();
    assert_eq!(entry.short_timestamp(), "not a timestamp");
}
