#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::{AuditReport, CategorySpending, LeakageItem};

fn make_report(score: f64) -> AuditReport {
    AuditReport {
        burn_rate_percentage: 41.5,
        vola_verdict_score: score,
        asset_accumulation_summary: "None.".into(),
        detailed_reasoning: "Narrative.".into(),
        leakage_items: vec![LeakageItem {
            item: "Netflix".into(),
            reason: "Unused subscription".into(),
            alternative: "Cancel it".into(),
        }],
        category_spending: vec![CategorySpending {
            category: "Subscription".into(),
            total: 18.99,
        }],
    }
}

fn temp_store() -> (tempfile::TempDir, HistoryStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::open(dir.path().join("history.json"));
    (dir, store)
}

#[test]
fn test_open_missing_file_is_empty() {
    let (_dir, store) = temp_store();
    assert!(store.is_empty());
}

#[test]
fn test_record_prepends() {
    let (_dir, mut store) = temp_store();
    store.record(make_report(10.0), "csv one").unwrap();
    store.record(make_report(20.0), "csv two").unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.entries()[0].report.vola_verdict_score, 20.0);
    assert_eq!(store.entries()[0].raw_csv, "csv two");
    assert_eq!(store.entries()[1].report.vola_verdict_score, 10.0);
}

#[test]
fn test_record_caps_at_fifty_and_evicts_oldest() {
    let (_dir, mut store) = temp_store();
    for i in 0..51 {
        store.record(make_report(f64::from(i)), &format!("csv {i}")).unwrap();
    }

    assert_eq!(store.len(), HISTORY_CAP);
    // The first-recorded audit (score 0) is gone; the newest sits at 0.
    assert_eq!(store.entries()[0].report.vola_verdict_score, 50.0);
    assert!(store
        .entries()
        .iter()
        .all(|e| e.report.vola_verdict_score > 0.0));
    assert_eq!(store.entries()[HISTORY_CAP - 1].report.vola_verdict_score, 1.0);
}

#[test]
fn test_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = HistoryStore::open(&path);
    store.record(make_report(72.0), "date,amount\n2026-01-12,-7.50").unwrap();
    store.record(make_report(55.0), "date,amount\n2026-02-01,-9.00").unwrap();
    let before: Vec<_> = store.entries().to_vec();

    let reloaded = HistoryStore::open(&path);
    assert_eq!(reloaded.entries(), before.as_slice());
}

#[test]
fn test_clear_empties_and_removes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = HistoryStore::open(&path);
    store.record(make_report(72.0), "csv").unwrap();
    assert!(path.exists());

    store.clear().unwrap();
    assert!(store.is_empty());
    assert!(!path.exists());

    let reloaded = HistoryStore::open(&path);
    assert!(reloaded.is_empty());
}

#[test]
fn test_clear_on_empty_store_is_fine() {
    let (_dir, mut store) = temp_store();
    store.clear().unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_corrupt_file_recovers_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{ definitely not a history list").unwrap();

    let store = HistoryStore::open(&path);
    assert!(store.is_empty());
}

#[test]
fn test_recording_over_corrupt_file_replaces_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "garbage").unwrap();

    let mut store = HistoryStore::open(&path);
    store.record(make_report(72.0), "csv").unwrap();

    let reloaded = HistoryStore::open(&path);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.entries()[0].report.vola_verdict_score, 72.0);
}
