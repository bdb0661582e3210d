#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::AuditReport;

fn make_report(score: f64) -> AuditReport {
    AuditReport {
        burn_rate_percentage: 30.0,
        vola_verdict_score: score,
        asset_accumulation_summary: "None.".into(),
        detailed_reasoning: "Narrative.".into(),
        leakage_items: Vec::new(),
        category_spending: Vec::new(),
    }
}

fn temp_history() -> (tempfile::TempDir, HistoryStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::open(dir.path().join("history.json"));
    (dir, store)
}

// ── audit trigger ─────────────────────────────────────────────

#[test]
fn test_start_audit_empty_feed_fails_without_the_service() {
    let mut app = App::new();
    app.csv_text = String::new();
    app.start_audit();

    // No worker, no request: the guard fires before anything is built.
    assert!(!app.auditing);
    assert!(app.audit_rx.is_none());
    assert!(app.last_error.as_deref().unwrap().contains("empty"));
}

#[test]
fn test_start_audit_refused_while_in_flight() {
    let mut app = App::new();
    app.csv_text = SAMPLE_FEED.to_string();
    app.auditing = true;
    app.start_audit();

    assert!(app.audit_rx.is_none());
    assert_eq!(app.status_message, "Audit already in flight");
}

#[test]
fn test_start_audit_unparseable_feed_fails_without_the_service() {
    let mut app = App::new();
    app.csv_text = "date,description,category,amount\n2026-01-12,Starbucks,Coffee,lots\n".into();
    app.start_audit();

    assert!(!app.auditing);
    assert!(app.audit_rx.is_none());
    assert!(app.last_error.is_some());
}

// ── audit completion ──────────────────────────────────────────

#[test]
fn test_poll_audit_success_records_and_shows_report() {
    let (_dir, mut history) = temp_history();
    let mut app = App::new();
    app.csv_text = SAMPLE_FEED.to_string();

    let (tx, rx) = mpsc::channel();
    app.audit_rx = Some(rx);
    app.auditing = true;
    tx.send(Ok(make_report(72.0))).unwrap();

    app.poll_audit(&mut history);

    assert!(!app.auditing);
    assert!(app.audit_rx.is_none());
    assert_eq!(app.report.as_ref().unwrap().vola_verdict_score, 72.0);
    assert_eq!(app.screen, Screen::Audit);
    assert_eq!(history.len(), 1);
    assert_eq!(history.entries()[0].raw_csv, SAMPLE_FEED);
}

#[test]
fn test_poll_audit_failure_keeps_previous_report_and_history() {
    let (_dir, mut history) = temp_history();
    let mut app = App::new();
    let prior = make_report(55.0);
    app.report = Some(prior.clone());

    let (tx, rx) = mpsc::channel();
    app.audit_rx = Some(rx);
    app.auditing = true;
    tx.send(Err(AuditError::NoResponse)).unwrap();

    app.poll_audit(&mut history);

    assert!(!app.auditing);
    assert_eq!(app.report, Some(prior));
    assert!(app.last_error.is_some());
    assert!(history.is_empty());
}

#[test]
fn test_poll_audit_without_worker_is_a_no_op() {
    let (_dir, mut history) = temp_history();
    let mut app = App::new();
    app.poll_audit(&mut history);
    assert!(!app.auditing);
    assert!(app.last_error.is_none());
}

// ── feed loading ──────────────────────────────────────────────

#[test]
fn test_load_sample_feed() {
    let mut app = App::new();
    app.load_sample_feed();

    assert_eq!(app.transactions.len(), 8);
    assert_eq!(app.screen, Screen::Feed);
    assert_eq!(app.feed_step, FeedStep::Review);
}

#[test]
fn test_load_feed_file_read_failure_is_generic() {
    let mut app = App::new();
    app.load_feed_file(Path::new("/definitely/not/a/real/feed.csv"));
    assert_eq!(app.last_error.as_deref(), Some("Failed to read the file."));
    // The buffer is untouched by a failed read.
    assert!(app.csv_text.is_empty());
}

#[test]
fn test_load_feed_file_reads_and_parses() {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"date,description,category,amount\n2026-01-12,Starbucks,Coffee,-7.50\n")
        .unwrap();

    let mut app = App::new();
    app.load_feed_file(file.path());

    assert!(app.last_error.is_none());
    assert_eq!(app.transactions.len(), 1);
    assert_eq!(app.feed_step, FeedStep::Review);
}

// ── history reload ────────────────────────────────────────────

#[test]
fn test_load_history_entry_restores_everything() {
    let (_dir, mut history) = temp_history();
    history.record(make_report(64.0), SAMPLE_FEED).unwrap();
    let entry = history.entries()[0].clone();

    let mut app = App::new();
    app.load_history_entry(&entry);

    assert_eq!(app.report.as_ref().unwrap().vola_verdict_score, 64.0);
    assert_eq!(app.csv_text, SAMPLE_FEED);
    assert_eq!(app.transactions.len(), 8);
    assert_eq!(app.screen, Screen::Audit);
}
