#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_strips_leading_plus() {
    assert_eq!(parse_amount("+2500.00").unwrap(), dec!(2500.00));
}

#[test]
fn test_parse_amount_negative() {
    assert_eq!(parse_amount("-45.20").unwrap(), dec!(-45.20));
}

#[test]
fn test_parse_amount_plain() {
    assert_eq!(parse_amount("7.50").unwrap(), dec!(7.50));
    assert_eq!(parse_amount("42").unwrap(), dec!(42));
}

#[test]
fn test_parse_amount_empty_defaults_to_zero() {
    assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
    assert_eq!(parse_amount("  ").unwrap(), Decimal::ZERO);
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert!(parse_amount("twelve").is_err());
}

#[test]
fn test_parse_amount_rejects_currency_symbols() {
    // Currency symbols and thousands separators are deliberately unhandled.
    assert!(parse_amount("$1,200.00").is_err());
}

// ── CsvFeed::parse ────────────────────────────────────────────

#[test]
fn test_parse_yields_one_transaction_per_data_row() {
    let raw = "date,description,category,amount\n\
               2026-01-12,Starbucks,Coffee,-7.50\n\
               2026-01-13,Uber Eats,Dining,-45.20\n\
               2026-01-15,Direct Deposit,Income,+2500.00\n";
    let txns = CsvFeed::parse(raw).unwrap();
    assert_eq!(txns.len(), 3);
    assert_eq!(txns[0].description, "Starbucks");
    assert_eq!(txns[1].description, "Uber Eats");
    assert_eq!(txns[2].description, "Direct Deposit");
}

#[test]
fn test_parse_headers_are_case_insensitive() {
    let raw = "Date,Description,Category,Amount\n2026-01-12,Starbucks,Coffee,-7.50\n";
    let txns = CsvFeed::parse(raw).unwrap();
    assert_eq!(txns[0].date, "2026-01-12");
    assert_eq!(txns[0].category, "Coffee");
    assert_eq!(txns[0].amount, dec!(-7.50));
}

#[test]
fn test_parse_maps_columns_by_header_name_not_position() {
    let raw = "amount,date,description,category\n-7.50,2026-01-12,Starbucks,Coffee\n";
    let txns = CsvFeed::parse(raw).unwrap();
    assert_eq!(txns[0].amount, dec!(-7.50));
    assert_eq!(txns[0].description, "Starbucks");
}

#[test]
fn test_parse_missing_header_leaves_field_empty() {
    // No category column: not an error, the field stays at its default.
    let raw = "date,description,amount\n2026-01-12,Starbucks,-7.50\n";
    let txns = CsvFeed::parse(raw).unwrap();
    assert_eq!(txns[0].category, "");
    assert_eq!(txns[0].amount, dec!(-7.50));
}

#[test]
fn test_parse_misspelled_amount_header_defaults_to_zero() {
    let raw = "date,description,category,amt\n2026-01-12,Starbucks,Coffee,-7.50\n";
    let txns = CsvFeed::parse(raw).unwrap();
    assert_eq!(txns[0].amount, Decimal::ZERO);
}

#[test]
fn test_parse_skips_blank_rows() {
    let raw = "date,description,category,amount\n\
               2026-01-12,Starbucks,Coffee,-7.50\n\
               ,,,\n\
               2026-01-13,Uber Eats,Dining,-45.20\n";
    let txns = CsvFeed::parse(raw).unwrap();
    assert_eq!(txns.len(), 2);
}

#[test]
fn test_parse_quoted_field_with_embedded_comma() {
    let raw = "date,description,category,amount\n2026-01-12,\"Starbucks, Reserve\",Coffee,-7.50\n";
    let txns = CsvFeed::parse(raw).unwrap();
    assert_eq!(txns[0].description, "Starbucks, Reserve");
}

#[test]
fn test_parse_bad_amount_reports_row_number() {
    let raw = "date,description,category,amount\n\
               2026-01-12,Starbucks,Coffee,-7.50\n\
               2026-01-13,Uber Eats,Dining,lots\n";
    let err = CsvFeed::parse(raw).unwrap_err();
    assert!(format!("{err:#}").contains("Row 2"));
}

#[test]
fn test_parse_header_only_yields_nothing() {
    let txns = CsvFeed::parse("date,description,category,amount\n").unwrap();
    assert!(txns.is_empty());
}

#[test]
fn test_parse_short_row_leaves_missing_fields_empty() {
    let raw = "date,description,category,amount\n2026-01-12,Starbucks\n";
    let txns = CsvFeed::parse(raw).unwrap();
    assert_eq!(txns[0].description, "Starbucks");
    assert_eq!(txns[0].category, "");
    assert_eq!(txns[0].amount, Decimal::ZERO);
}

// ── sample feed ───────────────────────────────────────────────

#[test]
fn test_sample_feed_parses_to_eight_rows() {
    let txns = CsvFeed::parse(SAMPLE_FEED).unwrap();
    assert_eq!(txns.len(), 8);

    let deposit = txns.iter().find(|t| t.description == "Direct Deposit").unwrap();
    assert_eq!(deposit.amount, dec!(2500.00));
    assert!(deposit.is_income());

    let coffee = txns.iter().find(|t| t.description == "Starbucks").unwrap();
    assert_eq!(coffee.amount, dec!(-7.50));
    assert!(coffee.is_expense());

    assert_eq!(txns.iter().filter(|t| t.is_expense()).count(), 7);
}
