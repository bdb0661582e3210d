#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

// ── formatting ────────────────────────────────────────────────

#[test]
fn test_format_amount_positive() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-45.20)), "-$45.20");
}

#[test]
fn test_format_amount_small() {
    assert_eq!(format_amount(dec!(7.5)), "$7.50");
}

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(63.25), "63.2%");
    assert_eq!(format_percent(0.0), "0.0%");
}

#[test]
fn test_format_score() {
    assert_eq!(format_score(48.4), "48");
    assert_eq!(format_score(99.6), "100");
}

// ── scroll helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_and_follows() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (9, 7);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!(index, 9);
}

#[test]
fn test_scroll_up_follows() {
    let (mut index, mut scroll) = (5, 5);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 4);
    assert_eq!(scroll, 4);
}

#[test]
fn test_scroll_to_top_and_bottom() {
    let (mut index, mut scroll) = (5, 4);
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));

    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!(index, 9);
    assert_eq!(scroll, 6);
}

#[test]
fn test_scroll_to_bottom_empty_list() {
    let (mut index, mut scroll) = (3, 2);
    scroll_to_bottom(&mut index, &mut scroll, 0, 4);
    // Unchanged: nothing to land on.
    assert_eq!((index, scroll), (3, 2));
}
