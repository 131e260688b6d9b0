#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_whole() {
    assert_eq!(format_amount(dec!(0)), "0 Ft");
    assert_eq!(format_amount(dec!(5000)), "5\u{a0}000 Ft");
    assert_eq!(format_amount(dec!(200000)), "200\u{a0}000 Ft");
    assert_eq!(format_amount(dec!(1234567)), "1\u{a0}234\u{a0}567 Ft");
}

#[test]
fn test_format_amount_fractional() {
    assert_eq!(format_amount(dec!(1234.5)), "1\u{a0}234,50 Ft");
    assert_eq!(format_amount(dec!(0.99)), "0,99 Ft");
}

#[test]
fn test_format_amount_trailing_zeros_dropped() {
    assert_eq!(format_amount(dec!(5000.00)), "5\u{a0}000 Ft");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-15000)), "-15\u{a0}000 Ft");
    assert_eq!(format_amount(dec!(-0.50)), "-0,50 Ft");
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_plain() {
    assert_eq!(parse_amount("5000"), Some(dec!(5000)));
    assert_eq!(parse_amount(" 42.99 "), Some(dec!(42.99)));
    assert_eq!(parse_amount("0"), Some(Decimal::ZERO));
}

#[test]
fn test_parse_amount_comma_separator() {
    assert_eq!(parse_amount("42,99"), Some(dec!(42.99)));
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("12.3.4"), None);
    assert_eq!(parse_amount("12 000"), None);
}

#[test]
fn test_parse_amount_rejects_negative() {
    assert_eq!(parse_amount("-5"), None);
    assert_eq!(parse_amount("-0.01"), None);
}

// ── format_date ───────────────────────────────────────────────

#[test]
fn test_format_date() {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 5)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    assert_eq!(format_date(date), "2024-06-05");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 8), "hello w…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("árvíztűrő tükörfúrógép", 9), "árvíztűr…");
}

// ── scroll helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_and_scrolls() {
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
fn test_scroll_up_clamps_at_zero() {
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_to_top_and_bottom() {
    let (mut index, mut scroll) = (5, 4);
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));

    scroll_to_bottom(&mut index, &mut scroll, 10, 3);
    assert_eq!(index, 9);
    assert_eq!(scroll, 7);
}
