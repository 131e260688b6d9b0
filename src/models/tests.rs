#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

fn noon(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_new_assigns_unique_ids() {
    let a = Transaction::new(
        "Coffee".into(),
        dec!(3.50),
        Category::Food,
        noon(2024, 1, 15),
        false,
    );
    let b = Transaction::new(
        "Coffee".into(),
        dec!(3.50),
        Category::Food,
        noon(2024, 1, 15),
        false,
    );
    assert_ne!(a.id, b.id);
}

#[test]
fn test_signed_amount() {
    let income = Transaction::new(
        "Paycheck".into(),
        dec!(200000),
        Category::Salary,
        noon(2024, 1, 31),
        true,
    );
    let expense = Transaction::new(
        "Groceries".into(),
        dec!(5000),
        Category::Food,
        noon(2024, 1, 31),
        false,
    );
    assert_eq!(income.signed_amount(), dec!(200000));
    assert_eq!(expense.signed_amount(), dec!(-5000));
}

#[test]
fn test_serialized_record_fields() {
    let txn = Transaction::new(
        "Bus pass".into(),
        dec!(9500),
        Category::Transport,
        noon(2024, 3, 1),
        false,
    );
    let value = serde_json::to_value(&txn).unwrap();
    assert_eq!(value["title"], "Bus pass");
    assert_eq!(value["category"], "transport");
    assert_eq!(value["is_income"], false);
    assert_eq!(value["id"], txn.id.to_string());
    // Category serializes as its canonical key, not its label
    assert_ne!(value["category"], "Transport");
}

#[test]
fn test_transaction_roundtrip() {
    let txn = Transaction::new(
        "Cinema".into(),
        dec!(4200.50),
        Category::Entertainment,
        noon(2023, 12, 24),
        false,
    );
    let json = serde_json::to_string(&txn).unwrap();
    let back: Transaction = serde_json::from_str(&json).unwrap();
    assert_eq!(back, txn);
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_canonical_keys() {
    let keys: Vec<String> = Category::all()
        .iter()
        .map(|c| {
            serde_json::to_value(c)
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap()
        })
        .collect();
    assert_eq!(
        keys,
        vec![
            "food",
            "transport",
            "entertainment",
            "shopping",
            "salary",
            "other"
        ]
    );
}

#[test]
fn test_category_key_roundtrip() {
    for cat in Category::all() {
        let json = serde_json::to_string(cat).unwrap();
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, *cat);
    }
}

#[test]
fn test_category_all() {
    let all = Category::all();
    assert_eq!(all.len(), 6);
    assert!(all.contains(&Category::Salary));
    assert!(all.contains(&Category::Other));
}

#[test]
fn test_category_metadata() {
    assert_eq!(Category::Food.label(), "Food");
    assert_eq!(Category::Food.glyph(), "🍕");
    assert_eq!(format!("{}", Category::Salary), "Salary");
    for cat in Category::all() {
        assert!(!cat.glyph().is_empty());
        assert!(!cat.label().is_empty());
    }
}

#[test]
fn test_category_unknown_key_fails_decode() {
    let err = serde_json::from_str::<Category>("\"housing\"");
    assert!(err.is_err());
}
