#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;
use crate::models::Category;

fn noon(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn txn(title: &str, amount: rust_decimal::Decimal, is_income: bool) -> Transaction {
    Transaction::new(
        title.into(),
        amount,
        if is_income {
            Category::Salary
        } else {
            Category::Food
        },
        noon(2024, 6, 15),
        is_income,
    )
}

fn empty_ledger() -> Ledger {
    Ledger::load(KvStore::open_in_memory().unwrap())
}

fn titles(ledger: &Ledger) -> Vec<&str> {
    ledger
        .transactions()
        .iter()
        .map(|t| t.title.as_str())
        .collect()
}

// ── Add ───────────────────────────────────────────────────────

#[test]
fn test_add_grows_ledger() {
    let mut ledger = empty_ledger();
    assert!(ledger.is_empty());

    for i in 0..5 {
        ledger.add(txn(&format!("t{i}"), dec!(10), false));
        assert_eq!(ledger.len(), i + 1);
    }
}

#[test]
fn test_added_transactions_retrievable_by_id() {
    let mut ledger = empty_ledger();
    let a = txn("A", dec!(1), false);
    let b = txn("B", dec!(2), true);
    let (id_a, id_b) = (a.id, b.id);
    ledger.add(a);
    ledger.add(b);

    assert_eq!(ledger.get(id_a).unwrap().title, "A");
    assert_eq!(ledger.get(id_b).unwrap().title, "B");
    assert_eq!(ledger.get(uuid::Uuid::new_v4()), None);
}

#[test]
fn test_add_keeps_insertion_order() {
    let mut ledger = empty_ledger();
    // Deliberately out of date order: storage order is add order
    ledger.add(Transaction::new(
        "newer".into(),
        dec!(1),
        Category::Other,
        noon(2024, 6, 20),
        false,
    ));
    ledger.add(Transaction::new(
        "older".into(),
        dec!(1),
        Category::Other,
        noon(2024, 6, 1),
        false,
    ));
    assert_eq!(titles(&ledger), vec!["newer", "older"]);
}

#[test]
fn test_add_does_not_dedup() {
    let mut ledger = empty_ledger();
    ledger.add(txn("same", dec!(5), false));
    ledger.add(txn("same", dec!(5), false));
    assert_eq!(ledger.len(), 2);
}

// ── Delete ────────────────────────────────────────────────────

#[test]
fn test_delete_single_preserves_order() {
    let mut ledger = empty_ledger();
    for name in ["a", "b", "c", "d"] {
        ledger.add(txn(name, dec!(1), false));
    }

    ledger.delete(&BTreeSet::from([1]));
    assert_eq!(titles(&ledger), vec!["a", "c", "d"]);
}

#[test]
fn test_delete_multiple_in_one_pass() {
    let mut ledger = empty_ledger();
    for name in ["a", "b", "c", "d", "e"] {
        ledger.add(txn(name, dec!(1), false));
    }

    // Positions refer to the order before the call, for every member
    ledger.delete(&BTreeSet::from([0, 2, 4]));
    assert_eq!(titles(&ledger), vec!["b", "d"]);
}

#[test]
fn test_delete_out_of_range_ignored() {
    let mut ledger = empty_ledger();
    ledger.add(txn("only", dec!(1), false));

    ledger.delete(&BTreeSet::from([5, 99]));
    assert_eq!(ledger.len(), 1);

    ledger.delete(&BTreeSet::from([0, 7]));
    assert!(ledger.is_empty());
}

#[test]
fn test_delete_empty_set_is_noop() {
    let mut ledger = empty_ledger();
    ledger.add(txn("keep", dec!(1), false));
    ledger.delete(&BTreeSet::new());
    assert_eq!(ledger.len(), 1);
}

// ── Persistence ───────────────────────────────────────────────

#[test]
fn test_save_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.db");

    let saved = {
        let mut ledger = Ledger::load(KvStore::open(&path).unwrap());
        ledger.add(txn("Groceries", dec!(5000), false));
        ledger.add(txn("Paycheck", dec!(200000), true));
        ledger.transactions().to_vec()
    };

    let ledger = Ledger::load(KvStore::open(&path).unwrap());
    assert_eq!(ledger.transactions(), saved.as_slice());
}

#[test]
fn test_delete_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.db");

    {
        let mut ledger = Ledger::load(KvStore::open(&path).unwrap());
        ledger.add(txn("gone", dec!(1), false));
        ledger.add(txn("kept", dec!(2), false));
        ledger.delete(&BTreeSet::from([0]));
    }

    let ledger = Ledger::load(KvStore::open(&path).unwrap());
    assert_eq!(titles(&ledger), vec!["kept"]);
}

#[test]
fn test_missing_blob_loads_empty() {
    let ledger = empty_ledger();
    assert!(ledger.is_empty());
}

#[test]
fn test_corrupt_blob_loads_empty() {
    let store = KvStore::open_in_memory().unwrap();
    store.set(LEDGER_KEY, b"{ not json").unwrap();
    let ledger = Ledger::load(store);
    assert!(ledger.is_empty());
}

#[test]
fn test_empty_blob_loads_empty() {
    let store = KvStore::open_in_memory().unwrap();
    store.set(LEDGER_KEY, b"").unwrap();
    let ledger = Ledger::load(store);
    assert!(ledger.is_empty());
}

#[test]
fn test_incompatible_blob_loads_empty() {
    let store = KvStore::open_in_memory().unwrap();
    // Valid JSON, wrong shape: whole decode fails, nothing partial kept
    store
        .set(
            LEDGER_KEY,
            br#"[{"title": "half a record"}, {"unrelated": true}]"#,
        )
        .unwrap();
    let ledger = Ledger::load(store);
    assert!(ledger.is_empty());
}

#[test]
fn test_mutation_after_failed_load_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.db");

    {
        let store = KvStore::open(&path).unwrap();
        store.set(LEDGER_KEY, b"garbage").unwrap();
        let mut ledger = Ledger::load(store);
        assert!(ledger.is_empty());
        // First mutation overwrites the corrupt blob wholesale
        ledger.add(txn("fresh", dec!(1), false));
    }

    let ledger = Ledger::load(KvStore::open(&path).unwrap());
    assert_eq!(titles(&ledger), vec!["fresh"]);
}

// ── End-to-end scenario ───────────────────────────────────────

#[test]
fn test_groceries_and_paycheck_scenario() {
    let today = noon(2024, 6, 15);
    let mut ledger = empty_ledger();

    let groceries = Transaction::new("Groceries".into(), dec!(5000), Category::Food, today, false);
    let groceries_id = groceries.id;
    ledger.add(groceries);
    ledger.add(Transaction::new(
        "Paycheck".into(),
        dec!(200000),
        Category::Salary,
        today,
        true,
    ));

    let txns = ledger.transactions();
    assert_eq!(crate::stats::total_balance(txns), dec!(195000));
    assert_eq!(crate::stats::monthly_income(txns, today), dec!(200000));
    assert_eq!(crate::stats::monthly_expenses(txns, today), dec!(5000));

    let position = txns
        .iter()
        .position(|t| t.id == groceries_id)
        .unwrap();
    ledger.delete(&BTreeSet::from([position]));

    assert_eq!(
        crate::stats::monthly_expenses(ledger.transactions(), today),
        dec!(0)
    );
}
