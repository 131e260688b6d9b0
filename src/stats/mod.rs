use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::Transaction;

/// All-time balance: the sum of signed amounts over every transaction.
pub(crate) fn total_balance(transactions: &[Transaction]) -> Decimal {
    transactions.iter().map(|t| t.signed_amount()).sum()
}

/// Income total for the calendar month of `reference`.
pub(crate) fn monthly_income(transactions: &[Transaction], reference: NaiveDateTime) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_income && in_month(t.date, reference))
        .map(|t| t.amount)
        .sum()
}

/// Expense total for the calendar month of `reference`.
pub(crate) fn monthly_expenses(transactions: &[Transaction], reference: NaiveDateTime) -> Decimal {
    transactions
        .iter()
        .filter(|t| !t.is_income && in_month(t.date, reference))
        .map(|t| t.amount)
        .sum()
}

/// Same calendar month and year, by component equality. Not a rolling
/// 30-day window.
fn in_month(date: NaiveDateTime, reference: NaiveDateTime) -> bool {
    date.month() == reference.month() && date.year() == reference.year()
}
