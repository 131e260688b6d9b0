use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// One recorded financial event. Fields are fixed at construction; a
/// transaction leaves the ledger only by explicit delete.
///
/// `amount` is a non-negative magnitude — the sign lives in `is_income`.
/// Callers validate the amount before construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub title: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDateTime,
    pub is_income: bool,
}

impl Transaction {
    pub fn new(
        title: String,
        amount: Decimal,
        category: Category,
        date: NaiveDateTime,
        is_income: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            amount,
            category,
            date,
            is_income,
        }
    }

    /// Amount with its balance sign applied: positive for income,
    /// negative for expenses.
    pub fn signed_amount(&self) -> Decimal {
        if self.is_income {
            self.amount
        } else {
            -self.amount
        }
    }
}
