use std::collections::{BTreeSet, HashSet};

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ledger::Ledger;
use crate::models::{Category, Transaction};
use crate::stats;
use crate::ui::util::parse_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Add,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Transactions, Self::Add]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Add => write!(f, "Add"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    /// Store-order positions, already mapped from the displayed rows.
    DeleteTransactions { indices: BTreeSet<usize> },
}

/// Fields of the add-transaction form, navigated by index.
pub(crate) const ADD_FIELD_TITLE: usize = 0;
pub(crate) const ADD_FIELD_AMOUNT: usize = 1;
pub(crate) const ADD_FIELD_CATEGORY: usize = 2;
pub(crate) const ADD_FIELD_DATE: usize = 3;
pub(crate) const ADD_FIELD_INCOME: usize = 4;
pub(crate) const ADD_FIELD_COUNT: usize = 5;

/// Draft state of the add-transaction form. Holds raw text; nothing is
/// handed to the ledger until `build` validates the whole draft.
pub(crate) struct AddForm {
    pub(crate) title: String,
    pub(crate) amount: String,
    pub(crate) category_index: usize,
    pub(crate) date: String,
    pub(crate) is_income: bool,
    pub(crate) field: usize,
}

impl AddForm {
    pub(crate) fn new() -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category_index: 0,
            date: Local::now().format("%Y-%m-%d").to_string(),
            is_income: false,
            field: ADD_FIELD_TITLE,
        }
    }

    pub(crate) fn category(&self) -> Category {
        Category::all()[self.category_index % Category::all().len()]
    }

    pub(crate) fn cycle_category(&mut self, delta: i32) {
        let len = Category::all().len();
        self.category_index = if delta >= 0 {
            (self.category_index + 1) % len
        } else {
            (self.category_index + len - 1) % len
        };
    }

    /// Validate the draft and construct the transaction. All input
    /// checking lives here; the ledger trusts what it is given.
    pub(crate) fn build(&self) -> Result<Transaction, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title must not be empty".into());
        }
        let amount =
            parse_amount(&self.amount).ok_or_else(|| "Amount must be a non-negative number".to_string())?;
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Date must be YYYY-MM-DD".to_string())?;

        Ok(Transaction::new(
            title.to_string(),
            amount,
            self.category(),
            date.and_time(Local::now().time()),
            self.is_income,
        ))
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Dashboard aggregates, recomputed on every refresh
    pub(crate) balance: Decimal,
    pub(crate) monthly_income: Decimal,
    pub(crate) monthly_expenses: Decimal,

    // Transactions screen: display row -> store index, date-descending
    pub(crate) view: Vec<usize>,
    pub(crate) cursor: usize,
    pub(crate) scroll: usize,
    pub(crate) selected: HashSet<Uuid>,

    // Add form
    pub(crate) form: AddForm,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            balance: Decimal::ZERO,
            monthly_income: Decimal::ZERO,
            monthly_expenses: Decimal::ZERO,

            view: Vec::new(),
            cursor: 0,
            scroll: 0,
            selected: HashSet::new(),

            form: AddForm::new(),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Recompute aggregates and rebuild the display mapping from the
    /// ledger snapshot. Called after every mutation and screen switch.
    pub(crate) fn refresh(&mut self, ledger: &Ledger) {
        let now = Local::now().naive_local();
        let txns = ledger.transactions();

        self.balance = stats::total_balance(txns);
        self.monthly_income = stats::monthly_income(txns, now);
        self.monthly_expenses = stats::monthly_expenses(txns, now);

        let mut view: Vec<usize> = (0..txns.len()).collect();
        view.sort_by(|&a, &b| txns[b].date.cmp(&txns[a].date));
        self.view = view;

        self.selected.retain(|id| ledger.get(*id).is_some());
        if self.cursor >= self.view.len() {
            self.cursor = self.view.len().saturating_sub(1);
        }
        if self.scroll > self.cursor {
            self.scroll = self.cursor;
        }
    }

    /// The transaction under the cursor, as a store index.
    pub(crate) fn cursor_store_index(&self) -> Option<usize> {
        self.view.get(self.cursor).copied()
    }

    /// Store indices to delete: the multi-selection if there is one,
    /// otherwise the cursor row. Display rows map through `view`.
    pub(crate) fn delete_targets(&self, ledger: &Ledger) -> BTreeSet<usize> {
        if self.selected.is_empty() {
            return self.cursor_store_index().into_iter().collect();
        }
        ledger
            .transactions()
            .iter()
            .enumerate()
            .filter(|(_, t)| self.selected.contains(&t.id))
            .map(|(i, _)| i)
            .collect()
    }

    pub(crate) fn toggle_selected(&mut self, ledger: &Ledger) {
        if let Some(store_index) = self.cursor_store_index() {
            if let Some(txn) = ledger.transactions().get(store_index) {
                if !self.selected.remove(&txn.id) {
                    self.selected.insert(txn.id);
                }
            }
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
