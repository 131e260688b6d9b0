use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, AddForm, InputMode, PendingAction, Screen};
use crate::ledger::Ledger;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit LedgerTUI", cmd_quit, r);
    register_command!("quit", "Quit LedgerTUI", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("a", "Add a transaction", cmd_add, r);
    register_command!("add", "Add a transaction", cmd_add, r);
    register_command!(
        "delete-txn",
        "Delete selected transaction(s)",
        cmd_delete_txn,
        r
    );
    register_command!(
        "clear-selection",
        "Clear transaction selection",
        cmd_clear_selection,
        r
    );
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, ledger)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Put the delete targets up for confirmation. Shared between the `D`
/// key and `:delete-txn`.
pub(crate) fn request_delete(app: &mut App, ledger: &Ledger) {
    let indices = app.delete_targets(ledger);
    if indices.is_empty() {
        app.set_status("Nothing to delete");
        return;
    }

    app.confirm_message = if indices.len() == 1 {
        let title = indices
            .first()
            .and_then(|&i| ledger.transactions().get(i))
            .map(|t| t.title.clone())
            .unwrap_or_default();
        format!("Delete '{title}'? This cannot be undone.")
    } else {
        format!("Delete {} transactions? This cannot be undone.", indices.len())
    };
    app.pending_action = Some(PendingAction::DeleteTransactions { indices });
    app.input_mode = InputMode::Confirm;
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh(ledger);
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    app.refresh(ledger);
    Ok(())
}

fn cmd_add(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.form = AddForm::new();
    app.screen = Screen::Add;
    Ok(())
}

fn cmd_delete_txn(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    request_delete(app, ledger);
    Ok(())
}

fn cmd_clear_selection(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    let count = app.selected.len();
    app.selected.clear();
    app.set_status(format!("Cleared {count} selected"));
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}
