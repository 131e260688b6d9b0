use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ledger::Ledger;
use crate::ui::app::{
    App, AddForm, InputMode, PendingAction, Screen, ADD_FIELD_AMOUNT, ADD_FIELD_CATEGORY,
    ADD_FIELD_COUNT, ADD_FIELD_DATE, ADD_FIELD_INCOME, ADD_FIELD_TITLE,
};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(ledger: &mut Ledger) -> Result<()> {
    let mut app = App::new();
    app.refresh(ledger);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, ledger);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &mut Ledger,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // 1 tab + 1 status + 1 cmd + 2 borders + 1 header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app, ledger);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, ledger)?,
                InputMode::Command => handle_command_input(key, app, ledger)?,
                InputMode::Confirm => handle_confirm_input(key, app, ledger),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    // The add form owns the keyboard while it is open
    if app.screen == Screen::Add {
        handle_add_input(key, app, ledger);
        return Ok(());
    }

    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                move_up(app);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => move_down(app),
        KeyCode::Char('k') | KeyCode::Up => move_up(app),
        KeyCode::Char('1') => switch_screen(app, ledger, Screen::Dashboard),
        KeyCode::Char('2') => switch_screen(app, ledger, Screen::Transactions),
        KeyCode::Char('3') | KeyCode::Char('a') => switch_screen(app, ledger, Screen::Add),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, ledger, screens[next]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, ledger, screens[prev]);
        }
        KeyCode::Char('g') => {
            if app.screen == Screen::Transactions {
                scroll_to_top(&mut app.cursor, &mut app.scroll);
            }
        }
        KeyCode::Char('G') => {
            if app.screen == Screen::Transactions {
                scroll_to_bottom(
                    &mut app.cursor,
                    &mut app.scroll,
                    app.view.len(),
                    app.visible_rows.max(1),
                );
            }
        }
        KeyCode::Char(' ') if app.screen == Screen::Transactions => {
            app.toggle_selected(ledger);
            move_down(app);
        }
        KeyCode::Char('D') if app.screen == Screen::Transactions => {
            commands::request_delete(app, ledger);
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
            app.selected.clear();
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, ledger)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                match action {
                    PendingAction::DeleteTransactions { indices } => {
                        let count = indices.len();
                        ledger.delete(&indices);
                        app.selected.clear();
                        app.refresh(ledger);
                        app.set_status(if count == 1 {
                            "Deleted 1 transaction".to_string()
                        } else {
                            format!("Deleted {count} transactions")
                        });
                    }
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            // Any other key = cancel
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
}

fn handle_add_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Esc => {
            app.screen = Screen::Transactions;
            app.refresh(ledger);
            app.set_status("Add cancelled");
        }
        KeyCode::Enter => match app.form.build() {
            Ok(txn) => {
                let title = txn.title.clone();
                ledger.add(txn);
                app.form = AddForm::new();
                app.screen = Screen::Transactions;
                app.refresh(ledger);
                app.set_status(format!("Added: {title}"));
            }
            Err(msg) => app.set_status(msg),
        },
        KeyCode::Tab | KeyCode::Down => {
            app.form.field = (app.form.field + 1) % ADD_FIELD_COUNT;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.field = (app.form.field + ADD_FIELD_COUNT - 1) % ADD_FIELD_COUNT;
        }
        KeyCode::Left => match app.form.field {
            ADD_FIELD_CATEGORY => app.form.cycle_category(-1),
            ADD_FIELD_INCOME => app.form.is_income = !app.form.is_income,
            _ => {}
        },
        KeyCode::Right => match app.form.field {
            ADD_FIELD_CATEGORY => app.form.cycle_category(1),
            ADD_FIELD_INCOME => app.form.is_income = !app.form.is_income,
            _ => {}
        },
        KeyCode::Backspace => match app.form.field {
            ADD_FIELD_TITLE => {
                app.form.title.pop();
            }
            ADD_FIELD_AMOUNT => {
                app.form.amount.pop();
            }
            ADD_FIELD_DATE => {
                app.form.date.pop();
            }
            _ => {}
        },
        KeyCode::Char(' ') if app.form.field == ADD_FIELD_INCOME => {
            app.form.is_income = !app.form.is_income;
        }
        KeyCode::Char(c) => match app.form.field {
            ADD_FIELD_TITLE => app.form.title.push(c),
            ADD_FIELD_AMOUNT => app.form.amount.push(c),
            ADD_FIELD_DATE => app.form.date.push(c),
            _ => {}
        },
        _ => {}
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, ledger: &Ledger, screen: Screen) {
    if screen == Screen::Add && app.screen != Screen::Add {
        app.form = AddForm::new();
    }
    app.screen = screen;
    app.refresh(ledger);
}

fn move_down(app: &mut App) {
    if app.screen == Screen::Transactions {
        scroll_down(
            &mut app.cursor,
            &mut app.scroll,
            app.view.len(),
            app.visible_rows.max(1),
        );
    }
}

fn move_up(app: &mut App) {
    if app.screen == Screen::Transactions {
        scroll_up(&mut app.cursor, &mut app.scroll);
    }
}
