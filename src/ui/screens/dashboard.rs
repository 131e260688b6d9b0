use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::ledger::Ledger;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_date, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(5),    // Recent transactions
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_recent(f, chunks[1], app, ledger);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        "Balance",
        app.balance,
        if app.balance >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
        Some("all time".into()),
    );
    render_card(
        f,
        cards[1],
        "Income",
        app.monthly_income,
        theme::GREEN,
        Some("this month".into()),
    );
    render_card(
        f,
        cards[2],
        "Expenses",
        app.monthly_expenses,
        theme::RED,
        Some("this month".into()),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::panel_title_style()));

    let sub_text = subtitle.unwrap_or_default();

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sub_text, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Recent transactions ",
            theme::panel_title_style(),
        ));

    if ledger.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No transactions yet. Press a to add one",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let txns = ledger.transactions();
    let rows = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = app
        .view
        .iter()
        .take(rows)
        .filter_map(|&store_index| txns.get(store_index))
        .map(|txn| {
            let (sign, style) = if txn.is_income {
                ("+", theme::income_style())
            } else {
                ("-", theme::expense_style())
            };
            Line::from(vec![
                Span::styled(format!(" {} ", format_date(txn.date)), theme::dim_style()),
                Span::styled(format!("{} ", txn.category.glyph()), theme::normal_style()),
                Span::styled(
                    format!("{:<30}", truncate(&txn.title, 30)),
                    theme::normal_style(),
                ),
                Span::styled(format!("{sign}{}", format_amount(txn.amount)), style),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
