use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ledger::Ledger;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_date, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    if ledger.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add the first one",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Transactions (0) ",
                theme::panel_title_style(),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Title", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let txns = ledger.transactions();
    let has_selections = !app.selected.is_empty();

    let rows: Vec<Row> = app
        .view
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(area.height.saturating_sub(3) as usize)
        .filter_map(|(row, &store_index)| txns.get(store_index).map(|t| (row, t)))
        .map(|(row, txn)| {
            let is_selected = app.selected.contains(&txn.id);
            let is_cursor = row == app.cursor;

            let amount_style = if txn.is_income {
                theme::income_style()
            } else {
                theme::expense_style()
            };
            let sign = if txn.is_income { "+" } else { "-" };
            let amount_str = format!("{sign}{}", format_amount(txn.amount));

            let date_cell = if is_selected {
                format!("\u{2022} {}", format_date(txn.date))
            } else {
                format!("  {}", format_date(txn.date))
            };

            let style = if is_cursor && is_selected {
                Style::default().fg(theme::HEADER_BG).bg(theme::YELLOW)
            } else if is_cursor {
                theme::selected_style()
            } else if is_selected {
                Style::default().fg(theme::YELLOW)
            } else if row % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(date_cell),
                Cell::from(truncate(&txn.title, 40)),
                Cell::from(format!("{} {}", txn.category.glyph(), txn.category.label())),
                Cell::from(Span::styled(amount_str, amount_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(18),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(
                    " Transactions ({}) {}",
                    ledger.len(),
                    if has_selections {
                        format!("[{} selected] ", app.selected.len())
                    } else {
                        String::new()
                    }
                ),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
