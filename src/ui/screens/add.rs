use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{
    App, ADD_FIELD_AMOUNT, ADD_FIELD_CATEGORY, ADD_FIELD_COUNT, ADD_FIELD_DATE, ADD_FIELD_INCOME,
    ADD_FIELD_TITLE,
};
use crate::ui::theme;

const LABELS: [&str; ADD_FIELD_COUNT] = ["Title", "Amount", "Category", "Date", "Type"];

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;

    let mut lines: Vec<Line> = vec![Line::from("")];
    for field in 0..ADD_FIELD_COUNT {
        let focused = field == form.field;
        let marker = if focused { "\u{25b8} " } else { "  " };
        let label = format!("{:<10}", LABELS[field]);

        let value = match field {
            ADD_FIELD_TITLE => form.title.clone(),
            ADD_FIELD_AMOUNT => form.amount.clone(),
            ADD_FIELD_CATEGORY => {
                format!("{} {}", form.category().glyph(), form.category().label())
            }
            ADD_FIELD_DATE => form.date.clone(),
            ADD_FIELD_INCOME => if form.is_income { "Income" } else { "Expense" }.to_string(),
            _ => String::new(),
        };

        let value_style = match field {
            ADD_FIELD_INCOME if form.is_income => theme::income_style(),
            ADD_FIELD_INCOME => theme::expense_style(),
            _ if focused => Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            _ => theme::normal_style(),
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{marker}{label}"),
                if focused {
                    Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    theme::dim_style()
                },
            ),
            Span::styled(value, value_style),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Tab/\u{2191}/\u{2193} move \u{2502} \u{2190}/\u{2192} change category or type \u{2502} Enter save \u{2502} Esc cancel",
        theme::dim_style(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" New transaction ", theme::panel_title_style()));

    f.render_widget(Paragraph::new(lines).block(block), area);

    // Terminal cursor at the end of the focused text field
    let cursor_col = match form.field {
        ADD_FIELD_TITLE => Some(form.title.chars().count()),
        ADD_FIELD_AMOUNT => Some(form.amount.chars().count()),
        ADD_FIELD_DATE => Some(form.date.chars().count()),
        _ => None,
    };
    if let Some(col) = cursor_col {
        let x = area.x + 1 + 2 + 10 + col as u16;
        let y = area.y + 2 + (form.field as u16) * 2;
        if x < area.right() && y < area.bottom() {
            f.set_cursor_position((x, y));
        }
    }
}
