use rust_decimal::Decimal;

/// Format an amount as forint for display: space-grouped thousands,
/// comma decimal separator, decimals only when the value has them.
/// e.g. `5000` → `"5 000 Ft"`, `-1234.5` → `"-1 234,50 Ft"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs().normalize();
    let formatted = if abs.scale() == 0 {
        format!("{abs}")
    } else {
        format!("{abs:.2}")
    };
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next();

    let grouped: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\u{a0}");

    let sign = if val < Decimal::ZERO { "-" } else { "" };
    match dec_part {
        Some(dec) => format!("{sign}{grouped},{dec} Ft"),
        None => format!("{sign}{grouped} Ft"),
    }
}

/// Parse user-entered amount text: trims whitespace, accepts a comma
/// decimal separator, rejects negatives. Returns None on anything that
/// is not a non-negative number.
pub(crate) fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().replace(',', ".");
    let amount: Decimal = cleaned.parse().ok()?;
    if amount < Decimal::ZERO {
        return None;
    }
    Some(amount)
}

/// Date shown in lists: `2024-06-15`.
pub(crate) fn format_date(date: chrono::NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page - 1);
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

/// Jump cursor to the top of a list.
pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

/// Jump cursor to the bottom of a list.
pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}
