use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::text::{Line, Span};
use std::borrow::Cow;

const COLUMN_GAP: &str = "  ";

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// Return the width of every column, measured over the header and all rows.
///
pub fn column_widths(headers: &[&str], rows: &[Vec<Cow<str>>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
    for row in rows {
        for (i, value) in row.iter().enumerate() {
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(width(value)),
                None => widths.push(width(value)),
            }
        }
    }
    widths
}

/// Render a table as aligned lines: header, separator, then one line per row.
///
pub fn table_lines(headers: &[&str], rows: &[Vec<Cow<str>>], theme: &Theme) -> Vec<Line<'static>> {
    let widths = column_widths(headers, rows);
    let mut lines = Vec::with_capacity(rows.len() + 2);

    let header: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| pad(headers.get(i).copied().unwrap_or(""), *w))
        .collect();
    lines.push(Line::from(Span::styled(
        header.join(COLUMN_GAP),
        styling::table_header_style(theme),
    )));

    let total = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
    lines.push(Line::from(Span::styled(
        "─".repeat(total),
        styling::table_rule_style(theme),
    )));

    for row in rows {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| pad(row.get(i).map(|v| v.as_ref()).unwrap_or(""), *w))
            .collect();
        lines.push(Line::from(Span::styled(
            cells.join(COLUMN_GAP).trim_end().to_string(),
            styling::normal_text_style(theme),
        )));
    }

    lines
}
