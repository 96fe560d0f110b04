//! HTML table rendering for scan results.
//!
//! Body cells are formatted through [`CellFormatter`] and tagged with a
//! `positive`/`negative` class derived from the raw (unformatted) value.

use crate::format::CellFormatter;
use crate::types::Table;

/// Qualitative class attached to a body cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    Positive,
    Negative,
}

impl CellClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellClass::Positive => "positive",
            CellClass::Negative => "negative",
        }
    }

    /// Classify a raw cell value. Never fails; unrecognised text gets no class.
    pub fn classify(raw: &str) -> Option<CellClass> {
        let value = raw.trim();
        if value.starts_with('+') || is_positive_plain_number(value) {
            Some(CellClass::Positive)
        } else if value.starts_with('-') {
            Some(CellClass::Negative)
        } else {
            None
        }
    }
}

/// Unsigned digits with optional dots and percent signs, strictly above zero
fn is_positive_plain_number(value: &str) -> bool {
    let digits_only = value.chars().filter(|c| *c != '.' && *c != '%').collect::<String>();
    if digits_only.is_empty() || !digits_only.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    value.replace('%', "").parse::<f64>().map(|n| n > 0.0).unwrap_or(false)
}

/// Render `table` as an indented `<table>` fragment.
///
/// Short rows are padded with empty cells up to the header count.
pub fn render_table(table: &Table, formatter: &CellFormatter) -> String {
    let mut html = vec!["<table>".to_string()];

    html.push("  <thead>".to_string());
    html.push("    <tr>".to_string());
    for header in &table.headers {
        html.push(format!("      <th>{}</th>", sanitize(header)));
    }
    html.push("    </tr>".to_string());
    html.push("  </thead>".to_string());

    html.push("  <tbody>".to_string());
    for row in &table.rows {
        html.push("    <tr>".to_string());
        let width = row.len().max(table.headers.len());
        for i in 0..width {
            let raw = row.get(i).map(|c| c.as_str()).unwrap_or("");
            html.push(render_cell(raw, table.header_at(i), formatter));
        }
        html.push("    </tr>".to_string());
    }
    html.push("  </tbody>".to_string());

    html.push("</table>".to_string());
    html.join("\n")
}

fn render_cell(raw: &str, header: &str, formatter: &CellFormatter) -> String {
    let display = formatter.format_cell(raw, header);
    match CellClass::classify(raw) {
        Some(class) => format!("      <td class=\"{}\">{}</td>", class.as_str(), sanitize(&display)),
        None => format!("      <td>{}</td>", sanitize(&display)),
    }
}

/// Escape HTML special characters
fn sanitize(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '<' => "&lt;".chars().collect(),
            '>' => "&gt;".chars().collect(),
            '&' => "&amp;".chars().collect(),
            '"' => "&quot;".chars().collect(),
            _ => vec![c],
        })
        .collect()
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
