//! Display formatting for scan cells.
//!
//! Only "large-number" columns are touched: values of magnitude 1000 or more
//! become abbreviated currency (`1234567` -> `$1.23M`). Anything that already
//! starts with `$` or ends with `%` passes through, so formatting is idempotent.

/// Headers (lowercase) whose values are rendered as abbreviated currency
pub const LARGE_NUMBER_COLUMNS: &[&str] = &["daily liquidity", "liquidity", "volume", "avg volume", "market cap"];

const SCALES: &[(f64, &str)] = &[(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Formats cells for display, keyed by column header
#[derive(Debug, Clone)]
pub struct CellFormatter {
    large_number_columns: Vec<String>,
}

impl Default for CellFormatter {
    fn default() -> Self {
        Self::new(LARGE_NUMBER_COLUMNS.iter().map(|c| c.to_string()))
    }
}

impl CellFormatter {
    /// Build a formatter for the given large-number headers (matched case-insensitively)
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { large_number_columns: columns.into_iter().map(|c| c.as_ref().trim().to_lowercase()).collect() }
    }

    pub fn is_large_number_column(&self, header: &str) -> bool {
        let header = header.trim().to_lowercase();
        self.large_number_columns.iter().any(|c| *c == header)
    }

    /// Format one cell for display. Surrounding whitespace is dropped.
    pub fn format_cell(&self, cell: &str, header: &str) -> String {
        let value = cell.trim();

        if value.is_empty() || value.starts_with('$') || value.ends_with('%') {
            return value.to_string();
        }

        if !self.is_large_number_column(header) {
            return value.to_string();
        }

        match parse_plain_number(value) {
            Some(num) if num.abs() >= 1_000.0 => format_currency(num),
            _ => value.to_string(),
        }
    }
}

/// Parse a plain number, ignoring thousands separators
fn parse_plain_number(value: &str) -> Option<f64> {
    let num = value.replace(',', "").parse::<f64>().ok()?;
    num.is_finite().then_some(num)
}

/// Abbreviated currency with two decimals: `$1.23B`, `$4.50M`, `$12.00K`, `$999.00`.
///
/// Negative amounts keep the sign ahead of the dollar sign (`-$1.50M`).
pub fn format_currency(num: f64) -> String {
    let sign = if num < 0.0 { "-" } else { "" };
    let magnitude = num.abs();

    for (scale, suffix) in SCALES {
        if magnitude >= *scale {
            return format!("{}${:.2}{}", sign, magnitude / scale, suffix);
        }
    }
    format!("{}${:.2}", sign, magnitude)
}
