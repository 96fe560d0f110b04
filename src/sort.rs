//! Row ordering by a named column.
//!
//! Cells are turned into a [`SortKey`]: a number when the text parses after
//! stripping `$`, thousands separators, a `K`/`M`/`B` magnitude suffix or a
//! trailing `%`, and the trimmed text otherwise.
//!
//! Numeric keys always sort ahead of text keys, in both directions, so
//! placeholders like `N/A` collect at the bottom of the table. Within each
//! group the requested direction applies. Equal keys keep input order.

use crate::types::{SortOrder, Table};
use crate::ui;
use log::debug;
use std::cmp::Ordering;

/// Derived sort key for a single cell
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    pub fn from_cell(cell: &str) -> SortKey {
        let trimmed = cell.trim();
        match parse_scaled_number(trimmed) {
            Some(n) => SortKey::Number(n),
            None => SortKey::Text(trimmed.to_string()),
        }
    }

    /// Compare two keys under `order`; numbers stay ahead of text either way
    pub fn compare(&self, other: &SortKey, order: SortOrder) -> Ordering {
        let natural = match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => return Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => return Ordering::Greater,
        };
        match order {
            SortOrder::Asc => natural,
            SortOrder::Desc => natural.reverse(),
        }
    }
}

/// Parse `$1,234.5K`-style text into a number. Non-finite results are rejected.
pub fn parse_scaled_number(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != '$' && *c != ',').collect();

    let (digits, multiplier) = if let Some(rest) = cleaned.strip_suffix('K') {
        (rest, 1e3)
    } else if let Some(rest) = cleaned.strip_suffix('M') {
        (rest, 1e6)
    } else if let Some(rest) = cleaned.strip_suffix('B') {
        (rest, 1e9)
    } else if let Some(rest) = cleaned.strip_suffix('%') {
        (rest, 1.0)
    } else {
        (cleaned.as_str(), 1.0)
    };

    let value = digits.trim().parse::<f64>().ok()? * multiplier;
    value.is_finite().then_some(value)
}

/// What `sort_rows` did with the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// No sort column requested
    Unsorted,
    Sorted,
    /// Column absent from the header row; rows left as they were
    ColumnNotFound,
}

/// Sort `table.rows` in place by `column`.
///
/// An unknown column prints a warning and leaves the rows untouched. Rows too
/// short to reach the column sort with an empty text key.
pub fn sort_rows(table: &mut Table, column: Option<&str>, order: SortOrder) -> SortOutcome {
    let Some(column) = column else {
        return SortOutcome::Unsorted;
    };

    let Some(index) = table.column_index(column) else {
        ui::warning(&format!("Column '{}' not found, skipping sort", column));
        return SortOutcome::ColumnNotFound;
    };

    debug!("Sorting {} rows by column {} ('{}') {}", table.rows.len(), index, column, order.as_str());

    let mut keyed: Vec<(SortKey, Vec<String>)> = std::mem::take(&mut table.rows)
        .into_iter()
        .map(|row| {
            let key = row.get(index).map(|c| SortKey::from_cell(c)).unwrap_or(SortKey::Text(String::new()));
            (key, row)
        })
        .collect();

    // sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| a.compare(b, order));

    table.rows = keyed.into_iter().map(|(_, row)| row).collect();
    SortOutcome::Sorted
}

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;
