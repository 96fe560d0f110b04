//! CSV reading for scan exports.
//!
//! The first record is always the header row. Data rows whose cells are all
//! blank after trimming are dropped; nothing else is coerced or validated.

use crate::error::{Result, ScanError};
use crate::types::Table;
use csv::ReaderBuilder;
use log::debug;
use std::io::Read;
use std::path::Path;

/// Read a scan export from `path`.
///
/// # Errors
/// `InputNotFound` when the path does not exist, `InputRead` when it cannot
/// be opened or decoded as UTF-8 CSV.
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(ScanError::InputNotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path)
        .map_err(|e| ScanError::InputRead { path: path.to_path_buf(), source: e.into() })?;

    let table = parse_table(file).map_err(|source| ScanError::InputRead { path: path.to_path_buf(), source })?;
    debug!("Read {} headers and {} rows from {:?}", table.headers.len(), table.rows.len(), path);
    Ok(table)
}

/// Parse CSV from any reader into a `Table`.
pub fn parse_table<R: Read>(reader: R) -> std::result::Result<Table, csv::Error> {
    let mut rdr = ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);

    let mut records = rdr.records();
    let headers = match records.next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => return Ok(Table::default()),
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        if is_blank_record(&record) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}

fn is_blank_record(record: &csv::StringRecord) -> bool {
    record.iter().all(|cell| cell.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_blank_rows_are_dropped() {
        let table = parse_table("a,b\n1,2\n,  \n3,4\n".as_bytes()).unwrap();

        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_header_row_is_unconditional() {
        // A blank-looking first line is still the header row
        let table = parse_table(" , \n1,2\n".as_bytes()).unwrap();

        assert_eq!(table.headers, vec![" ", " "]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_short_rows_are_kept() {
        let table = parse_table("Symbol,Price,Change\nAAPL,190\n".as_bytes()).unwrap();

        assert_eq!(table.rows, vec![vec!["AAPL", "190"]]);
    }

    #[test]
    fn test_quoted_cells_keep_commas() {
        let table = parse_table("Symbol,Volume\nAAPL,\"1,234,567\"\n".as_bytes()).unwrap();

        assert_eq!(table.rows[0][1], "1,234,567");
    }

    #[test]
    fn test_cells_are_not_trimmed() {
        let table = parse_table("a\n  x  \n".as_bytes()).unwrap();

        assert_eq!(table.rows[0][0], "  x  ");
    }

    #[test]
    fn test_empty_input() {
        let table = parse_table("".as_bytes()).unwrap();

        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_read_table_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scan.csv");
        fs::write(&path, "Symbol,Change %\nNVDA,+3.2%\n\nAMD,-1.1%\n").unwrap();

        let table = read_table(&path).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["AMD", "-1.1%"]);
    }

    #[test]
    fn test_missing_file_is_input_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.csv");

        match read_table(&path) {
            Err(ScanError::InputNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected InputNotFound, got {:?}", other),
        }
    }
}
