/// Core data structures for scan tables and the site manifest
///
/// This module defines the value objects that flow through the pipeline:
/// the parsed table, sort direction, publish metadata, and the manifest
/// persisted next to the published scans.

/// A parsed scan export: header row plus data rows, all cells as strings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    /// Rows may be shorter than `headers`; missing cells read as empty
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of the first header equal to `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Header for column `index`, empty for cells past the header row
    pub fn header_at(&self, index: usize) -> &str {
        self.headers.get(index).map(|h| h.as_str()).unwrap_or("")
    }
}

/// Sort direction for `--order`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// User-supplied metadata for a publish
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanMetadata {
    /// YYYY-MM-DD
    pub date: String,
    pub name: Option<String>,
    pub title: Option<String>,
    /// Raw comma-separated tag list as given on the command line
    pub tags: Option<String>,
}

impl ScanMetadata {
    /// Scan identifier: the date, suffixed with `-name` when a name is set
    pub fn scan_id(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => format!("{}-{}", self.date, name),
            _ => self.date.clone(),
        }
    }
}

/// One published scan as recorded in the manifest
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScanEntry {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub file: String,

    /// Fields written by other tools, carried through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Index of all published scans, kept sorted ascending by date
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub scans: Vec<ScanEntry>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Manifest {
    /// Replace any entry with the same id, append `entry`, and re-sort by date.
    ///
    /// The sort is stable, so scans sharing a date keep their relative order.
    pub fn upsert(&mut self, entry: ScanEntry) {
        self.scans.retain(|s| s.id != entry.id);
        self.scans.push(entry);
        self.scans.sort_by(|a, b| a.date.cmp(&b.date));
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
