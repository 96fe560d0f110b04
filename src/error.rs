//! Error types for scan-publish

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scan-publish run
#[derive(Error, Debug)]
pub enum ScanError {
    /// Input CSV does not exist
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input CSV exists but could not be read or decoded
    #[error("failed to read input '{}': {source}", .path.display())]
    InputRead { path: PathBuf, source: csv::Error },

    /// --date was not a YYYY-MM-DD calendar date
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Settings file missing or malformed
    #[error("config error in '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Existing manifest is not valid JSON of the expected shape
    #[error("failed to parse manifest '{}': {source}", .path.display())]
    ManifestParse { path: PathBuf, source: serde_json::Error },

    /// A version-control step failed
    #[error("git {step} failed: {detail}")]
    Vcs { step: &'static str, detail: String },
}

pub type Result<T> = std::result::Result<T, ScanError>;
