/// Configuration resolution module
///
/// This module handles:
/// - Loading the optional TOML settings file
/// - Merging it with CLI arguments (CLI wins)
/// - Resolving the scan date, site paths and formatter columns
use crate::cli::CliArgs;
use crate::error::{Result, ScanError};
use crate::format::LARGE_NUMBER_COLUMNS;
use crate::types::{ScanMetadata, SortOrder};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "scan-publish.toml";
pub const DEFAULT_SITE_ROOT: &str = "site";
pub const SCANS_DIR_NAME: &str = "scans";
pub const DEFAULT_COMMIT_PREFIX: &str = "Add scan";

/// Settings file contents; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub site_root: Option<PathBuf>,
    pub order: Option<SortOrder>,
    pub large_number_columns: Option<Vec<String>>,
    pub site_url: Option<String>,
    pub commit_prefix: Option<String>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub sort_column: Option<String>,
    pub order: SortOrder,
    pub large_number_columns: Vec<String>,
    /// Present when --publish was given
    pub publish: Option<PublishConfig>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishConfig {
    pub site_root: PathBuf,
    pub scans_dir: PathBuf,
    pub meta: ScanMetadata,
    pub push: bool,
    pub commit_prefix: String,
    pub site_url: Option<String>,
}

/// Build the run configuration from CLI arguments and the settings file
pub fn build_run_config(args: &CliArgs) -> Result<RunConfig> {
    let file = load_file_config(args.config.as_deref())?;
    resolve(args, file, today())
}

/// Merge CLI arguments over file settings. `today` is used when --date is absent.
pub fn resolve(args: &CliArgs, file: FileConfig, today: String) -> Result<RunConfig> {
    let order = args.order.or(file.order).unwrap_or_default();

    let large_number_columns = file
        .large_number_columns
        .unwrap_or_else(|| LARGE_NUMBER_COLUMNS.iter().map(|c| c.to_string()).collect());

    let publish = if args.publish {
        let date = match args.date {
            Some(ref date) => {
                chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ScanError::InvalidDate(date.clone()))?;
                date.clone()
            }
            None => today,
        };

        let site_root = args
            .site_root
            .clone()
            .or(file.site_root)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT));
        let scans_dir = site_root.join(SCANS_DIR_NAME);

        Some(PublishConfig {
            site_root,
            scans_dir,
            meta: ScanMetadata {
                date,
                name: args.name.clone(),
                title: args.title.clone(),
                tags: args.tags.clone(),
            },
            push: args.push,
            commit_prefix: file.commit_prefix.unwrap_or_else(|| DEFAULT_COMMIT_PREFIX.to_string()),
            site_url: file.site_url,
        })
    } else {
        None
    };

    debug!("Resolved order={} publish={}", order.as_str(), publish.is_some());

    Ok(RunConfig {
        input: args.input.clone(),
        sort_column: args.sort.clone(),
        order,
        large_number_columns,
        publish,
    })
}

/// Local calendar date as YYYY-MM-DD
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Load settings: an explicit path must exist; default locations are optional
pub fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ScanError::Config { path: path.to_path_buf(), message: "file not found".to_string() });
        }
        return parse_file_config(path);
    }

    for candidate in default_config_paths() {
        if candidate.is_file() {
            return parse_file_config(&candidate);
        }
    }

    debug!("No settings file found, using defaults");
    Ok(FileConfig::default())
}

/// `./scan-publish.toml`, then `<config dir>/scan-publish/config.toml`
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("scan-publish").join("config.toml"));
    }
    paths
}

fn parse_file_config(path: &Path) -> Result<FileConfig> {
    debug!("Loading settings from {:?}", path);
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ScanError::Config { path: path.to_path_buf(), message: e.to_string() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
