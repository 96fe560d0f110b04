use crate::types::SortOrder;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "scan-publish")]
#[command(about = "Convert a stock-scan CSV into an HTML table and optionally publish it to the site")]
#[command(version)]
pub struct CliArgs {
    /// Input CSV file (first line is the header row)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Save the scan to <site-root>/scans/ and update the manifest.
    /// Without this flag the HTML is printed to stdout and no files are touched
    #[arg(long)]
    pub publish: bool,

    /// Override the scan date (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    /// Scan name, appended to the identifier (e.g. "momentum", "semis")
    #[arg(long)]
    pub name: Option<String>,

    /// Custom title (default: the capitalised name, or "Daily Scan")
    #[arg(long)]
    pub title: Option<String>,

    /// Comma-separated tags (e.g. "momentum,growth")
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// Git add, commit, and push after publishing
    #[arg(long)]
    pub push: bool,

    /// Column to sort by (exact header text)
    #[arg(long, value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Sort order (default: desc, or the config file's `order`)
    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,

    /// Root of the static site; scans are written to <site-root>/scans/
    #[arg(long, value_name = "DIR")]
    pub site_root: Option<PathBuf>,

    /// TOML settings file (default: ./scan-publish.toml, then the user config dir)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();

        // Treat empty strings like absent flags
        for field in [&mut args.name, &mut args.title, &mut args.tags, &mut args.sort] {
            if field.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *field = None;
            }
        }

        args
    }

    /// Validate argument combinations (--date is checked when the config is resolved)
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref name) = self.name {
            if name.contains('/') || name.contains('\\') {
                return Err(format!("Invalid --name '{}': must not contain path separators", name));
            }
        }

        Ok(())
    }

    /// --push only has an effect together with --publish
    pub fn push_without_publish(&self) -> bool {
        self.push && !self.publish
    }
}
