/// Version-control publishing
///
/// This module handles:
/// - Staging, committing and pushing published scans
/// - Getting the short commit hash for the status line
use crate::error::{Result, ScanError};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The three steps a publish needs from version control
pub trait VersionControl {
    fn stage(&self, paths: &[&Path]) -> Result<()>;
    fn commit(&self, message: &str) -> Result<()>;
    fn push(&self) -> Result<()>;
}

/// Stage `scans_dir`, commit, and push. Stops at the first failing step;
/// nothing already written or committed is rolled back.
pub fn notify(vcs: &dyn VersionControl, scans_dir: &Path, message: &str) -> Result<()> {
    vcs.stage(&[scans_dir])?;
    vcs.commit(message)?;
    vcs.push()
}

/// Commit message for a published scan
pub fn commit_message(prefix: &str, scan_id: &str) -> String {
    format!("{}: {}", prefix, scan_id)
}

/// `git` on the PATH, run from a working directory inside the repository
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self { workdir: workdir.into() }
    }

    fn run(&self, step: &'static str, args: &[&str]) -> Result<()> {
        debug!("Running git {} in {:?}", args.join(" "), self.workdir);

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| ScanError::Vcs { step, detail: format!("failed to execute git: {}", e) })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let code = output.status.code().map(|c| c.to_string()).unwrap_or_else(|| "signal".to_string());
        Err(ScanError::Vcs { step, detail: format!("exit status {}: {}", code, stderr.trim()) })
    }

    /// Get the short git commit hash (7 characters)
    pub fn head_hash(&self) -> Option<String> {
        Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .current_dir(&self.workdir)
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| String::from_utf8(output.stdout).ok())
            .map(|s| s.trim().to_string())
    }
}

impl VersionControl for GitCli {
    fn stage(&self, paths: &[&Path]) -> Result<()> {
        let paths: Vec<String> = paths.iter().map(|p| p.to_string_lossy().into_owned()).collect();
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(|p| p.as_str()));
        self.run("add", &args)
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run("commit", &["commit", "-m", message])
    }

    fn push(&self) -> Result<()> {
        self.run("push", &["push"])
    }
}
