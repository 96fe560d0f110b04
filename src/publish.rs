/// Publishing rendered scans into the site
///
/// This module handles:
/// - Writing `<scans>/<id>.html`
/// - Building the manifest entry (title and tag defaults)
/// - Read-modify-write of `<scans>/manifest.json` under an exclusive lock
use crate::error::{Result, ScanError};
use crate::types::{Manifest, ScanEntry, ScanMetadata};
use fs2::FileExt;
use log::debug;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const LOCK_FILE: &str = "manifest.json.lock";
const GITIGNORE_FILE: &str = ".gitignore";
const DEFAULT_TITLE: &str = "Daily Scan";

/// Where a publish wrote its artifacts
#[derive(Debug, Clone, PartialEq)]
pub struct PublishReceipt {
    pub scan_id: String,
    pub html_path: PathBuf,
    pub manifest_path: PathBuf,
}

/// Write the rendered table and record it in the manifest.
///
/// `scans_dir` is created (with parents) if missing. The HTML file is written
/// before the manifest is touched; a manifest failure leaves the HTML behind.
pub fn publish(scans_dir: &Path, html: &str, meta: &ScanMetadata) -> Result<PublishReceipt> {
    fs::create_dir_all(scans_dir)?;

    let entry = build_entry(meta);
    let html_path = scans_dir.join(&entry.file);
    fs::write(&html_path, html)?;
    debug!("Wrote {} bytes to {:?}", html.len(), html_path);

    let store = ManifestStore::new(scans_dir);
    let scan_id = entry.id.clone();
    store.upsert(entry)?;

    Ok(PublishReceipt { scan_id, html_path, manifest_path: store.path().to_path_buf() })
}

/// Build the manifest entry for a publish, applying title and tag defaults
pub fn build_entry(meta: &ScanMetadata) -> ScanEntry {
    let id = meta.scan_id();
    let name = meta.name.clone().unwrap_or_default();

    let title = match meta.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ if !name.is_empty() => title_case(&name),
        _ => DEFAULT_TITLE.to_string(),
    };

    ScanEntry {
        file: format!("{}.html", id),
        id,
        date: meta.date.clone(),
        name,
        title,
        tags: meta.tags.as_deref().map(parse_tags).unwrap_or_default(),
        extra: serde_json::Map::new(),
    }
}

/// Split a comma-separated tag list, trimming each tag. Empty segments are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|t| t.trim().to_string()).collect()
}

/// Capitalise the first letter of each word: `pre-market gaps` -> `Pre-Market Gaps`
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// The manifest file in a scans directory, with load/upsert/save
///
/// `upsert` holds an exclusive advisory lock for the whole read-modify-write
/// and replaces the manifest by atomic rename, so concurrent publishers are
/// serialised rather than last-writer-wins. The lock file sits next to the
/// manifest and is listed in the scans directory's `.gitignore`.
pub struct ManifestStore {
    dir: PathBuf,
    path: PathBuf,
}

impl ManifestStore {
    pub fn new(scans_dir: &Path) -> Self {
        Self { dir: scans_dir.to_path_buf(), path: scans_dir.join(MANIFEST_FILE) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the manifest; a missing file is an empty manifest
    pub fn load(&self) -> Result<Manifest> {
        if !self.path.exists() {
            debug!("No manifest at {:?}, starting empty", self.path);
            return Ok(Manifest::default());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|source| ScanError::ManifestParse { path: self.path.clone(), source })
    }

    /// Rewrite the manifest in full with 2-space indentation
    pub fn save(&self, manifest: &Manifest) -> Result<()> {
        let mut tmp = self.temp_file()?;
        serde_json::to_writer_pretty(&mut tmp, manifest).map_err(std::io::Error::from)?;
        tmp.write_all(b"\n")?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| ScanError::Io(e.error))?;
        debug!("Saved manifest with {} scans to {:?}", manifest.scans.len(), self.path);
        Ok(())
    }

    /// Replace-or-insert `entry` by id and persist, under the manifest lock
    pub fn upsert(&self, entry: ScanEntry) -> Result<Manifest> {
        let _lock = self.lock()?;

        let mut manifest = self.load()?;
        debug!("Upserting scan {} into manifest of {} scans", entry.id, manifest.scans.len());
        manifest.upsert(entry);
        self.save(&manifest)?;
        Ok(manifest)
    }

    /// Temp file for the next manifest, with the mode the manifest should end up with
    fn temp_file(&self) -> Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(".manifest");
        // Created through open(2), so the umask applies as it does for the HTML file
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let tmp = builder.tempfile_in(&self.dir)?;

        if let Ok(existing) = fs::metadata(&self.path) {
            tmp.as_file().set_permissions(existing.permissions())?;
        }
        Ok(tmp)
    }

    fn lock(&self) -> Result<ManifestLock> {
        let lock_path = self.dir.join(LOCK_FILE);
        debug!("Locking manifest via {:?}", lock_path);
        let file = OpenOptions::new().create(true).truncate(false).write(true).open(&lock_path)?;
        file.lock_exclusive()?;
        self.ignore_lock_file()?;
        Ok(ManifestLock { file })
    }

    /// Make sure `git add <scans>` never stages the lock file
    fn ignore_lock_file(&self) -> Result<()> {
        let path = self.dir.join(GITIGNORE_FILE);
        let existing = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };
        if existing.lines().any(|line| line.trim() == LOCK_FILE) {
            return Ok(());
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        if !existing.is_empty() && !existing.ends_with('\n') {
            writeln!(file)?;
        }
        writeln!(file, "{}", LOCK_FILE)?;
        debug!("Added {} to {:?}", LOCK_FILE, path);
        Ok(())
    }
}

/// Released on drop
struct ManifestLock {
    file: File,
}

impl Drop for ManifestLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
#[path = "publish_test.rs"]
mod publish_test;
