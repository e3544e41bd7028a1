//! # Photo Store
//!
//! Manages uploaded photo files under `<data_dir>/photos/`. The JSON records
//! reference these files by relative path (`photos/<filename>`), so the
//! store's job is to admit only known image types, to pick filenames that
//! cannot collide within or across submissions, and to clean up files whose
//! records drop them.
//!
//! Filenames are `<timestamp>_<index>_<sanitized original>`: the timestamp
//! has second resolution and the index is the file's position within its
//! submission, so two uploads can only collide by arriving in the same
//! second with the same index, which one submission never produces.

use crate::error::{ForkfulError, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

pub const PHOTOS_DIRNAME: &str = "photos";

/// Image types admitted by default; configurable via `photo-exts`.
pub const DEFAULT_PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

pub struct PhotoStore {
    root: PathBuf,
    allowed_exts: Vec<String>,
}

impl PhotoStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            allowed_exts: DEFAULT_PHOTO_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }

    pub fn with_allowed_exts(mut self, exts: &[String]) -> Self {
        if !exts.is_empty() {
            self.allowed_exts = exts
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect();
        }
        self
    }

    fn photos_dir(&self) -> PathBuf {
        self.root.join(PHOTOS_DIRNAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ForkfulError::Io)?;
        }
        Ok(())
    }

    /// True iff `filename` has an extension in the allow-set. The check is
    /// the original upload rule: at least one dot, last segment matched
    /// case-insensitively (so the dotfile `.jpg` counts as a jpg).
    pub fn is_allowed(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => self.allowed_exts.contains(&ext.to_lowercase()),
            None => false,
        }
    }

    /// Writes one uploaded file and returns its stored relative path.
    /// `index` is the file's position within the current submission.
    pub fn save(&self, bytes: &[u8], original_name: &str, index: usize) -> Result<String> {
        self.ensure_dir(&self.photos_dir())?;
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("{}_{}_{}", stamp, index, sanitize_filename(original_name));
        fs::write(self.photos_dir().join(&filename), bytes).map_err(ForkfulError::Io)?;
        Ok(format!("{}/{}", PHOTOS_DIRNAME, filename))
    }

    /// Removes the files behind `paths`. Best-effort: missing files and
    /// failed removals are ignored.
    pub fn delete<S: AsRef<str>>(&self, paths: &[S]) {
        for path in paths {
            let _ = fs::remove_file(self.root.join(path.as_ref()));
        }
    }

    pub fn exists(&self, path: &str) -> bool {
        self.root.join(path).exists()
    }

    pub fn read(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(self.root.join(path)).map_err(ForkfulError::Io)
    }

    /// All files currently in the photo directory, as stored relative
    /// paths, sorted. A missing directory reads as empty.
    pub fn list_files(&self) -> Result<Vec<String>> {
        let dir = self.photos_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(ForkfulError::Io)? {
            let entry = entry.map_err(ForkfulError::Io)?;
            if entry.file_type().map_err(ForkfulError::Io)?.is_file() {
                files.push(format!(
                    "{}/{}",
                    PHOTOS_DIRNAME,
                    entry.file_name().to_string_lossy()
                ));
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Reduces an uploaded filename to its last path component with anything
/// outside `[A-Za-z0-9._-]` mapped to `_`.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "photo".to_string()
    } else {
        cleaned
    }
}
