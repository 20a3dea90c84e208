//! Reading, writing and editing a `.gitignore` file.
//!
//! [`IgnoreFile`] is the document source and sink for every command: it
//! resolves which file to work on, reads it as UTF-8 text and replaces its
//! content as a whole. Rule edits keep every untouched line verbatim.

use crate::core::{
    error::{GitignoreError, Result},
    git::find_repo_root,
    organizer::strip_bom,
};
use std::fs;
use std::path::{Path, PathBuf};

pub const IGNORE_FILE_NAME: &str = ".gitignore";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreFile {
    path: PathBuf,
    root: PathBuf,
}

impl IgnoreFile {
    pub fn new(path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            root: root.into(),
        }
    }

    /// Resolve the ignore file to operate on.
    ///
    /// An explicit `override_path` wins (relative paths are taken from
    /// `start_dir`). Otherwise the `.gitignore` at the root of the repository
    /// containing `start_dir` is used, falling back to `start_dir` itself when
    /// there is no repository.
    pub fn locate(start_dir: &Path, override_path: Option<&Path>) -> Self {
        let root = find_repo_root(start_dir).unwrap_or_else(|| start_dir.to_path_buf());

        let path = match override_path {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => start_dir.join(path),
            None => root.join(IGNORE_FILE_NAME),
        };

        log::debug!("Using ignore file {} (root {})", path.display(), root.display());
        Self::new(path, root)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that relative rule patterns are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the whole file without its byte order mark. A missing file reads
    /// as empty text.
    pub fn read(&self) -> Result<String> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("{} does not exist yet", self.path.display());
                return Ok(String::new());
            }
            Err(e) => return Err(GitignoreError::read_failed(&self.path, e)),
        };

        let text =
            String::from_utf8(bytes).map_err(|e| GitignoreError::invalid_input(e.utf8_error()))?;
        Ok(strip_bom(&text).to_string())
    }

    /// Replace the whole file content
    pub fn write(&self, text: &str) -> Result<()> {
        fs::write(&self.path, text).map_err(|e| GitignoreError::write_failed(&self.path, e))
    }

    /// Trimmed rule lines in file order, comments and blank lines excluded
    pub fn rules(&self) -> Result<Vec<String>> {
        Ok(self
            .read()?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }

    pub fn contains_rule(&self, pattern: &str) -> Result<bool> {
        let pattern = pattern.trim();
        Ok(self.rules()?.iter().any(|rule| rule == pattern))
    }

    /// Append `pattern` on its own line. Returns `false` when the rule is
    /// already present, in which case nothing is written.
    pub fn add_rule(&self, pattern: &str) -> Result<bool> {
        let pattern = validate_pattern(pattern)?;
        let mut content = self.read()?;

        if content.lines().any(|line| line.trim() == pattern) {
            log::debug!("Rule '{pattern}' already present");
            return Ok(false);
        }

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(pattern);
        content.push('\n');

        self.write(&content)?;
        Ok(true)
    }

    /// Remove every line whose trimmed text equals `pattern`. Returns the
    /// number of removed lines; the file is only rewritten when it changed.
    pub fn remove_rule(&self, pattern: &str) -> Result<usize> {
        let pattern = validate_pattern(pattern)?;
        let content = self.read()?;

        let mut removed = 0;
        let mut kept = String::with_capacity(content.len());
        for line in content.split_inclusive('\n') {
            if line.trim() == pattern {
                removed += 1;
            } else {
                kept.push_str(line);
            }
        }

        if removed > 0 {
            log::debug!("Removed {removed} line(s) matching '{pattern}'");
            self.write(&kept)?;
        }
        Ok(removed)
    }
}

fn validate_pattern(pattern: &str) -> Result<&str> {
    let trimmed = pattern.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.contains('\n') {
        return Err(GitignoreError::invalid_pattern(pattern));
    }
    Ok(trimmed)
}
