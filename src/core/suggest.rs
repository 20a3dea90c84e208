//! Filesystem-backed completion of partially typed ignore patterns.
//!
//! Given the text typed so far (for example `src/gen`), [`suggest`] lists the
//! directory part (`src/`) and keeps the entries whose name starts with the
//! remainder (`gen`).

use crate::core::error::{GitignoreError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    pub name: String,
    pub is_directory: bool,
}

impl PathEntry {
    /// Full text to insert for this entry, directories ending with `/`
    pub fn completion(&self, dir_part: &str) -> String {
        let mut text = format!("{dir_part}{}", self.name);
        if self.is_directory {
            text.push('/');
        }
        text
    }
}

/// Split typed text into the directory part (up to and including the last
/// `/`) and the name prefix after it
pub fn split_partial(partial: &str) -> (&str, &str) {
    match partial.rfind('/') {
        Some(index) => partial.split_at(index + 1),
        None => ("", partial),
    }
}

/// Entries of the directory named by `partial`, relative to `root`, whose name
/// starts with the typed prefix. Directories come first, then files, each
/// group ordered by name. `.git` is never suggested, and a directory part
/// containing `..` is rejected so listings stay inside `root`.
pub fn suggest(root: &Path, partial: &str) -> Result<Vec<PathEntry>> {
    let (dir_part, prefix) = split_partial(partial);
    let relative = Path::new(dir_part.trim_start_matches('/'));
    if relative
        .components()
        .any(|component| matches!(component, Component::ParentDir))
    {
        return Err(GitignoreError::path_outside_repository(
            root.join(relative),
            root,
        ));
    }
    let directory = root.join(relative);

    if !directory.is_dir() {
        log::debug!("Nothing to suggest in {}", directory.display());
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(&directory)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == ".git" || !name.starts_with(prefix) {
            continue;
        }

        // Follow symlinks so a link to a directory completes like one
        let is_directory = entry.path().is_dir();
        entries.push(PathEntry { name, is_directory });
    }

    entries.sort_by(|a, b| {
        b.is_directory
            .cmp(&a.is_directory)
            .then_with(|| a.name.cmp(&b.name))
    });

    log::debug!(
        "{} suggestion(s) for '{partial}' in {}",
        entries.len(),
        directory.display()
    );
    Ok(entries)
}
