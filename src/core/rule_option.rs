//! Rule choices offered when adding a path to the ignore file.
//!
//! For a given file or directory the user can ignore exactly that path, every
//! file sharing its extension, or type a pattern of their own.

use crate::core::error::{GitignoreError, Result};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOption {
    /// Ignore exactly this path, relative to the repository root
    Specific(String),
    /// Ignore every file with this extension, as `*.ext`
    Extension(String),
    /// Let the user type the pattern
    Custom,
}

impl RuleOption {
    /// Options for `path` in the order they are presented: specific path,
    /// extension (files with an extension only), custom.
    pub fn options_for(path: &Path, root: &Path) -> Result<Vec<RuleOption>> {
        let absolute = resolve(path, root);
        let mut options = vec![RuleOption::Specific(specific_pattern(&absolute, root)?)];

        if !absolute.is_dir() {
            if let Some(pattern) = extension_pattern(path) {
                options.push(RuleOption::Extension(pattern));
            }
        }

        options.push(RuleOption::Custom);
        Ok(options)
    }

    pub fn pattern(&self) -> Option<&str> {
        match self {
            RuleOption::Specific(pattern) | RuleOption::Extension(pattern) => Some(pattern),
            RuleOption::Custom => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            RuleOption::Specific(pattern) => format!("Ignore this path ({pattern})"),
            RuleOption::Extension(pattern) => format!("Ignore all files like this ({pattern})"),
            RuleOption::Custom => "Custom pattern...".to_string(),
        }
    }
}

/// Path of `path` relative to `root` with `/` separators. Directories get a
/// trailing `/` so the rule only matches directories.
pub fn specific_pattern(path: &Path, root: &Path) -> Result<String> {
    let absolute = resolve(path, root);
    let relative = strip_root(&absolute, root)
        .ok_or_else(|| GitignoreError::path_outside_repository(&absolute, root))?;

    let mut parts: Vec<String> = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.pop().is_none() {
                    return Err(GitignoreError::path_outside_repository(&absolute, root));
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(GitignoreError::path_outside_repository(&absolute, root));
            }
        }
    }

    if parts.is_empty() {
        return Err(GitignoreError::invalid_pattern(path.to_string_lossy()));
    }

    let mut pattern = parts.join("/");
    if absolute.is_dir() {
        pattern.push('/');
    }
    Ok(pattern)
}

/// `*.ext` for a file name with an extension
pub fn extension_pattern(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?;
    if extension.is_empty() {
        return None;
    }
    Some(format!("*.{extension}"))
}

fn resolve(path: &Path, root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn strip_root<'a>(path: &'a Path, root: &Path) -> Option<&'a Path> {
    if let Ok(relative) = path.strip_prefix(root) {
        return Some(relative);
    }

    // The root reported by git may be canonical while the path is not
    let canonical_root = root.canonicalize().ok()?;
    path.strip_prefix(&canonical_root).ok()
}
