//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitignoreError`] which covers every failure mode of
//! gitignore-manager. It uses `thiserror` for ergonomic error definitions and
//! includes constructor helpers for the common failure scenarios.
//!
//! # Public API
//! - [`GitignoreError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitignoreError>`
//!
//! # Error Categories
//! - **Input**: Non-UTF-8 ignore files, blank or malformed patterns
//! - **File operations**: I/O errors, paths outside the repository
//! - **Rule edits**: Rules that cannot be found for removal
//! - **Configuration**: Missing config directory, unreadable config files
//! - **Interaction**: Invalid menu selections

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for gitignore-manager
#[derive(Error, Debug)]
pub enum GitignoreError {
    // Input errors
    #[error("Invalid input: ignore file content is not valid UTF-8 ({source})")]
    InvalidInput { source: std::str::Utf8Error },

    #[error("Invalid pattern: '{pattern}'")]
    InvalidPattern { pattern: String },

    // Git repository errors
    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    // File operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Path '{path}' is outside the repository root '{root}'")]
    PathOutsideRepository { path: PathBuf, root: PathBuf },

    // Rule edit errors
    #[error("Rule not found in ignore file: {pattern}")]
    RuleNotFound { pattern: String },

    #[error("No rules or paths provided")]
    NothingToAdd,

    #[error("No ignore file found at {path}")]
    IgnoreFileNotFound { path: PathBuf },

    #[error("{path} is not organized. Run 'gitignore-manager sort' to fix it.")]
    NotOrganized { path: PathBuf },

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Interaction errors
    #[error("Invalid selection: '{input}'. Enter a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitignoreError
pub type Result<T> = std::result::Result<T, GitignoreError>;

impl GitignoreError {
    /// Create an invalid input error from a UTF-8 decoding failure
    pub fn invalid_input(source: std::str::Utf8Error) -> Self {
        Self::InvalidInput { source }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
        }
    }

    /// Create a read failed error
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a write failed error
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a path outside repository error
    pub fn path_outside_repository(path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self::PathOutsideRepository {
            path: path.into(),
            root: root.into(),
        }
    }

    /// Create a rule not found error
    pub fn rule_not_found(pattern: impl Into<String>) -> Self {
        Self::RuleNotFound {
            pattern: pattern.into(),
        }
    }

    /// Create an ignore file not found error
    pub fn ignore_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::IgnoreFileNotFound { path: path.into() }
    }

    /// Create a not organized error
    pub fn not_organized(path: impl Into<PathBuf>) -> Self {
        Self::NotOrganized { path: path.into() }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid selection error
    pub fn invalid_selection(input: impl Into<String>, max: usize) -> Self {
        Self::InvalidSelection {
            input: input.into(),
            max,
        }
    }
}
