//! Shared setup for commands that operate on an ignore file.
//!
//! Every command needs the directory it was started from and the resolved
//! [`IgnoreFile`]; [`CommandContext::initialize`] gathers both so commands do
//! not repeat the lookup.

use crate::core::{error::Result, ignore_file::IgnoreFile};
use std::env;
use std::path::{Path, PathBuf};

pub struct CommandContext {
    pub current_dir: PathBuf,
    pub ignore_file: IgnoreFile,
}

impl CommandContext {
    /// Resolve the ignore file from the process working directory
    pub fn initialize(file_override: Option<&Path>) -> Result<Self> {
        let current_dir = env::current_dir()?;
        Ok(Self::from_dir(current_dir, file_override))
    }

    pub fn from_dir(current_dir: PathBuf, file_override: Option<&Path>) -> Self {
        let ignore_file = IgnoreFile::locate(&current_dir, file_override);
        Self {
            current_dir,
            ignore_file,
        }
    }

    /// `path` as given on the command line, made absolute against the
    /// working directory
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        let absolute = self.current_dir.join(path);
        absolute.canonicalize().unwrap_or(absolute)
    }

    /// Repository root (or working directory), canonicalized when possible
    pub fn root(&self) -> PathBuf {
        let root = self.ignore_file.root();
        root.canonicalize().unwrap_or_else(|_| root.to_path_buf())
    }
}
