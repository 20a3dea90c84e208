//! Git repository discovery.
//!
//! This module wraps the `git2` library to answer the two questions the rest of
//! gitignore-manager has about the surrounding repository: where its working
//! directory is (so the right `.gitignore` is edited) and whether git already
//! ignores a given path.
//!
//! # Public API
//! - [`GitRepo`]: Discovered repository handle
//! - [`find_repo_root`]: Working directory containing a path, if any

use crate::core::error::Result;
use git2::Repository;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discover the repository containing `path`, searching parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// Working directory of the repository, `None` for bare repositories
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Whether git's ignore rules currently match `relative_path`
    pub fn is_ignored(&self, relative_path: &Path) -> Result<bool> {
        Ok(self.repo.is_path_ignored(relative_path)?)
    }
}

/// Working directory of the repository containing `start`
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    match GitRepo::open(start) {
        Ok(repo) => repo.workdir().map(Path::to_path_buf),
        Err(e) => {
            log::debug!("No git repository found from {}: {e}", start.display());
            None
        }
    }
}
