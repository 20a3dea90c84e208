//! Temporary repository setup and command helpers
//!
//! Provides functions for creating test repositories with files and ignore
//! rules, and for running the gitignore-manager binary inside them.

#![allow(dead_code)]

use assert_cmd::Command;
use gitignore_manager::core::error::{GitignoreError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository with a private config directory. The TempDirs must be
/// kept alive for the duration of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub config_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn gitignore_path(&self) -> PathBuf {
        self.path.join(".gitignore")
    }

    /// Command for the binary running in the repository root
    pub fn command(&self) -> Command {
        self.command_in(&self.path)
    }

    /// Command for the binary running in `dir`, with piped stdin so no
    /// interactive prompt is shown
    pub fn command_in(&self, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("gitignore-manager").expect("binary is built");
        cmd.current_dir(dir)
            .env("XDG_CONFIG_HOME", self.config_dir.path())
            .env("HOME", self.config_dir.path())
            .env("NO_COLOR", "1")
            .env("CLICOLOR", "0")
            .write_stdin("");
        cmd
    }
}

/// Creates a temporary directory initialized as a git repository
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(GitignoreError::Io)?;
    let config_dir = TempDir::new().map_err(GitignoreError::Io)?;
    let path = temp_dir.path().canonicalize()?;

    git2::Repository::init(&path)?;

    Ok(TestRepo {
        temp_dir,
        config_dir,
        path,
    })
}

/// Creates a repository whose .gitignore has `content`
pub fn setup_repo_with_gitignore(content: &str) -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    write_gitignore(&repo, content)?;
    Ok(repo)
}

pub fn write_gitignore(repo: &TestRepo, content: &str) -> Result<()> {
    fs::write(repo.gitignore_path(), content)?;
    Ok(())
}

pub fn read_gitignore(repo: &TestRepo) -> Result<String> {
    Ok(fs::read_to_string(repo.gitignore_path())?)
}

/// Creates a file (and its parent directories) with the given content
pub fn create_file(repo_path: &Path, relative: &str, content: &str) -> Result<()> {
    let path = repo_path.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn create_dir(repo_path: &Path, relative: &str) -> Result<()> {
    fs::create_dir_all(repo_path.join(relative))?;
    Ok(())
}
