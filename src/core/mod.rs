//! Core functionality for the gitignore-manager tool.
//!
//! This module provides the rule organizer, ignore file access, path
//! suggestions, configuration and the shared CLI building blocks.

pub mod command_init;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod ignore_file;
pub mod organizer;
pub mod output;
pub mod prompt;
pub mod rule_option;
pub mod suggest;

// === Error handling ===
pub use error::{GitignoreError, Result};

// === Rule organizer ===
// Section-aware ("smart") and flat cleanup of ignore file text
pub use organizer::{is_organized, organize, organize_bytes, parse_sections, Section, SortMode};

// === Ignore file access ===
pub use ignore_file::{IgnoreFile, IGNORE_FILE_NAME};

// === Git repository discovery ===
pub use git::{find_repo_root, GitRepo};

// === Add command choices ===
pub use rule_option::RuleOption;

// === Path suggestions ===
pub use suggest::{suggest, PathEntry};

// === Configuration ===
pub use config::Config;

// === Command initialization ===
pub use command_init::CommandContext;

// === Output formatting ===
pub use output::{
    print_error, print_error_with_structured_usage, print_section_header,
    print_success, print_warning,
};
