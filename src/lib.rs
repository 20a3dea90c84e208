//! Gitignore Manager - organize, sort and edit `.gitignore` files.
//!
//! The heart of the library is [`organize`], a pure function that deduplicates
//! and sorts ignore rules either per commented section ([`SortMode::Smart`]) or
//! as one flat list ([`SortMode::Flat`]). Around it the crate provides ignore
//! file discovery and editing, path suggestions for autocomplete and the
//! command implementations used by the `gitignore-manager` binary.
//!
//! ```
//! use gitignore_manager::{organize, SortMode};
//!
//! let text = "# Logs\n*.log\ndebug.log\n*.log\n";
//! assert_eq!(organize(text, SortMode::Smart), "# Logs\n*.log\ndebug.log\n");
//! assert_eq!(organize(text, SortMode::Flat), "*.log\ndebug.log\n");
//! ```

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Rule organizer
    is_organized,
    organize,
    organize_bytes,
    parse_sections,
    // Path suggestions
    suggest,

    CommandContext,
    Config,
    // Error handling
    GitignoreError,
    // Ignore file access
    IgnoreFile,
    PathEntry,
    Result,
    RuleOption,
    Section,
    SortMode,
};
