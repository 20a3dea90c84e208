//! Shared utilities for gitignore-manager integration tests.
//!
//! Every test runs the real binary inside a fresh temporary git repository
//! with its own config directory, so tests never touch the user's settings.

pub mod assertions;
pub mod repository;
