//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Success line printed after a rule was added
pub fn rule_added(pattern: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Added '{pattern}'"))
}

/// Warning printed when a rule is already present
pub fn rule_already_present(pattern: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("'{pattern}' is already in"))
}

/// Warning printed when existing rules already cover a path
pub fn already_ignored(path: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{path} is already ignored by an existing rule"))
}

pub fn rule_removed(pattern: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Removed '{pattern}'"))
}

pub fn error_message(message: &str) -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains(message.to_string()))
}
