//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, yellow for warnings, green for success
//! - **Standardized spacing**: Newline before command output
//! - **Human output on stdout**: Organized text printed with `--stdout` stays uncolored

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an error with structured usage information
///
/// # Format
/// ```text
///
/// ✕ Error: <message>.
/// Usage:
///   <usage_pattern1>
///   ...
///
/// Options:
///   <option1>  <description1>
///   ...
///
/// ```
pub fn print_error_with_structured_usage(
    message: &str,
    usage_patterns: &[&str],
    options: &[(&str, &str)],
) {
    println!("\n{} {}.\n", "✕ Error:".red(), message.white());
    println!("{}", "Usage:".blue());

    for pattern in usage_patterns {
        println!("  {}", pattern.white());
    }

    if !options.is_empty() {
        println!("\n{}", "Options:".blue());
        for (flag, description) in options {
            println!("  {}  {}", flag.bright_black(), description.bright_black());
        }
    }

    println!();
}

/// Checkmark in green, message in white
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Exclamation mark and message in yellow
pub fn print_warning(message: &str) {
    println!("\n{} {}", "!".yellow(), message.yellow());
}

pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }

    #[test]
    fn test_print_success_does_not_panic() {
        print_success("Rule added");
    }

    #[test]
    fn test_print_warning_does_not_panic() {
        print_warning("Rule already present");
    }

    #[test]
    fn test_print_structured_usage_does_not_panic() {
        print_error_with_structured_usage(
            "No rules or paths provided",
            &["gitignore-manager add <PATH>..."],
            &[("-e, --extension", "Ignore by extension")],
        );
    }
}
