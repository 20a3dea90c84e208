use crate::core::{
    command_init::CommandContext,
    error::{GitignoreError, Result},
    print_success, print_warning,
};

pub fn execute_remove(context: &CommandContext, patterns: Vec<String>) -> Result<()> {
    let ignore_file = &context.ignore_file;
    let mut total_removed = 0;

    for pattern in &patterns {
        let pattern = normalize_pattern(pattern);
        let removed = ignore_file.remove_rule(pattern)?;
        total_removed += removed;

        if removed > 0 {
            print_success(&format!(
                "Removed '{pattern}' from {}",
                ignore_file.path().display()
            ));
        } else {
            print_warning(&format!(
                "'{pattern}' is not in {}",
                ignore_file.path().display()
            ));
        }
    }

    if total_removed == 0 {
        return Err(GitignoreError::rule_not_found(patterns.join(", ")));
    }
    Ok(())
}

/// `./target` and `target` name the same rule
fn normalize_pattern(pattern: &str) -> &str {
    let pattern = pattern.trim();
    pattern.strip_prefix("./").unwrap_or(pattern)
}
