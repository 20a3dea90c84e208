use crate::core::{
    command_init::CommandContext,
    error::{GitignoreError, Result},
    git::GitRepo,
    print_error_with_structured_usage, print_success, print_warning, prompt,
    rule_option::{specific_pattern, RuleOption},
};
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Files or directories to ignore
    pub paths: Vec<PathBuf>,

    /// Ignore every file with the same extension instead of the path itself
    #[arg(short, long)]
    pub extension: bool,

    /// Add this pattern as written
    #[arg(short, long)]
    pub pattern: Option<String>,
}

pub fn execute_add(context: &CommandContext, args: AddArgs) -> Result<()> {
    if args.paths.is_empty() && args.pattern.is_none() {
        print_error_with_structured_usage(
            "No rules or paths provided",
            &[
                "gitignore-manager add <PATH>...",
                "gitignore-manager add --pattern <PATTERN>",
            ],
            &[
                ("-e, --extension", "Ignore all files with the same extension"),
                ("-p, --pattern", "Add a custom pattern"),
            ],
        );
        return Err(GitignoreError::NothingToAdd);
    }

    let mut patterns = Vec::new();
    if let Some(pattern) = &args.pattern {
        patterns.push(pattern.clone());
    }

    let root = context.root();
    for path in &args.paths {
        let absolute = context.resolve_path(path);
        let options = RuleOption::options_for(&absolute, &root)?;
        warn_if_already_ignored(&root, &specific_pattern(&absolute, &root)?);
        let option = choose_option(path, options, args.extension)?;

        let pattern = match option {
            RuleOption::Custom => prompt::read_line("Pattern:")?,
            option => option.pattern().unwrap_or_default().to_string(),
        };
        patterns.push(pattern);
    }

    let ignore_file = &context.ignore_file;
    for pattern in &patterns {
        if ignore_file.add_rule(pattern)? {
            print_success(&format!(
                "Added '{}' to {}",
                pattern.trim(),
                ignore_file.path().display()
            ));
        } else {
            print_warning(&format!(
                "'{}' is already in {}",
                pattern.trim(),
                ignore_file.path().display()
            ));
        }
    }

    Ok(())
}

/// Pick one of the options computed for `path`.
///
/// `--extension` selects the extension rule when the path has one. On a
/// terminal the user chooses from a menu; otherwise the specific path is used.
fn choose_option(path: &Path, options: Vec<RuleOption>, extension: bool) -> Result<RuleOption> {
    if extension {
        if let Some(option) = options
            .iter()
            .find(|option| matches!(option, RuleOption::Extension(_)))
        {
            return Ok(option.clone());
        }
        print_warning(&format!(
            "{} has no extension, ignoring the path itself",
            path.display()
        ));
        return Ok(options.into_iter().next().unwrap_or(RuleOption::Custom));
    }

    if !prompt::is_interactive() {
        return Ok(options.into_iter().next().unwrap_or(RuleOption::Custom));
    }

    let labels: Vec<String> = options.iter().map(RuleOption::label).collect();
    let choice = prompt::select(&format!("Ignore {}", path.display()), &labels)?;
    Ok(options[choice].clone())
}

/// Warn when rules already in place cover `relative`, a path below `root`
fn warn_if_already_ignored(root: &Path, relative: &str) {
    let Ok(repo) = GitRepo::open(root) else {
        return;
    };

    let relative = Path::new(relative.trim_end_matches('/'));
    match repo.is_ignored(relative) {
        Ok(true) => print_warning(&format!(
            "{} is already ignored by an existing rule",
            relative.display()
        )),
        Ok(false) => {}
        Err(e) => log::debug!("Could not check ignore status of {}: {e}", relative.display()),
    }
}
