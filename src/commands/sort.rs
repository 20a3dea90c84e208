use crate::core::{
    command_init::CommandContext,
    config::Config,
    error::{GitignoreError, Result},
    organizer::{organize, parse_sections, SortMode},
    print_success, print_warning, prompt,
};
use clap::Args;

#[derive(Args, Debug, Default)]
pub struct SortArgs {
    /// Sort mode (defaults to the configured mode, or asks when interactive)
    #[arg(short, long, value_enum)]
    pub mode: Option<SortMode>,

    /// Fail if the file is not organized instead of rewriting it
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the organized file instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

pub fn execute_sort(context: &CommandContext, args: SortArgs) -> Result<()> {
    let ignore_file = &context.ignore_file;
    let path = ignore_file.path();

    if !ignore_file.exists() {
        if args.check {
            return Err(GitignoreError::ignore_file_not_found(path));
        }
        print_warning(&format!("No ignore file found at {}", path.display()));
        return Ok(());
    }

    let mode = resolve_mode(args.mode)?;
    log::debug!("Sorting {} in {mode} mode", path.display());

    let original = ignore_file.read()?;
    let organized = organize(&original, mode);

    if args.stdout {
        print!("{organized}");
        return Ok(());
    }

    if args.check {
        if organized != original {
            return Err(GitignoreError::not_organized(path));
        }
        print_success(&format!("{} is organized", path.display()));
        return Ok(());
    }

    if organized == original {
        print_success(&format!("{} is already organized", path.display()));
        return Ok(());
    }

    ignore_file.write(&organized)?;
    print_success(&format!(
        "Organized {} ({} mode): {}",
        path.display(),
        mode,
        summarize(&organized, mode)
    ));
    Ok(())
}

/// `--mode` wins, then the configured default, then an interactive choice.
/// Without a terminal the smart mode is used.
pub fn resolve_mode(requested: Option<SortMode>) -> Result<SortMode> {
    if let Some(mode) = requested {
        return Ok(mode);
    }

    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config: {e}");
        Config::default()
    });
    if let Some(mode) = config.default_mode {
        log::debug!("Using configured sort mode {mode}");
        return Ok(mode);
    }

    if !prompt::is_interactive() {
        return Ok(SortMode::Smart);
    }

    let labels: Vec<String> = SortMode::ALL
        .iter()
        .map(|mode| format!("{} - {}", mode.label(), mode.description()))
        .collect();
    let choice = prompt::select("How should the rules be organized", &labels)?;
    Ok(SortMode::ALL[choice])
}

fn summarize(organized: &str, mode: SortMode) -> String {
    let rules = organized
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .count();

    match mode {
        SortMode::Smart => format!(
            "{rules} rule(s) in {} section(s)",
            parse_sections(organized).len()
        ),
        SortMode::Flat => format!("{rules} rule(s)"),
    }
}
