use crate::core::{
    config::Config, error::Result, organizer::SortMode, print_section_header, print_success,
};
use clap::Args;
use colored::*;

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Mode used by `sort` when none is given
    #[arg(long, value_enum, conflicts_with = "clear_mode")]
    pub default_mode: Option<SortMode>,

    /// Forget the default sort mode
    #[arg(long)]
    pub clear_mode: bool,
}

pub fn execute_config(args: ConfigArgs) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(mode) = args.default_mode {
        config.default_mode = Some(mode);
        config.save()?;
        print_success(&format!("Default sort mode set to {mode}"));
        return Ok(());
    }

    if args.clear_mode {
        config.default_mode = None;
        config.save()?;
        print_success("Default sort mode cleared");
        return Ok(());
    }

    print_section_header("Configuration");
    println!(
        "   File:         {}",
        Config::config_path()?.display().to_string().blue()
    );
    let mode = match config.default_mode {
        Some(mode) => format!("{mode} ({})", mode.label()),
        None => "not set".to_string(),
    };
    println!("   Default mode: {}\n", mode.blue());
    Ok(())
}
