use clap::{Parser, Subcommand};
use gitignore_manager::commands::*;
use gitignore_manager::core::{command_init::CommandContext, error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitignore-manager")]
#[command(about = "Organize, sort and edit .gitignore files")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Ignore file to operate on (defaults to the repository's .gitignore)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deduplicate and sort the rules of the ignore file
    Sort(SortArgs),
    /// Add paths or patterns to the ignore file
    Add(AddArgs),
    /// Remove rules from the ignore file
    Remove {
        /// Rules to remove, exactly as written in the file
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// List files and directories matching a partially typed path
    Suggest {
        /// Path typed so far, relative to the repository root
        partial: Option<String>,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change saved preferences
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let context = || CommandContext::initialize(cli.file.as_deref());

    match cli.command {
        Commands::Sort(args) => execute_sort(&context()?, args),
        Commands::Add(args) => execute_add(&context()?, args),
        Commands::Remove { patterns } => execute_remove(&context()?, patterns),
        Commands::Suggest { partial, json } => execute_suggest(&context()?, partial, json),
        Commands::Config(args) => execute_config(args),
    }
}
