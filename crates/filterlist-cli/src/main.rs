//! filterlist CLI
//!
//! Builds versioned, checksummed filter-list artifacts from raw rule files.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        // Logs go to stderr so `--json` output stays parseable
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
        tracing::debug!("Verbose mode enabled");
    }

    let root = match cli.project {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Some(cmd) => execute_command(root, cmd),
        None => {
            println!("{} filter-list builder", "filterlist".green().bold());
            println!();
            println!("Run {} for available commands.", "filterlist --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(root: PathBuf, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Build {
            dry_run,
            json,
            source,
            output,
        } => commands::run_build(&root, dry_run, json, source.as_deref(), output.as_deref()),
        Commands::Check { json } => commands::run_check(&root, json),
        Commands::Init { force } => commands::run_init(&root, force),
    }
}
