//! Build command implementation

use std::path::Path;

use colored::Colorize;

use filterlist_core::{BuildOptions, BuildReason, BuildReport, FileOutcome};

use super::open_project;
use crate::error::Result;

/// Run the build command
///
/// Prints one status line per source file, then a line for each artifact
/// written.
pub fn run_build(
    path: &Path,
    dry_run: bool,
    json: bool,
    source: Option<&str>,
    output: Option<&str>,
) -> Result<()> {
    let mut project = open_project(path)?;
    if let Some(source) = source {
        project.config_mut().source_dir = source.to_string();
    }
    if let Some(output) = output {
        project.config_mut().output_dir = output.to_string();
    }

    let options = BuildOptions::default().with_dry_run(dry_run);
    let report = project.build(&options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &BuildReport) {
    if report.files.is_empty() {
        println!("{} No source files found.", "=>".blue().bold());
        return;
    }

    for outcome in &report.files {
        println!("{}", status_line(outcome));
        if outcome.is_written() {
            let version = outcome.version.unwrap_or_default();
            if report.dry_run {
                println!("{} Would build {} (v{})", "->".yellow(), outcome.file, version);
            } else {
                println!("{} Built {} (v{})", "->".green(), outcome.file, version);
            }
        }
    }

    println!();
    let summary = format!("{} built, {} skipped", report.built(), report.skipped());
    if report.dry_run {
        println!("{} [dry-run] {}", "OK".green().bold(), summary);
    } else {
        println!("{} {}", "OK".green().bold(), summary);
    }
}

fn status_line(outcome: &FileOutcome) -> String {
    let verb = match outcome.reason {
        BuildReason::New | BuildReason::Changed => "Building".green(),
        BuildReason::MissingChecksum => "Updating".yellow(),
        BuildReason::Unchanged => "Skipping".dimmed(),
    };
    format!("{} {} ({})", verb, outcome.file, outcome.reason.describe())
}
