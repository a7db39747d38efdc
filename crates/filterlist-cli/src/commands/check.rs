//! Check command implementation

use std::path::Path;

use colored::Colorize;

use filterlist_core::{CheckReport, CheckStatus};

use super::open_project;
use crate::error::{CliError, Result};

/// Run the check command
///
/// Fails when any artifact is not current so CI can gate on it.
pub fn run_check(path: &Path, json: bool) -> Result<()> {
    let project = open_project(path)?;
    let report = project.check()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.is_current() {
        return Ok(());
    }

    let problems = report.problems().count();
    Err(CliError::user(format!(
        "{} of {} artifacts need attention",
        problems,
        report.items.len()
    )))
}

fn print_report(report: &CheckReport) {
    println!("{} Checking artifacts...", "=>".blue().bold());

    for item in &report.items {
        let label = match item.status {
            CheckStatus::Current => "OK".green().bold(),
            CheckStatus::Missing => "MISSING".yellow().bold(),
            CheckStatus::Stale => "STALE".yellow().bold(),
            CheckStatus::Corrupt => "CORRUPT".red().bold(),
        };
        let version = item
            .version
            .map(|v| format!("v{}", v))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "   {} {} ({}): {}",
            label,
            item.file.cyan(),
            version.dimmed(),
            item.description
        );
    }

    if report.is_current() {
        println!("{} All artifacts are up to date.", "OK".green().bold());
    } else {
        println!();
        println!("Run {} to rebuild.", "filterlist build".cyan());
    }
}
