//! Init command implementation

use std::fs;
use std::path::Path;

use colored::Colorize;

use filterlist_core::BuildConfig;
use filterlist_fs::{NormalizedPath, ProjectPath};

use crate::error::{CliError, Result};

/// Run the init command
///
/// Writes a `filterlist.toml` with every default spelled out and creates the
/// source directory.
pub fn run_init(path: &Path, force: bool) -> Result<()> {
    let root = NormalizedPath::new(path);
    let config_path = root.join(ProjectPath::ConfigFile.as_str());

    if config_path.exists() && !force {
        return Err(CliError::user(format!(
            "{} already exists (use --force to overwrite)",
            config_path
        )));
    }

    let config = BuildConfig::default();
    let written = config.save(&root)?;

    let source_dir = config.source_path(&root);
    fs::create_dir_all(source_dir.to_native())?;

    println!("{} Wrote {}", "OK".green().bold(), written);
    println!("   Put rule files in {}/ and run {}.", config.source_dir, "filterlist build".cyan());
    Ok(())
}
