//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// filterlist - Build versioned, checksummed filter lists
#[derive(Parser, Debug)]
#[command(name = "filterlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR", env = "FILTERLIST_PROJECT")]
    pub project: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build artifacts for every changed rule file
    ///
    /// Unchanged files are skipped. Changed files get the next version and a
    /// fresh checksum.
    ///
    /// Examples:
    ///   filterlist build              # Build into filters/
    ///   filterlist build --dry-run    # Show what would be built
    ///   filterlist build --json       # Machine-readable report
    Build {
        /// Preview changes without writing artifacts
        #[arg(long)]
        dry_run: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,

        /// Override the source directory
        #[arg(long, value_name = "DIR")]
        source: Option<String>,

        /// Override the output directory
        #[arg(long, value_name = "DIR")]
        output: Option<String>,
    },

    /// Check that published artifacts are up to date
    ///
    /// Exits non-zero when any artifact is missing, stale, or fails its
    /// checksum.
    Check {
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default filterlist.toml and create the source directory
    Init {
        /// Overwrite an existing filterlist.toml
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_build_flags() {
        let cli = Cli::try_parse_from([
            "filterlist", "build", "--dry-run", "--json", "--output", "public",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Build {
                dry_run: true,
                json: true,
                source: None,
                output: Some("public".to_string()),
            })
        );
    }

    #[test]
    fn parse_global_project_after_subcommand() {
        let cli = Cli::try_parse_from(["filterlist", "check", "-C", "/srv/lists", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.project, Some(PathBuf::from("/srv/lists")));
        assert_eq!(cli.command, Some(Commands::Check { json: false }));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["filterlist"]).unwrap();
        assert!(cli.command.is_none());
    }
}
