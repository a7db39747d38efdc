//! Command implementations

pub mod build;
pub mod check;
pub mod init;

pub use build::run_build;
pub use check::run_check;
pub use init::run_init;

use std::path::Path;

use filterlist_core::Project;
use filterlist_fs::NormalizedPath;

use crate::error::Result;

/// Open the project rooted at `path`, loading `filterlist.toml` if present.
pub fn open_project(path: &Path) -> Result<Project> {
    Ok(Project::open(NormalizedPath::new(path))?)
}
