//! Well-known locations inside a filter-list project.

use std::path::Path;

/// Default project layout: rule sources, published artifacts, and the
/// optional configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The `src` directory holding raw rule files
    SourceDir,
    /// The `filters` directory receiving built artifacts
    OutputDir,
    /// The `filterlist.toml` configuration file
    ConfigFile,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SourceDir => "src",
            Self::OutputDir => "filters",
            Self::ConfigFile => "filterlist.toml",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
