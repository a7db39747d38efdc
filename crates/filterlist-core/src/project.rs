//! A filter-list project on disk: root directory plus configuration.

use filterlist_fs::NormalizedPath;

use crate::Result;
use crate::builder::{BuildOptions, Builder};
use crate::config::BuildConfig;
use crate::report::{BuildReport, CheckReport};
use crate::store::{DirectoryArtifacts, DirectorySources};

/// Ties a project root to its configuration and directory-backed stores.
#[derive(Debug, Clone)]
pub struct Project {
    root: NormalizedPath,
    config: BuildConfig,
}

impl Project {
    /// Open the project at `root`, loading its configuration if present.
    pub fn open(root: NormalizedPath) -> Result<Self> {
        let config = BuildConfig::load(&root)?;
        Ok(Self { root, config })
    }

    pub fn with_config(root: NormalizedPath, config: BuildConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut BuildConfig {
        &mut self.config
    }

    pub fn source_dir(&self) -> NormalizedPath {
        self.config.source_path(&self.root)
    }

    pub fn output_dir(&self) -> NormalizedPath {
        self.config.output_path(&self.root)
    }

    pub fn sources(&self) -> DirectorySources {
        DirectorySources::new(self.source_dir(), self.config.extension.clone())
    }

    pub fn artifacts(&self) -> DirectoryArtifacts {
        DirectoryArtifacts::new(self.output_dir())
    }

    pub fn builder(&self) -> Builder {
        Builder::new(self.config.header.clone())
    }

    /// Build every source into the output directory.
    pub fn build(&self, options: &BuildOptions) -> Result<BuildReport> {
        tracing::debug!(
            source = %self.source_dir(),
            output = %self.output_dir(),
            "Building project"
        );
        let mut artifacts = self.artifacts();
        self.builder().build(&self.sources(), &mut artifacts, options)
    }

    /// Check published artifacts against their sources.
    pub fn check(&self) -> Result<CheckReport> {
        self.builder().check(&self.sources(), &self.artifacts())
    }
}
