//! Filesystem-backed sources and artifacts

use filterlist_fs::{NormalizedPath, io};

use super::{ArtifactStore, SourceDocument, SourceSet};
use crate::{Error, Result};

/// Rule files with a given extension directly inside a directory.
#[derive(Debug, Clone)]
pub struct DirectorySources {
    dir: NormalizedPath,
    extension: String,
}

impl DirectorySources {
    pub fn new(dir: NormalizedPath, extension: impl Into<String>) -> Self {
        Self {
            dir,
            extension: extension.into(),
        }
    }

    pub fn dir(&self) -> &NormalizedPath {
        &self.dir
    }
}

impl SourceSet for DirectorySources {
    fn sources(&self) -> Result<Vec<SourceDocument>> {
        if !self.dir.is_dir() {
            return Err(Error::SourceDirMissing {
                path: self.dir.to_native(),
            });
        }

        let files = io::list_files(&self.dir, &self.extension)?;
        tracing::debug!(dir = %self.dir, count = files.len(), "Discovered source files");

        files
            .iter()
            .map(|path| {
                let text = io::read_text(path)?;
                let file_name = path.file_name().unwrap_or_default();
                SourceDocument::from_file_name(file_name, text)
            })
            .collect()
    }
}

/// Artifacts stored as files in an output directory.
///
/// The directory is created on the first write.
#[derive(Debug, Clone)]
pub struct DirectoryArtifacts {
    dir: NormalizedPath,
}

impl DirectoryArtifacts {
    pub fn new(dir: NormalizedPath) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &NormalizedPath {
        &self.dir
    }

    pub fn path_of(&self, file_name: &str) -> NormalizedPath {
        self.dir.join(file_name)
    }
}

impl ArtifactStore for DirectoryArtifacts {
    fn read(&self, file_name: &str) -> Result<Option<String>> {
        Ok(io::read_text_if_exists(&self.path_of(file_name))?)
    }

    fn write(&mut self, file_name: &str, content: &str) -> Result<()> {
        io::write_text(&self.path_of(file_name), content)?;
        Ok(())
    }
}
