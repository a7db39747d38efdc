//! In-memory sources and artifacts

use std::collections::BTreeMap;

use super::{ArtifactStore, SourceDocument, SourceSet};
use crate::Result;

/// Sources held in memory, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemorySources {
    files: BTreeMap<String, String>,
}

impl MemorySources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a source file.
    pub fn insert(&mut self, file_name: impl Into<String>, text: impl Into<String>) {
        self.files.insert(file_name.into(), text.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, file_name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(file_name, text);
        self
    }
}

impl SourceSet for MemorySources {
    fn sources(&self) -> Result<Vec<SourceDocument>> {
        self.files
            .iter()
            .map(|(file_name, text)| {
                SourceDocument::from_file_name(file_name.as_str(), text.as_str())
            })
            .collect()
    }
}

/// Artifacts held in memory; counts writes so callers can assert no-ops.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifacts {
    files: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an artifact without counting it as a write.
    pub fn insert(&mut self, file_name: impl Into<String>, content: impl Into<String>) {
        self.files.insert(file_name.into(), content.into());
    }

    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.files.get(file_name).map(String::as_str)
    }

    /// Number of [`ArtifactStore::write`] calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl ArtifactStore for MemoryArtifacts {
    fn read(&self, file_name: &str) -> Result<Option<String>> {
        Ok(self.files.get(file_name).cloned())
    }

    fn write(&mut self, file_name: &str, content: &str) -> Result<()> {
        self.writes += 1;
        self.files.insert(file_name.to_string(), content.to_string());
        Ok(())
    }
}
