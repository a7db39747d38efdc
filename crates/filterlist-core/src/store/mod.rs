//! Where sources come from and where artifacts go
//!
//! The builder never touches the filesystem directly. It reads rule sources
//! from a [`SourceSet`] and published artifacts from an [`ArtifactStore`],
//! so tests can swap in the in-memory implementations.

mod directory;
mod memory;

pub use directory::{DirectoryArtifacts, DirectorySources};
pub use memory::{MemoryArtifacts, MemorySources};

use filterlist_fs::NormalizedPath;

use crate::header::trim_padding;
use crate::{Error, Result};

/// A raw rule file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Filter name, the file stem (`ads` for `ads.txt`)
    pub name: String,
    /// File name, reused for the artifact (`ads.txt`)
    pub file_name: String,
    /// Raw file content
    pub text: String,
}

impl SourceDocument {
    /// Build a document from its file name, deriving the filter name.
    pub fn from_file_name(file_name: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let file_name = file_name.into();
        let name = NormalizedPath::new(&file_name)
            .file_stem()
            .filter(|stem| !stem.is_empty())
            .map(str::to_string)
            .ok_or_else(|| Error::InvalidSourceName {
                file: file_name.clone(),
            })?;

        Ok(Self {
            name,
            file_name,
            text: text.into(),
        })
    }

    /// The rule body: the raw text without surrounding whitespace or a
    /// leading byte order mark.
    pub fn rules(&self) -> &str {
        trim_padding(&self.text)
    }
}

/// A collection of rule sources.
pub trait SourceSet {
    /// All sources, in a stable order.
    fn sources(&self) -> Result<Vec<SourceDocument>>;
}

/// Storage for published artifacts, keyed by file name.
pub trait ArtifactStore {
    /// Read an artifact, `None` if it was never published.
    fn read(&self, file_name: &str) -> Result<Option<String>>;

    /// Publish an artifact, replacing any previous version.
    fn write(&mut self, file_name: &str, content: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_file_stem() {
        let doc = SourceDocument::from_file_name("myfilter.txt", "  ||a^\n").unwrap();
        assert_eq!(doc.name, "myfilter");
        assert_eq!(doc.file_name, "myfilter.txt");
        assert_eq!(doc.rules(), "||a^");
    }

    #[test]
    fn empty_file_name_is_rejected() {
        let err = SourceDocument::from_file_name("", "||a^").unwrap_err();
        assert!(matches!(err, Error::InvalidSourceName { .. }));
    }

    #[test]
    fn byte_order_mark_is_not_part_of_rules() {
        let doc = SourceDocument::from_file_name("ads.txt", "\u{FEFF}||a^\r\n").unwrap();
        assert_eq!(doc.rules(), "||a^");
    }
}
