//! Versioned, checksummed artifact builder for filter lists
//!
//! Reads raw rule files, decides per file whether a new artifact is due,
//! and writes artifacts stamped with a header block and a content checksum:
//!
//! ```text
//! ! Checksum: <md5, base64, unpadded>
//! ! Title: <prefix> - <Name> Filter
//! ! Version: <n>
//! ! Last modified: <RFC 3339 UTC>
//! ! Expires: ...
//! ! Homepage: ...
//! ! License: ...
//! !
//! <rules>
//! ```
//!
//! - **header**: split an artifact into header block and rule body
//! - **checksum**: normalization, digest, verification
//! - **decision**: rebuild detection and version bumps
//! - **artifact**: rendering
//! - **store**: injected sources and artifact storage
//! - **builder** / **project**: orchestration
//!
//! # Example
//!
//! ```
//! use filterlist_core::{BuildOptions, Builder, MemoryArtifacts, MemorySources};
//!
//! let sources = MemorySources::new().with("myfilter.txt", "||ads.example.com^\n");
//! let mut artifacts = MemoryArtifacts::new();
//!
//! let report = Builder::default()
//!     .build(&sources, &mut artifacts, &BuildOptions::default())
//!     .unwrap();
//!
//! assert_eq!(report.files[0].version, Some(1));
//! assert!(artifacts.get("myfilter.txt").unwrap().starts_with("! Checksum: "));
//! ```

pub mod artifact;
pub mod builder;
pub mod checksum;
pub mod config;
pub mod decision;
pub mod error;
pub mod header;
pub mod project;
pub mod report;
pub mod store;

pub use artifact::{HeaderTemplate, render};
pub use builder::{BuildOptions, Builder};
pub use checksum::{Verification, compute_checksum, normalize, verify};
pub use config::BuildConfig;
pub use decision::{BuildReason, Decision, decide};
pub use error::{Error, Result};
pub use header::{Sections, extract_version, has_checksum, parse};
pub use project::Project;
pub use report::{BuildAction, BuildReport, CheckItem, CheckReport, CheckStatus, FileOutcome};
pub use store::{
    ArtifactStore, DirectoryArtifacts, DirectorySources, MemoryArtifacts, MemorySources,
    SourceDocument, SourceSet,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn error_source_dir_missing_displays_path() {
        let error = Error::SourceDirMissing {
            path: PathBuf::from("/lists/src"),
        };

        let display = format!("{}", error);
        assert!(
            display.contains("/lists/src"),
            "Error display should contain the path, got: {}",
            display
        );
    }
}
