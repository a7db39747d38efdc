//! Reports returned by the builder
//!
//! [`BuildReport`] lists what a build did (or would do, in dry-run mode) per
//! file. [`CheckReport`] summarises whether published artifacts are up to
//! date without writing anything.

use serde::{Deserialize, Serialize};

use crate::decision::BuildReason;

/// What happened to one artifact during a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildAction {
    /// First artifact for a new filter
    Created,
    /// Rules changed, new version published
    Updated,
    /// Rules unchanged, checksum line added
    Repaired,
    /// Nothing to do
    Skipped,
}

impl From<BuildReason> for BuildAction {
    fn from(reason: BuildReason) -> Self {
        match reason {
            BuildReason::New => Self::Created,
            BuildReason::Changed => Self::Updated,
            BuildReason::MissingChecksum => Self::Repaired,
            BuildReason::Unchanged => Self::Skipped,
        }
    }
}

/// Per-file entry of a [`BuildReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Filter name
    pub name: String,
    /// Artifact file name
    pub file: String,
    pub action: BuildAction,
    pub reason: BuildReason,
    /// Version written, or the published version when skipped
    pub version: Option<u64>,
}

impl FileOutcome {
    pub fn is_written(&self) -> bool {
        self.action != BuildAction::Skipped
    }
}

/// Report from a build run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// True if nothing was written
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
}

impl BuildReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            files: Vec::new(),
        }
    }

    /// Number of artifacts written (or that would be written in dry-run).
    pub fn built(&self) -> usize {
        self.files.iter().filter(|f| f.is_written()).count()
    }

    pub fn skipped(&self) -> usize {
        self.files.len() - self.built()
    }

    pub fn find(&self, file: &str) -> Option<&FileOutcome> {
        self.files.iter().find(|f| f.file == file)
    }
}

/// State of a single published artifact.
///
/// Ordered from best to worst so the overall status is the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Artifact matches its source and carries a valid checksum
    Current,
    /// No artifact has been published for the source
    Missing,
    /// Artifact needs a rebuild (rules changed or checksum line absent)
    Stale,
    /// Artifact checksum does not match its content
    Corrupt,
}

/// Per-file entry of a [`CheckReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckItem {
    pub name: String,
    pub file: String,
    pub status: CheckStatus,
    /// Published version, if any
    pub version: Option<u64>,
    /// Human-readable explanation
    pub description: String,
}

/// Report from a check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Worst status among all items; `Current` when there are none
    pub status: CheckStatus,
    pub items: Vec<CheckItem>,
}

impl CheckReport {
    pub fn from_items(items: Vec<CheckItem>) -> Self {
        let status = items
            .iter()
            .map(|item| item.status)
            .max()
            .unwrap_or(CheckStatus::Current);
        Self { status, items }
    }

    pub fn is_current(&self) -> bool {
        self.status == CheckStatus::Current
    }

    /// Items that are not current.
    pub fn problems(&self) -> impl Iterator<Item = &CheckItem> {
        self.items
            .iter()
            .filter(|item| item.status != CheckStatus::Current)
    }
}
