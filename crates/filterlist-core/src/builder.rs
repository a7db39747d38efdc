//! Build orchestration
//!
//! The [`Builder`] walks every source sequentially: read the published
//! artifact, decide, render, write. The first error aborts the run.

use chrono::{DateTime, Utc};

use crate::Result;
use crate::artifact::{HeaderTemplate, render};
use crate::checksum::{Verification, verify};
use crate::decision::{BuildReason, decide};
use crate::header::extract_version;
use crate::report::{BuildReport, CheckItem, CheckReport, CheckStatus, FileOutcome};
use crate::store::{ArtifactStore, SourceDocument, SourceSet};

/// Options for a build run
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Decide and report without writing any artifact
    pub dry_run: bool,
    /// Value of `! Last modified:` for every artifact written in this run
    pub timestamp: DateTime<Utc>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::at(Utc::now())
    }
}

impl BuildOptions {
    /// Options stamped with a fixed timestamp.
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            dry_run: false,
            timestamp,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Builds versioned, checksummed artifacts from rule sources.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    template: HeaderTemplate,
}

impl Builder {
    pub fn new(template: HeaderTemplate) -> Self {
        Self { template }
    }

    /// Build every source, in file name order.
    ///
    /// # Errors
    ///
    /// Returns the first error from reading a source, reading an artifact, or
    /// writing an artifact. Artifacts written before the failure remain.
    pub fn build<S, A>(
        &self,
        sources: &S,
        artifacts: &mut A,
        options: &BuildOptions,
    ) -> Result<BuildReport>
    where
        S: SourceSet + ?Sized,
        A: ArtifactStore + ?Sized,
    {
        let mut documents = sources.sources()?;
        documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        let mut report = BuildReport::new(options.dry_run);
        for source in &documents {
            let outcome = self.build_one(source, artifacts, options)?;
            report.files.push(outcome);
        }

        tracing::info!(
            built = report.built(),
            skipped = report.skipped(),
            dry_run = options.dry_run,
            "Build finished"
        );
        Ok(report)
    }

    /// Build a single source against its published artifact.
    pub fn build_one<A>(
        &self,
        source: &SourceDocument,
        artifacts: &mut A,
        options: &BuildOptions,
    ) -> Result<FileOutcome>
    where
        A: ArtifactStore + ?Sized,
    {
        let existing = artifacts.read(&source.file_name)?;
        let decision = decide(source.rules(), existing.as_deref());
        tracing::debug!(
            file = %source.file_name,
            reason = ?decision.reason,
            version = decision.version,
            "Decided"
        );

        if decision.should_build && !options.dry_run {
            let content = render(
                &source.name,
                source.rules(),
                decision.version,
                options.timestamp,
                &self.template,
            );
            artifacts.write(&source.file_name, &content)?;
            tracing::info!(file = %source.file_name, version = decision.version, "Built artifact");
        }

        let version = if decision.should_build {
            Some(decision.version)
        } else {
            existing.as_deref().and_then(extract_version)
        };

        Ok(FileOutcome {
            name: source.name.clone(),
            file: source.file_name.clone(),
            action: decision.reason.into(),
            reason: decision.reason,
            version,
        })
    }

    /// Report whether every published artifact is current, without writing.
    pub fn check<S, A>(&self, sources: &S, artifacts: &A) -> Result<CheckReport>
    where
        S: SourceSet + ?Sized,
        A: ArtifactStore + ?Sized,
    {
        let mut documents = sources.sources()?;
        documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        let mut items = Vec::with_capacity(documents.len());
        for source in &documents {
            let existing = artifacts.read(&source.file_name)?;
            items.push(check_one(source, existing.as_deref()));
        }

        let report = CheckReport::from_items(items);
        tracing::debug!(status = ?report.status, "Check finished");
        Ok(report)
    }
}

fn check_one(source: &SourceDocument, existing: Option<&str>) -> CheckItem {
    let item = |status, version, description: String| CheckItem {
        name: source.name.clone(),
        file: source.file_name.clone(),
        status,
        version,
        description,
    };

    let Some(artifact) = existing else {
        return item(CheckStatus::Missing, None, "Artifact has not been built".to_string());
    };

    let version = extract_version(artifact);
    if let Verification::Mismatch { expected, actual } = verify(artifact) {
        return item(
            CheckStatus::Corrupt,
            version,
            format!("Checksum mismatch: recorded {}, computed {}", expected, actual),
        );
    }

    match decide(source.rules(), Some(artifact)).reason {
        BuildReason::Unchanged => item(CheckStatus::Current, version, "Up to date".to_string()),
        BuildReason::MissingChecksum => item(
            CheckStatus::Stale,
            version,
            "Artifact has no checksum line".to_string(),
        ),
        BuildReason::Changed | BuildReason::New => item(
            CheckStatus::Stale,
            version,
            "Rules changed since the artifact was built".to_string(),
        ),
    }
}
