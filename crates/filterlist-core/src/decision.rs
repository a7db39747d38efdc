//! Rebuild decisions
//!
//! Compares a source body against the previously published artifact and
//! picks the next version. Versions only ever move forward.

use serde::{Deserialize, Serialize};

use crate::header::{extract_version, has_checksum, parse};

/// Why an artifact is (or is not) being rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildReason {
    /// No artifact has been published yet
    New,
    /// The rule body differs from the published one
    Changed,
    /// Rules are unchanged but the artifact lacks a checksum line
    MissingChecksum,
    /// Rules are unchanged and the artifact is checksummed
    Unchanged,
}

impl BuildReason {
    /// Short description used in status lines.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::New => "New filter",
            Self::Changed => "Changes detected",
            Self::MissingChecksum => "Missing checksum",
            Self::Unchanged => "No changes detected",
        }
    }
}

/// Outcome of [`decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Version to stamp on the artifact. For [`BuildReason::Unchanged`] this
    /// is the published version (0 if the artifact has none).
    pub version: u64,
    /// Whether a new artifact must be written
    pub should_build: bool,
    pub reason: BuildReason,
}

/// Decide whether `rules` needs a rebuild given the existing artifact.
///
/// `rules` must already be trimmed; it is compared verbatim with the rule
/// body parsed from `existing`. A missing version line counts as version 0.
pub fn decide(rules: &str, existing: Option<&str>) -> Decision {
    let Some(existing) = existing else {
        return Decision {
            version: 1,
            should_build: true,
            reason: BuildReason::New,
        };
    };

    let published = parse(existing);
    let current = extract_version(existing).unwrap_or(0);

    let reason = if published.rules != rules {
        BuildReason::Changed
    } else if has_checksum(existing) {
        BuildReason::Unchanged
    } else {
        BuildReason::MissingChecksum
    };

    match reason {
        BuildReason::Unchanged => Decision {
            version: current,
            should_build: false,
            reason,
        },
        _ => Decision {
            version: current.saturating_add(1),
            should_build: true,
            reason,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CHECKSUMMED: &str = "! Checksum: abc\n! Title: T\n! Version: 4\n!\n||a^";

    #[test]
    fn new_filter_starts_at_one() {
        let decision = decide("||a^", None);
        assert_eq!(
            decision,
            Decision {
                version: 1,
                should_build: true,
                reason: BuildReason::New,
            }
        );
    }

    #[test]
    fn unchanged_with_checksum_is_skipped() {
        let decision = decide("||a^", Some(CHECKSUMMED));
        assert!(!decision.should_build);
        assert_eq!(decision.reason, BuildReason::Unchanged);
        assert_eq!(decision.version, 4);
    }

    #[test]
    fn changed_rules_bump_version() {
        let decision = decide("||b^", Some(CHECKSUMMED));
        assert!(decision.should_build);
        assert_eq!(decision.reason, BuildReason::Changed);
        assert_eq!(decision.version, 5);
    }

    #[test]
    fn missing_checksum_is_repaired_with_bump() {
        let decision = decide("||a^", Some("! Title: T\n! Version: 4\n!\n||a^"));
        assert!(decision.should_build);
        assert_eq!(decision.reason, BuildReason::MissingChecksum);
        assert_eq!(decision.version, 5);
    }

    #[test]
    fn missing_version_and_checksum_rebuilds_at_one() {
        let decision = decide("||a^", Some("! Title: T\n!\n||a^"));
        assert_eq!(
            decision,
            Decision {
                version: 1,
                should_build: true,
                reason: BuildReason::MissingChecksum,
            }
        );
    }

    #[test]
    fn changed_without_version_starts_at_one() {
        let decision = decide("||b^", Some("! Checksum: abc\n!\n||a^"));
        assert_eq!(decision.version, 1);
        assert_eq!(decision.reason, BuildReason::Changed);
    }

    #[test]
    fn whitespace_around_published_rules_is_ignored() {
        let decision = decide("||a^", Some("! Checksum: abc\n! Version: 2\n!\n\n||a^\n\n"));
        assert_eq!(decision.reason, BuildReason::Unchanged);
    }

    #[test]
    fn checksum_line_among_rules_counts() {
        let decision = decide(
            "! Checksum: old\n||a^",
            Some("! Title: T\n! Version: 2\n!\n! Checksum: old\n||a^"),
        );
        assert_eq!(
            decision,
            Decision {
                version: 2,
                should_build: false,
                reason: BuildReason::Unchanged,
            }
        );
    }

    #[test]
    fn byte_order_mark_keeps_published_version() {
        let decision = decide("||a^", Some("\u{FEFF}! Checksum: abc\n! Version: 3\n!\n||a^"));
        assert_eq!(
            decision,
            Decision {
                version: 3,
                should_build: false,
                reason: BuildReason::Unchanged,
            }
        );
    }

    #[test]
    fn reason_descriptions() {
        assert_eq!(BuildReason::New.describe(), "New filter");
        assert_eq!(BuildReason::MissingChecksum.describe(), "Missing checksum");
    }
}
