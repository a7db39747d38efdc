//! Content checksums for filter artifacts
//!
//! The checksum is an MD5 digest of the normalized header block and rule
//! body, base64 encoded without padding. MD5 is used as a change detector,
//! not a security control; list maintainers and ad blockers already speak
//! this format.

use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::header::CHECKSUM_PREFIX;

/// Normalize text before hashing.
///
/// Drops every `\r` and collapses each run of `\n` into a single `\n`, so
/// line-ending or blank-line churn does not change the checksum.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\r' => {}
            '\n' if out.ends_with('\n') => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Compute the checksum of artifact content (everything but the checksum line).
pub fn compute_checksum(content: &str) -> String {
    let digest = Md5::digest(normalize(content).as_bytes());
    STANDARD_NO_PAD.encode(digest)
}

/// Result of verifying an artifact against its own checksum line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verification {
    /// The recorded checksum matches the content
    Valid,
    /// The artifact has no checksum line
    Missing,
    /// The recorded checksum differs from the recomputed one
    Mismatch { expected: String, actual: String },
}

/// Verify an artifact's checksum line against its content.
///
/// The first `! Checksum:` line is removed (with its line ending) and the
/// checksum of the remaining text is compared with the recorded value.
pub fn verify(artifact: &str) -> Verification {
    let mut offset = 0;
    for line in artifact.split_inclusive('\n') {
        let content = line.trim_end_matches(['\r', '\n']);
        if let Some(recorded) = content.trim_start().strip_prefix(CHECKSUM_PREFIX) {
            let remainder = format!("{}{}", &artifact[..offset], &artifact[offset + line.len()..]);
            let expected = recorded.trim().to_string();
            let actual = compute_checksum(&remainder);
            return if expected == actual {
                Verification::Valid
            } else {
                Verification::Mismatch { expected, actual }
            };
        }
        offset += line.len();
    }
    Verification::Missing
}
