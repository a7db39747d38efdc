//! Splitting artifacts into their header block and rule body
//!
//! A filter artifact starts with a block of `!`-prefixed comment lines. The
//! block ends either at a bare `!` separator line (rules begin on the next
//! line) or at the first line that is not a comment (rules begin on that
//! line).

use std::sync::LazyLock;

use regex::Regex;

/// Marker that starts every comment line in a filter list.
pub const COMMENT_MARKER: &str = "!";

/// Prefix of the checksum line.
pub const CHECKSUM_PREFIX: &str = "! Checksum:";

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"! Version: (\d+)").expect("Invalid version regex"));

/// Byte order mark some editors put at the start of a file.
const BOM: char = '\u{FEFF}';

/// Trim surrounding whitespace and byte order marks.
pub fn trim_padding(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// An artifact split into its header block and rule body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sections {
    /// Header lines joined with `\n`, untrimmed. Includes the bare `!`
    /// separator line when one ended the header.
    pub header: String,
    /// Rule lines joined with `\n`, trimmed.
    pub rules: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    InHeader,
    InBody { start: usize },
}

/// Split `text` into header block and rule body.
///
/// If every line is a comment and no bare `!` separator appears, the scanner
/// never leaves the header state; such text has no recognised header and is
/// returned whole as the rule body.
///
/// # Example
/// ```
/// use filterlist_core::header::parse;
///
/// let sections = parse("! Title: Ads\n!\n||ads.example.com^\n");
/// assert_eq!(sections.header, "! Title: Ads\n!");
/// assert_eq!(sections.rules, "||ads.example.com^");
/// ```
pub fn parse(text: &str) -> Sections {
    let lines: Vec<&str> = text.split('\n').collect();

    let mut state = ScanState::InHeader;
    for (idx, line) in lines.iter().enumerate() {
        let trimmed = trim_padding(line);
        if trimmed == COMMENT_MARKER {
            state = ScanState::InBody { start: idx + 1 };
            break;
        }
        if !trimmed.starts_with(COMMENT_MARKER) {
            state = ScanState::InBody { start: idx };
            break;
        }
    }

    let start = match state {
        ScanState::InHeader => 0,
        ScanState::InBody { start } => start,
    };

    Sections {
        header: lines[..start].join("\n"),
        rules: trim_padding(&lines[start..].join("\n")).to_string(),
    }
}

/// Extract the version number from an artifact's header block.
///
/// Only the header is searched, so a `! Version:` comment inside the rules
/// is ignored. Returns `None` when no version line exists or its number
/// does not fit in a `u64`.
pub fn extract_version(artifact: &str) -> Option<u64> {
    let sections = parse(artifact);
    let caps = VERSION_REGEX.captures(&sections.header)?;
    let digits = caps.get(1)?.as_str();
    match digits.parse::<u64>() {
        Ok(version) => Some(version),
        Err(e) => {
            tracing::warn!(digits, error = %e, "Ignoring unparsable version header");
            None
        }
    }
}

/// Whether the artifact carries a checksum line anywhere in its text.
pub fn has_checksum(artifact: &str) -> bool {
    artifact.contains(CHECKSUM_PREFIX)
}
