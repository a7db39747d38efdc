//! Rendering artifacts: checksum line, header block, rule body

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::checksum::compute_checksum;
use crate::header::{CHECKSUM_PREFIX, COMMENT_MARKER};

/// Static parts of the header block shared by every artifact in a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderTemplate {
    /// Prefix of every title, e.g. `SpicySpaceman`
    pub title_prefix: String,
    /// Value of the `! Expires:` line
    pub expires: String,
    /// Value of the `! Homepage:` line
    pub homepage: String,
    /// Value of the `! License:` line
    pub license: String,
}

impl Default for HeaderTemplate {
    fn default() -> Self {
        Self {
            title_prefix: "SpicySpaceman".to_string(),
            expires: "4 hours (update frequency)".to_string(),
            homepage: "https://github.com/SpicySpaceman/FilterList".to_string(),
            license: "https://github.com/SpicySpaceman/FilterList/blob/main/LICENSE".to_string(),
        }
    }
}

impl HeaderTemplate {
    /// Human readable title for a filter: `<prefix> - <Name> Filter`.
    pub fn title(&self, name: &str) -> String {
        format!("{} - {} Filter", self.title_prefix, capitalize(name))
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Timestamp as written to `! Last modified:`, e.g. `2024-05-01T08:30:00.000Z`.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render a complete artifact.
///
/// `rules` is written verbatim after the separator; callers pass the
/// trimmed source body. The checksum covers everything below the checksum
/// line. No trailing newline is added.
pub fn render(
    name: &str,
    rules: &str,
    version: u64,
    timestamp: DateTime<Utc>,
    template: &HeaderTemplate,
) -> String {
    let header = [
        format!("! Title: {}", template.title(name)),
        format!("! Version: {}", version),
        format!("! Last modified: {}", format_timestamp(timestamp)),
        format!("! Expires: {}", template.expires),
        format!("! Homepage: {}", template.homepage),
        format!("! License: {}", template.license),
        COMMENT_MARKER.to_string(),
    ];

    let body = format!("{}\n{}", header.join("\n"), rules);
    let checksum = compute_checksum(&body);
    format!("{} {}\n{}", CHECKSUM_PREFIX, checksum, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("myfilter"), "Myfilter");
        assert_eq!(capitalize("social-media"), "Social-media");
        assert_eq!(capitalize("ümlaut"), "Ümlaut");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn title_uses_prefix() {
        let template = HeaderTemplate::default();
        assert_eq!(template.title("myfilter"), "SpicySpaceman - Myfilter Filter");
    }

    #[test]
    fn timestamp_has_millis_and_z() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2024-05-01T08:30:00.000Z");
    }

    #[test]
    fn render_layout() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let artifact = render("myfilter", "||ads.example.com^", 1, ts, &HeaderTemplate::default());

        insta::assert_snapshot!(artifact, @r###"
        ! Checksum: WCOLGAMljzVhWkaVjjpmUQ
        ! Title: SpicySpaceman - Myfilter Filter
        ! Version: 1
        ! Last modified: 2024-05-01T08:30:00.000Z
        ! Expires: 4 hours (update frequency)
        ! Homepage: https://github.com/SpicySpaceman/FilterList
        ! License: https://github.com/SpicySpaceman/FilterList/blob/main/LICENSE
        !
        ||ads.example.com^
        "###);
    }

    #[test]
    fn render_has_no_trailing_newline() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let artifact = render("a", "||a^", 7, ts, &HeaderTemplate::default());
        assert!(artifact.ends_with("||a^"));
    }
}
