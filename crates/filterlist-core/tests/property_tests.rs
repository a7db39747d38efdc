use chrono::{TimeZone, Utc};
use filterlist_core::{
    HeaderTemplate, Verification, compute_checksum, decide, extract_version, normalize, parse,
    render, verify,
};
use proptest::prelude::*;

/// Rule-ish lines: no leading `!`, no surrounding whitespace.
fn rule_body() -> impl Strategy<Value = String> {
    prop::collection::vec("[|@a-z0-9.^$/-]{1,24}", 1..8).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn test_checksum_ignores_crlf(lines in prop::collection::vec("[ -~]{0,20}", 0..10)) {
        let lf = lines.join("\n");
        let crlf = lines.join("\r\n");
        prop_assert_eq!(compute_checksum(&lf), compute_checksum(&crlf));
    }

    #[test]
    fn test_checksum_ignores_blank_line_runs(
        lines in prop::collection::vec("[ -~]{1,20}", 1..10),
        extra in 1usize..4,
    ) {
        let single = lines.join("\n");
        let padded = lines.join(&"\n".repeat(extra + 1));
        prop_assert_eq!(compute_checksum(&single), compute_checksum(&padded));
    }

    #[test]
    fn test_normalize_is_idempotent(s in "[a-z\r\n]{0,40}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(!once.contains('\r'));
        prop_assert!(!once.contains("\n\n"));
    }

    #[test]
    fn test_rendered_artifact_roundtrips(
        rules in rule_body(),
        version in 1u64..10_000,
        name in "[a-z]{1,12}",
    ) {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let artifact = render(&name, &rules, version, ts, &HeaderTemplate::default());

        prop_assert_eq!(verify(&artifact), Verification::Valid);
        prop_assert_eq!(extract_version(&artifact), Some(version));
        prop_assert_eq!(parse(&artifact).rules, rules.clone());
        prop_assert!(!decide(&rules, Some(&artifact)).should_build);
    }
}
