use filterlist_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalization_invariants(s in "\\PC*") {
        let path = NormalizedPath::new(&s);

        prop_assert!(!path.as_str().contains('\\'));

        // Normalizing an already normalized path is a no-op
        let again = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, again);
    }

    #[test]
    fn test_join_keeps_base_prefix(a in "[a-z]{1,8}(/[a-z]{1,8}){0,3}", b in "[a-z]{1,8}\\.txt") {
        let base = NormalizedPath::new(&a);
        let joined = base.join(&b);

        prop_assert!(joined.as_str().starts_with(base.as_str()));
        prop_assert_eq!(joined.file_name(), Some(b.as_str()));
        prop_assert_eq!(joined.parent(), Some(base));
    }
}
