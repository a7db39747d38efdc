use filterlist_fs::NormalizedPath;
use rstest::rstest;

#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("project\\src\\ads.txt");
    assert_eq!(path.as_str(), "project/src/ads.txt");
}

#[test]
fn test_join_paths() {
    let base = NormalizedPath::new("project/filters");
    assert_eq!(base.join("ads.txt").as_str(), "project/filters/ads.txt");
}

#[test]
fn test_join_trailing_slash() {
    let base = NormalizedPath::new("project/");
    assert_eq!(base.join("src").as_str(), "project/src");
}

#[test]
fn test_join_onto_empty() {
    let base = NormalizedPath::new("");
    assert_eq!(base.join("src").as_str(), "src");
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("project/src/ads.txt");
    assert_eq!(path.parent().unwrap().as_str(), "project/src");
}

#[test]
fn test_parent_of_root_child() {
    let path = NormalizedPath::new("/src");
    assert_eq!(path.parent().unwrap().as_str(), "/");
}

#[rstest]
#[case("src/myfilter.txt", Some("myfilter.txt"), Some("myfilter"), Some("txt"))]
#[case("src/archive.tar.gz", Some("archive.tar.gz"), Some("archive.tar"), Some("gz"))]
#[case("src/.hidden", Some(".hidden"), Some(".hidden"), None)]
#[case("src/README", Some("README"), Some("README"), None)]
fn test_name_components(
    #[case] input: &str,
    #[case] name: Option<&str>,
    #[case] stem: Option<&str>,
    #[case] ext: Option<&str>,
) {
    let path = NormalizedPath::new(input);
    assert_eq!(path.file_name(), name);
    assert_eq!(path.file_stem(), stem);
    assert_eq!(path.extension(), ext);
}

#[rstest]
#[case("/srv/list", true)]
#[case("C:\\lists", true)]
#[case("filters", false)]
#[case("./filters", false)]
fn test_is_absolute(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(NormalizedPath::new(input).is_absolute(), expected);
}

#[test]
fn test_resolve_against_relative() {
    let root = NormalizedPath::new("/srv/project");
    let dir = NormalizedPath::new("filters");
    assert_eq!(dir.resolve_against(&root).as_str(), "/srv/project/filters");
}

#[test]
fn test_resolve_against_absolute() {
    let root = NormalizedPath::new("/srv/project");
    let dir = NormalizedPath::new("/var/www/filters");
    assert_eq!(dir.resolve_against(&root).as_str(), "/var/www/filters");
}

#[test]
fn test_exists_false_for_nonexistent() {
    let path = NormalizedPath::new("/nonexistent/path/that/does/not/exist");
    assert!(!path.exists());
    assert!(!path.is_file());
    assert!(!path.is_dir());
}
