use path_utils::{Error, NormalizedPath, Normalization, normalize};
use rstest::rstest;
use tempfile::TempDir;

#[test]
fn test_normalize_forward_slashes() {
    let path = NormalizedPath::new("foo/bar/baz");
    assert_eq!(path.as_str(), "foo/bar/baz");
}

#[cfg(windows)]
#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("foo\\bar\\baz");
    assert_eq!(path.as_str(), "foo/bar/baz");
}

#[rstest]
#[case("/output/data/", "output/data")]
#[case("///output/data", "output/data")]
#[case("output/data////", "output/data")]
#[case("output/data", "output/data")]
fn test_boundary_separators_are_stripped(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).as_str(), expected);
}

#[cfg(unix)]
#[test]
fn test_backslash_is_an_ordinary_character() {
    let path = NormalizedPath::new("\\foo\\bar\\");
    assert_eq!(path.as_str(), "\\foo\\bar\\");
    assert_eq!(path.segments(), vec!["\\foo\\bar\\"]);
}

#[rstest]
#[case("")]
#[case("/")]
#[case("////")]
#[case("   ")]
#[case("/  /")]
fn test_blank_paths_are_rejected(#[case] input: &str) {
    let temp = TempDir::new().unwrap();
    assert!(matches!(normalize(input, temp.path()), Err(Error::EmptyPath)));
}

#[rstest]
#[case("a/ /b")]
#[case(" /a")]
#[case("a/\t")]
fn test_whitespace_segments_are_rejected(#[case] input: &str) {
    let temp = TempDir::new().unwrap();
    assert!(matches!(
        normalize(input, temp.path()),
        Err(Error::EmptyPathSegment { .. })
    ));
}

#[test]
fn test_existing_path_short_circuits_before_segment_check() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("a/b")).unwrap();

    let decision = normalize("a//b", temp.path()).unwrap();
    assert_eq!(decision, Normalization::AlreadyExists(NormalizedPath::new("a//b")));
}

#[test]
fn test_missing_path_proceeds() {
    let temp = TempDir::new().unwrap();
    let decision = normalize("/new/dir/", temp.path()).unwrap();

    assert!(decision.should_continue());
    assert!(!decision.outcome());
    assert_eq!(decision.path().as_str(), "new/dir");
}

#[test]
fn test_drive_letter_separator_is_not_split() {
    let path = NormalizedPath::new("D:/projects/app");
    assert_eq!(path.segments(), vec!["D:/projects", "app"]);
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("foo/bar/baz.txt");
    let parent = path.parent().unwrap();
    assert_eq!(parent.as_str(), "foo/bar");
}

#[test]
fn test_single_segment_has_no_parent() {
    assert!(NormalizedPath::new("baz.txt").parent().is_none());
}

#[test]
fn test_file_name() {
    let path = NormalizedPath::new("foo/bar/baz.txt");
    assert_eq!(path.file_name(), Some("baz.txt"));
}

#[test]
fn test_resolve_joins_root() {
    let path = NormalizedPath::new("/a/b/");
    let native = path.resolve(std::path::Path::new("base"));
    assert_eq!(native, std::path::PathBuf::from("base/a/b"));
}
