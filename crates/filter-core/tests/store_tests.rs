//! Tests for filter file loading and saving

use filter_core::{Error, Rule, load_filters, save_filters};
use filter_test_utils::FilterDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn sample_rules() -> Vec<Rule> {
    let mut lists = Rule::with_query("list:coreos-dev@googlegroups.com");
    lists.label = Some("Mailing Lists/coreos-dev".to_string());
    lists.archive_unless_to_me = true;

    let mut receipts = Rule::with_query_or(["to:plans@tripit.com", "to:receipts@expensify.com"]);
    receipts.delete = true;
    receipts.forward_to = Some("backup@example.com".to_string());

    vec![lists, receipts]
}

#[test]
fn test_load_sample_toml() {
    let dir = FilterDir::new();
    let rules = load_filters(&dir.sample()).unwrap();

    assert_eq!(rules.len(), 3);
    assert_eq!(rules[0].query, "list:coreos-dev@googlegroups.com");
    assert!(rules[0].archive_unless_to_me);
    assert_eq!(
        rules[1].query_or,
        vec!["to:plans@tripit.com", "to:receipts@expensify.com"]
    );
    assert!(rules[2].archive && rules[2].read);
}

#[rstest]
#[case("filters.toml")]
#[case("filters.json")]
#[case("filters.yaml")]
#[case("nested/dir/filters.yml")]
fn test_save_then_load(#[case] name: &str) {
    let dir = FilterDir::new();
    let path = dir.path(name);

    save_filters(&path, &sample_rules()).unwrap();
    let loaded = load_filters(&path).unwrap();

    assert_eq!(loaded, sample_rules());
}

#[test]
fn test_saved_toml_is_minimal() {
    let dir = FilterDir::new();
    let path = dir.path("filters.toml");

    save_filters(&path, &[Rule::with_query("from:a@b.com")]).unwrap();
    let content = dir.read("filters.toml");

    assert!(content.contains("[[filter]]"));
    assert!(content.contains("query = \"from:a@b.com\""));
    assert!(!content.contains("archive"));
    assert!(!content.contains("label"));
}

#[test]
fn test_save_replaces_existing_file() {
    let dir = FilterDir::new();
    let path = dir.write("filters.json", "{\"filter\": [{\"query\": \"old\"}]}");

    save_filters(&path, &[Rule::with_query("new")]).unwrap();

    assert_eq!(load_filters(&path).unwrap(), vec![Rule::with_query("new")]);
    // No temp files left behind.
    let entries = std::fs::read_dir(dir.root()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_unsupported_extension() {
    let dir = FilterDir::new();
    let path = dir.write("filters.ini", "");

    let error = load_filters(&path).unwrap_err();
    assert!(matches!(error, Error::UnsupportedFormat { ref extension } if extension == "ini"));
}

#[test]
fn test_malformed_file_fails_to_decode() {
    let dir = FilterDir::new();
    let path = dir.write("filters.toml", "[[filter]\nquery = ");

    let error = load_filters(&path).unwrap_err();
    match error {
        Error::FileDecodeFailed { format, .. } => assert_eq!(format, "TOML"),
        other => panic!("expected decode failure, got {:?}", other),
    }
}

#[test]
fn test_invalid_rules_still_parse() {
    // Query exclusivity is a compile-time check, not a parse error.
    let dir = FilterDir::new();
    let path = dir.write(
        "filters.toml",
        "[[filter]]\nlabel = \"x\"\n\n[[filter]]\nquery = \"a\"\nqueryOr = [\"b\"]\n",
    );

    let rules = load_filters(&path).unwrap();
    assert_eq!(rules.len(), 2);
}

#[test]
fn test_save_over_directory_fails_without_leftovers() {
    let dir = FilterDir::new();
    let target = dir.path("out.toml");
    std::fs::create_dir(&target).unwrap();

    let error = save_filters(&target, &sample_rules()).unwrap_err();
    assert!(matches!(error, Error::FileWriteFailed { ref path, .. } if *path == target));

    let entries: Vec<String> = std::fs::read_dir(dir.root())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["out.toml".to_string()]);
}
