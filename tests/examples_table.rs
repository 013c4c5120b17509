use examples_table::build_examples_table;
use examples_table::ExamplesError;
use examples_table::ExamplesProvider;
use examples_table::FsTablePersister;
use examples_table::GeneralDefaults;
use examples_table::MemorySource;
use examples_table::ParseError;
use examples_table::ProviderConfig;
use examples_table::RetryPolicy;
use examples_table::SheetData;
use examples_table::ValidationError;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::tempdir;

fn sheet(tags: &[&str], values: &[&str]) -> Vec<Vec<String>> {
    vec![
        tags.iter().map(|tag| format!("label of {tag}")).collect(),
        values.iter().map(|value| value.to_string()).collect(),
        tags.iter().map(|tag| tag.to_string()).collect(),
    ]
}

fn data(sheets: Vec<(&str, Vec<Vec<String>>)>) -> SheetData {
    sheets
        .into_iter()
        .map(|(title, columns)| (title.to_owned(), columns))
        .collect()
}

fn reference_path(reference: &str) -> PathBuf {
    url::Url::parse(reference).unwrap().to_file_path().unwrap()
}

#[test]
fn two_runs_with_general_defaults() {
    let dir = tempdir().expect("create temp dir");
    let mut persister = FsTablePersister::new(dir.path());
    let defaults: GeneralDefaults = [("Env", "prod")].into_iter().collect();
    let text = build_examples_table(
        data(vec![
            ("Run1", sheet(&["Button"], &["Submit"])),
            ("Run2", sheet(&["Button"], &["Cancel"])),
        ]),
        Some(&defaults),
        &mut persister,
    )
    .unwrap();
    assert_eq!(text, "|RunName|Env|Button|\n|Run1|prod|Submit|\n|Run2|prod|Cancel|\n");
}

#[test]
fn nested_structure_written_to_file() {
    let dir = tempdir().expect("create temp dir");
    let mut persister = FsTablePersister::new(dir.path());
    let text = build_examples_table(
        data(vec![(
            "Run1",
            sheet(
                &["@startNestedStructure Items", "@Item#Name", "@endNestedStructure"],
                &["", "Widget", ""],
            ),
        )]),
        None,
        &mut persister,
    )
    .unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "|RunName|Items|");
    let reference = lines[1]
        .strip_prefix("|Run1|")
        .and_then(|rest| rest.strip_suffix('|'))
        .unwrap();
    assert!(reference.starts_with("file:///"));
    assert!(!reference.contains('\\'));

    let path = reference_path(reference);
    assert!(path.starts_with(dir.path().join("data").join("tables")));
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "|label|type|value|\n|Name|Item|Widget|\n"
    );
}

#[test]
fn ignored_tags_never_create_columns() {
    let dir = tempdir().expect("create temp dir");
    let mut persister = FsTablePersister::new(dir.path());
    let text = build_examples_table(
        data(vec![("Run1", sheet(&["", "!Button", "Link"], &["a", "b", "c"]))]),
        None,
        &mut persister,
    )
    .unwrap();
    assert_eq!(text, "|RunName|Link|\n|Run1|c|\n");
}

#[test]
fn malformed_tag_emits_no_table() {
    let dir = tempdir().expect("create temp dir");
    let mut persister = FsTablePersister::new(dir.path());
    let error = build_examples_table(
        data(vec![("Run1", sheet(&["@badtag"], &["x"]))]),
        None,
        &mut persister,
    )
    .unwrap_err();
    assert!(matches!(
        error.root(),
        ExamplesError::ParseError(ParseError::MalformedNestedTag(_))
    ));
}

#[test]
fn two_column_sheet_is_rejected() {
    let dir = tempdir().expect("create temp dir");
    let mut persister = FsTablePersister::new(dir.path());
    let mut columns = sheet(&["@startNestedStructure Items"], &[""]);
    columns.pop();
    let error = build_examples_table(data(vec![("Run1", columns)]), None, &mut persister).unwrap_err();
    assert!(matches!(
        error.root(),
        ExamplesError::ValidationError(ValidationError::ShapeMismatch { .. })
    ));
    assert!(!dir.path().join("data").exists());
}

#[test]
fn malformed_sheet_after_nested_sheet_writes_no_file() {
    let dir = tempdir().expect("create temp dir");
    let mut persister = FsTablePersister::new(dir.path());
    let mut columns = sheet(&["Button"], &["Submit"]);
    columns.pop();
    let error = build_examples_table(
        data(vec![
            (
                "Run1",
                sheet(
                    &["@startNestedStructure Items", "@Item#Name", "@endNestedStructure"],
                    &["", "Widget", ""],
                ),
            ),
            ("Run2", columns),
        ]),
        None,
        &mut persister,
    )
    .unwrap_err();
    assert_eq!(error.to_string(), "Sheet 'Run2' has wrong shape: expected 3 columns, found 2");
    assert!(!dir.path().join("data").exists());
}

#[test]
fn provider_from_config() {
    let dir = tempdir().expect("create temp dir");
    let mut config = ProviderConfig::new("general");
    config.resources_dir = dir.path().to_path_buf();
    config.retry = RetryPolicy::never();

    let mut source = MemorySource::new();
    source
        .insert("general", data(vec![("defaults", sheet(&["Env", "!Comment"], &["prod", "x"]))]))
        .insert(
            "checkout",
            data(vec![
                (
                    "Guest",
                    sheet(
                        &["User", "@startNestedStructure Cart", "@product#Book", "@endNestedStructure"],
                        &["guest", "", "2", ""],
                    ),
                ),
                ("!Wip", sheet(&["User"], &["nobody"])),
                (
                    "Member",
                    sheet(&["User", "@startNestedStructure Cart", "@endNestedStructure"], &["member", "", ""]),
                ),
            ]),
        );

    let mut provider = ExamplesProvider::from_config(source, &config);
    let text = provider.examples_table("checkout").unwrap();
    let rows: Vec<Vec<&str>> = text
        .lines()
        .map(|line| line.trim_matches('|').split('|').collect())
        .collect();
    assert_eq!(rows[0], vec!["RunName", "Env", "User", "Cart"]);
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[1][..3], &["Guest", "prod", "guest"]);
    assert_eq!(&rows[2][..3], &["Member", "prod", "member"]);
    assert_eq!(
        std::fs::read_to_string(reference_path(rows[1][3])).unwrap(),
        "|label|type|value|\n|Book|product|2|\n"
    );
    assert_eq!(
        std::fs::read_to_string(reference_path(rows[2][3])).unwrap(),
        "|label|type|value|\n"
    );
}
