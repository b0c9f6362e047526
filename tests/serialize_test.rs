//! Integration tests for dictionary export and JSON round-trips.

use std::io::Write;

use serde_json::json;

use reportdom::{to_json, to_yaml, Container, Error, JsonFormat, Report};

fn build() -> Report {
    let mut report = Report::new("A report");
    {
        let section = report.section("Section 1", Some("s1"));
        section.add_html("Hello <b>world</b>!", None);
        section.add_markdown("Hello **again**!", None);
        section.section("Nested", None).add_text("deep text", Some("deep"));
    }
    report.add_text("closing", None);
    report
}

#[test]
fn test_to_dict_rich_shape() {
    let expected = json!({
        "title": "A report",
        "children": [
            {"Section": {
                "title": "Section 1",
                "level": 1,
                "identifier": "s1",
                "children": [
                    {"Html": {"html": "Hello <b>world</b>!", "identifier": null}},
                    {"Markdown": {"markdown": "Hello **again**!", "identifier": null}},
                    {"Section": {
                        "title": "Nested",
                        "level": 2,
                        "identifier": null,
                        "children": [
                            {"Text": {"text": "deep text", "identifier": "deep"}}
                        ]
                    }}
                ]
            }},
            {"Text": {"text": "closing", "identifier": null}}
        ]
    });
    assert_eq!(build().to_dict(), expected);
}

#[test]
fn test_to_dict_equal_for_rebuilt_tree() {
    let first = build();
    let second = build();
    assert_eq!(first.to_dict(), second.to_dict());
    assert_eq!(first.to_dict_simple(), second.to_dict_simple());
}

#[test]
fn test_to_dict_preserves_child_order() {
    let mut report = Report::new("R");
    report
        .add_text("3", None)
        .add_text("1", None)
        .add_text("2", None);

    let dict = report.to_dict_simple();
    let order: Vec<&str> = dict["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["Text"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["3", "1", "2"]);
}

#[test]
fn test_node_to_dict() {
    let report = build();
    let section = &report.children()[0];
    assert_eq!(section.to_dict()["Section"]["title"], "Section 1");
    assert!(section.to_dict_simple()["Section"].get("level").is_none());
}

#[test]
fn test_json_round_trip() {
    let report = build();
    let json = to_json(&report, JsonFormat::Pretty).unwrap();
    let parsed = Report::from_json(&json).unwrap();

    assert_eq!(parsed, report);
    assert_eq!(parsed.lookup("deep").unwrap().content(), Some("deep text"));
}

#[test]
fn test_file_round_trip() {
    let report = build();
    let json = to_json(&report, JsonFormat::Compact).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let parsed = Report::from_file(file.path()).unwrap();
    assert_eq!(parsed.to_dict(), report.to_dict());
}

#[test]
fn test_from_reader() {
    let json = r#"{"title": "Minimal"}"#;
    let report = Report::from_reader(json.as_bytes()).unwrap();
    assert_eq!(report.title, "Minimal");
    assert!(report.is_empty());
}

#[test]
fn test_simple_dict_is_not_parseable() {
    let report = build();
    let simple = report.to_dict_simple().to_string();
    assert!(matches!(Report::from_json(&simple), Err(Error::Json(_))));
}

#[test]
fn test_nested_level_mismatch_rejected() {
    let json = json!({
        "title": "R",
        "children": [
            {"Section": {"title": "A", "level": 1, "children": [
                {"Section": {"title": "B", "level": 3, "children": []}}
            ]}}
        ]
    })
    .to_string();

    let err = Report::from_json(&json).unwrap_err();
    assert!(matches!(err, Error::InvalidStructure(_)));
}

#[test]
fn test_yaml_round_trip() {
    let report = build();
    let yaml = to_yaml(&report).unwrap();
    let parsed = Report::from_yaml(&yaml).unwrap();

    assert_eq!(parsed.to_dict(), report.to_dict());
    assert_eq!(parsed.local("s1").unwrap().title(), Some("Section 1"));
}
