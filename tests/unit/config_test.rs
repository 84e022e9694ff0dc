//! Tests for loading expectation files

use eventchecker::adapters::replay;
use eventchecker::config::{ConfigError, ExpectationFile, MatchOrder};
use eventchecker::core::models::{Event, EventKind};
use eventchecker::core::ports::EventChecker;
use serde_json::json;

use crate::common::Scratch;

const EXPECT: &str = r#"
ordering = "ordered"

[[expect]]
name = "curl exec"
kind = "process_exec"

[expect.fields]
"/process/binary" = { suffix = "/curl" }
"/process/arguments" = { regex = "^https://[a-z.]+/?$" }
"/process/uid" = 0

[[expect]]
name = "curl exit"
kind = "process_exit"

[expect.fields]
"/process/binary" = { full = "/usr/bin/curl" }
"/status" = 0
"#;

fn curl(kind: EventKind, uid: u32) -> Event {
    Event::new(
        kind,
        json!({
            "process": {"binary": "/usr/bin/curl", "arguments": "https://example.com", "uid": uid},
            "status": 0
        }),
    )
}

#[test]
fn test_load_from_disk() {
    let scratch = Scratch::new();
    let path = scratch.file("curl.toml", EXPECT);

    let file = ExpectationFile::load(&path).unwrap();
    assert_eq!(file.ordering, MatchOrder::Ordered);
    assert_eq!(file.expectations.len(), 2);
    assert_eq!(file.expectations[0].name.as_deref(), Some("curl exec"));
}

#[test]
fn test_missing_file() {
    let scratch = Scratch::new();
    let path = scratch.file("present.toml", "");

    let err = ExpectationFile::load(&path.with_file_name("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_malformed_file() {
    let scratch = Scratch::new();
    let path = scratch.file("bad.toml", "ordering = \"sideways\"\n");

    let err = ExpectationFile::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_compiled_checks_match_fields() {
    let file = ExpectationFile::parse(EXPECT).unwrap();
    let checks = file.build_checks().unwrap();

    assert!(checks[0].check_event(&curl(EventKind::ProcessExec, 0)).is_ok());

    let err = checks[0].check_event(&curl(EventKind::ProcessExec, 1000)).unwrap_err();
    assert_eq!(err.message(), "curl exec: /process/uid is 1000, expected 0");

    let err = checks[1].check_event(&curl(EventKind::ProcessExec, 0)).unwrap_err();
    assert_eq!(err.message(), "curl exit: expected process_exit event, got process_exec");
}

#[test]
fn test_missing_field_is_reported() {
    let file = ExpectationFile::parse(EXPECT).unwrap();
    let checks = file.build_checks().unwrap();

    let bare = Event::new(EventKind::ProcessExit, json!({"status": 0}));
    let err = checks[1].check_event(&bare).unwrap_err();
    assert_eq!(err.message(), "curl exit: /process/binary is missing");
}

#[test]
fn test_ordering_override() {
    let file = ExpectationFile::parse(EXPECT).unwrap();
    let stream = concat!(
        r#"{"process_exit":{"process":{"binary":"/usr/bin/curl"},"status":0}}"#,
        "\n",
        r#"{"process_exec":{"process":{"binary":"/usr/bin/curl","arguments":"https://example.com","uid":0}}}"#,
        "\n",
    );

    let mut ordered = file.build_checker().unwrap();
    assert!(!replay(stream.as_bytes(), &mut ordered, None).unwrap().passed());

    let mut unordered = file.build_checker_with(MatchOrder::Unordered).unwrap();
    assert!(replay(stream.as_bytes(), &mut unordered, None).unwrap().passed());
}

#[test]
fn test_misspelled_matcher_is_rejected() {
    let file = ExpectationFile::parse(
        "[[expect]]\nkind = \"process_exec\"\n[expect.fields]\n\"/process/binary\" = { prefx = \"/usr\" }\n",
    )
    .unwrap();

    let Err(err) = file.build_checks() else {
        panic!("misspelled matcher accepted");
    };
    assert!(matches!(
        &err,
        ConfigError::InvalidMatcher { index: 1, pointer, keys }
            if pointer == "/process/binary" && keys == &["prefx"]
    ));
    assert!(err.to_string().contains("unknown matcher {prefx}"));
}

#[test]
fn test_matcher_with_two_keys_is_rejected() {
    let file = ExpectationFile::parse(
        "[[expect]]\nkind = \"process_exec\"\n[expect.fields]\n\"/process/binary\" = { prefix = \"/usr\", suffix = \"curl\" }\n",
    )
    .unwrap();

    let Err(err) = file.build_checker() else {
        panic!("ambiguous matcher accepted");
    };
    assert!(matches!(err, ConfigError::InvalidMatcher { index: 1, ref keys, .. } if keys.len() == 2));
}
