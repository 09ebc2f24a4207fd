use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn ldctx(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ldctx"))
        .args(args)
        .output()
        .expect("failed to run ldctx")
}

#[test]
fn test_check_exit_codes() {
    assert_eq!(ldctx(&["check", "--json", "null"]).status.code(), Some(0));
    assert_eq!(ldctx(&["check", "--json", r#"{"a":1}"#]).status.code(), Some(1));
    assert_eq!(ldctx(&["check", "--json", "[1,"]).status.code(), Some(2));
}

#[test]
fn test_check_text_output() {
    let ok = ldctx(&["check", "--json", r#"["http://example.org/", null]"#]);
    assert_eq!(String::from_utf8_lossy(&ok.stdout).trim(), "valid");

    let bad = ldctx(&["check", "--json", r#"{"a":1}"#]);
    assert!(String::from_utf8_lossy(&bad.stdout).starts_with(r#"$["a"]: expected"#));
}

#[test]
fn test_check_json_output() {
    let out = ldctx(&["check", "--format", "json", "--json", r#"{"a":1}"#]);
    assert_eq!(out.status.code(), Some(1));
    let report: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["valid"], json!(false));
    assert_eq!(report["errors"][0]["path"], json!("/a"));
    assert_eq!(report["errors"][0]["kind"], json!("invalid_context_definition_value"));
    assert!(report["errors"][0]["message"].is_string());
}

#[test]
fn test_check_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ldctx"))
        .arg("check")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn ldctx");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"@vocab": "http://schema.org/"}"#)
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "valid");
}

#[test]
fn test_check_closed_keywords() {
    let input = r#"{"@foo":"x"}"#;
    assert_eq!(ldctx(&["check", "--json", input]).status.code(), Some(0));
    assert_eq!(ldctx(&["check", "--closed-keywords", "--json", input]).status.code(), Some(1));
}

#[test]
fn test_check_document() {
    let ok = r#"{"@context": {"name": "http://schema.org/name"}, "name": "Ann"}"#;
    assert_eq!(ldctx(&["check", "--document", "--json", ok]).status.code(), Some(0));

    let bad = ldctx(&["check", "--document", "--format", "json", "--json", r#"{"@context":{"@version":1.1}}"#]);
    assert_eq!(bad.status.code(), Some(1));
    let report: Value = serde_json::from_slice(&bad.stdout).unwrap();
    assert_eq!(report["errors"][0]["path"], json!("/@context/@version"));
}

#[test]
fn test_schema_subcommand() {
    let out = ldctx(&["schema"]);
    assert_eq!(out.status.code(), Some(0));
    let schema: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(schema["oneOf"][1]["type"], json!("array"));
}
