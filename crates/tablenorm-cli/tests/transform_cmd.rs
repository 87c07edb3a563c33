//! Integration tests for the `transform` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::PathBuf;

fn cmd() -> Command {
    Command::cargo_bin("tablenorm").unwrap()
}

fn legacy_cell(row: u64, col: u64, row_span: u64, col_span: u64, text: &str) -> serde_json::Value {
    json!({
        "list_header": {"attribute": {"vertical_align": "top"}},
        "cell_attributes": {
            "row_address": row,
            "col_address": col,
            "row_span": row_span,
            "col_span": col_span
        },
        "paragraphs": [{"records": [{"type": "para_text", "text": text}]}]
    })
}

fn document_with_table() -> serde_json::Value {
    json!({
        "body": [
            {"paragraph": {"text": "intro"}},
            {"table": {
                "attributes": {"row_count": 2, "col_count": 2},
                "cells": [
                    legacy_cell(0, 0, 1, 1, "A1"),
                    legacy_cell(0, 1, 1, 1, "B1"),
                    legacy_cell(1, 0, 1, 2, "Merged")
                ]
            }}
        ]
    })
}

fn write_fixture(dir: &tempfile::TempDir, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

#[test]
fn transform_replaces_table_with_schema() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(&dir, "doc.json", &document_with_table());

    let output = cmd().arg("transform").arg(&file).output().unwrap();
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let node = &tree["body"][1];
    assert!(node.get("table").is_none());
    assert_eq!(node["tableSchema"]["rows"][1]["cells"][0]["value"], json!("Merged"));
    assert_eq!(
        node["tableSchema"]["merges"],
        json!([{"start": {"row": 1, "col": 0}, "end": {"row": 1, "col": 1}}])
    );
}

#[test]
fn transform_keep_original_retains_table() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(&dir, "doc.json", &document_with_table());

    let output = cmd()
        .arg("transform")
        .arg(&file)
        .arg("--keep-original")
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let node = &tree["body"][1];
    assert!(node.get("table").is_some());
    assert!(node.get("tableSchema").is_some());
}

#[test]
fn transform_custom_schema_key() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(&dir, "doc.json", &document_with_table());

    cmd()
        .arg("transform")
        .arg(&file)
        .arg("--schema-key")
        .arg("normalized")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"normalized\""))
        .stdout(predicate::str::contains("tableSchema").not());
}

#[test]
fn transform_pretty_prints() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(&dir, "doc.json", &document_with_table());

    cmd()
        .arg("transform")
        .arg(&file)
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::contains("  \"body\""));
}

#[test]
fn transform_missing_file_fails() {
    cmd()
        .arg("transform")
        .arg("no-such-file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn transform_invalid_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    cmd()
        .arg("transform")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn transform_malformed_table_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let doc = json!({"table": {
        "attributes": {"row_count": 1, "col_count": 1},
        "cells": [legacy_cell(0, 0, 1, 1, "x"), legacy_cell(0, 0, 1, 1, "y")]
    }});
    let file = write_fixture(&dir, "doc.json", &doc);

    cmd()
        .arg("transform")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("address collision"));
}

#[test]
fn transform_max_depth_limits_nesting() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = json!({"leaf": true});
    for _ in 0..10 {
        doc = json!({"child": doc});
    }
    let file = write_fixture(&dir, "doc.json", &doc);

    cmd()
        .arg("transform")
        .arg(&file)
        .arg("--max-depth")
        .arg("4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum depth"));
}
