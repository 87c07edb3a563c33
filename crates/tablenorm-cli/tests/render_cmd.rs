//! Integration tests for the `render` subcommand.

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

fn write_fixture(dir: &tempfile::TempDir, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

#[test]
fn render_emits_html_table_with_spans() {
    let dir = tempfile::tempdir().unwrap();
    let doc = json!({"table": {
        "attributes": {"row_count": 2, "col_count": 2},
        "cells": [
            legacy_cell(0, 0, 1, 1, "A1"),
            legacy_cell(0, 1, 1, 1, "B1"),
            legacy_cell(1, 0, 1, 2, "Merged")
        ]
    }});
    let file = write_fixture(&dir, "doc.json", &doc);

    cmd()
        .arg("render")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("<table>"))
        .stdout(predicate::str::contains("<td>A1</td><td>B1</td>"))
        .stdout(predicate::str::contains("<td colspan=\"2\">Merged</td>"))
        .stdout(predicate::str::contains("</table>"));
}

#[test]
fn render_escapes_text_content() {
    let dir = tempfile::tempdir().unwrap();
    let doc = json!({"table": {
        "attributes": {"row_count": 1, "col_count": 1},
        "cells": [legacy_cell(0, 0, 1, 1, "a<b> & \"c\"")]
    }});
    let file = write_fixture(&dir, "doc.json", &doc);

    cmd()
        .arg("render")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("a&lt;b&gt; &amp; &quot;c&quot;"));
}

#[test]
fn render_multiple_tables_in_document_order() {
    let dir = tempfile::tempdir().unwrap();
    let doc = json!({"body": [
        {"table": {
            "attributes": {"row_count": 1, "col_count": 1},
            "cells": [legacy_cell(0, 0, 1, 1, "first")]
        }},
        {"table": {
            "attributes": {"row_count": 1, "col_count": 1},
            "cells": [legacy_cell(0, 0, 1, 1, "second")]
        }}
    ]});
    let file = write_fixture(&dir, "doc.json", &doc);

    let output = cmd().arg("render").arg(&file).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.find("<td>first</td>").expect("first table missing");
    let second = stdout.find("<td>second</td>").expect("second table missing");
    assert!(first < second);
    assert_eq!(stdout.matches("<table>").count(), 2);
}

#[test]
fn render_with_image_bindings_inlines_images() {
    let dir = tempfile::tempdir().unwrap();
    let doc = json!({"table": {
        "attributes": {"row_count": 1, "col_count": 1},
        "cells": [{
            "list_header": {"attribute": {"vertical_align": "top"}},
            "cell_attributes": {"row_address": 0, "col_address": 0, "row_span": 1, "col_span": 1},
            "paragraphs": [{"records": [
                {"type": "shape_component_picture",
                 "shape_component_picture": {"picture_info": {"bindata_id": 1}}},
                {"type": "para_text", "text": "figure"}
            ]}]
        }]
    }});
    let file = write_fixture(&dir, "doc.json", &doc);

    let bindings = json!({"1": {"data": "data:image/png;base64,AAAA", "format": "png"}});
    let bindings_file = write_fixture(&dir, "bindings.json", &bindings);

    cmd()
        .arg("render")
        .arg(&file)
        .arg("--images")
        .arg(&bindings_file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<img src=\"data:image/png;base64,AAAA\" alt=\"img-1\">figure",
        ));
}

#[test]
fn render_without_bindings_drops_images() {
    let dir = tempfile::tempdir().unwrap();
    let doc = json!({"table": {
        "attributes": {"row_count": 1, "col_count": 1},
        "cells": [{
            "list_header": {"attribute": {"vertical_align": "top"}},
            "cell_attributes": {"row_address": 0, "col_address": 0, "row_span": 1, "col_span": 1},
            "paragraphs": [{"records": [
                {"type": "shape_component_picture",
                 "shape_component_picture": {"picture_info": {"bindata_id": 1}}},
                {"type": "para_text", "text": "figure"}
            ]}]
        }]
    }});
    let file = write_fixture(&dir, "doc.json", &doc);

    cmd()
        .arg("render")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("<td>figure</td>"))
        .stdout(predicate::str::contains("<img").not());
}

#[test]
fn render_vertical_align_style() {
    let dir = tempfile::tempdir().unwrap();
    let doc = json!({"table": {
        "attributes": {"row_count": 1, "col_count": 1},
        "cells": [{
            "list_header": {"attribute": {"vertical_align": "center"}},
            "cell_attributes": {"row_address": 0, "col_address": 0, "row_span": 1, "col_span": 1},
            "paragraphs": [{"records": [{"type": "para_text", "text": "mid"}]}]
        }]
    }});
    let file = write_fixture(&dir, "doc.json", &doc);

    cmd()
        .arg("render")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<td style=\"vertical-align: middle\">mid</td>",
        ));
}

#[test]
fn render_missing_bindings_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(&dir, "doc.json", &json!({"empty": true}));

    cmd()
        .arg("render")
        .arg(&file)
        .arg("--images")
        .arg("no-such-bindings.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bindings file not found"));
}
