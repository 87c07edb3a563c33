//! HTML rendering for normalized table schemas.
//!
//! Converts a schema back into an HTML `<table>`, re-deriving
//! `rowspan`/`colspan` attributes from the merge-range list. Because row
//! cell lists were assembled skipping merged-away slots, a column cursor
//! driven purely by the merge map reconstructs the original dense grid
//! shape without needing a column count at render time.

use std::collections::HashMap;

use crate::schema::{CellValue, MergeRange, TableSchema, TableSchemaCell};

/// Span bookkeeping for one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergeState {
    /// Start of a merge: the cell emitted here carries these spans.
    Span { row_span: usize, col_span: usize },
    /// Covered by a merge without being its start: emit nothing.
    Skip,
}

/// Render a schema as an HTML table.
///
/// Rows are emitted in order; within a row the column cursor skips
/// positions covered by a merge and consumes the row's next cell
/// otherwise. Text is escaped for the markup-significant characters
/// (`&`, `<`, `>`, `"`, newline to `<br>`); images precede the text
/// within the same cell.
pub fn render_html(schema: &TableSchema) -> String {
    let merge_map = build_merge_map(&schema.merges);

    let mut html = String::from("<table>\n");
    if let Some(caption) = &schema.caption {
        html.push_str("<caption>");
        html.push_str(&escape_html(caption));
        html.push_str("</caption>\n");
    }
    html.push_str("<tbody>\n");

    for (row_idx, row) in schema.rows.iter().enumerate() {
        html.push_str("<tr>");

        let mut cell_idx = 0;
        let mut col_idx = 0;
        while cell_idx < row.cells.len() {
            let state = merge_map.get(&(row_idx, col_idx)).copied();
            if state == Some(MergeState::Skip) {
                col_idx += 1;
                continue;
            }

            let cell = &row.cells[cell_idx];
            cell_idx += 1;
            col_idx += 1;
            render_cell(&mut html, cell, state);
        }

        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// Emit one `<td>` element with its span attributes, style, images, and text.
fn render_cell(html: &mut String, cell: &TableSchemaCell, state: Option<MergeState>) {
    html.push_str("<td");
    if let Some(MergeState::Span { row_span, col_span }) = state {
        if row_span > 1 {
            html.push_str(&format!(" rowspan=\"{row_span}\""));
        }
        if col_span > 1 {
            html.push_str(&format!(" colspan=\"{col_span}\""));
        }
    }
    if let Some(align) = cell.style.as_ref().and_then(|s| s.vertical_align) {
        html.push_str(&format!(" style=\"vertical-align: {}\"", align.as_str()));
    }
    html.push('>');

    for image in &cell.images {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            image.data, image.id
        ));
    }

    html.push_str(&cell_text(cell));
    html.push_str("</td>");
}

/// The escaped text payload of a cell (`null` renders as empty).
fn cell_text(cell: &TableSchemaCell) -> String {
    match &cell.value {
        CellValue::Text(text) => escape_html(text),
        CellValue::Number(n) => n.to_string(),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Null => String::new(),
    }
}

/// Map each merged position to its span (at the start) or a skip marker.
fn build_merge_map(merges: &[MergeRange]) -> HashMap<(usize, usize), MergeState> {
    let mut map = HashMap::new();
    for merge in merges {
        map.insert(
            (merge.start.row, merge.start.col),
            MergeState::Span {
                row_span: merge.row_span(),
                col_span: merge.col_span(),
            },
        );
        for row in merge.start.row..=merge.end.row {
            for col in merge.start.col..=merge.end.col {
                if (row, col) != (merge.start.row, merge.start.col) {
                    map.insert((row, col), MergeState::Skip);
                }
            }
        }
    }
    map
}

/// Escape the markup-significant characters; newlines become `<br>`.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\n', "<br>")
}
