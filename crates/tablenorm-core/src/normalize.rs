//! Schema assembly: legacy table to normalized schema.
//!
//! Combines grid placement with per-cell content extraction: a row-major
//! traversal that skips merged-away positions and emits present cells in
//! column order. Vacant positions — no cell placed there, which should not
//! occur in well-formed input but must be representable — become
//! `null`-valued cells.

use crate::content::{convert_vertical_align, extract_cell_content};
use crate::error::TableError;
use crate::grid::Grid;
use crate::images::ImageBindings;
use crate::legacy::SourceTable;
use crate::schema::{
    CellStyle, CellValue, TableSchema, TableSchemaCell, TableSchemaRow, VerticalAlign,
};

/// Convert a legacy source table into its normalized schema.
///
/// Fails when the grid builder rejects the table (see [`Grid::build`]).
/// Output is sparse: `style` is attached only when the alignment differs
/// from the default, `images` only when non-empty, `merges` only when
/// non-empty.
pub fn normalize_table(
    table: &SourceTable,
    bindings: Option<&ImageBindings>,
) -> Result<TableSchema, TableError> {
    let grid = Grid::build(table)?;
    let mut rows = Vec::with_capacity(grid.row_count());

    for row in 0..grid.row_count() {
        let mut cells = Vec::new();
        for col in 0..grid.col_count() {
            if grid.is_merged_away(row, col) {
                continue;
            }
            let cell = match grid.cell_at(row, col) {
                Some(source) => {
                    let content = extract_cell_content(source, bindings);
                    let align =
                        convert_vertical_align(&source.list_header.attribute.vertical_align);
                    TableSchemaCell {
                        value: CellValue::Text(content.text),
                        images: content.images,
                        style: (align != VerticalAlign::Top).then_some(CellStyle {
                            vertical_align: Some(align),
                        }),
                    }
                }
                None => TableSchemaCell::vacant(),
            };
            cells.push(cell);
        }
        rows.push(TableSchemaRow { cells });
    }

    Ok(TableSchema {
        rows,
        merges: grid.merges().to_vec(),
        caption: None,
    })
}
