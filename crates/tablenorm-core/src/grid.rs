//! Grid builder: dense placement of sparse, span-addressed cells.
//!
//! Places each legacy cell into a `row_count x col_count` grid by its
//! explicit address and derives the merge-range list from spans greater
//! than one. Placement is by address, so input order never affects the
//! result; the merge list is emitted in ascending `(start.row, start.col)`
//! order to keep output deterministic for testing and diffing.

use crate::error::TableError;
use crate::legacy::{SourceCell, SourceTable};
use crate::schema::{CellPosition, MergeRange};

/// A dense view of a legacy table.
///
/// Every grid position holds either a reference to the source cell
/// explicitly placed there or is vacant. Positions covered by a merge
/// without being its start are "merged away" and absent from the
/// normalized schema's row lists.
#[derive(Debug)]
pub struct Grid<'a> {
    row_count: usize,
    col_count: usize,
    cells: Vec<Option<&'a SourceCell>>,
    merges: Vec<MergeRange>,
}

impl<'a> Grid<'a> {
    /// Build the dense grid and derived merge list for a source table.
    ///
    /// Fails with the offending address when two cells collide, a span is
    /// zero or leaves the grid, two merge regions intersect, or a cell
    /// starts inside another cell's merge region. Whether a rejected table
    /// aborts the whole-document conversion or is skipped is the caller's
    /// policy, not the builder's.
    pub fn build(table: &'a SourceTable) -> Result<Self, TableError> {
        let row_count = table.attributes.row_count;
        let col_count = table.attributes.col_count;

        let size = row_count.checked_mul(col_count).ok_or_else(|| {
            TableError::InvalidShape(format!(
                "grid of {row_count}x{col_count} cells exceeds addressable size"
            ))
        })?;

        let mut cells: Vec<Option<&SourceCell>> = vec![None; size];
        let mut merges = Vec::new();

        for cell in &table.cells {
            let addr = &cell.cell_attributes;
            let row_end = addr.row_address.checked_add(addr.row_span);
            let col_end = addr.col_address.checked_add(addr.col_span);
            let fits = match (row_end, col_end) {
                (Some(row_end), Some(col_end)) => row_end <= row_count && col_end <= col_count,
                _ => false,
            };
            if addr.row_span == 0 || addr.col_span == 0 || !fits {
                return Err(TableError::SpanOutOfBounds {
                    row: addr.row_address,
                    col: addr.col_address,
                    row_span: addr.row_span,
                    col_span: addr.col_span,
                    row_count,
                    col_count,
                });
            }

            let slot = &mut cells[addr.row_address * col_count + addr.col_address];
            if slot.is_some() {
                return Err(TableError::AddressCollision {
                    row: addr.row_address,
                    col: addr.col_address,
                });
            }
            *slot = Some(cell);

            if addr.row_span > 1 || addr.col_span > 1 {
                merges.push(MergeRange::new(
                    CellPosition::new(addr.row_address, addr.col_address),
                    CellPosition::new(
                        addr.row_address + addr.row_span - 1,
                        addr.col_address + addr.col_span - 1,
                    ),
                ));
            }
        }

        merges.sort_by_key(|m| (m.start.row, m.start.col));

        for (i, first) in merges.iter().enumerate() {
            for second in &merges[i + 1..] {
                if first.overlaps(second) {
                    return Err(TableError::MergeOverlap {
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        let grid = Self {
            row_count,
            col_count,
            cells,
            merges,
        };

        // A cell placed inside another cell's merge region would be
        // silently swallowed by the merged-away skip; reject it instead.
        for row in 0..row_count {
            for col in 0..col_count {
                if grid.cell_at(row, col).is_some() && grid.is_merged_away(row, col) {
                    return Err(TableError::CoveredCell { row, col });
                }
            }
        }

        Ok(grid)
    }

    /// Number of grid rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of grid columns.
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// The derived merge ranges in ascending `(start.row, start.col)` order.
    pub fn merges(&self) -> &[MergeRange] {
        &self.merges
    }

    /// The source cell placed at `(row, col)`, if any.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&'a SourceCell> {
        self.cells[row * self.col_count + col]
    }

    /// Whether `(row, col)` is covered by a merge without being its start.
    pub fn is_merged_away(&self, row: usize, col: usize) -> bool {
        let pos = CellPosition::new(row, col);
        self.merges
            .iter()
            .any(|m| m.contains(pos) && !m.is_start(pos))
    }
}
