//! Error types for table normalization.
//!
//! Provides [`TableError`], the typed failure surface of the engine.
//! Malformed-table variants carry the offending address and grid bounds so
//! callers can log and debug a rejected table without the source document.

use std::fmt;

use crate::schema::MergeRange;

/// Errors produced while normalizing a legacy table or transforming a
/// document tree.
///
/// The first four variants are the malformed-table kinds: fatal for the
/// table in question. The tree transformer treats them as fatal for the
/// whole transform — a schema-consuming caller cannot safely assume partial
/// output is complete.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// Two source cells claim the same start address.
    AddressCollision {
        /// Row of the contested address.
        row: usize,
        /// Column of the contested address.
        col: usize,
    },
    /// A cell's span is zero or extends past the grid bounds.
    SpanOutOfBounds {
        /// Row address of the offending cell.
        row: usize,
        /// Column address of the offending cell.
        col: usize,
        /// Declared row span.
        row_span: usize,
        /// Declared column span.
        col_span: usize,
        /// Number of rows in the grid.
        row_count: usize,
        /// Number of columns in the grid.
        col_count: usize,
    },
    /// Two merge ranges intersect.
    MergeOverlap {
        /// The earlier range in `(start.row, start.col)` order.
        first: MergeRange,
        /// The later, intersecting range.
        second: MergeRange,
    },
    /// A cell was placed at a position merged away by another cell's span.
    CoveredCell {
        /// Row of the covered cell.
        row: usize,
        /// Column of the covered cell.
        col: usize,
    },
    /// A value matched the legacy table shape but could not be ingested.
    InvalidShape(String),
    /// Tree nesting exceeded the transformer's configured ceiling.
    DepthExceeded {
        /// The ceiling that was hit.
        max_depth: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::AddressCollision { row, col } => {
                write!(f, "address collision: two cells start at ({row}, {col})")
            }
            TableError::SpanOutOfBounds {
                row,
                col,
                row_span,
                col_span,
                row_count,
                col_count,
            } => write!(
                f,
                "span out of bounds: cell at ({row}, {col}) spans {row_span}x{col_span} in a {row_count}x{col_count} grid"
            ),
            TableError::MergeOverlap { first, second } => write!(
                f,
                "merge overlap: ({}, {})..({}, {}) intersects ({}, {})..({}, {})",
                first.start.row,
                first.start.col,
                first.end.row,
                first.end.col,
                second.start.row,
                second.start.col,
                second.end.row,
                second.end.col,
            ),
            TableError::CoveredCell { row, col } => {
                write!(
                    f,
                    "covered cell: ({row}, {col}) lies inside another cell's merge region"
                )
            }
            TableError::InvalidShape(msg) => write!(f, "invalid table shape: {msg}"),
            TableError::DepthExceeded { max_depth } => {
                write!(f, "tree nesting exceeds the maximum depth of {max_depth}")
            }
        }
    }
}

impl std::error::Error for TableError {}
