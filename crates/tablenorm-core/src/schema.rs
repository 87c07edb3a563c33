//! Normalized table schema types.
//!
//! The dense, dictionary-free representation of a table: ordered rows of
//! present cells plus a separate list of merge ranges. A schema is a
//! transient, endpoint-serializable value — with the `serde` feature it
//! takes the JSON wire shape consumed by schema-aware frontends, with a
//! sparse contract: fields at their defaults are omitted to keep serialized
//! size small.

/// Zero-based grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPosition {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl CellPosition {
    /// Create a position from row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Inclusive rectangular grid region collapsed into one visual cell.
///
/// Invariant: `start.row <= end.row` and `start.col <= end.col`; merge
/// ranges within a single schema never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeRange {
    /// Top-left corner (the merge's start cell).
    pub start: CellPosition,
    /// Bottom-right corner, inclusive.
    pub end: CellPosition,
}

impl MergeRange {
    /// Create a range from its corners.
    pub fn new(start: CellPosition, end: CellPosition) -> Self {
        Self { start, end }
    }

    /// Number of rows the range covers.
    pub fn row_span(&self) -> usize {
        self.end.row - self.start.row + 1
    }

    /// Number of columns the range covers.
    pub fn col_span(&self) -> usize {
        self.end.col - self.start.col + 1
    }

    /// Whether `pos` lies within the range bounds.
    pub fn contains(&self, pos: CellPosition) -> bool {
        pos.row >= self.start.row
            && pos.row <= self.end.row
            && pos.col >= self.start.col
            && pos.col <= self.end.col
    }

    /// Whether `pos` is the range's start cell.
    pub fn is_start(&self, pos: CellPosition) -> bool {
        pos == self.start
    }

    /// Whether two ranges share at least one grid position.
    pub fn overlaps(&self, other: &MergeRange) -> bool {
        self.start.row <= other.end.row
            && other.start.row <= self.end.row
            && self.start.col <= other.end.col
            && other.start.col <= self.end.col
    }
}

/// A cell's scalar payload (`string | number | boolean | null` on the wire).
///
/// `Null` denotes a structurally empty slot: no legacy cell was placed at
/// that grid position.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum CellValue {
    /// Extracted text content.
    Text(String),
    /// Numeric content.
    Number(f64),
    /// Boolean content.
    Bool(bool),
    /// Structurally empty slot.
    #[default]
    Null,
}

impl CellValue {
    /// Whether this is the empty-slot marker.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// The text payload, if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

/// Vertical alignment hint for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum VerticalAlign {
    /// Align to the top edge (the default; omitted when serialized).
    #[default]
    Top,
    /// Center vertically.
    Middle,
    /// Align to the bottom edge.
    Bottom,
}

impl VerticalAlign {
    /// The CSS keyword for this alignment.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
        }
    }
}

/// Style hints attached to a cell.
///
/// Only emitted when something differs from the defaults; a cell with
/// top alignment carries no style at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CellStyle {
    /// Vertical alignment, when it differs from top.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub vertical_align: Option<VerticalAlign>,
}

/// An image resolved into a cell from the document's binary attachments.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellImage {
    /// Stable identifier derived from the attachment id (`img-{id}`).
    pub id: String,
    /// Inline data-URI payload.
    pub data: String,
    /// Image format tag (e.g. `png`).
    pub format: String,
}

/// A present (non-merged-away) cell.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSchemaCell {
    /// Scalar payload; `null` marks a structurally empty slot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: CellValue,
    /// Resolved images, emitted only when non-empty.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub images: Vec<CellImage>,
    /// Style hints, emitted only when present.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub style: Option<CellStyle>,
}

impl TableSchemaCell {
    /// A structurally empty slot: no legacy cell was placed there.
    pub fn vacant() -> Self {
        Self::default()
    }
}

/// An ordered row of present cells.
///
/// A row holds exactly the grid columns that are either uncovered by any
/// merge or the start cell of one; merged-away positions are absent.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSchemaRow {
    /// Present cells in column order.
    pub cells: Vec<TableSchemaCell>,
}

/// The normalized table: rows of present cells plus the merge list.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSchema {
    /// Ordered rows.
    pub rows: Vec<TableSchemaRow>,
    /// Merge ranges in ascending `(start.row, start.col)` order, emitted
    /// only when non-empty.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub merges: Vec<MergeRange>,
    /// Table caption, when the producing context supplies one.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub caption: Option<String>,
}
