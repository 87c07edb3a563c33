//! Legacy source-table model.
//!
//! Passive data shapes describing a sparse table as received from the
//! external document parser: row/column counts plus a list of cells, each
//! placed by an explicit row/column address and carrying a row/column span
//! and nested paragraph content. A table is produced once per occurrence in
//! a document, consumed once by the grid builder, and never mutated.
//!
//! The wire shape is tolerant: unknown fields are ignored, spans default to
//! 1 when absent, and content records of unrecognized kinds pass through
//! extraction untouched.

/// Record kind carrying a text run.
pub const RECORD_TEXT: &str = "para_text";

/// Record kind carrying an embedded picture.
pub const RECORD_PICTURE: &str = "shape_component_picture";

/// A sparse table as emitted by the parser.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceTable {
    /// Table-level attributes.
    pub attributes: TableAttributes,
    /// The placed cells, in parser emission order.
    pub cells: Vec<SourceCell>,
}

/// Table-level attributes (the subset the engine places cells with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableAttributes {
    /// Number of grid rows.
    pub row_count: usize,
    /// Number of grid columns.
    pub col_count: usize,
}

/// One legacy cell: explicit address, span, alignment, and content.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceCell {
    /// Per-cell list header (alignment lives here in the wire shape).
    #[cfg_attr(feature = "serde", serde(default))]
    pub list_header: ListHeader,
    /// Grid placement and span.
    pub cell_attributes: CellAddress,
    /// Nested paragraph content, in document order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub paragraphs: Vec<Paragraph>,
}

/// Grid placement for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Zero-based row of the cell's start position.
    pub row_address: usize,
    /// Zero-based column of the cell's start position.
    pub col_address: usize,
    /// Number of rows the cell covers (at least 1).
    #[cfg_attr(feature = "serde", serde(default = "default_span"))]
    pub row_span: usize,
    /// Number of columns the cell covers (at least 1).
    #[cfg_attr(feature = "serde", serde(default = "default_span"))]
    pub col_span: usize,
}

#[cfg(feature = "serde")]
fn default_span() -> usize {
    1
}

/// Per-cell list header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListHeader {
    /// Header attributes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attribute: ListHeaderAttribute,
}

/// List-header attributes carried per cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListHeaderAttribute {
    /// Source vertical alignment (`top`, `center`, or `bottom` on the wire;
    /// anything else maps to top at extraction time).
    #[cfg_attr(feature = "serde", serde(default))]
    pub vertical_align: String,
}

/// A paragraph: an ordered run of content records.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paragraph {
    /// Content records, in document order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub records: Vec<ParagraphRecord>,
}

/// One content record. `kind` discriminates; only [`RECORD_TEXT`] and
/// [`RECORD_PICTURE`] records contribute to extraction.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParagraphRecord {
    /// Record kind tag.
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: String,
    /// Text payload of a text record.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub text: Option<String>,
    /// Picture payload of an embedded-picture record.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub shape_component_picture: Option<ShapeComponentPicture>,
}

/// Embedded-picture payload carrying the attachment reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeComponentPicture {
    /// Picture metadata, when present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub picture_info: Option<PictureInfo>,
}

/// Reference to a binary attachment by numeric identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PictureInfo {
    /// Positive attachment identifier assigned by the parser.
    pub bindata_id: u32,
}
