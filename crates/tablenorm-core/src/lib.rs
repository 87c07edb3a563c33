//! tablenorm-core: Parser-independent table normalization types and algorithms.
//!
//! This crate provides the legacy source-table model, the normalized schema
//! model, and the pure conversion pipeline used by tablenorm-rs: grid
//! building, per-cell content extraction, schema assembly, and HTML
//! rendering. Everything is allocation-only over immutable inputs — no I/O,
//! no shared state — so any number of conversions may run concurrently over
//! independent inputs without synchronization.

pub mod content;
pub mod error;
pub mod grid;
pub mod html;
pub mod images;
pub mod legacy;
pub mod normalize;
pub mod schema;

pub use content::{CellContent, convert_vertical_align, extract_cell_content};
pub use error::TableError;
pub use grid::Grid;
pub use html::render_html;
pub use images::{ImageBinding, ImageBindings};
pub use legacy::{
    CellAddress, ListHeader, ListHeaderAttribute, Paragraph, ParagraphRecord, PictureInfo,
    RECORD_PICTURE, RECORD_TEXT, ShapeComponentPicture, SourceCell, SourceTable, TableAttributes,
};
pub use normalize::normalize_table;
pub use schema::{
    CellImage, CellPosition, CellStyle, CellValue, MergeRange, TableSchema, TableSchemaCell,
    TableSchemaRow, VerticalAlign,
};
