//! tablenorm: normalize legacy span-addressed document tables.
//!
//! This is the public API facade crate for tablenorm-rs. It re-exports the
//! types and pipeline from tablenorm-core and adds the document-tree entry
//! points over `serde_json` values:
//!
//! - [`transform_tables`]: replace every legacy table in a parsed document
//!   tree with its normalized schema
//! - [`extract_schemas`]: collect every schema from a transformed tree, in
//!   document order
//! - [`render_html`]: render one schema back into HTML markup
//!
//! The three entry points are independently callable so a service layer can
//! compose them per endpoint without re-walking the tree more than
//! necessary.
//!
//! # Architecture
//!
//! - **tablenorm-core**: parser-independent data types and algorithms
//! - **tablenorm** (this crate): tree transformation and the public API

mod tree;

pub use tablenorm_core::{
    CellAddress, CellContent, CellImage, CellPosition, CellStyle, CellValue, Grid, ImageBinding,
    ImageBindings, ListHeader, ListHeaderAttribute, MergeRange, Paragraph, ParagraphRecord,
    PictureInfo, RECORD_PICTURE, RECORD_TEXT, ShapeComponentPicture, SourceCell, SourceTable,
    TableAttributes, TableError, TableSchema, TableSchemaCell, TableSchemaRow, VerticalAlign,
    convert_vertical_align, extract_cell_content, normalize_table, render_html,
};
pub use tree::{
    DEFAULT_SCHEMA_KEY, TABLE_KEY, TransformOptions, extract_schemas, is_legacy_table,
    transform_tables,
};
