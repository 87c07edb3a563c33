//! Per-cell content extraction.
//!
//! Pulls plain text and embedded images out of a legacy cell's paragraph
//! records: text fragments are stripped of ASCII control characters and
//! joined with newlines; picture records are resolved against the
//! document's image bindings, silently skipping identifiers with no
//! binding (binary attachments may be legitimately unavailable).

use crate::images::ImageBindings;
use crate::legacy::{RECORD_PICTURE, RECORD_TEXT, SourceCell};
use crate::schema::{CellImage, VerticalAlign};

/// Text and images extracted from one cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellContent {
    /// Cleaned text fragments joined with newlines.
    pub text: String,
    /// Resolved images in document order.
    pub images: Vec<CellImage>,
}

/// Extract a cell's text and resolved images in document order.
///
/// Text fragments that become empty after control-character stripping do
/// not contribute an empty line. Without bindings every picture record is
/// skipped, which models converting a document whose binary attachments
/// are unavailable.
pub fn extract_cell_content(cell: &SourceCell, bindings: Option<&ImageBindings>) -> CellContent {
    let mut texts: Vec<String> = Vec::new();
    let mut images: Vec<CellImage> = Vec::new();

    for paragraph in &cell.paragraphs {
        for record in &paragraph.records {
            match record.kind.as_str() {
                RECORD_TEXT => {
                    if let Some(text) = &record.text {
                        let clean = strip_control_chars(text);
                        if !clean.is_empty() {
                            texts.push(clean);
                        }
                    }
                }
                RECORD_PICTURE => {
                    let id = record
                        .shape_component_picture
                        .as_ref()
                        .and_then(|picture| picture.picture_info.as_ref())
                        .map(|info| info.bindata_id);
                    if let (Some(id), Some(bindings)) = (id, bindings) {
                        if let Some(binding) = bindings.get(id) {
                            images.push(CellImage {
                                id: format!("img-{id}"),
                                data: binding.data.clone(),
                                format: binding.format.clone(),
                            });
                        }
                    }
                }
                _ => {}
            }
        }
    }

    CellContent {
        text: texts.join("\n"),
        images,
    }
}

/// Remove ASCII control characters (code points 0-31) from a fragment.
fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|&c| c as u32 >= 0x20).collect()
}

/// Map the source's three-valued alignment onto the schema's.
///
/// `center` becomes `middle`; unrecognized values default to top.
pub fn convert_vertical_align(raw: &str) -> VerticalAlign {
    match raw {
        "top" => VerticalAlign::Top,
        "center" => VerticalAlign::Middle,
        "bottom" => VerticalAlign::Bottom,
        _ => VerticalAlign::Top,
    }
}
