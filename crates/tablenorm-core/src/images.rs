//! Image bindings resolved from a document's binary attachments.
//!
//! A binding table is built once per document from parsed attachment
//! records and is read-only during a conversion. Identifiers come directly
//! from those records — a positive integer assigned by the parser — and
//! are looked up by the content extractor when it meets an embedded-picture
//! record. An identifier with no binding is not an error: attachments may
//! be legitimately unavailable, e.g. when converting without binary data.

use std::collections::BTreeMap;

/// Binary attachment payload: an inline data-URI plus its format tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageBinding {
    /// Inline data-URI (`data:image/...;base64,...`).
    pub data: String,
    /// Image format tag (e.g. `png`).
    pub format: String,
}

/// Read-only lookup from numeric attachment identifier to image payload.
///
/// On the wire this is a JSON object keyed by the numeric identifier:
/// `{"1": {"data": "...", "format": "png"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ImageBindings {
    map: BTreeMap<u32, ImageBinding>,
}

impl ImageBindings {
    /// Create an empty binding table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding during the one-shot build step.
    pub fn insert(&mut self, id: u32, binding: ImageBinding) {
        self.map.insert(id, binding);
    }

    /// Look up the binding for an attachment identifier.
    pub fn get(&self, id: u32) -> Option<&ImageBinding> {
        self.map.get(&id)
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(u32, ImageBinding)> for ImageBindings {
    fn from_iter<I: IntoIterator<Item = (u32, ImageBinding)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}
