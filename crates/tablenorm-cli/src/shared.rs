use std::path::Path;

use serde_json::Value;
use tablenorm::{ImageBindings, TableSchema, TransformOptions, extract_schemas, transform_tables};

/// Read and parse a document-tree JSON file with user-friendly errors.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not
/// found, unreadable, or not valid JSON.
pub fn read_tree(file: &Path) -> Result<Value, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let data = std::fs::read_to_string(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })?;

    serde_json::from_str(&data).map_err(|e| {
        eprintln!("Error: invalid JSON in {}: {e}", file.display());
        1
    })
}

/// Load an optional image-bindings file (JSON object: id -> {data, format}).
pub fn load_bindings(path: Option<&Path>) -> Result<Option<ImageBindings>, i32> {
    let Some(path) = path else {
        return Ok(None);
    };

    if !path.exists() {
        eprintln!("Error: bindings file not found: {}", path.display());
        return Err(1);
    }

    let data = std::fs::read_to_string(path).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", path.display());
        1
    })?;

    serde_json::from_str(&data).map(Some).map_err(|e| {
        eprintln!("Error: invalid bindings in {}: {e}", path.display());
        1
    })
}

/// Build transformer options from command-line flags.
pub fn build_options(keep_original: bool, schema_key: &str, max_depth: usize) -> TransformOptions {
    TransformOptions {
        keep_original,
        schema_key: schema_key.to_string(),
        max_depth,
    }
}

/// Transform a tree and collect its schemas, shared by the `schemas` and
/// `render` subcommands.
pub fn transform_and_extract(
    tree: &Value,
    bindings: Option<&ImageBindings>,
    options: &TransformOptions,
) -> Result<Vec<TableSchema>, i32> {
    let transformed = transform_tables(tree, bindings, options).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    Ok(extract_schemas(&transformed, &options.schema_key))
}
