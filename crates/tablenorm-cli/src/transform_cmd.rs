use std::path::Path;

use tablenorm::transform_tables;

use crate::shared::{build_options, load_bindings, read_tree};

pub fn run(
    file: &Path,
    keep_original: bool,
    schema_key: &str,
    images: Option<&Path>,
    max_depth: usize,
    pretty: bool,
) -> Result<(), i32> {
    let tree = read_tree(file)?;
    let bindings = load_bindings(images)?;
    let options = build_options(keep_original, schema_key, max_depth);

    let transformed = transform_tables(&tree, bindings.as_ref(), &options).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    let output = if pretty {
        serde_json::to_string_pretty(&transformed)
    } else {
        serde_json::to_string(&transformed)
    };
    let output = output.map_err(|e| {
        eprintln!("Error: failed to serialize output: {e}");
        1
    })?;

    println!("{output}");
    Ok(())
}
