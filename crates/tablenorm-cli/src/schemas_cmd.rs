use std::path::Path;

use tablenorm::{CellValue, TableSchema, TableSchemaCell};

use crate::cli::OutputFormat;
use crate::shared::{build_options, load_bindings, read_tree, transform_and_extract};

pub fn run(
    file: &Path,
    schema_key: &str,
    images: Option<&Path>,
    max_depth: usize,
    format: &OutputFormat,
    pretty: bool,
) -> Result<(), i32> {
    let tree = read_tree(file)?;
    let bindings = load_bindings(images)?;
    let options = build_options(false, schema_key, max_depth);
    let schemas = transform_and_extract(&tree, bindings.as_ref(), &options)?;

    match format {
        OutputFormat::Json => write_json(&schemas, pretty),
        OutputFormat::Text => write_text(&schemas),
    }
}

fn write_json(schemas: &[TableSchema], pretty: bool) -> Result<(), i32> {
    let payload = serde_json::json!({
        "count": schemas.len(),
        "schemas": schemas,
    });

    let output = if pretty {
        serde_json::to_string_pretty(&payload)
    } else {
        serde_json::to_string(&payload)
    };
    let output = output.map_err(|e| {
        eprintln!("Error: failed to serialize output: {e}");
        1
    })?;

    println!("{output}");
    Ok(())
}

fn write_text(schemas: &[TableSchema]) -> Result<(), i32> {
    if schemas.is_empty() {
        println!("no tables found");
        return Ok(());
    }

    for (i, schema) in schemas.iter().enumerate() {
        println!(
            "--- Table {} ({} rows, {} merges) ---",
            i + 1,
            schema.rows.len(),
            schema.merges.len(),
        );

        for row in &schema.rows {
            let cells: Vec<String> = row.cells.iter().map(cell_text).collect();
            println!("| {} |", cells.join(" | "));
        }

        println!();
    }

    Ok(())
}

/// One-line text form of a cell value for the summary output.
fn cell_text(cell: &TableSchemaCell) -> String {
    match &cell.value {
        CellValue::Text(text) => text.replace('\n', " "),
        CellValue::Number(n) => n.to_string(),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Null => String::new(),
    }
}
