use std::path::Path;

use tablenorm::render_html;

use crate::shared::{build_options, load_bindings, read_tree, transform_and_extract};

pub fn run(
    file: &Path,
    schema_key: &str,
    images: Option<&Path>,
    max_depth: usize,
) -> Result<(), i32> {
    let tree = read_tree(file)?;
    let bindings = load_bindings(images)?;
    let options = build_options(false, schema_key, max_depth);
    let schemas = transform_and_extract(&tree, bindings.as_ref(), &options)?;

    for (i, schema) in schemas.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", render_html(schema));
    }

    Ok(())
}
