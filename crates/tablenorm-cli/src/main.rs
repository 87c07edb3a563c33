mod cli;
mod render_cmd;
mod schemas_cmd;
mod shared;
mod transform_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Transform {
            ref file,
            keep_original,
            ref schema_key,
            ref images,
            max_depth,
            pretty,
        } => transform_cmd::run(
            file,
            keep_original,
            schema_key,
            images.as_deref(),
            max_depth,
            pretty,
        ),
        cli::Commands::Schemas {
            ref file,
            ref schema_key,
            ref images,
            max_depth,
            ref format,
            pretty,
        } => schemas_cmd::run(file, schema_key, images.as_deref(), max_depth, format, pretty),
        cli::Commands::Render {
            ref file,
            ref schema_key,
            ref images,
            max_depth,
        } => render_cmd::run(file, schema_key, images.as_deref(), max_depth),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
