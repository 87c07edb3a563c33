use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Normalize legacy document tables into dense schemas and HTML.
#[derive(Debug, Parser)]
#[command(name = "tablenorm", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace legacy tables in a parsed document tree with schemas
    Transform {
        /// Path to the parsed document tree (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Keep the original table value alongside the injected schema
        #[arg(long)]
        keep_original: bool,

        /// Key name used for the injected schema value
        #[arg(long, default_value = "tableSchema")]
        schema_key: String,

        /// Image-bindings file (JSON object: id -> {data, format})
        #[arg(long)]
        images: Option<PathBuf>,

        /// Maximum container nesting depth
        #[arg(long, default_value_t = 128)]
        max_depth: usize,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Extract every normalized table schema from a document tree
    Schemas {
        /// Path to the parsed document tree (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Key name used for the injected schema value
        #[arg(long, default_value = "tableSchema")]
        schema_key: String,

        /// Image-bindings file (JSON object: id -> {data, format})
        #[arg(long)]
        images: Option<PathBuf>,

        /// Maximum container nesting depth
        #[arg(long, default_value_t = 128)]
        max_depth: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Render each table in a document tree as an HTML table
    Render {
        /// Path to the parsed document tree (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Key name used for the injected schema value
        #[arg(long, default_value = "tableSchema")]
        schema_key: String,

        /// Image-bindings file (JSON object: id -> {data, format})
        #[arg(long)]
        images: Option<PathBuf>,

        /// Maximum container nesting depth
        #[arg(long, default_value_t = 128)]
        max_depth: usize,
    },
}

/// Output format for extracted schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON object with the schema list and a count
    Json,
    /// Human-readable per-table summary
    Text,
}
