//! Document-tree transformation and schema extraction.
//!
//! Walks an arbitrary parsed-document tree (JSON objects, arrays, and
//! scalars) and substitutes every legacy-table value found under the
//! reserved `"table"` key with its normalized schema; a second walk
//! collects every schema in document order. Both walks use an explicit
//! work stack rather than call-stack recursion: tree depth is
//! author-controlled when documents arrive through an upload-accepting
//! service, so the transformer enforces a configurable ceiling instead of
//! risking stack exhaustion.

use serde_json::{Map, Value};
use tablenorm_core::{ImageBindings, SourceTable, TableError, TableSchema, normalize_table};

/// The reserved key under which legacy table values are recognized.
pub const TABLE_KEY: &str = "table";

/// Default key for injected schema values.
pub const DEFAULT_SCHEMA_KEY: &str = "tableSchema";

/// Options for the tree transformer.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Keep the original table value alongside the injected schema
    /// (default: false).
    pub keep_original: bool,
    /// Key name used for the injected schema value (default:
    /// [`DEFAULT_SCHEMA_KEY`]).
    pub schema_key: String,
    /// Maximum container nesting depth before the transform fails
    /// (default: 128).
    pub max_depth: usize,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            keep_original: false,
            schema_key: DEFAULT_SCHEMA_KEY.to_string(),
            max_depth: 128,
        }
    }
}

/// Structural recognition of a legacy table value: an object carrying
/// `attributes.row_count`, `attributes.col_count`, and an array `cells`.
///
/// Shape-based, not type-tagged — the input tree is untyped. A value that
/// passes this predicate is ingested once into the typed source model;
/// passing the predicate but failing ingestion is a malformed table.
pub fn is_legacy_table(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    let Some(attributes) = object.get("attributes").and_then(Value::as_object) else {
        return false;
    };
    attributes.contains_key("row_count")
        && attributes.contains_key("col_count")
        && object.get("cells").is_some_and(Value::is_array)
}

/// A partially rebuilt container on the explicit work stack.
enum Frame<'a> {
    Array {
        items: &'a Vec<Value>,
        next: usize,
        out: Vec<Value>,
    },
    Object {
        entries: Vec<(&'a String, &'a Value)>,
        next: usize,
        out: Map<String, Value>,
    },
}

/// What the advance step decided to do with the top frame.
enum Advance<'a> {
    /// The frame is complete; pop it and hand its value to the parent.
    Done(Value),
    /// Descend into a child value.
    Descend(&'a Value),
    /// A table was substituted in place; nothing to descend into.
    Substituted,
}

/// Replace every legacy table in `tree` with its normalized schema.
///
/// The output is structurally identical to the input except at
/// substitution points: the table value's key is replaced by
/// `options.schema_key` holding the schema (the original is retained
/// alongside it when `options.keep_original` is set). Non-table nodes and
/// scalars pass through unchanged; arrays map element-wise.
///
/// Fail-fast: a malformed table (or nesting beyond `options.max_depth`)
/// aborts the whole transform — partial output would not be safe to
/// consume.
pub fn transform_tables(
    tree: &Value,
    bindings: Option<&ImageBindings>,
    options: &TransformOptions,
) -> Result<Value, TableError> {
    let mut frames: Vec<Frame> = Vec::new();
    let mut completed = open(tree, &mut frames, options.max_depth)?;

    while let Some(frame) = frames.last_mut() {
        if let Some(value) = completed.take() {
            match frame {
                Frame::Array { out, .. } => out.push(value),
                Frame::Object { entries, next, out } => {
                    // `next` was advanced before descending, so the entry
                    // that produced this value is the previous one.
                    let (key, _) = entries[*next - 1];
                    out.insert(key.clone(), value);
                }
            }
        }

        let action = match frame {
            Frame::Array { items, next, out } => {
                if *next == items.len() {
                    Advance::Done(Value::Array(std::mem::take(out)))
                } else {
                    let child = &items[*next];
                    *next += 1;
                    Advance::Descend(child)
                }
            }
            Frame::Object { entries, next, out } => {
                if *next == entries.len() {
                    Advance::Done(Value::Object(std::mem::take(out)))
                } else {
                    let (key, value) = entries[*next];
                    *next += 1;
                    if key == TABLE_KEY && is_legacy_table(value) {
                        out.insert(options.schema_key.clone(), convert_value(value, bindings)?);
                        if options.keep_original {
                            out.insert(TABLE_KEY.to_string(), value.clone());
                        }
                        Advance::Substituted
                    } else {
                        Advance::Descend(value)
                    }
                }
            }
        };

        match action {
            Advance::Done(value) => {
                frames.pop();
                completed = Some(value);
            }
            Advance::Descend(child) => {
                completed = open(child, &mut frames, options.max_depth)?;
            }
            Advance::Substituted => {}
        }
    }

    // The loop invariant guarantees the root value is complete here; the
    // fallback only defends against an empty-input impossibility.
    Ok(completed.unwrap_or(Value::Null))
}

/// Begin visiting a value: scalars complete immediately, containers open a
/// frame on the work stack (subject to the depth ceiling).
fn open<'a>(
    value: &'a Value,
    frames: &mut Vec<Frame<'a>>,
    max_depth: usize,
) -> Result<Option<Value>, TableError> {
    match value {
        Value::Array(items) => {
            if frames.len() >= max_depth {
                return Err(TableError::DepthExceeded { max_depth });
            }
            frames.push(Frame::Array {
                items,
                next: 0,
                out: Vec::with_capacity(items.len()),
            });
            Ok(None)
        }
        Value::Object(map) => {
            if frames.len() >= max_depth {
                return Err(TableError::DepthExceeded { max_depth });
            }
            frames.push(Frame::Object {
                entries: map.iter().collect(),
                next: 0,
                out: Map::new(),
            });
            Ok(None)
        }
        scalar => Ok(Some(scalar.clone())),
    }
}

/// Ingest a recognized table value and normalize it into a schema value.
fn convert_value(value: &Value, bindings: Option<&ImageBindings>) -> Result<Value, TableError> {
    let table: SourceTable = serde_json::from_value(value.clone())
        .map_err(|e| TableError::InvalidShape(e.to_string()))?;
    let schema = normalize_table(&table, bindings)?;
    serde_json::to_value(&schema).map_err(|e| TableError::InvalidShape(e.to_string()))
}

/// Collect every normalized schema in the tree, in the transformer's
/// depth-first visit order (document order).
///
/// Pure read with no failure mode: a tree without tables yields an empty
/// vector, and values under the schema key that are not schemas are
/// skipped. The walk is iterative, so adversarial nesting cannot exhaust
/// the call stack.
pub fn extract_schemas(tree: &Value, schema_key: &str) -> Vec<TableSchema> {
    let mut schemas = Vec::new();
    let mut stack = vec![tree];

    while let Some(node) = stack.pop() {
        match node {
            Value::Array(items) => stack.extend(items.iter().rev()),
            Value::Object(map) => {
                if let Some(candidate) = map.get(schema_key) {
                    if let Ok(schema) = serde_json::from_value::<TableSchema>(candidate.clone()) {
                        schemas.push(schema);
                    }
                }
                stack.extend(map.values().rev());
            }
            _ => {}
        }
    }

    schemas
}
