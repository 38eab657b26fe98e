//! Flattening pass: nested subject/folder/file document -> row records.

use index_model::FileRow;
use serde_json::{Map, Value};

/// Marker key whose object value holds terminal `fileName -> dateAdded`
/// entries instead of further nesting.
pub const FILE_DATA_KEY: &str = "__FileData__";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FlattenError {
    #[error("malformed document: top-level value is not an object")]
    MalformedDocument,
}

/// Flatten a parsed database document into one row per file entry.
///
/// The top level must be an object whose keys are subjects; anything else
/// fails with [`FlattenError::MalformedDocument`] and produces no rows.
/// Inside the tree the walk is permissive: values that are neither nested
/// objects nor well-formed `__FileData__` entries are skipped, so a
/// partially written document still yields every complete record it holds.
/// Output order follows the document's key order.
pub fn flatten(document: &Value) -> Result<Vec<FileRow>, FlattenError> {
    let top = document.as_object().ok_or(FlattenError::MalformedDocument)?;
    let mut rows = Vec::new();
    for (subject, value) in top {
        if let Some(node) = value.as_object() {
            walk(node, subject, subject, &mut rows);
        }
    }
    Ok(rows)
}

fn walk(node: &Map<String, Value>, subject: &str, path: &str, rows: &mut Vec<FileRow>) {
    for (key, value) in node {
        if key == FILE_DATA_KEY {
            if let Some(files) = value.as_object() {
                for (name, added) in files {
                    // A file record needs a non-blank date; entries without
                    // one are upstream noise, not files.
                    if let Some(date) = date_string(added) {
                        rows.push(FileRow::new(name.as_str(), subject, path, date));
                    }
                }
            }
            continue;
        }
        if let Some(child) = value.as_object() {
            let child_path = format!("{path}/{key}");
            walk(child, subject, &child_path, rows);
        }
    }
}

fn date_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
