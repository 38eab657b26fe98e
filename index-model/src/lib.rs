//! Shared models used across crates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One file entry flattened out of the synchronized database document.
///
/// Field order is fixed; table renderers draw one column per field in
/// declaration order, so every row must expose the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRow {
    /// File name (leaf key under a `__FileData__` node).
    pub name: String,
    /// Top-level key of the source document this file was found under.
    pub subject: String,
    /// Slash-joined keys from the subject down to the `__FileData__` node.
    pub folder_path: String,
    /// Timestamp string copied verbatim from the document, conventionally
    /// `YYYY-MM-DD HH:MM:SS`. Never empty.
    pub date_added: String,
}

impl FileRow {
    pub fn new(
        name: impl Into<String>,
        subject: impl Into<String>,
        folder_path: impl Into<String>,
        date_added: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            folder_path: folder_path.into(),
            date_added: date_added.into(),
        }
    }

    /// Generic field access for column-oriented rendering and sorting.
    pub fn get(&self, field: RowField) -> &str {
        match field {
            RowField::Name => &self.name,
            RowField::Subject => &self.subject,
            RowField::FolderPath => &self.folder_path,
            RowField::DateAdded => &self.date_added,
        }
    }

    /// `folder_path/name` join, the display path users copy out of the table.
    pub fn full_path(&self) -> String {
        format!("{}/{}", self.folder_path, self.name)
    }
}

/// The four table columns, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowField {
    Name,
    Subject,
    FolderPath,
    DateAdded,
}

impl RowField {
    pub const ALL: [RowField; 4] = [
        RowField::Name,
        RowField::Subject,
        RowField::FolderPath,
        RowField::DateAdded,
    ];

    /// Human column header as shown in the table view.
    pub fn label(&self) -> &'static str {
        match self {
            RowField::Name => "Name of the file",
            RowField::Subject => "Subject",
            RowField::FolderPath => "Folder Path to the file",
            RowField::DateAdded => "Date Added",
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RowField::Name => "name",
            RowField::Subject => "subject",
            RowField::FolderPath => "folder_path",
            RowField::DateAdded => "date_added",
        };
        f.write_str(s)
    }
}

impl FromStr for RowField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(RowField::Name),
            "subject" => Ok(RowField::Subject),
            "folder_path" | "folder" | "path" => Ok(RowField::FolderPath),
            "date_added" | "date" => Ok(RowField::DateAdded),
            other => Err(format!("unknown field: {other}")),
        }
    }
}
