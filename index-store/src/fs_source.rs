//! Filesystem-backed document source.

use std::io;
use std::path::{Path, PathBuf};

use crate::{DocumentSource, SourceError};

/// Reads the database document from a file path.
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    path: PathBuf,
}

impl FsDocumentSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FsDocumentSource {
    fn read_document(&self) -> Result<String, SourceError> {
        std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound(self.path.display().to_string())
            } else {
                SourceError::Io(e.to_string())
            }
        })
    }
}
