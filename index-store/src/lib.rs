pub mod flatten;
pub mod fs_source;
pub mod query;
pub mod view;

pub use flatten::{flatten, FlattenError, FILE_DATA_KEY};
pub use view::{IndexView, QueryParams, SortDirection};

/// Read-side abstraction over wherever the database document lives.
/// Reading and decoding bytes is the source's concern; parsing and
/// flattening are layered on top by the consumer.
pub trait DocumentSource {
    fn read_document(&self) -> Result<String, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(String),
}
