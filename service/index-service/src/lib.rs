//! Orchestration layer: ingest the synchronized database document and
//! answer table queries against the resulting snapshot.
//!
//! Single consumer model: every operation takes `&self` or `&mut self`, so
//! the caller serializes ingests and query changes; the engine tracks no
//! in-flight state.

pub mod settings;

pub use settings::{Settings, SettingsError};

use std::path::PathBuf;
use std::sync::Arc;

use index_model::{FileRow, RowField};
use index_store::fs_source::FsDocumentSource;
use index_store::{flatten, query, DocumentSource, FlattenError, IndexView, SortDirection, SourceError};
use sync_runner::{RunnerConfig, Scheduler, SyncRunner};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),
    #[error("parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Malformed(#[from] FlattenError),
    #[error("runner error: {0}")]
    Runner(#[from] sync_runner::RunnerError),
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Path of the JSON document the sync helper maintains.
    pub database_path: PathBuf,
}

/// Owns the document source and the view state. Queries mutate the active
/// parameters and hand back the freshly derived current view for rendering.
pub struct IndexService {
    source: Box<dyn DocumentSource>,
    view: IndexView,
}

impl IndexService {
    pub fn new(cfg: ServiceConfig) -> Self {
        Self::with_source(Box::new(FsDocumentSource::new(cfg.database_path)))
    }

    /// Inject an alternative source (tests, non-filesystem hosts).
    pub fn with_source(source: Box<dyn DocumentSource>) -> Self {
        Self {
            source,
            view: IndexView::default(),
        }
    }

    /// Ingest: read, parse, flatten, swap the snapshot wholesale.
    ///
    /// All-or-nothing — any failure leaves the previous snapshot (and the
    /// active query parameters) untouched. Returns the new row count.
    pub fn reload(&mut self) -> Result<usize, ServiceError> {
        let raw = self.source.read_document()?;
        let doc: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| ServiceError::Parse(e.to_string()))?;
        let rows = flatten(&doc)?;
        let count = rows.len();
        self.view.replace_rows(rows);
        info!(rows = count, "index reloaded");
        Ok(count)
    }

    pub fn all_rows(&self) -> &[FileRow] {
        self.view.all_rows()
    }

    pub fn current_view(&self) -> Vec<FileRow> {
        self.view.current_view()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> Vec<FileRow> {
        self.view.set_search_term(term);
        self.view.current_view()
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) -> Vec<FileRow> {
        self.view.set_subject(subject);
        self.view.current_view()
    }

    pub fn set_days(&mut self, days: Option<i64>) -> Vec<FileRow> {
        self.view.set_days(days);
        self.view.current_view()
    }

    pub fn set_sort(&mut self, sort: Option<(RowField, SortDirection)>) -> Vec<FileRow> {
        self.view.set_sort(sort);
        self.view.current_view()
    }

    pub fn clear_filters(&mut self) -> Vec<FileRow> {
        self.view.clear_filters();
        self.view.current_view()
    }

    /// Distinct subjects of the full snapshot, for filter affordances.
    pub fn subjects(&self) -> Vec<String> {
        query::distinct_subjects(self.view.all_rows())
    }

    pub fn view(&self) -> &IndexView {
        &self.view
    }
}

/// Build the runner and, when the settings enable it, a started scheduler.
/// Disabled settings yield no scheduler at all — there is no idle timer to
/// clear later, the handle simply does not exist.
pub fn start_sync(
    runner_cfg: RunnerConfig,
    settings: &Settings,
) -> Result<(Arc<SyncRunner>, Option<Scheduler>), ServiceError> {
    let runner = Arc::new(SyncRunner::new(runner_cfg)?);
    let scheduler = if settings.enabled {
        Some(Scheduler::start(Arc::clone(&runner), settings.sync_interval()))
    } else {
        None
    };
    Ok((runner, scheduler))
}
