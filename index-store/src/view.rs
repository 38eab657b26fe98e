//! View state: full snapshot + active query parameters -> current view.

use chrono::{Local, NaiveDate};
use index_model::{FileRow, RowField};

use crate::query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The query parameters currently in effect. Held by the view, not the
/// engine; the engine's functions are stateless.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pub search_term: String,
    pub subject: String,
    pub days: Option<i64>,
    pub sort: Option<(RowField, SortDirection)>,
}

/// Owns the immutable snapshot from the last ingest plus the active
/// parameters. The current view is always recomputed from the full
/// snapshot with the union of active filters, so filters compose instead
/// of narrowing whatever the previous interaction left behind.
#[derive(Debug, Default)]
pub struct IndexView {
    all_rows: Vec<FileRow>,
    params: QueryParams,
}

impl IndexView {
    pub fn new(rows: Vec<FileRow>) -> Self {
        Self {
            all_rows: rows,
            params: QueryParams::default(),
        }
    }

    /// Replace the snapshot wholesale (one call per ingest). Active query
    /// parameters are kept so a reload re-renders under the same filters.
    pub fn replace_rows(&mut self, rows: Vec<FileRow>) {
        self.all_rows = rows;
    }

    pub fn all_rows(&self) -> &[FileRow] {
        &self.all_rows
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.params.search_term = term.into();
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.params.subject = subject.into();
    }

    pub fn set_days(&mut self, days: Option<i64>) {
        self.params.days = days;
    }

    pub fn set_sort(&mut self, sort: Option<(RowField, SortDirection)>) {
        self.params.sort = sort;
    }

    pub fn clear_filters(&mut self) {
        self.params = QueryParams::default();
    }

    /// Derive the current view from the full snapshot and active parameters.
    pub fn current_view(&self) -> Vec<FileRow> {
        self.current_view_at(Local::now().date_naive())
    }

    /// [`current_view`](Self::current_view) with an explicit "today" for the
    /// recency filter.
    pub fn current_view_at(&self, today: NaiveDate) -> Vec<FileRow> {
        let mut rows = query::search(&self.all_rows, &self.params.search_term);
        rows = query::filter_by_subject(&rows, &self.params.subject);
        if let Some(days) = self.params.days {
            rows = query::filter_by_days_from(&rows, days, today);
        }
        match self.params.sort {
            Some((field, SortDirection::Ascending)) => query::sort_ascending(&rows, field),
            Some((field, SortDirection::Descending)) => query::sort_descending(&rows, field),
            None => rows,
        }
    }
}
