//! Stateless query functions over row slices.
//!
//! Every function is a pure transformation producing a fresh `Vec`; callers
//! compose them by re-deriving from the full snapshot rather than chaining
//! destructively. Degenerate parameters (blank term, blank subject) degrade
//! to identity instead of failing.

use chrono::{Duration, Local, NaiveDate};
use index_model::{FileRow, RowField};

/// Case-insensitive substring match of `term` against all four fields
/// (including the date). A blank term returns the rows unchanged.
pub fn search(rows: &[FileRow], term: &str) -> Vec<FileRow> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            RowField::ALL
                .iter()
                .any(|field| row.get(*field).to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

/// Stable lexicographic sort on the chosen field, ascending.
pub fn sort_ascending(rows: &[FileRow], field: RowField) -> Vec<FileRow> {
    let mut out = rows.to_vec();
    out.sort_by(|a, b| a.get(field).cmp(b.get(field)));
    out
}

/// Stable lexicographic sort on the chosen field, descending.
pub fn sort_descending(rows: &[FileRow], field: RowField) -> Vec<FileRow> {
    let mut out = rows.to_vec();
    out.sort_by(|a, b| b.get(field).cmp(a.get(field)));
    out
}

/// Exact subject match. A blank subject means "no filter".
pub fn filter_by_subject(rows: &[FileRow], subject: &str) -> Vec<FileRow> {
    if subject.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.subject == subject)
        .cloned()
        .collect()
}

/// Keep rows whose `date_added` date portion is on or after today minus
/// `days` whole days (local calendar).
///
/// `days = 0` keeps everything dated today **or later**, since the
/// comparison is `>=` against the cutoff rather than equality with today.
/// Negative `days` shifts the cutoff into the future.
pub fn filter_by_days(rows: &[FileRow], days: i64) -> Vec<FileRow> {
    filter_by_days_from(rows, days, Local::now().date_naive())
}

/// Deterministic core of [`filter_by_days`] with an explicit "today".
pub fn filter_by_days_from(rows: &[FileRow], days: i64, today: NaiveDate) -> Vec<FileRow> {
    let cutoff = Duration::try_days(days)
        .and_then(|d| today.checked_sub_signed(d))
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string();
    rows.iter()
        .filter(|row| date_part(&row.date_added) >= cutoff.as_str())
        .cloned()
        .collect()
}

/// Unique subjects in first-seen order, for subject-filter affordances.
pub fn distinct_subjects(rows: &[FileRow]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for row in rows {
        if seen.insert(row.subject.as_str()) {
            out.push(row.subject.clone());
        }
    }
    out
}

/// Date portion of a `dateAdded` value: the substring before the first
/// space, or the whole value when there is none.
fn date_part(date_added: &str) -> &str {
    date_added.split(' ').next().unwrap_or(date_added)
}
