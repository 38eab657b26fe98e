use chrono::NaiveDate;
use index_model::{FileRow, RowField};
use index_store::fs_source::FsDocumentSource;
use index_store::{DocumentSource, IndexView, SortDirection, SourceError};

fn sample_rows() -> Vec<FileRow> {
    vec![
        FileRow::new("hw1.pdf", "Math", "Math/Algebra", "2024-01-02 10:00:00"),
        FileRow::new("sketch.png", "Art", "Art", "2024-01-01 09:00:00"),
        FileRow::new("exam.pdf", "Math", "Math", "2024-06-15 08:30:00"),
    ]
}

#[test]
fn default_view_shows_all_rows_unchanged() {
    let view = IndexView::new(sample_rows());
    assert_eq!(view.current_view(), sample_rows());
}

#[test]
fn filters_compose_from_the_full_snapshot() {
    let mut view = IndexView::new(sample_rows());
    view.set_subject("Math");
    assert_eq!(view.current_view().len(), 2);

    // Changing the search term must not narrow the already-filtered set:
    // a term matching a row outside the subject filter yields nothing,
    // and clearing it restores both Math rows.
    view.set_search_term("sketch");
    assert!(view.current_view().is_empty());
    view.set_search_term("");
    assert_eq!(view.current_view().len(), 2);
}

#[test]
fn sort_applies_after_filtering() {
    let mut view = IndexView::new(sample_rows());
    view.set_subject("Math");
    view.set_sort(Some((RowField::Name, SortDirection::Ascending)));
    let rows = view.current_view();
    assert_eq!(rows[0].name, "exam.pdf");
    assert_eq!(rows[1].name, "hw1.pdf");

    view.set_sort(Some((RowField::Name, SortDirection::Descending)));
    let rows = view.current_view();
    assert_eq!(rows[0].name, "hw1.pdf");
}

#[test]
fn day_filter_uses_the_supplied_today() {
    let mut view = IndexView::new(sample_rows());
    view.set_days(Some(0));
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let rows = view.current_view_at(today);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "exam.pdf");
}

#[test]
fn clear_filters_restores_the_identity_view() {
    let mut view = IndexView::new(sample_rows());
    view.set_subject("Art");
    view.set_days(Some(7));
    view.set_sort(Some((RowField::DateAdded, SortDirection::Descending)));
    view.clear_filters();
    assert_eq!(view.current_view(), sample_rows());
}

#[test]
fn replace_rows_swaps_the_snapshot_but_keeps_params() {
    let mut view = IndexView::new(sample_rows());
    view.set_subject("Math");
    view.replace_rows(vec![FileRow::new(
        "new.pdf",
        "Math",
        "Math",
        "2024-07-01 12:00:00",
    )]);
    let rows = view.current_view();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "new.pdf");
    assert_eq!(view.params().subject, "Math");
}

#[test]
fn fs_source_distinguishes_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = FsDocumentSource::new(dir.path().join("absent.json"));
    assert!(matches!(
        missing.read_document(),
        Err(SourceError::NotFound(_))
    ));

    let path = dir.path().join("db.json");
    std::fs::write(&path, "{}").unwrap();
    assert_eq!(FsDocumentSource::new(&path).read_document().unwrap(), "{}");
}
