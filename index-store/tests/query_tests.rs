use chrono::NaiveDate;
use index_model::{FileRow, RowField};
use index_store::query::{
    distinct_subjects, filter_by_days_from, filter_by_subject, search, sort_ascending,
    sort_descending,
};

fn sample_rows() -> Vec<FileRow> {
    vec![
        FileRow::new("hw1.pdf", "Math", "Math/Algebra", "2024-01-02 10:00:00"),
        FileRow::new("sketch.png", "Art", "Art", "2024-01-01 09:00:00"),
        FileRow::new("exam.pdf", "Math", "Math", "2024-06-15 08:30:00"),
        FileRow::new("essay.docx", "History", "History/WW2", "2024-06-20 11:15:00"),
    ]
}

#[test]
fn blank_search_term_is_identity() {
    let rows = sample_rows();
    assert_eq!(search(&rows, ""), rows);
    assert_eq!(search(&rows, "   "), rows);
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let rows = sample_rows();

    let by_subject = search(&rows, "MATH");
    assert_eq!(by_subject.len(), 2);
    assert!(by_subject.iter().all(|r| r.subject == "Math"));

    let by_name = search(&rows, "Sketch");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "sketch.png");

    let by_folder = search(&rows, "ww2");
    assert_eq!(by_folder.len(), 1);

    let by_date = search(&rows, "2024-06");
    assert_eq!(by_date.len(), 2);
}

#[test]
fn search_preserves_row_order() {
    let rows = sample_rows();
    let hits = search(&rows, "pdf");
    assert_eq!(hits[0].name, "hw1.pdf");
    assert_eq!(hits[1].name, "exam.pdf");
}

#[test]
fn ascending_and_descending_sorts_reverse_each_other() {
    // Every field value is distinct here; with ties the stable sort keeps
    // input order in both directions and the mirror would not be exact.
    let rows = vec![
        FileRow::new("b.pdf", "Math", "Math/B", "2024-03-01 10:00:00"),
        FileRow::new("c.pdf", "Art", "Art/C", "2024-01-01 10:00:00"),
        FileRow::new("a.pdf", "Zoology", "Zoology/A", "2024-02-01 10:00:00"),
    ];
    for field in RowField::ALL {
        let asc = sort_ascending(&rows, field);
        let mut desc = sort_descending(&rows, field);
        desc.reverse();
        assert_eq!(asc, desc, "field {field}");
    }
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let rows = vec![
        FileRow::new("b.txt", "Same", "Same", "2024-01-01 00:00:00"),
        FileRow::new("a.txt", "Same", "Same", "2024-01-01 00:00:00"),
    ];
    let sorted = sort_ascending(&rows, RowField::Subject);
    assert_eq!(sorted[0].name, "b.txt");
    assert_eq!(sorted[1].name, "a.txt");
}

#[test]
fn blank_subject_filter_is_identity() {
    let rows = sample_rows();
    assert_eq!(filter_by_subject(&rows, ""), rows);
}

#[test]
fn subject_filter_matches_exactly() {
    let rows = sample_rows();
    let math = filter_by_subject(&rows, "Math");
    assert_eq!(math.len(), 2);
    assert!(filter_by_subject(&rows, "math").is_empty());
}

#[test]
fn days_zero_keeps_today_and_later() {
    let rows = sample_rows();
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let kept = filter_by_days_from(&rows, 0, today);
    // 2024-06-15 and the later 2024-06-20 both pass the >= cutoff.
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].name, "exam.pdf");
    assert_eq!(kept[1].name, "essay.docx");
}

#[test]
fn days_window_reaches_back_from_today() {
    let rows = sample_rows();
    let today = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
    assert_eq!(filter_by_days_from(&rows, 5, today).len(), 2);
    assert_eq!(filter_by_days_from(&rows, 200, today).len(), 4);
}

#[test]
fn negative_days_shift_the_cutoff_into_the_future() {
    let rows = sample_rows();
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    // Cutoff becomes 2024-06-18, so only the 2024-06-20 row survives.
    let kept = filter_by_days_from(&rows, -3, today);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].name, "essay.docx");
}

#[test]
fn date_portion_is_taken_before_the_first_space() {
    let rows = vec![FileRow::new("x", "S", "S", "2024-06-15")];
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    // No time component at all still compares on the date part.
    assert_eq!(filter_by_days_from(&rows, 0, today).len(), 1);
}

#[test]
fn distinct_subjects_keep_first_seen_order() {
    let rows = sample_rows();
    assert_eq!(distinct_subjects(&rows), vec!["Math", "Art", "History"]);
    assert!(distinct_subjects(&[]).is_empty());
}
