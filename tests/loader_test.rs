use std::path::PathBuf;

use notefall::chart::{ChartError, ChartLoader, ParsePolicy, ParseReason};
use notefall::model::{Lane, NoteId};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_basic_chart() {
    let result = ChartLoader::default()
        .load(fixture("basic_chart.csv"))
        .unwrap();
    let chart = &result.chart;

    assert_eq!(chart.note_count(), 6);
    assert_eq!(chart.user_note_count(), 5);
    assert_eq!(chart.lane_counts(), [3, 2, 0, 1]);
    assert_eq!(chart.sha256.len(), 64);

    let first = chart.get(NoteId(1)).unwrap();
    assert_eq!(first.lane, Lane::Lane0);
    assert_eq!(first.instrument, "Acoustic Grand Piano");
    assert!((first.velocity - 100.0).abs() < f64::EPSILON);
    assert!((first.hit_time_ms() - 3000.0).abs() < 1e-9);

    let bass = chart.get(NoteId(3)).unwrap();
    assert!(!bass.user_played);
    assert_eq!(bass.lane, Lane::Lane0);
}

#[test]
fn test_malformed_line_is_skipped_but_keeps_its_id() {
    let result = ChartLoader::new(ParsePolicy::Skip)
        .load(fixture("basic_chart.csv"))
        .unwrap();

    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].line, 8);
    assert!(matches!(
        result.skipped[0].reason,
        ParseReason::InvalidNumber { column: "start", .. }
    ));

    assert!(result.chart.get(NoteId(6)).is_none());
    assert_eq!(result.chart.get(NoteId(7)).unwrap().lane, Lane::Lane1);
}

#[test]
fn test_degenerate_note_is_reported() {
    let result = ChartLoader::default()
        .load(fixture("basic_chart.csv"))
        .unwrap();
    let warnings = &result.chart.warnings;

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].id, NoteId(5));
    assert_eq!(warnings[0].line, Some(7));
    assert_eq!(warnings[0].duration_ms, 0.0);
}

#[test]
fn test_abort_policy_fails_on_first_bad_line() {
    let err = ChartLoader::new(ParsePolicy::Abort)
        .load(fixture("basic_chart.csv"))
        .unwrap_err();

    match err {
        ChartError::Line(parse) => assert_eq!(parse.line, 8),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_file() {
    let err = ChartLoader::default()
        .load(fixture("does_not_exist.csv"))
        .unwrap_err();
    assert!(matches!(err, ChartError::FileRead { .. }));
}

#[test]
fn test_same_source_same_fingerprint() {
    let loader = ChartLoader::default();
    let a = loader.load(fixture("basic_chart.csv")).unwrap();
    let b = loader.load(fixture("basic_chart.csv")).unwrap();
    assert_eq!(a.chart.sha256, b.chart.sha256);
}
