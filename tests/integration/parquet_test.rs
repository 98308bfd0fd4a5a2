use banda_scoring::{ScoringOptions, read_table, score_questionnaire, write_table};
use tempfile::tempdir;

use crate::utils::{f64_column, keyed_batch, names, uniform_items};

#[test]
fn test_scored_table_round_trips_through_parquet() {
    let batch = keyed_batch(
        &["Child", "Parent"],
        uniform_items("rbqa01", "rbqa", 20, &[Some(4.0), None]),
    );

    let dir = tempdir().unwrap();
    let input = dir.path().join("input.parquet");
    write_table(&input, &batch).unwrap();

    let loaded = read_table(&input).unwrap();
    assert_eq!(loaded.num_rows(), 2);
    assert_eq!(names(&loaded), names(&batch));

    let scored = score_questionnaire(loaded, "rbqa", &ScoringOptions::default()).unwrap();
    let output = dir.path().join("scored.parquet");
    write_table(&output, &scored).unwrap();

    let reloaded = read_table(&output).unwrap();
    assert_eq!(f64_column(&reloaded, "rbqa_tot"), vec![Some(80.0), None]);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = read_table(&dir.path().join("absent.parquet")).unwrap_err();
    assert!(matches!(err, banda_scoring::ScoringError::Io(_)));
}
