//! Fixture builders shared by the unit tests.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, Int32Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::table::key::{
    INTERVIEW_AGE, INTERVIEW_DATE, RESPONDENT, SEX, SRC_SUBJECT_ID, SUBJECTKEY, VISIT,
};

/// A numeric item column
#[must_use]
pub fn numbers(values: &[Option<f64>]) -> ArrayRef {
    Arc::new(Float64Array::from(values.to_vec()))
}

/// A text item column
#[must_use]
pub fn texts(values: &[Option<&str>]) -> ArrayRef {
    Arc::new(StringArray::from(values.to_vec()))
}

/// A table with the seven key columns plus `items`, one row per respondent
///
/// Rows get subject ids `B000`, `B001`, ... at visit `T1`.
#[must_use]
pub fn keyed_batch(respondents: &[&str], items: Vec<(String, ArrayRef)>) -> RecordBatch {
    let n = respondents.len();
    let ids: Vec<String> = (0..n).map(|i| format!("B{i:03}")).collect();
    let text = |values: Vec<&str>| -> ArrayRef { Arc::new(StringArray::from(values)) };

    let mut columns: Vec<(String, ArrayRef)> = vec![
        (SRC_SUBJECT_ID.into(), Arc::new(StringArray::from(ids)) as ArrayRef),
        (VISIT.into(), text(vec!["T1"; n])),
        (RESPONDENT.into(), text(respondents.to_vec())),
        (SUBJECTKEY.into(), text(vec!["NDAR_INV0000"; n])),
        (SEX.into(), text(vec!["F"; n])),
        (INTERVIEW_DATE.into(), text(vec!["03/14/2018"; n])),
        (INTERVIEW_AGE.into(), Arc::new(Int32Array::from(vec![180; n])) as ArrayRef),
    ];
    columns.extend(items);
    RecordBatch::try_from_iter(columns).expect("fixture columns have equal length")
}

/// The same value in every item column of a numbered instrument
#[must_use]
pub fn uniform_items(
    source: &str,
    stem: &str,
    count: usize,
    rows: &[Option<f64>],
) -> Vec<(String, ArrayRef)> {
    (1..=count)
        .map(|i| (format!("{source}_{stem}{i}"), numbers(rows)))
        .collect()
}

/// Read a Float64 output column
#[must_use]
pub fn f64_column(batch: &RecordBatch, name: &str) -> Vec<Option<f64>> {
    let column = batch
        .column_by_name(name)
        .unwrap_or_else(|| panic!("no column {name}"));
    let values = column
        .as_any()
        .downcast_ref::<Float64Array>()
        .unwrap_or_else(|| panic!("{name} is not Float64"));
    (0..values.len())
        .map(|i| (!values.is_null(i)).then(|| values.value(i)))
        .collect()
}

/// Read a Utf8 output column
#[must_use]
pub fn string_column(batch: &RecordBatch, name: &str) -> Vec<Option<String>> {
    let column = batch
        .column_by_name(name)
        .unwrap_or_else(|| panic!("no column {name}"));
    let values = column
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap_or_else(|| panic!("{name} is not Utf8"));
    values.iter().map(|v| v.map(str::to_string)).collect()
}
