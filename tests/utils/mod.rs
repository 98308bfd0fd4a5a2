use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, Int32Array, StringArray, UInt32Array};
use arrow::record_batch::RecordBatch;

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

/// A table with the respondent-visit key columns followed by `items`
///
/// Row `i` belongs to subject `B{i:03}` at visit `T1`.
#[must_use]
pub fn keyed_batch(respondents: &[&str], items: Vec<(String, ArrayRef)>) -> RecordBatch {
    let n = respondents.len();
    let subjects: Vec<String> = (0..n).map(|i| format!("B{i:03}")).collect();
    let subject_refs: Vec<Option<&str>> = subjects.iter().map(|s| Some(s.as_str())).collect();
    keyed_batch_for(&subject_refs, respondents, items)
}

/// Like [`keyed_batch`] with explicit subject ids
#[must_use]
pub fn keyed_batch_for(
    subjects: &[Option<&str>],
    respondents: &[&str],
    items: Vec<(String, ArrayRef)>,
) -> RecordBatch {
    let n = respondents.len();
    let repeat = |value: &str| texts(&vec![Some(value); n]);
    let respondent_cells: Vec<Option<&str>> = respondents.iter().map(|r| Some(*r)).collect();

    let mut columns: Vec<(String, ArrayRef)> = vec![
        ("src_subject_id".into(), texts(subjects)),
        ("visit".into(), repeat("T1")),
        ("respondent".into(), texts(&respondent_cells)),
        ("subjectkey".into(), repeat("NDAR_INV0000")),
        ("sex".into(), repeat("M")),
        ("interview_date".into(), repeat("06/01/2017")),
        ("interview_age".into(), Arc::new(Int32Array::from(vec![192; n])) as ArrayRef),
    ];
    columns.extend(items);
    RecordBatch::try_from_iter(columns).expect("fixture columns have equal length")
}

/// `<source>_<stem>1 .. <source>_<stem><count>`, every column holding `rows`
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

/// Values of a Float64 score column
#[must_use]
pub fn f64_column(batch: &RecordBatch, name: &str) -> Vec<Option<f64>> {
    let array = batch
        .column_by_name(name)
        .unwrap_or_else(|| panic!("missing column {name}"));
    let values = array
        .as_any()
        .downcast_ref::<Float64Array>()
        .unwrap_or_else(|| panic!("{name} is not Float64"));
    (0..values.len())
        .map(|i| (!values.is_null(i)).then(|| values.value(i)))
        .collect()
}

/// Values of a UInt32 accounting column
#[must_use]
pub fn u32_column(batch: &RecordBatch, name: &str) -> Vec<u32> {
    let array = batch
        .column_by_name(name)
        .unwrap_or_else(|| panic!("missing column {name}"));
    array
        .as_any()
        .downcast_ref::<UInt32Array>()
        .unwrap_or_else(|| panic!("{name} is not UInt32"))
        .values()
        .to_vec()
}

/// Names of every column, in order
#[must_use]
pub fn names(batch: &RecordBatch) -> Vec<String> {
    batch
        .schema()
        .fields()
        .iter()
        .map(|field| field.name().clone())
        .collect()
}
