//! Item accounting columns: how many items were missing and how many were expected.

use std::sync::Arc;

use arrow::array::{ArrayRef, UInt32Array};

use crate::scoring::aggregate::SubscaleScores;

pub const NMISSING_SUFFIX: &str = "nmissing";
pub const NEXPECTED_SUFFIX: &str = "nexpected";

fn to_u32(values: &[usize]) -> ArrayRef {
    Arc::new(UInt32Array::from_iter_values(
        values.iter().map(|v| u32::try_from(*v).unwrap_or(u32::MAX)),
    ))
}

/// `(<output>_nmissing, <output>_nexpected)` columns for one scored subscale
///
/// `output` is the full score column name, e.g. `masq_tot`.
#[must_use]
pub fn accounting_columns(output: &str, scores: &SubscaleScores) -> Vec<(String, ArrayRef)> {
    vec![
        (format!("{output}_{NMISSING_SUFFIX}"), to_u32(&scores.missing())),
        (format!("{output}_{NEXPECTED_SUFFIX}"), to_u32(&scores.expected)),
    ]
}
