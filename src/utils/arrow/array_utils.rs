//! Utilities for working with Arrow arrays.
//!
//! This module provides helpers for safely extracting columns from record
//! batches and turning them into the typed vectors the scoring code works on.

use arrow::array::{Array, ArrayRef, Float64Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::error::{Result, ScoringError};

/// Get the column index by name from a record batch
///
/// # Errors
/// Returns `MissingColumns` if the column does not exist
pub fn get_column_index(batch: &RecordBatch, column_name: &str, owner: &str) -> Result<usize> {
    batch
        .schema()
        .index_of(column_name)
        .map_err(|_| ScoringError::missing_columns(owner, vec![column_name.to_string()]))
}

/// Get a column from a record batch by name
///
/// `owner` names whoever needed the column, for the error message.
pub fn get_column_by_name(batch: &RecordBatch, column_name: &str, owner: &str) -> Result<ArrayRef> {
    let idx = get_column_index(batch, column_name, owner)?;
    Ok(batch.column(idx).clone())
}

/// Downcast a column to a specific array type with clear error messages
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
) -> Result<&'a A> {
    array
        .as_any()
        .downcast_ref::<A>()
        .ok_or_else(|| ScoringError::InvalidDataType {
            column: column_name.to_string(),
            data_type: array.data_type().to_string(),
        })
}

/// Whether a column of this type holds text codes
#[must_use]
pub fn is_textual(data_type: &DataType) -> bool {
    match data_type {
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => true,
        DataType::Dictionary(_, value) => is_textual(value),
        _ => false,
    }
}

/// Whether a column of this type can be read as floating point values
#[must_use]
pub fn is_numeric(data_type: &DataType) -> bool {
    data_type.is_numeric() || matches!(data_type, DataType::Boolean)
}

/// Read any numeric column as `f64`, with nulls and NaN as `None`
pub fn column_to_f64(array: &ArrayRef, column_name: &str) -> Result<Vec<Option<f64>>> {
    if matches!(array.data_type(), DataType::Null) {
        return Ok(vec![None; array.len()]);
    }
    if !is_numeric(array.data_type()) {
        return Err(ScoringError::InvalidDataType {
            column: column_name.to_string(),
            data_type: array.data_type().to_string(),
        });
    }

    let converted = cast(array.as_ref(), &DataType::Float64)?;
    let floats = downcast_array::<Float64Array>(&converted, column_name)?;
    Ok(floats
        .iter()
        .map(|value| value.filter(|v| !v.is_nan()))
        .collect())
}

/// Read any text column as owned strings, with nulls as `None`
pub fn column_to_strings(array: &ArrayRef, column_name: &str) -> Result<Vec<Option<String>>> {
    if matches!(array.data_type(), DataType::Null) {
        return Ok(vec![None; array.len()]);
    }
    if !is_textual(array.data_type()) {
        return Err(ScoringError::InvalidDataType {
            column: column_name.to_string(),
            data_type: array.data_type().to_string(),
        });
    }

    let converted = cast(array.as_ref(), &DataType::Utf8)?;
    let strings = downcast_array::<StringArray>(&converted, column_name)?;
    Ok(strings.iter().map(|value| value.map(str::to_string)).collect())
}
