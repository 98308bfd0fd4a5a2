//! Raw item responses as they arrive from the data package.
//!
//! The release stores the same kind of answer as numbers in one questionnaire
//! and as text ("Never", "'3'") in another, so every cell is read into a
//! [`RawResponse`] before recoding.

use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::error::{Result, ScoringError};
use crate::utils::arrow::array_utils::{is_numeric, is_textual};
use crate::utils::arrow::{column_to_f64, column_to_strings, get_column_by_name};

/// One raw cell of an item column
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    Missing,
    Number(f64),
    /// Non-numeric text, trimmed and lower-cased
    Text(String),
}

impl RawResponse {
    /// Interpret a text cell: blanks and `nan` are missing, numerals are numbers
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim().trim_matches('\'').trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
            return Self::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_nan() => Self::Missing,
            Ok(value) => Self::Number(value),
            Err(_) => Self::Text(trimmed.to_lowercase()),
        }
    }

    #[must_use]
    pub fn from_number(value: Option<f64>) -> Self {
        match value {
            Some(v) if !v.is_nan() => Self::Number(v),
            _ => Self::Missing,
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Read every cell of one item column
pub fn read_responses(batch: &RecordBatch, column: &str, owner: &str) -> Result<Vec<RawResponse>> {
    let array = get_column_by_name(batch, column, owner)?;
    let data_type = array.data_type();

    if matches!(data_type, DataType::Null) {
        Ok(vec![RawResponse::Missing; array.len()])
    } else if is_textual(data_type) {
        Ok(column_to_strings(&array, column)?
            .into_iter()
            .map(|cell| cell.map_or(RawResponse::Missing, |text| RawResponse::from_text(&text)))
            .collect())
    } else if is_numeric(data_type) {
        Ok(column_to_f64(&array, column)?
            .into_iter()
            .map(RawResponse::from_number)
            .collect())
    } else {
        Err(ScoringError::InvalidDataType {
            column: column.to_string(),
            data_type: data_type.to_string(),
        })
    }
}
