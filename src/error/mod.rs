//! Error handling for questionnaire scoring.
//!
//! Every variant is fatal for the run that raised it: scoring either fully
//! succeeds for a questionnaire or the whole run stops.

use std::io;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Errors raised while selecting, recoding, scoring or validating questionnaires
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    /// No scoring rule for a questionnaire, no columns loaded for it, or a
    /// response code the questionnaire does not define
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A computed score lies outside its theoretical bounds
    #[error(
        "Range violation: {questionnaire}_{subscale} = {value} for {key} lies outside [{min}, {max}]"
    )]
    RangeViolation {
        key: String,
        questionnaire: String,
        subscale: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The number of contributing items differs from the declared count
    #[error(
        "Item count mismatch: {questionnaire}_{subscale} expects {expected} items but found {actual} ({scope})"
    )]
    ItemCountMismatch {
        questionnaire: String,
        subscale: String,
        expected: usize,
        actual: usize,
        /// Where the mismatch was found: the definition, the loaded columns, or a respondent-visit key
        scope: String,
    },

    /// Columns the questionnaire needs are absent from the table
    #[error("Missing columns for {questionnaire}: {}", .columns.join(", "))]
    MissingColumns {
        questionnaire: String,
        columns: Vec<String>,
    },

    /// Two rows share the same respondent-visit key
    #[error("Duplicate respondent-visit key: {0}")]
    DuplicateKey(String),

    /// An item column holds a type that cannot carry response codes
    #[error("Column '{column}' has unsupported type {data_type}")]
    InvalidDataType { column: String, data_type: String },

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ScoringError {
    /// Shorthand for a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Shorthand for missing columns
    pub fn missing_columns(questionnaire: &str, columns: Vec<String>) -> Self {
        Self::MissingColumns {
            questionnaire: questionnaire.to_string(),
            columns,
        }
    }
}

/// Result type for scoring operations
pub type Result<T> = std::result::Result<T, ScoringError>;
