//! Scoring of the clinical questionnaires in the BANDA NDA release.
//!
//! The scored table is one Arrow [`RecordBatch`] holding the respondent-visit
//! key columns and the prefixed item columns. Each questionnaire step takes
//! the table and returns it with `<questionnaire>_<subscale>` columns added.

pub mod config;
pub mod error;
pub mod questionnaires;
pub mod scoring;
pub mod table;
pub mod utils;

// Core types
pub use config::{ItemCount, ItemLevel, ScoringConfig, ScoringOptions};
pub use error::{Result, ScoringError};

// Scoring entry points
pub use scoring::{
    Questionnaire, SUPPORTED_QUESTIONNAIRES, questionnaire_from_name, score_all,
    score_questionnaire,
};
pub use table::ensure_unique_keys;

// Parquet shim
pub use utils::io::{read_table, write_table};

// Arrow types
pub use arrow::record_batch::RecordBatch;
