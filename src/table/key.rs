//! The composite respondent-visit key that identifies every row.

use std::fmt;

use arrow::record_batch::RecordBatch;
use arrow::util::display::array_value_to_string;
use rustc_hash::FxHashSet;

use crate::error::{Result, ScoringError};
use crate::utils::arrow::{column_to_strings, get_column_by_name};

pub const SRC_SUBJECT_ID: &str = "src_subject_id";
pub const VISIT: &str = "visit";
pub const RESPONDENT: &str = "respondent";
pub const SUBJECTKEY: &str = "subjectkey";
pub const SEX: &str = "sex";
pub const INTERVIEW_DATE: &str = "interview_date";
pub const INTERVIEW_AGE: &str = "interview_age";

/// Key columns in index order
pub const KEY_COLUMNS: [&str; 7] = [
    SRC_SUBJECT_ID,
    VISIT,
    RESPONDENT,
    SUBJECTKEY,
    SEX,
    INTERVIEW_DATE,
    INTERVIEW_AGE,
];

/// Who filled in the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Respondent {
    Child,
    Parent,
}

impl Respondent {
    /// Parse the value of the `respondent` column
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("child") {
            Some(Self::Child)
        } else if value.eq_ignore_ascii_case("parent") {
            Some(Self::Parent)
        } else {
            None
        }
    }
}

impl fmt::Display for Respondent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Child => write!(f, "Child"),
            Self::Parent => write!(f, "Parent"),
        }
    }
}

/// Read the respondent of every row
///
/// Rows with an unrecognised or null respondent come back as `None`.
pub fn read_respondents(batch: &RecordBatch, owner: &str) -> Result<Vec<Option<Respondent>>> {
    let column = get_column_by_name(batch, RESPONDENT, owner)?;
    Ok(column_to_strings(&column, RESPONDENT)?
        .into_iter()
        .map(|value| value.as_deref().and_then(Respondent::parse))
        .collect())
}

/// One row's composite key, rendered as text
///
/// Key columns absent from the batch render as `?` so that error messages can
/// still be built from partial tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RespondentVisitKey {
    pub values: [String; 7],
}

impl RespondentVisitKey {
    /// Build the key of one row
    #[must_use]
    pub fn from_row(batch: &RecordBatch, row: usize) -> Self {
        let values = KEY_COLUMNS.map(|name| match batch.column_by_name(name) {
            Some(column) => array_value_to_string(column.as_ref(), row)
                .unwrap_or_else(|_| "?".to_string()),
            None => "?".to_string(),
        });
        Self { values }
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.values[0]
    }

    #[must_use]
    pub fn visit(&self) -> &str {
        &self.values[1]
    }
}

impl fmt::Display for RespondentVisitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "src_subject_id={} visit={} respondent={} (subjectkey={}, sex={}, interview_date={}, interview_age={})",
            self.values[0],
            self.values[1],
            self.values[2],
            self.values[3],
            self.values[4],
            self.values[5],
            self.values[6],
        )
    }
}

/// Render the key of one row for an error message
#[must_use]
pub fn describe_row(batch: &RecordBatch, row: usize) -> String {
    RespondentVisitKey::from_row(batch, row).to_string()
}

/// Check that no two rows share a respondent-visit key
///
/// # Errors
/// `MissingColumns` when a key column is absent, `DuplicateKey` naming the
/// first repeated key otherwise.
pub fn ensure_unique_keys(batch: &RecordBatch) -> Result<()> {
    let missing: Vec<String> = KEY_COLUMNS
        .iter()
        .filter(|name| batch.column_by_name(name).is_none())
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ScoringError::missing_columns("respondent-visit key", missing));
    }

    let mut seen = FxHashSet::default();
    for row in 0..batch.num_rows() {
        let key = RespondentVisitKey::from_row(batch, row);
        if !seen.insert(key.clone()) {
            return Err(ScoringError::DuplicateKey(key.to_string()));
        }
    }

    log::debug!("All {} respondent-visit keys are unique", batch.num_rows());
    Ok(())
}
