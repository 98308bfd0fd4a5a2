//! Validation of definitions, loaded items and computed scores.
//!
//! Every failure here is a data-integrity defect. Nothing is clamped or
//! skipped; the first violation stops the run.

use arrow::record_batch::RecordBatch;

use crate::error::{Result, ScoringError};
use crate::scoring::aggregate::SubscaleScores;
use crate::scoring::definition::{Aggregation, QuestionnaireDefinition, ResponseScale};
use crate::table::key::describe_row;

const TOLERANCE: f64 = 1e-9;

/// Check that a definition is internally consistent
///
/// Declared counts must match item lists, subscales must cover every
/// non-filler item, and totals and labels must refer to what they aggregate.
pub fn check_definition(definition: &QuestionnaireDefinition) -> Result<()> {
    let name = definition.name;
    let mut covered = 0;

    for subscale in &definition.subscales {
        let numbers = subscale.items.numbers(definition.n_items);
        if let Some(bad) = numbers
            .iter()
            .find(|&&item| item == 0 || item > definition.n_items)
        {
            return Err(ScoringError::configuration(format!(
                "{name}_{}: item {bad} is outside 1..={}",
                subscale.name, definition.n_items
            )));
        }

        let declared = subscale.expected_items(definition.n_items).max();
        if declared != numbers.len() {
            return Err(ScoringError::ItemCountMismatch {
                questionnaire: name.to_string(),
                subscale: subscale.name.to_string(),
                expected: declared,
                actual: numbers.len(),
                scope: "definition".to_string(),
            });
        }
        covered += numbers.len();
    }

    let scored_items = definition.n_items - definition.fillers.len();
    if covered != scored_items {
        return Err(ScoringError::ItemCountMismatch {
            questionnaire: name.to_string(),
            subscale: "subscales".to_string(),
            expected: scored_items,
            actual: covered,
            scope: "definition".to_string(),
        });
    }

    if let Some(total) = &definition.total {
        if let Some(other) = definition
            .subscales
            .iter()
            .find(|s| s.aggregation != total.aggregation)
        {
            return Err(ScoringError::configuration(format!(
                "{name}_{} aggregates with {:?} but subscale {} uses {:?}",
                total.name, total.aggregation, other.name, other.aggregation
            )));
        }
    }

    let outputs = definition.output_names();
    for labels in &definition.labels {
        if !outputs.contains(&labels.source) {
            return Err(ScoringError::configuration(format!(
                "{name}_{} is read from unknown score '{}'",
                labels.name, labels.source
            )));
        }
    }

    Ok(())
}

/// Check that the table supplied exactly the declared number of item columns
pub fn check_loaded_items(definition: &QuestionnaireDefinition, columns: &[String]) -> Result<()> {
    if columns.len() == definition.n_items {
        return Ok(());
    }
    Err(ScoringError::ItemCountMismatch {
        questionnaire: definition.name.to_string(),
        subscale: "items".to_string(),
        expected: definition.n_items,
        actual: columns.len(),
        scope: "loaded columns".to_string(),
    })
}

/// Check that no row answered more items than it was expected to
pub fn check_item_counts(
    batch: &RecordBatch,
    questionnaire: &str,
    scores: &SubscaleScores,
) -> Result<()> {
    let overflow = scores
        .available
        .iter()
        .zip(&scores.expected)
        .position(|(available, expected)| available > expected);

    match overflow {
        None => Ok(()),
        Some(row) => Err(ScoringError::ItemCountMismatch {
            questionnaire: questionnaire.to_string(),
            subscale: scores.name.to_string(),
            expected: scores.expected[row],
            actual: scores.available[row],
            scope: describe_row(batch, row),
        }),
    }
}

/// Check every score against the range attainable from its answered items
///
/// A sum over `n` answered items lies in `[n * min, n * max]`; a mean lies
/// within the item scale itself.
pub fn check_range(
    batch: &RecordBatch,
    questionnaire: &str,
    scores: &SubscaleScores,
    scale: ResponseScale,
) -> Result<()> {
    for (row, value) in scores.values.iter().enumerate() {
        let Some(value) = *value else { continue };
        let (min, max) = match scores.aggregation {
            Aggregation::Sum => {
                let n = scores.available[row] as f64;
                (n * scale.min, n * scale.max)
            }
            Aggregation::Mean => (scale.min, scale.max),
        };
        ensure_within(batch, row, questionnaire, scores.name, value, min, max)?;
    }
    Ok(())
}

/// Check scores computed by instrument-specific rules against fixed bounds
pub fn check_bounds(
    batch: &RecordBatch,
    questionnaire: &str,
    subscale: &str,
    values: &[Option<f64>],
    min: f64,
    max: f64,
) -> Result<()> {
    for (row, value) in values.iter().enumerate() {
        if let Some(value) = *value {
            ensure_within(batch, row, questionnaire, subscale, value, min, max)?;
        }
    }
    Ok(())
}

fn ensure_within(
    batch: &RecordBatch,
    row: usize,
    questionnaire: &str,
    subscale: &str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<()> {
    if value.is_finite() && value >= min - TOLERANCE && value <= max + TOLERANCE {
        return Ok(());
    }
    Err(ScoringError::RangeViolation {
        key: describe_row(batch, row),
        questionnaire: questionnaire.to_string(),
        subscale: subscale.to_string(),
        value,
        min,
        max,
    })
}
