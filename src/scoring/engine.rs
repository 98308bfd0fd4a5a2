//! The scoring contract and the generic scale pipeline.
//!
//! Each scoring step takes the table by value and returns the augmented table.
//! A step reads only its own item columns and writes only its own outputs, so
//! steps can run in any order.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::config::ScoringOptions;
use crate::error::{Result, ScoringError};
use crate::scoring::accounting::accounting_columns;
use crate::scoring::aggregate::{SubscaleScores, score_subscale, score_total};
use crate::scoring::definition::{QuestionnaireDefinition, ScoreLabels};
use crate::scoring::recode::Recoder;
use crate::scoring::validate::{check_definition, check_item_counts, check_loaded_items, check_range};
use crate::table::key::read_respondents;
use crate::table::response::read_responses;
use crate::table::select::{item_column, select_items};
use crate::utils::arrow::{drop_columns, has_column, with_columns};
use crate::utils::logging::log_warning;

/// A questionnaire that can score itself on the shared table
pub trait Questionnaire: Send + Sync {
    /// Registry identifier, also the prefix of every output column
    fn name(&self) -> &'static str;

    /// Score the table
    ///
    /// Under `ItemLevel::Drop` the consumed item columns are removed, after
    /// which a second call fails with `MissingColumns`.
    fn score(&self, batch: RecordBatch, options: &ScoringOptions) -> Result<RecordBatch>;
}

/// Wrap score values as an Arrow column
#[must_use]
pub fn score_column(values: Vec<Option<f64>>) -> ArrayRef {
    Arc::new(Float64Array::from(values))
}

/// Warn when a score column came out entirely missing
pub fn warn_if_unscored(column: &str, values: &[Option<f64>]) {
    if !values.is_empty() && values.iter().all(Option::is_none) {
        log_warning("No row received a score", Some(column));
    }
}

/// A questionnaire scored entirely from its [`QuestionnaireDefinition`]
#[derive(Debug, Clone)]
pub struct ScaleQuestionnaire {
    definition: QuestionnaireDefinition,
}

impl ScaleQuestionnaire {
    #[must_use]
    pub fn new(definition: QuestionnaireDefinition) -> Self {
        Self { definition }
    }

    #[must_use]
    pub fn definition(&self) -> &QuestionnaireDefinition {
        &self.definition
    }

    fn score_all(
        &self,
        batch: &RecordBatch,
        columns: &[String],
        options: &ScoringOptions,
    ) -> Result<Vec<SubscaleScores>> {
        let def = &self.definition;
        let rows = batch.num_rows();

        let respondents = if def
            .subscales
            .iter()
            .any(|s| s.expected_items(def.n_items).depends_on_respondent())
        {
            read_respondents(batch, def.name)?
        } else {
            vec![None; rows]
        };

        let recoder = Recoder::new(def, options);
        let recoded = columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cells = read_responses(batch, column, def.name)?;
                recoder.recode_column(idx + 1, &cells, column)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut scored = Vec::with_capacity(def.subscales.len() + 1);
        for subscale in &def.subscales {
            let declared = subscale.expected_items(def.n_items);
            let expected: Vec<usize> = respondents
                .iter()
                .map(|respondent| declared.for_respondent(*respondent))
                .collect();
            let items: Vec<&[Option<f64>]> = subscale
                .items
                .numbers(def.n_items)
                .iter()
                .map(|&item| recoded[item - 1].as_slice())
                .collect();

            let scores = score_subscale(subscale, &items, &expected);
            check_item_counts(batch, def.name, &scores)?;
            check_range(batch, def.name, &scores, def.scale)?;
            scored.push(scores);
        }

        if let Some(total) = &def.total {
            let scores = score_total(total, &scored);
            check_item_counts(batch, def.name, &scores)?;
            check_range(batch, def.name, &scores, def.scale)?;
            scored.push(scores);
        }

        Ok(scored)
    }

    fn label_column(&self, labels: &ScoreLabels, scored: &[SubscaleScores]) -> Result<ArrayRef> {
        let def = &self.definition;
        let source = scored
            .iter()
            .find(|s| s.name == labels.source)
            .ok_or_else(|| {
                ScoringError::configuration(format!(
                    "{}_{} is read from unknown score '{}'",
                    def.name, labels.name, labels.source
                ))
            })?;

        let mut values = Vec::with_capacity(source.values.len());
        for (row, value) in source.values.iter().enumerate() {
            let complete = source.available[row] >= source.expected[row];
            let label = match value {
                Some(v) if complete => Some(labels.label_for(*v).ok_or_else(|| {
                    ScoringError::configuration(format!(
                        "{}_{} = {v} falls in no {} band",
                        def.name, labels.source, labels.name
                    ))
                })?),
                _ => None,
            };
            values.push(label);
        }
        Ok(Arc::new(StringArray::from(values)))
    }
}

impl Questionnaire for ScaleQuestionnaire {
    fn name(&self) -> &'static str {
        self.definition.name
    }

    fn score(&self, batch: RecordBatch, options: &ScoringOptions) -> Result<RecordBatch> {
        let def = &self.definition;
        check_definition(def)?;

        let already_scored = def
            .primary_output()
            .is_some_and(|column| has_column(&batch, &column));
        let columns = select_items(&batch, def.name, def.source, &def.selector, already_scored)?;
        check_loaded_items(def, &columns)?;

        let scored = self.score_all(&batch, &columns, options)?;

        let mut outputs: Vec<(String, ArrayRef)> = Vec::new();
        for scores in &scored {
            let column = def.output_column(scores.name);
            warn_if_unscored(&column, &scores.values);
            outputs.push((column.clone(), score_column(scores.values.clone())));
            if options.computes_counts() {
                outputs.extend(accounting_columns(&column, scores));
            }
        }
        for labels in &def.labels {
            outputs.push((def.output_column(labels.name), self.label_column(labels, &scored)?));
        }

        log::debug!(
            "{}: writing {}",
            def.name,
            outputs.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>().join(", ")
        );
        let mut batch = with_columns(batch, outputs)?;

        let superseded: Vec<String> = def
            .superseded
            .iter()
            .map(|name| item_column(def.source, name))
            .collect();
        batch = drop_columns(batch, &superseded)?;

        if options.drops_items() {
            log::debug!("{}: dropping {} item columns", def.name, columns.len());
            batch = drop_columns(batch, &columns)?;
        }
        Ok(batch)
    }
}
