//! Uniform entry points that run questionnaires over the shared table.

use std::time::Instant;

use arrow::record_batch::RecordBatch;
use itertools::Itertools;

use crate::config::{ScoringConfig, ScoringOptions};
use crate::error::Result;
use crate::scoring::registry::questionnaire_from_name;
use crate::table::key::ensure_unique_keys;
use crate::utils::arrow::column_names;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Score one questionnaire by identifier
pub fn score_questionnaire(
    batch: RecordBatch,
    name: &str,
    options: &ScoringOptions,
) -> Result<RecordBatch> {
    let questionnaire = questionnaire_from_name(name)?;
    let start = Instant::now();
    log_operation_start("Scoring", questionnaire.name());

    let before = column_names(&batch);
    let scored = questionnaire.score(batch, options)?;
    let after = column_names(&scored);

    let added = after.iter().filter(|c| !before.contains(c)).join(", ");
    let dropped = before.iter().filter(|c| !after.contains(c)).count();
    log::info!(
        "{}: added [{added}], dropped {dropped} item columns",
        questionnaire.name()
    );
    log_operation_complete(
        "scored",
        questionnaire.name(),
        scored.num_rows(),
        Some(start.elapsed()),
    );
    Ok(scored)
}

/// Score every questionnaire the configuration lists, in order
///
/// Each step owns the table only for its own duration; the first failure
/// aborts the run.
pub fn score_all(batch: RecordBatch, config: &ScoringConfig) -> Result<RecordBatch> {
    if config.check_unique_keys {
        ensure_unique_keys(&batch)?;
    }
    let start = Instant::now();
    let mut batch = batch;
    for name in &config.questionnaires {
        batch = score_questionnaire(batch, name, &config.options)?;
    }
    log_operation_complete(
        "scored",
        &format!("{} questionnaires", config.questionnaires.len()),
        batch.num_rows(),
        Some(start.elapsed()),
    );
    Ok(batch)
}
