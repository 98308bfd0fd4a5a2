//! Instruments released only as aggregate scores.
//!
//! There are no items to score. Columns get readable prefixes and the 999
//! placeholder some tasks use for "not computed" becomes a null. The
//! placeholder is fixed by the release, so the configured missing sentinels
//! are not consulted here.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array};
use arrow::record_batch::RecordBatch;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::ScoringOptions;
use crate::error::{Result, ScoringError};
use crate::scoring::engine::Questionnaire;
use crate::utils::arrow::array_utils::is_numeric;
use crate::utils::arrow::{column_names, column_to_f64, rename_columns, with_columns};

const NOT_COMPUTED: f64 = 999.0;

/// Which numeric columns get their `999` placeholders nulled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholders {
    /// Every renamed column
    Everywhere,
    /// Only columns whose largest value is the placeholder itself
    ColumnMaximum,
}

/// Renames columns by source prefix and nulls placeholder values
///
/// Does not read `ScoringOptions::missing_sentinels`.
pub struct Relabel {
    name: &'static str,
    /// `(source, target)` prefixes, tried in order
    prefixes: &'static [(&'static str, &'static str)],
    placeholders: Placeholders,
}

/// WASI-II: `wasi201_*` becomes `wasi_*`
pub const WASI: Relabel = Relabel {
    name: "wasi",
    prefixes: &[("wasi201", "wasi")],
    placeholders: Placeholders::Everywhere,
};

/// Penn computerised tasks and NIH Toolbox tasks
///
/// `dccs01_nih_dccs` must precede `dccs01`, which is a prefix of it. Task
/// scores can legitimately reach 999, so only a column topping out at 999 is
/// taken to hold placeholders.
pub const PENN_NIH: Relabel = Relabel {
    name: "penn_nih",
    prefixes: &[
        ("pwmt01", "penntask_wordmem"),
        ("pmat01", "penntask_matreason"),
        ("er4001", "penntask_emorecog"),
        ("deldisk01", "penntask_delaydisc"),
        ("dccs01_nih_dccs", "nihtoolbox_dimenscardsort"),
        ("dccs01", "nihtoolbox_dimenscardsort"),
        ("lswmt01", "nihtoolbox_listsort"),
        ("flanker01", "nihtoolbox_flanker"),
        ("orrt01", "nihtoolbox_oralreadrec"),
        ("pcps01", "nihtoolbox_patterncompar"),
    ],
    placeholders: Placeholders::ColumnMaximum,
};

impl Relabel {
    /// New name of a column, if one of the source prefixes owns it
    fn target(&self, column: &str) -> Option<String> {
        self.prefixes.iter().find_map(|(source, target)| {
            column
                .strip_prefix(source)
                .and_then(|rest| rest.strip_prefix('_'))
                .map(|rest| format!("{target}_{rest}"))
        })
    }

    fn owns_output(&self, column: &str) -> bool {
        self.prefixes
            .iter()
            .any(|(_, target)| column.starts_with(&format!("{target}_")))
    }

    /// The column with placeholders nulled, or `None` when it is left as is
    fn null_placeholders(&self, array: &ArrayRef, column: &str) -> Result<Option<ArrayRef>> {
        let values = column_to_f64(array, column)?;
        if self.placeholders == Placeholders::ColumnMaximum {
            let maximum = values.iter().flatten().copied().reduce(f64::max);
            if maximum != Some(NOT_COMPUTED) {
                return Ok(None);
            }
        }
        Ok(Some(Arc::new(Float64Array::from_iter(
            values
                .into_iter()
                .map(|value| value.filter(|v| *v != NOT_COMPUTED)),
        ))))
    }
}

impl Questionnaire for Relabel {
    fn name(&self) -> &'static str {
        self.name
    }

    fn score(&self, batch: RecordBatch, _options: &ScoringOptions) -> Result<RecordBatch> {
        let names = column_names(&batch);
        let renames: FxHashMap<String, String> = names
            .iter()
            .filter_map(|column| self.target(column).map(|target| (column.clone(), target)))
            .collect();

        if renames.is_empty() {
            let sources: Vec<String> =
                self.prefixes.iter().map(|(s, _)| format!("{s}_*")).collect();
            if names.iter().any(|column| self.owns_output(column)) {
                return Err(ScoringError::missing_columns(self.name, sources));
            }
            return Err(ScoringError::configuration(format!(
                "no columns for '{}' (expected {})",
                self.name,
                sources.join(", ")
            )));
        }

        let kept: FxHashSet<&String> = names.iter().filter(|c| !renames.contains_key(*c)).collect();
        let mut targets = FxHashSet::default();
        for target in renames.values() {
            if kept.contains(target) || !targets.insert(target) {
                return Err(ScoringError::configuration(format!(
                    "{}: renaming would duplicate column '{target}'",
                    self.name
                )));
            }
        }

        let mut cleaned = Vec::new();
        for column in renames.keys() {
            let array = batch.column(batch.schema().index_of(column)?).clone();
            if is_numeric(array.data_type()) {
                if let Some(nulled) = self.null_placeholders(&array, column)? {
                    cleaned.push((column.clone(), nulled));
                }
            }
        }

        log::debug!("{}: relabelling {} columns", self.name, renames.len());
        let batch = with_columns(batch, cleaned)?;
        rename_columns(batch, |column| renames.get(column).cloned())
    }
}
