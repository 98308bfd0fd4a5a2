//! K-SADS diagnoses: a study-specific diagnostic grouping.
//!
//! A current diagnosis counts when rated present (3) or severe (4). Each row
//! is grouped by whether it has any current depressive and any current
//! anxiety diagnosis. The supplementary `ksads_diagnosesp201` structure holds
//! no diagnoses the grouping uses and is only relabelled or removed.
//!
//! Release columns that survive scoring are renamed to `ksads_<diagnosis>`
//! (`ksadsp201_<diagnosis>` for the supplement), so a second run finds no
//! source columns.

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::record_batch::RecordBatch;
use rustc_hash::FxHashMap;

use crate::config::ScoringOptions;
use crate::error::{Result, ScoringError};
use crate::scoring::definition::{Code, Recode, SentinelPolicy};
use crate::scoring::engine::{Questionnaire, score_column};
use crate::scoring::recode::{SentinelSet, apply_recode};
use crate::table::response::read_responses;
use crate::table::select::{ItemSelector, item_column, select_items};
use crate::utils::arrow::{column_names, drop_columns, has_column, rename_columns, with_columns};
use crate::utils::logging::log_warning;

const NAME: &str = "ksads";
const SOURCE: &str = "ksads_diagnoses01";
const GROUP: &str = "ksads_group";

const SUPPLEMENT_NAME: &str = "ksadsp201";
const SUPPLEMENT_SOURCE: &str = "ksads_diagnosesp201";

const DEPRESSIVE: [&str; 3] = ["mddcurrent", "dysthymiacurrent", "depnoscurrent"];
const ANXIOUS: [&str; 6] = [
    "gadcurrent",
    "panicdisordercurrent",
    "agoraphobiacurrent",
    "separationcurrent",
    "socialphobiacurrent",
    "simplephobiacurrent",
];

/// 0 incomplete, 1 absent, 2 sub-clinical, 3 present, 4 severe
const PRESENT: &[(Code, Option<f64>)] = &[
    (Code::Number(0.0), Some(0.0)),
    (Code::Number(1.0), Some(0.0)),
    (Code::Number(2.0), Some(0.0)),
    (Code::Number(3.0), Some(1.0)),
    (Code::Number(4.0), Some(1.0)),
];

/// Diagnosis columns of the release; all but the grouping inputs go under `Drop`
const RELEASE_COLUMNS: [&str; 79] = [
    "depressive_disorder_nos", "mania", "hypomania", "bipolar_nos", "bipolar_i", "bipolar_ii",
    "schizoaffective_disorder_mania", "schizophrenia", "schizophreniform_disorder",
    "brief_reactive_psychosis", "avoidant_disorder_childhood", "overanxious_disorder",
    "post_traumatic_stress_disorder", "acute_stress_disorder", "adj_disorder_wanxious_mood",
    "enuresis", "encopresis", "attention_deficit_disorder", "adj_disorder_dist_conduct",
    "adj_dis_mixed_mood_conduct", "tourettes", "chronic_motor_voc_tic_disorder",
    "transient_tic_disorder", "alcohol_abuse", "mental_retardation", "other_psychiatric_disorder",
    "no_psychiatric_disorder", "relationship", "kssp_q2_p", "kssp_q8_p", "kssp_q10_p",
    "kssp_q11_p", "mddpast", "mddcurrent", "dysthymiapast", "dysthymiacurrent", "depnospast",
    "depnoscurrent", "cyclothymiapast", "cyclothymiacurrent", "bipolarnospast",
    "bipolarnoscurrent", "bipolaripast", "bipolaricurrent", "bipolariipast", "bipolariicurrent",
    "panicdisorderpast", "panicdisordercurrent", "separationpast", "separationcurrent",
    "simplephobiapast", "simplephobiacurrent", "socialphobiapast", "socialphobiacurrent",
    "agoraphobiapast", "agoraphobiacurrent", "gadpast", "gadcurrent", "ocdpast", "ocdcurrent",
    "ptsdpast", "ptsdcurrent", "adhdpast", "adhdcurrent", "oddpast", "oddcurrent", "conductpast",
    "conductcurrent", "anorexiapast", "anorexiacurrent", "bulimiapast", "bulimiacurrent",
    "alcoholabusepast", "alcoholdependencepast", "alcoholdependencecurrent", "substanceabusepast",
    "substanceabusecurrent", "substancedependencepast", "substancedependencecurrent",
];

/// Diagnostic group of one respondent-visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticGroup {
    Depressed,
    Anxious,
    Comorbid,
    HealthyControl,
}

impl DiagnosticGroup {
    /// Group from the recoded diagnoses of one row; `None` when nothing was rated
    #[must_use]
    pub fn classify(depressive: &[Option<f64>], anxious: &[Option<f64>]) -> Option<Self> {
        let rated = depressive.iter().chain(anxious).any(Option::is_some);
        if !rated {
            return None;
        }
        let present = |values: &[Option<f64>]| values.iter().any(|v| *v == Some(1.0));
        Some(match (present(depressive), present(anxious)) {
            (true, true) => Self::Comorbid,
            (true, false) => Self::Depressed,
            (false, true) => Self::Anxious,
            (false, false) => Self::HealthyControl,
        })
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Depressed => "depressed",
            Self::Anxious => "anxious",
            Self::Comorbid => "comorbid",
            Self::HealthyControl => "hc",
        }
    }
}

pub struct Ksads;

impl Questionnaire for Ksads {
    fn name(&self) -> &'static str {
        NAME
    }

    fn score(&self, batch: RecordBatch, options: &ScoringOptions) -> Result<RecordBatch> {
        let inputs: Vec<&'static str> = DEPRESSIVE.iter().chain(ANXIOUS.iter()).copied().collect();
        let columns = select_items(
            &batch,
            NAME,
            SOURCE,
            &ItemSelector::Named(inputs),
            has_column(&batch, GROUP),
        )?;

        let sentinels = SentinelSet::new(options, &SentinelPolicy::default());
        let recoded = columns
            .iter()
            .map(|column| {
                read_responses(&batch, column, NAME)?
                    .iter()
                    .map(|cell| {
                        apply_recode(Recode::Lookup(PRESENT), &sentinels.normalize(cell), column)
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let groups: Vec<Option<&'static str>> = (0..batch.num_rows())
            .map(|row| {
                let values: Vec<Option<f64>> = recoded.iter().map(|column| column[row]).collect();
                let (depressive, anxious) = values.split_at(DEPRESSIVE.len());
                DiagnosticGroup::classify(depressive, anxious).map(|group| group.label())
            })
            .collect();
        if groups.iter().all(Option::is_none) {
            log_warning("No row received a diagnostic group", Some(GROUP));
        }

        let group_column: ArrayRef = Arc::new(StringArray::from(groups));
        let mut outputs = vec![(GROUP.to_string(), group_column)];
        outputs.extend(
            columns
                .iter()
                .zip(recoded)
                .map(|(column, values)| (column.clone(), score_column(values))),
        );
        let mut batch = with_columns(batch, outputs)?;

        if options.drops_items() {
            let drop: Vec<String> = RELEASE_COLUMNS
                .iter()
                .filter(|name| !DEPRESSIVE.contains(name) && !ANXIOUS.contains(name))
                .map(|name| item_column(SOURCE, name))
                .collect();
            batch = drop_columns(batch, &drop)?;
        }

        let renames: FxHashMap<String, String> = RELEASE_COLUMNS
            .iter()
            .map(|name| (item_column(SOURCE, name), item_column(NAME, name)))
            .collect();
        rename_columns(batch, |column| renames.get(column).cloned())
    }
}

/// Supplementary diagnoses; nothing is scored
pub struct KsadsSupplement;

impl KsadsSupplement {
    /// Whether an earlier run already consumed the supplement columns
    fn already_processed(batch: &RecordBatch) -> bool {
        let relabelled = format!("{SUPPLEMENT_NAME}_");
        has_column(batch, GROUP) || column_names(batch).iter().any(|c| c.starts_with(&relabelled))
    }
}

impl Questionnaire for KsadsSupplement {
    fn name(&self) -> &'static str {
        SUPPLEMENT_NAME
    }

    fn score(&self, batch: RecordBatch, options: &ScoringOptions) -> Result<RecordBatch> {
        let source_prefix = format!("{SUPPLEMENT_SOURCE}_");
        let columns: Vec<String> = column_names(&batch)
            .into_iter()
            .filter(|c| c.starts_with(&source_prefix))
            .collect();
        if columns.is_empty() {
            let pattern = vec![format!("{source_prefix}*")];
            if Self::already_processed(&batch) {
                return Err(ScoringError::missing_columns(SUPPLEMENT_NAME, pattern));
            }
            return Err(ScoringError::configuration(format!(
                "no item columns for questionnaire '{SUPPLEMENT_NAME}' (source '{SUPPLEMENT_SOURCE}'); was it loaded?"
            )));
        }

        if options.drops_items() {
            log::debug!("{SUPPLEMENT_NAME}: dropping {} columns", columns.len());
            return drop_columns(batch, &columns);
        }
        log::debug!("{SUPPLEMENT_NAME}: relabelling {} columns", columns.len());
        rename_columns(batch, |column| {
            column
                .strip_prefix(&source_prefix)
                .map(|rest| item_column(SUPPLEMENT_NAME, rest))
        })
    }
}
