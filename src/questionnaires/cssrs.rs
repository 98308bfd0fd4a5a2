//! Columbia Suicide Severity Rating Scale (C-SSRS).
//!
//! Scored by clinical rules rather than sums: ideation is the most severe
//! ideation item endorsed, behaviour is whether any behaviour was endorsed in
//! the past three months, and damage and lethality are copied from the first
//! recorded attempt. Item accounting does not apply.

use arrow::record_batch::RecordBatch;

use crate::config::ScoringOptions;
use crate::error::Result;
use crate::scoring::definition::{Code, Recode, SentinelPolicy};
use crate::scoring::engine::{Questionnaire, score_column, warn_if_unscored};
use crate::scoring::recode::{SentinelSet, apply_recode};
use crate::scoring::validate::check_bounds;
use crate::table::response::read_responses;
use crate::table::select::{ItemSelector, select_items};
use crate::utils::arrow::{drop_columns, has_column, with_columns};

const NAME: &str = "cssrs";
const SOURCE: &str = "cssrs01";

/// Ideation items from least to most severe
const IDEATION: [&str; 5] = ["css_sim1", "css_sim2", "css_sim3", "css_sim4", "css_sim5"];
const BEHAVIOUR: [&str; 4] = ["sbaap3m", "sbiap3m", "sbasiap3m", "sbpabp3m"];
const DAMAGE: &str = "actlthl1";
const LETHALITY: &str = "potlthl1";

const YES_NO: &[(Code, Option<f64>)] = &[
    (Code::Number(0.0), Some(0.0)),
    (Code::Number(1.0), Some(1.0)),
];

/// Behaviour items code "no" as 2
const YES_TWO_NO: &[(Code, Option<f64>)] = &[
    (Code::Number(1.0), Some(1.0)),
    (Code::Number(2.0), Some(0.0)),
];

/// Every C-SSRS column of the release, removed under `ItemLevel::Drop`
const RELEASE_COLUMNS: [&str; 43] = [
    "si1l", "si2l", "si3l", "si4l", "si5l", "sb2l", "sb3l", "sb4l", "sb5l", "sb6l", "rctattdt",
    "actlthl1", "potlthl1", "lthldt", "actlthl2", "potlthl2", "initatdt", "actlthl3", "potlthl3",
    "cssrs_base_06", "cssrs_base_06a", "css_sim1", "css_sim2", "css_sim3", "css_sim4", "css_sim5",
    "iilmsi", "iirmsi", "sbaap3m", "sbtnal", "sbtnap3m", "sbnssibl", "sbnssibp3m", "sbsibiul",
    "sbsibiup3m", "sbiap3m", "sbiatnal", "sbiatnap3m", "sbpabp3m", "sbasiap3m", "sbasiatnal",
    "sbasiatnap3m", "sb_present_interview_3m",
];

/// Severity of the most severe endorsed item, 0 when none is, missing when all are
fn highest_endorsed(items: &[Vec<Option<f64>>], row: usize) -> Option<f64> {
    let answers: Vec<Option<f64>> = items.iter().map(|column| column[row]).collect();
    if answers.iter().all(Option::is_none) {
        return None;
    }
    let level = answers
        .iter()
        .rposition(|answer| *answer == Some(1.0))
        .map_or(0, |idx| idx + 1);
    Some(level as f64)
}

/// 1 when any item is endorsed, 0 when answered without endorsement, missing when all are
fn any_endorsed(items: &[Vec<Option<f64>>], row: usize) -> Option<f64> {
    let mut answered = false;
    for column in items {
        match column[row] {
            Some(value) if value > 0.0 => return Some(1.0),
            Some(_) => answered = true,
            None => {}
        }
    }
    answered.then_some(0.0)
}

pub struct Cssrs;

impl Cssrs {
    fn recoded(
        batch: &RecordBatch,
        columns: &[String],
        recode: Recode,
        sentinels: &SentinelSet,
    ) -> Result<Vec<Vec<Option<f64>>>> {
        columns
            .iter()
            .map(|column| {
                read_responses(batch, column, NAME)?
                    .iter()
                    .map(|cell| apply_recode(recode, &sentinels.normalize(cell), column))
                    .collect::<Result<Vec<_>>>()
            })
            .collect()
    }
}

impl Questionnaire for Cssrs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn score(&self, batch: RecordBatch, options: &ScoringOptions) -> Result<RecordBatch> {
        let already_scored = has_column(&batch, "cssrs_ideation");
        let required: Vec<&'static str> = IDEATION
            .iter()
            .chain(BEHAVIOUR.iter())
            .copied()
            .chain([DAMAGE, LETHALITY])
            .collect();
        let columns = select_items(
            &batch,
            NAME,
            SOURCE,
            &ItemSelector::Named(required),
            already_scored,
        )?;
        let (ideation_cols, rest) = columns.split_at(IDEATION.len());
        let (behaviour_cols, rest) = rest.split_at(BEHAVIOUR.len());

        let sentinels = SentinelSet::new(options, &SentinelPolicy::default());
        let ideation_items =
            Self::recoded(&batch, ideation_cols, Recode::Lookup(YES_NO), &sentinels)?;
        let behaviour_items =
            Self::recoded(&batch, behaviour_cols, Recode::Lookup(YES_TWO_NO), &sentinels)?;
        let copied = Self::recoded(&batch, rest, Recode::Identity, &sentinels)?;

        let rows = batch.num_rows();
        let ideation: Vec<Option<f64>> = (0..rows)
            .map(|row| highest_endorsed(&ideation_items, row))
            .collect();
        let behave: Vec<Option<f64>> = (0..rows)
            .map(|row| any_endorsed(&behaviour_items, row))
            .collect();
        let (damage, lethality) = (copied[0].clone(), copied[1].clone());

        let scores = [
            ("ideation", ideation, 5.0),
            ("behave", behave, 1.0),
            ("damage", damage, 5.0),
            ("lethality", lethality, 2.0),
        ];
        let mut outputs = Vec::with_capacity(scores.len());
        for (subscale, values, max) in scores {
            check_bounds(&batch, NAME, subscale, &values, 0.0, max)?;
            let column = format!("{NAME}_{subscale}");
            warn_if_unscored(&column, &values);
            outputs.push((column, score_column(values)));
        }

        let mut batch = with_columns(batch, outputs)?;
        if options.drops_items() {
            let release: Vec<String> = RELEASE_COLUMNS
                .iter()
                .map(|name| format!("{SOURCE}_{name}"))
                .collect();
            batch = drop_columns(batch, &release)?;
        }
        Ok(batch)
    }
}
