//! Snaith-Hamilton Pleasure Scale (SHAPS).
//!
//! Each item is binarised: either "disagree" answer scores one point of
//! anhedonia, either "agree" answer scores none.

use crate::scoring::definition::{
    Code, ItemSet, MissingPolicy, QuestionnaireDefinition, Recode, ResponseScale, ScoreLabels,
    SentinelPolicy, SubscaleDefinition,
};
use crate::table::select::ItemSelector;

const CODES: &[(Code, Option<f64>)] = &[
    (Code::Number(1.0), Some(1.0)),
    (Code::Number(2.0), Some(1.0)),
    (Code::Number(3.0), Some(0.0)),
    (Code::Number(4.0), Some(0.0)),
];

const ANHEDONIA: &[(f64, f64, &str)] = &[(0.0, 2.0, "normal"), (3.0, 14.0, "abnormal")];

#[must_use]
pub fn definition() -> QuestionnaireDefinition {
    QuestionnaireDefinition::new(
        "shaps",
        "shaps01",
        ItemSelector::numbered("shaps", 14),
        14,
        ResponseScale::new(0.0, 1.0),
    )
    .with_recode(ItemSet::All, Recode::Lookup(CODES))
    .with_sentinels(SentinelPolicy {
        extra_missing: &[-9.0],
        reserved: &[],
    })
    .with_subscale(SubscaleDefinition::sum_all("tot").with_missing(MissingPolicy::MinAvailable(1)))
    .with_labels(ScoreLabels {
        name: "anhedonia",
        source: "tot",
        bands: ANHEDONIA,
    })
}
