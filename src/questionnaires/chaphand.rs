//! Chapman Handedness Inventory.
//!
//! The release codes each of the 13 items as 0 = left, 1 = either, 2 = right.
//! Scoring flips that to 3 = left, 2 = either, 1 = right, so the total runs
//! from 13 (fully right-handed) to 39 (fully left-handed).

use crate::scoring::definition::{
    Code, ItemSet, MissingPolicy, QuestionnaireDefinition, Recode, ResponseScale, ScoreLabels,
    SubscaleDefinition,
};
use crate::table::select::ItemSelector;

const CODES: &[(Code, Option<f64>)] = &[
    (Code::Number(0.0), Some(3.0)),
    (Code::Number(1.0), Some(2.0)),
    (Code::Number(2.0), Some(1.0)),
];

const HANDEDNESS: &[(f64, f64, &str)] = &[
    (13.0, 17.0, "right"),
    (18.0, 32.0, "ambilateral"),
    (33.0, 39.0, "left"),
];

#[must_use]
pub fn definition() -> QuestionnaireDefinition {
    QuestionnaireDefinition::new(
        "chaphand",
        "chaphand01",
        ItemSelector::Prefixed("hu0"),
        13,
        ResponseScale::new(1.0, 3.0),
    )
    .with_recode(ItemSet::All, Recode::Lookup(CODES))
    .with_subscale(SubscaleDefinition::sum_all("tot").with_missing(MissingPolicy::MinAvailable(1)))
    .with_labels(ScoreLabels {
        name: "handedness",
        source: "tot",
        bands: HANDEDNESS,
    })
}
