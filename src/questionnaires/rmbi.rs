//! Retrospective Measure of Behavioural Inhibition (RMBI).
//!
//! Items come in two codings. Most use 0-2 with 3 for "do not remember";
//! the already reverse-scored items use 1-3 with 0 for "do not remember".

use crate::scoring::definition::{
    Code, ItemSet, MissingPolicy, QuestionnaireDefinition, Recode, ResponseScale,
    SubscaleDefinition,
};
use crate::table::select::ItemSelector;

const DIRECT_ITEMS: [usize; 12] = [1, 2, 3, 6, 8, 9, 10, 12, 14, 16, 17, 18];
const REVERSED_ITEMS: [usize; 6] = [4, 5, 7, 11, 13, 15];

const DIRECT: &[(Code, Option<f64>)] = &[
    (Code::Number(0.0), Some(0.0)),
    (Code::Number(1.0), Some(1.0)),
    (Code::Number(2.0), Some(2.0)),
    (Code::Number(3.0), None),
];

const REVERSED: &[(Code, Option<f64>)] = &[
    (Code::Number(0.0), None),
    (Code::Number(1.0), Some(0.0)),
    (Code::Number(2.0), Some(1.0)),
    (Code::Number(3.0), Some(2.0)),
];

#[must_use]
pub fn definition() -> QuestionnaireDefinition {
    QuestionnaireDefinition::new(
        "rmbi",
        "rmbi01",
        ItemSelector::numbered("rmbi", 18),
        18,
        ResponseScale::new(0.0, 2.0),
    )
    .with_recode(ItemSet::Numbers(DIRECT_ITEMS.to_vec()), Recode::Lookup(DIRECT))
    .with_recode(ItemSet::Numbers(REVERSED_ITEMS.to_vec()), Recode::Lookup(REVERSED))
    .with_subscale(SubscaleDefinition::sum_all("tot").with_missing(MissingPolicy::MinAvailable(1)))
}
