//! Risky Behavior Questionnaire for Adolescents (RBQA).

use crate::scoring::definition::{
    Code, ItemSet, MissingPolicy, QuestionnaireDefinition, Recode, ResponseScale,
    SubscaleDefinition,
};
use crate::table::select::ItemSelector;

/// 0 = never .. 4 = always
const CODES: &[(Code, Option<f64>)] = &[
    (Code::Number(0.0), Some(0.0)),
    (Code::Number(1.0), Some(1.0)),
    (Code::Number(2.0), Some(2.0)),
    (Code::Number(3.0), Some(3.0)),
    (Code::Number(4.0), Some(4.0)),
];

#[must_use]
pub fn definition() -> QuestionnaireDefinition {
    QuestionnaireDefinition::new(
        "rbqa",
        "rbqa01",
        ItemSelector::numbered("rbqa", 20),
        20,
        ResponseScale::new(0.0, 4.0),
    )
    .with_recode(ItemSet::All, Recode::Lookup(CODES))
    .with_subscale(SubscaleDefinition::sum_all("tot").with_missing(MissingPolicy::MinAvailable(1)))
}
