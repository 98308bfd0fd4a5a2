//! Mood and Feelings Questionnaire (MFQ), child self-report and parent report.
//!
//! Both forms share one set of 34 item columns; the child form leaves one of
//! them unanswered, so the expected count depends on the respondent.

use crate::scoring::definition::{
    Code, ExpectedItems, ItemSet, MissingPolicy, QuestionnaireDefinition, Recode, ResponseScale,
    SubscaleDefinition,
};
use crate::table::select::ItemSelector;

const CODES: &[(Code, Option<f64>)] = &[
    (Code::Number(1.0), Some(0.0)),
    (Code::Number(2.0), Some(1.0)),
    (Code::Number(3.0), Some(2.0)),
];

#[must_use]
pub fn definition() -> QuestionnaireDefinition {
    QuestionnaireDefinition::new(
        "mfq",
        "mfq01",
        ItemSelector::Prefixed("mfq"),
        34,
        ResponseScale::new(0.0, 2.0),
    )
    .with_recode(ItemSet::All, Recode::Lookup(CODES))
    .with_subscale(
        SubscaleDefinition::sum_all("tot")
            .with_expected(ExpectedItems::ByRespondent { child: 33, parent: 34 })
            .with_missing(MissingPolicy::MinAvailable(1)),
    )
}
