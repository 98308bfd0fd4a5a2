//! Tanner Sexual Maturity Scale, self-rated.
//!
//! The score is the mean stage over whichever items were answered.

use crate::scoring::definition::{
    Aggregation, Code, ItemSet, MissingPolicy, QuestionnaireDefinition, Recode, ResponseScale,
    SentinelPolicy, SubscaleDefinition,
};
use crate::table::select::ItemSelector;

const CODES: &[(Code, Option<f64>)] = &[
    (Code::Number(1.0), Some(1.0)),
    (Code::Number(2.0), Some(2.0)),
    (Code::Number(3.0), Some(3.0)),
    (Code::Number(4.0), Some(4.0)),
    (Code::Number(5.0), Some(5.0)),
];

#[must_use]
pub fn definition() -> QuestionnaireDefinition {
    QuestionnaireDefinition::new(
        "tanner",
        "tanner_sms01",
        ItemSelector::Named(vec!["tsf1", "tsf2", "tsf3", "tsftsg", "tsftphg"]),
        5,
        ResponseScale::new(1.0, 5.0),
    )
    .with_recode(ItemSet::All, Recode::Lookup(CODES))
    // 9999 is a default sentinel too; kept so a custom sentinel list cannot revive it
    .with_sentinels(SentinelPolicy {
        extra_missing: &[9999.0],
        reserved: &[],
    })
    .with_subscale(
        SubscaleDefinition::sum_all("tot")
            .with_aggregation(Aggregation::Mean)
            .with_missing(MissingPolicy::MinAvailable(1)),
    )
}
