//! Revised Child Anxiety and Depression Scale (RCADS).
//!
//! The release stores every answer as text.

use crate::scoring::definition::{
    Aggregation, Code, ItemSet, MissingPolicy, QuestionnaireDefinition, Recode, ResponseScale,
    SubscaleDefinition, TotalDefinition,
};
use crate::table::select::ItemSelector;

const CODES: &[(Code, Option<f64>)] = &[
    (Code::Text("never"), Some(0.0)),
    (Code::Text("sometimes"), Some(1.0)),
    (Code::Text("often"), Some(2.0)),
    (Code::Text("always"), Some(3.0)),
];

#[must_use]
pub fn definition() -> QuestionnaireDefinition {
    let subscale = |name, items: &[usize]| {
        SubscaleDefinition::sum(name, items).with_missing(MissingPolicy::MinAvailable(1))
    };

    QuestionnaireDefinition::new(
        "rcads",
        "rcads01",
        ItemSelector::numbered("rcads_", 47),
        47,
        ResponseScale::new(0.0, 3.0),
    )
    .with_recode(ItemSet::All, Recode::Lookup(CODES))
    .with_subscale(subscale("social", &[4, 7, 8, 12, 20, 30, 32, 38, 43]))
    .with_subscale(subscale("panic", &[3, 14, 24, 26, 28, 34, 36, 39, 41]))
    .with_subscale(subscale("mdd", &[2, 6, 11, 15, 19, 21, 25, 29, 40, 47]))
    .with_subscale(subscale("sad", &[5, 9, 17, 18, 33, 45, 46]))
    .with_subscale(subscale("gad", &[1, 13, 22, 27, 35, 37]))
    .with_subscale(subscale("ocd", &[10, 16, 23, 31, 42, 44]))
    .with_total(TotalDefinition {
        name: "tot",
        aggregation: Aggregation::Sum,
        missing: MissingPolicy::MinAvailable(1),
    })
}
