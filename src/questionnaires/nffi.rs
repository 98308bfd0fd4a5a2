//! NEO Five-Factor Inventory, neuroticism scale only.

use crate::scoring::definition::{
    Code, ItemSet, MissingPolicy, QuestionnaireDefinition, Recode, ResponseScale,
    SubscaleDefinition,
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
    // every fifth item of the full inventory: nffi_1, nffi_6, ..., nffi_56
    let selector = ItemSelector::Numbered {
        stem: "nffi_",
        numbers: (1..=56).step_by(5).collect(),
    };

    QuestionnaireDefinition::new("nffi", "nffi01", selector, 12, ResponseScale::new(1.0, 5.0))
        .with_recode(ItemSet::All, Recode::Lookup(CODES))
        // nffi_1, nffi_16, nffi_31, nffi_46
        .with_reversed(&[1, 4, 7, 10])
        .with_subscale(
            SubscaleDefinition::sum_all("neuroticism").with_missing(MissingPolicy::MinAvailable(1)),
        )
}
