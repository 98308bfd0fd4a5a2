//! Behavioral Inhibition / Behavioral Activation System scales (BIS/BAS).
//!
//! 24 items on a 1-4 scale, four of them fillers. The release already
//! reverse-codes every item that needs it, and ships its own pre-scored
//! columns, which are dropped in favour of ours.

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
];

#[must_use]
pub fn definition() -> QuestionnaireDefinition {
    let subscale = |name, items: &[usize]| {
        SubscaleDefinition::sum(name, items).with_missing(MissingPolicy::MinAvailable(1))
    };

    QuestionnaireDefinition::new(
        "bisbas",
        "bisbas01",
        ItemSelector::numbered("bisbas", 24),
        24,
        ResponseScale::new(1.0, 4.0),
    )
    .with_fillers(&[1, 6, 11, 17])
    .with_recode(ItemSet::All, Recode::Lookup(CODES))
    .with_subscale(subscale("bis", &[2, 8, 13, 16, 19, 22, 24]))
    .with_subscale(subscale("bas_drive", &[3, 9, 12, 21]))
    .with_subscale(subscale("bas_fun_seeking", &[5, 10, 15, 20]))
    .with_subscale(subscale("bas_reward_respon", &[4, 7, 14, 18, 23]))
    .with_superseded(&["bissc_total", "bas_drive", "bas_fs", "bas_rr"])
}
