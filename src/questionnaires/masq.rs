//! Mood and Anxiety Symptom Questionnaire (MASQ), 62-item form.
//!
//! The release mixes three codings of the same 1-5 answer scale: some items
//! keep the questionnaire's 1-5 values, most were shifted to 0-4, and one
//! (`scl14`) arrives as text. Item 43 is already reverse coded upstream.

use crate::scoring::definition::{
    Aggregation, Code, ItemSet, MissingPolicy, QuestionnaireDefinition, Recode, ResponseScale,
    SubscaleDefinition, TotalDefinition,
};
use crate::table::select::ItemSelector;

/// Item columns in questionnaire order
const ITEMS: [&str; 62] = [
    "wn12", "masq_02", "poms038", "afraid", "idas_40", "shakyhnd", "masq_09", "masq_diar",
    "masq_04", "masq_06", "masq_nerv", "idas_8", "masq_21", "masq_un", "idas_10", "lumpthrt",
    "masq_faint", "masq90_q86", "masq_20", "bsil23", "stai25", "masq_11", "masq_12", "sweaty",
    "impac_q9", "masq_onedge", "masq_d30_26", "masq_15", "masq_23", "masq_30", "masq90_q23",
    "relax", "scl14", "atq_b_10d", "masq_05", "masq_10", "masq_08", "fatexp45", "masq_22",
    "masq_18", "masq90_q10", "masq_chok", "idas_27", "twitch", "masq_17", "masq_dm", "idas_59",
    "masq_afr2die", "masq_14", "masq90_q71", "masq90_q35", "masq_27", "masq_16", "bsil33",
    "bsil38", "idas_50", "pclc_9", "masq90_q32", "masq_24", "masq_29", "baseline_h_017",
    "frequri",
];

/// Items still on the questionnaire's own 1-5 coding
const NATIVE_CODING: [&str; 12] = [
    "wn12", "idas_40", "idas_8", "idas_10", "stai25", "impac_q9", "atq_b_10d", "fatexp45",
    "idas_27", "idas_59", "idas_50", "pclc_9",
];

const TEXT_CODING: [&str; 1] = ["scl14"];

const ONE_TO_FIVE: &[(Code, Option<f64>)] = &[
    (Code::Number(1.0), Some(1.0)),
    (Code::Number(2.0), Some(2.0)),
    (Code::Number(3.0), Some(3.0)),
    (Code::Number(4.0), Some(4.0)),
    (Code::Number(5.0), Some(5.0)),
];

const ZERO_TO_FOUR: &[(Code, Option<f64>)] = &[
    (Code::Number(0.0), Some(1.0)),
    (Code::Number(1.0), Some(2.0)),
    (Code::Number(2.0), Some(3.0)),
    (Code::Number(3.0), Some(4.0)),
    (Code::Number(4.0), Some(5.0)),
];

const TEXT: &[(Code, Option<f64>)] = &[
    (Code::Text("not at all"), Some(1.0)),
    (Code::Text("a little bit"), Some(2.0)),
    (Code::Text("moderately"), Some(3.0)),
    (Code::Text("quite a bit"), Some(4.0)),
    (Code::Text("extremely"), Some(5.0)),
];

fn positions(names: &[&str]) -> Vec<usize> {
    ITEMS
        .iter()
        .enumerate()
        .filter(|(_, item)| names.contains(item))
        .map(|(idx, _)| idx + 1)
        .collect()
}

#[must_use]
pub fn definition() -> QuestionnaireDefinition {
    let native = positions(&NATIVE_CODING);
    let text = positions(&TEXT_CODING);
    let shifted: Vec<usize> = (1..=ITEMS.len())
        .filter(|item| !native.contains(item) && !text.contains(item))
        .collect();

    let subscale = |name, items: &[usize]| {
        SubscaleDefinition::sum(name, items).with_missing(MissingPolicy::MinAvailable(1))
    };

    QuestionnaireDefinition::new(
        "masq",
        "masq01",
        ItemSelector::Named(ITEMS.to_vec()),
        ITEMS.len(),
        ResponseScale::new(1.0, 5.0),
    )
    .with_recode(ItemSet::Numbers(native), Recode::Lookup(ONE_TO_FIVE))
    .with_recode(ItemSet::Numbers(text), Recode::Lookup(TEXT))
    .with_recode(ItemSet::Numbers(shifted), Recode::Lookup(ZERO_TO_FOUR))
    .with_reversed(&[3, 7, 10, 15, 22, 27, 39, 47, 49, 53, 56, 58, 60])
    .with_subscale(subscale(
        "gd_anxious_symptoms",
        &[4, 8, 11, 14, 16, 20, 26, 32, 35, 55, 59],
    ))
    .with_subscale(subscale(
        "anxious_arousal",
        &[2, 6, 13, 17, 19, 24, 28, 30, 37, 40, 42, 44, 46, 48, 52, 54, 62],
    ))
    .with_subscale(subscale(
        "gd_depressive_symptoms",
        &[1, 5, 9, 12, 21, 23, 29, 31, 34, 36, 38, 45],
    ))
    .with_subscale(subscale(
        "anhedonic_depression",
        &[
            3, 7, 10, 15, 18, 22, 25, 27, 33, 39, 41, 43, 47, 49, 50, 51, 53, 56, 57, 58, 60, 61,
        ],
    ))
    .with_total(TotalDefinition {
        name: "tot",
        aggregation: Aggregation::Sum,
        missing: MissingPolicy::MinAvailable(1),
    })
}
