//! Static registry of the supported questionnaires.

use crate::error::{Result, ScoringError};
use crate::questionnaires::{
    Cssrs, Ksads, KsadsSupplement, PENN_NIH, WASI, bisbas, chaphand, masq, mfq, nffi, rbqa, rcads,
    rmbi, shaps, tanner,
};
use crate::scoring::engine::{Questionnaire, ScaleQuestionnaire};

/// Every questionnaire identifier `questionnaire_from_name` accepts
pub const SUPPORTED_QUESTIONNAIRES: [&str; 15] = [
    "bisbas", "chaphand", "cssrs", "ksads", "ksadsp201", "masq", "mfq", "nffi", "rbqa", "rcads",
    "rmbi", "shaps", "tanner", "wasi", "penn_nih",
];

/// Create the scoring step for a questionnaire identifier
pub fn questionnaire_from_name(name: &str) -> Result<Box<dyn Questionnaire>> {
    match name.to_lowercase().as_str() {
        "bisbas" => Ok(Box::new(ScaleQuestionnaire::new(bisbas::definition()))),
        "chaphand" => Ok(Box::new(ScaleQuestionnaire::new(chaphand::definition()))),
        "cssrs" => Ok(Box::new(Cssrs)),
        "ksads" => Ok(Box::new(Ksads)),
        "ksadsp201" => Ok(Box::new(KsadsSupplement)),
        "masq" => Ok(Box::new(ScaleQuestionnaire::new(masq::definition()))),
        "mfq" => Ok(Box::new(ScaleQuestionnaire::new(mfq::definition()))),
        "nffi" => Ok(Box::new(ScaleQuestionnaire::new(nffi::definition()))),
        "rbqa" => Ok(Box::new(ScaleQuestionnaire::new(rbqa::definition()))),
        "rcads" => Ok(Box::new(ScaleQuestionnaire::new(rcads::definition()))),
        "rmbi" => Ok(Box::new(ScaleQuestionnaire::new(rmbi::definition()))),
        "shaps" => Ok(Box::new(ScaleQuestionnaire::new(shaps::definition()))),
        "tanner" => Ok(Box::new(ScaleQuestionnaire::new(tanner::definition()))),
        "wasi" => Ok(Box::new(WASI)),
        "penn_nih" => Ok(Box::new(PENN_NIH)),
        _ => Err(ScoringError::configuration(format!(
            "Unknown questionnaire: {name} (supported: {})",
            SUPPORTED_QUESTIONNAIRES.join(", ")
        ))),
    }
}
