//! Questionnaire scoring.
//!
//! The building blocks (definitions, recoding, aggregation, validation and
//! accounting) are shared by every instrument; the registry maps identifiers
//! to scoring steps and the dispatcher runs them over one table.

pub mod accounting;
pub mod aggregate;
pub mod definition;
pub mod dispatcher;
pub mod engine;
pub mod recode;
pub mod registry;
pub mod validate;

pub use definition::{
    Aggregation, ExpectedItems, MissingPolicy, QuestionnaireDefinition, Recode, ResponseScale,
    SubscaleDefinition,
};
pub use dispatcher::{score_all, score_questionnaire};
pub use engine::{Questionnaire, ScaleQuestionnaire};
pub use registry::{SUPPORTED_QUESTIONNAIRES, questionnaire_from_name};
