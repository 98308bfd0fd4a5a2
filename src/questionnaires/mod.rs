//! Instrument definitions of the BANDA release.
//!
//! Scale instruments expose a `definition()` scored by
//! [`ScaleQuestionnaire`](crate::scoring::engine::ScaleQuestionnaire); the
//! rest implement [`Questionnaire`](crate::scoring::engine::Questionnaire)
//! directly.

pub mod bisbas;
pub mod chaphand;
pub mod cssrs;
pub mod ksads;
pub mod masq;
pub mod mfq;
pub mod nffi;
pub mod rbqa;
pub mod rcads;
pub mod relabel;
pub mod rmbi;
pub mod shaps;
pub mod tanner;

pub use cssrs::Cssrs;
pub use ksads::{DiagnosticGroup, Ksads, KsadsSupplement};
pub use relabel::{PENN_NIH, Relabel, WASI};
