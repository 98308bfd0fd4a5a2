//! Per-item recoding: sentinels, code lookups and reverse scoring.
//!
//! Recoding is a pure per-cell transform. Missing input stays missing and
//! nothing is imputed.

use crate::config::ScoringOptions;
use crate::error::{Result, ScoringError};
use crate::scoring::definition::{Code, QuestionnaireDefinition, Recode, SentinelPolicy};
use crate::table::response::RawResponse;

/// Numeric codes that mean "no answer" for one instrument
#[derive(Debug, Clone, PartialEq)]
pub struct SentinelSet {
    codes: Vec<f64>,
}

impl SentinelSet {
    /// Run-wide sentinels, minus the ones the instrument reserves, plus its own
    #[must_use]
    pub fn new(options: &ScoringOptions, policy: &SentinelPolicy) -> Self {
        let mut codes: Vec<f64> = options
            .missing_sentinels
            .iter()
            .copied()
            .filter(|code| !policy.reserved.contains(code))
            .collect();
        codes.extend_from_slice(policy.extra_missing);
        Self { codes }
    }

    #[must_use]
    pub fn is_missing(&self, value: f64) -> bool {
        self.codes.contains(&value)
    }

    /// Turn sentinel numbers into missing cells
    #[must_use]
    pub fn normalize(&self, raw: &RawResponse) -> RawResponse {
        match raw {
            RawResponse::Number(value) if self.is_missing(*value) => RawResponse::Missing,
            other => other.clone(),
        }
    }
}

/// Map one non-sentinel cell through a recoding
///
/// # Errors
/// `Configuration` for a code the lookup does not list, or for text under an
/// identity recode.
pub fn apply_recode(recode: Recode, raw: &RawResponse, column: &str) -> Result<Option<f64>> {
    match (recode, raw) {
        (_, RawResponse::Missing) => Ok(None),
        (Recode::Identity, RawResponse::Number(value)) => Ok(Some(*value)),
        (Recode::Identity, RawResponse::Text(text)) => Err(ScoringError::configuration(format!(
            "column '{column}' holds text code '{text}' but expects numbers"
        ))),
        (Recode::Lookup(table), raw) => table
            .iter()
            .find(|(code, _)| code_matches(code, raw))
            .map(|(_, mapped)| *mapped)
            .ok_or_else(|| {
                ScoringError::configuration(format!(
                    "column '{column}' holds undefined response code {raw:?}"
                ))
            }),
    }
}

fn code_matches(code: &Code, raw: &RawResponse) -> bool {
    match (code, raw) {
        (Code::Number(expected), RawResponse::Number(value)) => expected == value,
        (Code::Text(expected), RawResponse::Text(value)) => *expected == value.as_str(),
        _ => false,
    }
}

/// Recodes the items of one questionnaire definition
pub struct Recoder<'a> {
    definition: &'a QuestionnaireDefinition,
    sentinels: SentinelSet,
}

impl<'a> Recoder<'a> {
    #[must_use]
    pub fn new(definition: &'a QuestionnaireDefinition, options: &ScoringOptions) -> Self {
        Self {
            definition,
            sentinels: SentinelSet::new(options, &definition.sentinels),
        }
    }

    /// Recode one cell of item `item` (1-based)
    pub fn recode(&self, item: usize, raw: &RawResponse, column: &str) -> Result<Option<f64>> {
        let raw = self.sentinels.normalize(raw);
        let value = apply_recode(self.definition.recode_for(item), &raw, column)?;
        if self.definition.is_reversed(item) {
            Ok(value.map(|v| self.definition.scale.reverse(v)))
        } else {
            Ok(value)
        }
    }

    /// Recode a whole item column
    pub fn recode_column(
        &self,
        item: usize,
        cells: &[RawResponse],
        column: &str,
    ) -> Result<Vec<Option<f64>>> {
        cells
            .iter()
            .map(|cell| self.recode(item, cell, column))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::definition::{ItemSet, ResponseScale};
    use crate::table::select::ItemSelector;
    use proptest::prelude::*;

    const FREQUENCY: &[(Code, Option<f64>)] = &[
        (Code::Text("never"), Some(0.0)),
        (Code::Text("sometimes"), Some(1.0)),
        (Code::Number(9.0), None),
    ];

    fn four_items() -> QuestionnaireDefinition {
        QuestionnaireDefinition::new(
            "demo",
            "demo01",
            ItemSelector::numbered("q", 4),
            4,
            ResponseScale::new(1.0, 4.0),
        )
        .with_reversed(&[2])
    }

    #[test]
    fn test_reverse_item_is_flipped() {
        let def = four_items();
        let recoder = Recoder::new(&def, &ScoringOptions::default());
        let raw = [2.0, 3.0, 1.0, 4.0];
        let recoded: Vec<Option<f64>> = raw
            .iter()
            .enumerate()
            .map(|(i, v)| recoder.recode(i + 1, &RawResponse::Number(*v), "q").unwrap())
            .collect();
        assert_eq!(recoded, vec![Some(2.0), Some(2.0), Some(1.0), Some(4.0)]);
    }

    #[test]
    fn test_missing_and_sentinels_propagate() {
        let def = four_items();
        let recoder = Recoder::new(&def, &ScoringOptions::default());
        assert_eq!(recoder.recode(2, &RawResponse::Missing, "q").unwrap(), None);
        assert_eq!(recoder.recode(2, &RawResponse::Number(999.0), "q").unwrap(), None);
    }

    #[test]
    fn test_reserved_sentinel_is_kept() {
        let def = four_items().with_sentinels(SentinelPolicy {
            extra_missing: &[-9.0],
            reserved: &[999.0],
        });
        let sentinels = SentinelSet::new(&ScoringOptions::default(), &def.sentinels);
        assert!(!sentinels.is_missing(999.0));
        assert!(sentinels.is_missing(9999.0));
        assert!(sentinels.is_missing(-9.0));
    }

    #[test]
    fn test_lookup_maps_text_and_numbers() {
        let recode = Recode::Lookup(FREQUENCY);
        let text = RawResponse::Text("sometimes".into());
        assert_eq!(apply_recode(recode, &text, "c").unwrap(), Some(1.0));
        assert_eq!(apply_recode(recode, &RawResponse::Number(9.0), "c").unwrap(), None);
    }

    #[test]
    fn test_undefined_code_is_a_configuration_error() {
        let recode = Recode::Lookup(FREQUENCY);
        let err = apply_recode(recode, &RawResponse::Text("daily".into()), "c").unwrap_err();
        assert!(matches!(err, ScoringError::Configuration(_)));

        let def = four_items().with_recode(ItemSet::All, recode);
        let recoder = Recoder::new(&def, &ScoringOptions::default());
        assert!(recoder.recode(1, &RawResponse::Number(3.0), "q").is_err());
    }

    #[test]
    fn test_text_under_identity_is_rejected() {
        let err = apply_recode(Recode::Identity, &RawResponse::Text("often".into()), "c");
        assert!(err.is_err());
    }

    proptest! {
        #[test]
        fn reverse_is_an_involution(min in -5i32..5, span in 0i32..10, offset in 0i32..10) {
            let scale = ResponseScale::new(f64::from(min), f64::from(min + span));
            let value = f64::from(min + offset.min(span));
            prop_assert_eq!(scale.reverse(scale.reverse(value)), value);
            prop_assert!(scale.contains(scale.reverse(value)));
        }
    }
}
