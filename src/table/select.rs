//! Item selection: which columns of the table belong to one questionnaire.

use crate::error::{Result, ScoringError};
use crate::utils::arrow::{column_names, has_column};

/// How a questionnaire finds its raw item columns
///
/// Every pattern is applied after the source prefix, so `Prefixed("hu0")` on
/// source `chaphand01` matches `chaphand01_hu0*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    /// An explicit, ordered list of item names
    Named(Vec<&'static str>),
    /// Every column whose name starts with the pattern, in table order
    Prefixed(&'static str),
    /// `stem` followed by each of the numbers, e.g. `rcads_1` .. `rcads_47`
    Numbered {
        stem: &'static str,
        numbers: Vec<usize>,
    },
}

impl ItemSelector {
    /// `stem1 ..= stemN`
    #[must_use]
    pub fn numbered(stem: &'static str, count: usize) -> Self {
        Self::Numbered {
            stem,
            numbers: (1..=count).collect(),
        }
    }

    /// Item names without the source prefix, when they are known up front
    fn expected_names(&self) -> Option<Vec<String>> {
        match self {
            Self::Named(names) => Some(names.iter().map(|n| (*n).to_string()).collect()),
            Self::Numbered { stem, numbers } => {
                Some(numbers.iter().map(|i| format!("{stem}{i}")).collect())
            }
            Self::Prefixed(_) => None,
        }
    }
}

/// Full column name of an item
#[must_use]
pub fn item_column(source: &str, item: &str) -> String {
    format!("{source}_{item}")
}

/// Return the ordered item columns of one questionnaire
///
/// `already_scored` tells whether the questionnaire's outputs exist in the
/// table, which turns "nothing loaded" into "items dropped by an earlier run".
///
/// # Errors
/// `Configuration` when nothing matches on an unscored table, `MissingColumns`
/// when nothing matches after scoring or when a named item is absent.
pub fn select_items(
    batch: &arrow::record_batch::RecordBatch,
    questionnaire: &str,
    source: &str,
    selector: &ItemSelector,
    already_scored: bool,
) -> Result<Vec<String>> {
    let selected: Vec<String> = match selector {
        ItemSelector::Prefixed(pattern) => {
            let prefix = item_column(source, pattern);
            column_names(batch)
                .into_iter()
                .filter(|name| name.starts_with(&prefix))
                .collect()
        }
        ItemSelector::Named(_) | ItemSelector::Numbered { .. } => selector
            .expected_names()
            .unwrap_or_default()
            .iter()
            .map(|item| item_column(source, item))
            .collect(),
    };

    let (present, missing): (Vec<String>, Vec<String>) = selected
        .into_iter()
        .partition(|column| has_column(batch, column));

    if present.is_empty() {
        if already_scored {
            let absent = match selector {
                ItemSelector::Prefixed(pattern) => vec![format!("{}*", item_column(source, pattern))],
                _ => missing,
            };
            return Err(ScoringError::missing_columns(questionnaire, absent));
        }
        return Err(ScoringError::configuration(format!(
            "no item columns for questionnaire '{questionnaire}' (source '{source}'); was it loaded?"
        )));
    }
    if !missing.is_empty() {
        return Err(ScoringError::missing_columns(questionnaire, missing));
    }

    log::debug!(
        "Selected {} item columns for {questionnaire} from {source}",
        present.len()
    );
    Ok(present)
}
