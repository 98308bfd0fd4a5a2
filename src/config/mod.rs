//! Configuration for a scoring run.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scoring::registry::SUPPORTED_QUESTIONNAIRES;

/// Sentinel codes the NDA release uses for "no answer"
pub const DEFAULT_MISSING_SENTINELS: [f64; 3] = [999.0, 9999.0, 9998.0];

/// What happens to raw item columns once a questionnaire is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemLevel {
    /// Keep the raw item columns untouched
    #[default]
    Retain,
    /// Remove the item columns consumed by scoring
    Drop,
}

/// Whether per-subscale item accounting columns are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCount {
    /// Attach `_nmissing` and `_nexpected` columns
    Compute,
    #[default]
    Skip,
}

/// Policies applied by every questionnaire's scoring step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringOptions {
    /// Retain or drop the raw item columns
    pub item_level: ItemLevel,
    /// Compute or skip item accounting columns
    pub item_count: ItemCount,
    /// Codes treated as missing unless a questionnaire reserves them
    pub missing_sentinels: Vec<f64>,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            item_level: ItemLevel::Retain,
            item_count: ItemCount::Skip,
            missing_sentinels: DEFAULT_MISSING_SENTINELS.to_vec(),
        }
    }
}

impl ScoringOptions {
    /// Options with the given item policies and the default sentinels
    #[must_use]
    pub fn new(item_level: ItemLevel, item_count: ItemCount) -> Self {
        Self {
            item_level,
            item_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn drops_items(&self) -> bool {
        self.item_level == ItemLevel::Drop
    }

    #[must_use]
    pub fn computes_counts(&self) -> bool {
        self.item_count == ItemCount::Compute
    }
}

/// Configuration for a whole scoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Questionnaires to score, in order
    pub questionnaires: Vec<String>,
    /// Policies handed to each scoring step
    pub options: ScoringOptions,
    /// Fail before scoring when two rows share a respondent-visit key
    pub check_unique_keys: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            questionnaires: SUPPORTED_QUESTIONNAIRES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            options: ScoringOptions::default(),
            check_unique_keys: true,
        }
    }
}

impl ScoringConfig {
    /// Load a configuration from a JSON file; absent fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl fmt::Display for ScoringConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scoring Configuration:")?;
        writeln!(f, "  Questionnaires: {}", self.questionnaires.join(", "))?;
        writeln!(f, "  Item Level: {:?}", self.options.item_level)?;
        writeln!(f, "  Item Count: {:?}", self.options.item_count)?;
        writeln!(f, "  Missing Sentinels: {:?}", self.options.missing_sentinels)?;
        writeln!(f, "  Check Unique Keys: {}", self.check_unique_keys)?;
        Ok(())
    }
}
