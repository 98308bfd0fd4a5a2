//! Static questionnaire definitions.
//!
//! A [`QuestionnaireDefinition`] is authored once per instrument and never
//! mutated while scoring. It names the item columns the instrument owns, how
//! each raw code is recoded, which items are reverse scored, how items combine
//! into subscales and what counts as an acceptable amount of missing data.

use crate::table::key::Respondent;
use crate::table::select::ItemSelector;

/// A raw response code as it appears in the release
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Code {
    Number(f64),
    /// Lower-case text code
    Text(&'static str),
}

/// Items addressed by 1-based position in the selected item columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSet {
    All,
    Numbers(Vec<usize>),
}

impl ItemSet {
    #[must_use]
    pub fn contains(&self, item: usize) -> bool {
        match self {
            Self::All => true,
            Self::Numbers(numbers) => numbers.contains(&item),
        }
    }

    /// Resolve to positions for an instrument with `n_items` items
    #[must_use]
    pub fn numbers(&self, n_items: usize) -> Vec<usize> {
        match self {
            Self::All => (1..=n_items).collect(),
            Self::Numbers(numbers) => numbers.clone(),
        }
    }
}

/// How a raw code becomes a score contribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recode {
    /// Numeric codes pass through unchanged
    Identity,
    /// Every accepted code is listed; `None` marks a code that means "no answer"
    Lookup(&'static [(Code, Option<f64>)]),
}

/// A recoding applied to a subset of items
#[derive(Debug, Clone, PartialEq)]
pub struct RecodeGroup {
    pub items: ItemSet,
    pub recode: Recode,
}

/// Scale of a recoded item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseScale {
    pub min: f64,
    pub max: f64,
}

impl ResponseScale {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Reverse a recoded value: `max - x + min`
    #[must_use]
    pub fn reverse(&self, value: f64) -> f64 {
        self.max - value + self.min
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// When a partially answered subscale still gets a score
///
/// Every policy needs at least one available item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Every expected item must be answered
    #[default]
    Strict,
    /// At least `n` items must be answered
    MinAvailable(usize),
    /// At most `n` items may be missing
    MaxMissing(usize),
}

impl MissingPolicy {
    #[must_use]
    pub fn admits(&self, available: usize, expected: usize) -> bool {
        if available == 0 {
            return false;
        }
        match *self {
            Self::Strict => available >= expected,
            Self::MinAvailable(n) => available >= n,
            Self::MaxMissing(n) => expected.saturating_sub(available) <= n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    #[default]
    Sum,
    Mean,
}

/// Number of items a respondent is expected to answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedItems {
    Fixed(usize),
    /// Child and parent forms differ in length
    ByRespondent { child: usize, parent: usize },
}

impl ExpectedItems {
    /// Expected count for one row; an unknown respondent gets the longer form
    #[must_use]
    pub fn for_respondent(&self, respondent: Option<Respondent>) -> usize {
        match (*self, respondent) {
            (Self::Fixed(n), _) => n,
            (Self::ByRespondent { child, .. }, Some(Respondent::Child)) => child,
            (Self::ByRespondent { parent, .. }, Some(Respondent::Parent)) => parent,
            (Self::ByRespondent { child, parent }, None) => child.max(parent),
        }
    }

    #[must_use]
    pub fn max(&self) -> usize {
        match *self {
            Self::Fixed(n) => n,
            Self::ByRespondent { child, parent } => child.max(parent),
        }
    }

    #[must_use]
    pub fn depends_on_respondent(&self) -> bool {
        matches!(self, Self::ByRespondent { .. })
    }
}

/// One scored subscale
#[derive(Debug, Clone, PartialEq)]
pub struct SubscaleDefinition {
    pub name: &'static str,
    pub items: ItemSet,
    /// Declared item count; `None` means the length of `items`
    pub expected: Option<ExpectedItems>,
    pub aggregation: Aggregation,
    pub missing: MissingPolicy,
}

impl SubscaleDefinition {
    /// A strict sum over the given items
    #[must_use]
    pub fn sum(name: &'static str, items: &[usize]) -> Self {
        Self {
            name,
            items: ItemSet::Numbers(items.to_vec()),
            expected: None,
            aggregation: Aggregation::Sum,
            missing: MissingPolicy::Strict,
        }
    }

    /// A strict sum over every item of the instrument
    #[must_use]
    pub fn sum_all(name: &'static str) -> Self {
        Self {
            items: ItemSet::All,
            ..Self::sum(name, &[])
        }
    }

    #[must_use]
    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    #[must_use]
    pub fn with_missing(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    #[must_use]
    pub fn with_expected(mut self, expected: ExpectedItems) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Declared item count, resolving `None` against the item list
    #[must_use]
    pub fn expected_items(&self, n_items: usize) -> ExpectedItems {
        self.expected
            .unwrap_or_else(|| ExpectedItems::Fixed(self.items.numbers(n_items).len()))
    }
}

/// A total computed from the subscale values
#[derive(Debug, Clone, PartialEq)]
pub struct TotalDefinition {
    pub name: &'static str,
    pub aggregation: Aggregation,
    pub missing: MissingPolicy,
}

/// Instrument-specific handling of sentinel codes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentinelPolicy {
    /// Codes that mean "no answer" for this instrument only
    pub extra_missing: &'static [f64],
    /// Run-wide sentinels this instrument uses as real answers
    pub reserved: &'static [f64],
}

/// A categorical label derived from a complete score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLabels {
    pub name: &'static str,
    /// Subscale the label is read from
    pub source: &'static str,
    /// Inclusive `(low, high, label)` bands
    pub bands: &'static [(f64, f64, &'static str)],
}

impl ScoreLabels {
    #[must_use]
    pub fn label_for(&self, value: f64) -> Option<&'static str> {
        self.bands
            .iter()
            .find(|(low, high, _)| value >= *low && value <= *high)
            .map(|(_, _, label)| *label)
    }
}

/// Everything the generic pipeline needs to score one instrument
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireDefinition {
    /// Registry identifier and output prefix
    pub name: &'static str,
    /// Prefix of the item columns in the merged table
    pub source: &'static str,
    pub selector: ItemSelector,
    pub n_items: usize,
    /// Items present in the form but never scored
    pub fillers: Vec<usize>,
    pub scale: ResponseScale,
    /// Items not covered by a group pass through `Recode::Identity`
    pub recode_groups: Vec<RecodeGroup>,
    pub reversed: Vec<usize>,
    pub subscales: Vec<SubscaleDefinition>,
    pub total: Option<TotalDefinition>,
    pub sentinels: SentinelPolicy,
    /// Pre-scored release columns replaced by ours
    pub superseded: Vec<&'static str>,
    pub labels: Vec<ScoreLabels>,
}

impl QuestionnaireDefinition {
    #[must_use]
    pub fn new(
        name: &'static str,
        source: &'static str,
        selector: ItemSelector,
        n_items: usize,
        scale: ResponseScale,
    ) -> Self {
        Self {
            name,
            source,
            selector,
            n_items,
            fillers: Vec::new(),
            scale,
            recode_groups: Vec::new(),
            reversed: Vec::new(),
            subscales: Vec::new(),
            total: None,
            sentinels: SentinelPolicy::default(),
            superseded: Vec::new(),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_fillers(mut self, fillers: &[usize]) -> Self {
        self.fillers = fillers.to_vec();
        self
    }

    #[must_use]
    pub fn with_recode(mut self, items: ItemSet, recode: Recode) -> Self {
        self.recode_groups.push(RecodeGroup { items, recode });
        self
    }

    #[must_use]
    pub fn with_reversed(mut self, reversed: &[usize]) -> Self {
        self.reversed = reversed.to_vec();
        self
    }

    #[must_use]
    pub fn with_subscale(mut self, subscale: SubscaleDefinition) -> Self {
        self.subscales.push(subscale);
        self
    }

    #[must_use]
    pub fn with_total(mut self, total: TotalDefinition) -> Self {
        self.total = Some(total);
        self
    }

    #[must_use]
    pub fn with_sentinels(mut self, sentinels: SentinelPolicy) -> Self {
        self.sentinels = sentinels;
        self
    }

    #[must_use]
    pub fn with_superseded(mut self, columns: &[&'static str]) -> Self {
        self.superseded = columns.to_vec();
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: ScoreLabels) -> Self {
        self.labels.push(labels);
        self
    }

    /// Recoding of one item (1-based)
    #[must_use]
    pub fn recode_for(&self, item: usize) -> Recode {
        self.recode_groups
            .iter()
            .find(|group| group.items.contains(item))
            .map_or(Recode::Identity, |group| group.recode)
    }

    #[must_use]
    pub fn is_reversed(&self, item: usize) -> bool {
        self.reversed.contains(&item)
    }

    /// `<name>_<part>`
    #[must_use]
    pub fn output_column(&self, part: &str) -> String {
        format!("{}_{part}", self.name)
    }

    /// The column whose presence shows the instrument has been scored
    #[must_use]
    pub fn primary_output(&self) -> Option<String> {
        self.subscales
            .first()
            .map(|subscale| self.output_column(subscale.name))
    }

    /// Every score column this definition writes
    #[must_use]
    pub fn output_names(&self) -> Vec<&'static str> {
        self.subscales
            .iter()
            .map(|s| s.name)
            .chain(self.total.iter().map(|t| t.name))
            .chain(self.labels.iter().map(|l| l.name))
            .collect()
    }
}
