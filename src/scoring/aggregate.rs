//! Aggregation of recoded items into subscale and total scores.

use crate::scoring::definition::{Aggregation, MissingPolicy, SubscaleDefinition, TotalDefinition};

/// Per-row results of one subscale (or total)
#[derive(Debug, Clone, PartialEq)]
pub struct SubscaleScores {
    pub name: &'static str,
    pub aggregation: Aggregation,
    pub values: Vec<Option<f64>>,
    /// Answered items per row
    pub available: Vec<usize>,
    /// Expected items per row
    pub expected: Vec<usize>,
}

impl SubscaleScores {
    /// Missing items per row, never negative
    #[must_use]
    pub fn missing(&self) -> Vec<usize> {
        self.expected
            .iter()
            .zip(&self.available)
            .map(|(expected, available)| expected.saturating_sub(*available))
            .collect()
    }

    #[must_use]
    pub fn scored_rows(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

fn aggregate(values: &[f64], aggregation: Aggregation) -> f64 {
    let sum: f64 = values.iter().sum();
    match aggregation {
        Aggregation::Sum => sum,
        Aggregation::Mean => sum / values.len() as f64,
    }
}

fn score_row(
    values: &[f64],
    available: usize,
    expected: usize,
    aggregation: Aggregation,
    missing: MissingPolicy,
) -> Option<f64> {
    missing
        .admits(available, expected)
        .then(|| aggregate(values, aggregation))
}

/// Score one subscale
///
/// `items` holds one recoded column per subscale item, `expected` the
/// expected item count of each row.
#[must_use]
pub fn score_subscale(
    definition: &SubscaleDefinition,
    items: &[&[Option<f64>]],
    expected: &[usize],
) -> SubscaleScores {
    let mut values = Vec::with_capacity(expected.len());
    let mut available = Vec::with_capacity(expected.len());

    for (row, row_expected) in expected.iter().enumerate() {
        let answered: Vec<f64> = items.iter().filter_map(|column| column[row]).collect();
        values.push(score_row(
            &answered,
            answered.len(),
            *row_expected,
            definition.aggregation,
            definition.missing,
        ));
        available.push(answered.len());
    }

    SubscaleScores {
        name: definition.name,
        aggregation: definition.aggregation,
        values,
        available,
        expected: expected.to_vec(),
    }
}

/// Score a total from already scored subscales
///
/// Only the items of subscales that received a value count as available.
#[must_use]
pub fn score_total(definition: &TotalDefinition, subscales: &[SubscaleScores]) -> SubscaleScores {
    let rows = subscales.first().map_or(0, |s| s.values.len());
    let mut values = Vec::with_capacity(rows);
    let mut available = Vec::with_capacity(rows);
    let mut expected = Vec::with_capacity(rows);

    for row in 0..rows {
        let mut parts = Vec::with_capacity(subscales.len());
        let mut row_available = 0;
        let mut row_expected = 0;
        for subscale in subscales {
            row_expected += subscale.expected[row];
            if let Some(value) = subscale.values[row] {
                parts.push(value);
                row_available += subscale.available[row];
            }
        }
        values.push(score_row(
            &parts,
            row_available,
            row_expected,
            definition.aggregation,
            definition.missing,
        ));
        available.push(row_available);
        expected.push(row_expected);
    }

    SubscaleScores {
        name: definition.name,
        aggregation: definition.aggregation,
        values,
        available,
        expected,
    }
}
