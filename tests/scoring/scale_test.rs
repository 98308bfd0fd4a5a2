use arrow::array::ArrayRef;
use banda_scoring::scoring::ScaleQuestionnaire;
use banda_scoring::scoring::definition::{
    Aggregation, MissingPolicy, QuestionnaireDefinition, ResponseScale, SubscaleDefinition,
};
use banda_scoring::table::ItemSelector;
use banda_scoring::{ItemCount, ItemLevel, Questionnaire, ScoringError, ScoringOptions};

use crate::utils::{f64_column, keyed_batch, names, numbers, u32_column};

/// Four items on a 1-4 scale, item 2 reversed, scored as a strict mean
fn four_item_mean() -> ScaleQuestionnaire {
    ScaleQuestionnaire::new(
        QuestionnaireDefinition::new(
            "demo",
            "demo01",
            ItemSelector::numbered("q", 4),
            4,
            ResponseScale::new(1.0, 4.0),
        )
        .with_reversed(&[2])
        .with_subscale(SubscaleDefinition::sum_all("mean").with_aggregation(Aggregation::Mean)),
    )
}

fn answers(rows: &[[Option<f64>; 4]]) -> Vec<(String, ArrayRef)> {
    (0..4)
        .map(|item| {
            let column: Vec<Option<f64>> = rows.iter().map(|row| row[item]).collect();
            (format!("demo01_q{}", item + 1), numbers(&column))
        })
        .collect()
}

#[test]
fn test_reversed_mean_uses_every_item() {
    let batch = keyed_batch(&["Child"], answers(&[[Some(2.0), Some(3.0), Some(1.0), Some(4.0)]]));
    let options = ScoringOptions::new(ItemLevel::Retain, ItemCount::Compute);
    let scored = four_item_mean().score(batch, &options).unwrap();

    assert_eq!(f64_column(&scored, "demo_mean"), vec![Some(2.25)]);
    assert_eq!(u32_column(&scored, "demo_mean_nmissing"), vec![0]);
    assert_eq!(u32_column(&scored, "demo_mean_nexpected"), vec![4]);
}

#[test]
fn test_strict_mean_with_missing_item() {
    let batch = keyed_batch(
        &["Child"],
        answers(&[[Some(2.0), Some(f64::NAN), Some(1.0), Some(4.0)]]),
    );
    let options = ScoringOptions::new(ItemLevel::Retain, ItemCount::Compute);
    let scored = four_item_mean().score(batch, &options).unwrap();

    assert_eq!(f64_column(&scored, "demo_mean"), vec![None]);
    assert_eq!(u32_column(&scored, "demo_mean_nmissing"), vec![1]);
    assert_eq!(u32_column(&scored, "demo_mean_nexpected"), vec![4]);
}

#[test]
fn test_tolerant_sum_scores_partial_rows() {
    let questionnaire = ScaleQuestionnaire::new(
        QuestionnaireDefinition::new(
            "demo",
            "demo01",
            ItemSelector::numbered("q", 4),
            4,
            ResponseScale::new(1.0, 4.0),
        )
        .with_subscale(SubscaleDefinition::sum_all("tot").with_missing(MissingPolicy::MaxMissing(1))),
    );
    let batch = keyed_batch(
        &["Child", "Child"],
        answers(&[
            [Some(2.0), None, Some(1.0), Some(4.0)],
            [Some(2.0), None, None, Some(4.0)],
        ]),
    );
    let scored = questionnaire.score(batch, &ScoringOptions::default()).unwrap();
    assert_eq!(f64_column(&scored, "demo_tot"), vec![Some(7.0), None]);
}

#[test]
fn test_out_of_range_answers_are_fatal() {
    let batch = keyed_batch(&["Child"], answers(&[[Some(7.0), Some(2.0), Some(7.0), Some(7.0)]]));
    let err = four_item_mean()
        .score(batch, &ScoringOptions::default())
        .unwrap_err();
    match err {
        ScoringError::RangeViolation { key, subscale, .. } => {
            assert!(key.contains("B000"));
            assert_eq!(subscale, "mean");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_drop_then_rescore_reports_missing_columns() {
    let batch = keyed_batch(&["Child"], answers(&[[Some(1.0), Some(1.0), Some(1.0), Some(1.0)]]));
    let options = ScoringOptions::new(ItemLevel::Drop, ItemCount::Skip);
    let scored = four_item_mean().score(batch, &options).unwrap();
    assert!(names(&scored).iter().all(|name| !name.starts_with("demo01_")));
    assert_eq!(f64_column(&scored, "demo_mean"), vec![Some(2.5)]);

    let err = four_item_mean().score(scored, &options).unwrap_err();
    assert!(matches!(err, ScoringError::MissingColumns { .. }));
}

#[test]
fn test_inconsistent_definition_is_rejected() {
    let questionnaire = ScaleQuestionnaire::new(
        QuestionnaireDefinition::new(
            "demo",
            "demo01",
            ItemSelector::numbered("q", 4),
            4,
            ResponseScale::new(1.0, 4.0),
        )
        .with_subscale(SubscaleDefinition::sum("part", &[1, 2, 3])),
    );
    let batch = keyed_batch(&["Child"], answers(&[[Some(1.0), Some(1.0), Some(1.0), Some(1.0)]]));
    let err = questionnaire
        .score(batch, &ScoringOptions::default())
        .unwrap_err();
    assert!(matches!(err, ScoringError::ItemCountMismatch { .. }));
}
