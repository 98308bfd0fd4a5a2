use banda_scoring::{
    ItemLevel, ScoringConfig, ScoringError, ScoringOptions, ensure_unique_keys,
    questionnaire_from_name, score_all, score_questionnaire,
};

use crate::utils::{f64_column, keyed_batch, keyed_batch_for, names, numbers, uniform_items};

fn merged_table() -> arrow::record_batch::RecordBatch {
    let mut items = uniform_items("rbqa01", "rbqa", 20, &[Some(3.0), Some(0.0)]);
    items.extend(uniform_items("shaps01", "shaps", 14, &[Some(2.0), Some(3.0)]));
    items.extend(
        ["tsf1", "tsf2", "tsf3", "tsftsg", "tsftphg"]
            .iter()
            .map(|name| (format!("tanner_sms01_{name}"), numbers(&[Some(4.0), Some(9999.0)]))),
    );
    items.push(("wasi201_fsiq2".to_string(), numbers(&[Some(112.0), Some(999.0)])));
    keyed_batch(&["Child", "Parent"], items)
}

fn config(questionnaires: &[&str], options: ScoringOptions) -> ScoringConfig {
    ScoringConfig {
        questionnaires: questionnaires.iter().map(|q| (*q).to_string()).collect(),
        options,
        check_unique_keys: true,
    }
}

#[test]
fn test_steps_commute() {
    let order = ["rbqa", "shaps", "tanner", "wasi"];
    let mut reversed = order;
    reversed.reverse();

    let forward = score_all(merged_table(), &config(&order, ScoringOptions::default())).unwrap();
    let backward =
        score_all(merged_table(), &config(&reversed, ScoringOptions::default())).unwrap();

    for column in ["rbqa_tot", "shaps_tot", "tanner_tot", "wasi_fsiq2"] {
        assert_eq!(f64_column(&forward, column), f64_column(&backward, column));
    }
    assert_eq!(f64_column(&forward, "rbqa_tot"), vec![Some(60.0), Some(0.0)]);
    assert_eq!(f64_column(&forward, "shaps_tot"), vec![Some(14.0), Some(0.0)]);
    assert_eq!(f64_column(&forward, "tanner_tot"), vec![Some(4.0), None]);
    assert_eq!(f64_column(&forward, "wasi_fsiq2"), vec![Some(112.0), None]);
}

#[test]
fn test_retain_rescoring_is_idempotent() {
    let options = ScoringOptions::default();
    let once = score_questionnaire(merged_table(), "rbqa", &options).unwrap();
    let twice = score_questionnaire(once.clone(), "rbqa", &options).unwrap();
    assert_eq!(names(&once), names(&twice));
    assert_eq!(f64_column(&once, "rbqa_tot"), f64_column(&twice, "rbqa_tot"));
}

#[test]
fn test_drop_removes_only_own_items() {
    let options = ScoringOptions {
        item_level: ItemLevel::Drop,
        ..ScoringOptions::default()
    };
    let scored = score_questionnaire(merged_table(), "shaps", &options).unwrap();
    let columns = names(&scored);
    assert!(columns.iter().all(|name| !name.starts_with("shaps01_")));
    assert!(columns.iter().any(|name| name.starts_with("rbqa01_")));

    let err = score_questionnaire(scored, "shaps", &options).unwrap_err();
    assert!(matches!(err, ScoringError::MissingColumns { .. }));
}

#[test]
fn test_unknown_questionnaire() {
    let err = score_questionnaire(merged_table(), "bdi", &ScoringOptions::default()).unwrap_err();
    assert!(matches!(err, ScoringError::Configuration(_)));
    assert!(questionnaire_from_name("bdi").is_err());
}

#[test]
fn test_duplicate_keys_abort_the_run() {
    let items = uniform_items("rbqa01", "rbqa", 20, &[Some(1.0), Some(1.0)]);
    let batch = keyed_batch_for(&[Some("B007"), Some("B007")], &["Child", "Child"], items);
    assert!(matches!(
        ensure_unique_keys(&batch),
        Err(ScoringError::DuplicateKey(_))
    ));

    let err = score_all(batch, &config(&["rbqa"], ScoringOptions::default())).unwrap_err();
    assert!(matches!(err, ScoringError::DuplicateKey(_)));
}

#[test]
fn test_same_subject_as_parent_and_child_is_unique() {
    let items = uniform_items("rbqa01", "rbqa", 20, &[Some(1.0), Some(1.0)]);
    let batch = keyed_batch_for(&[Some("B007"), Some("B007")], &["Child", "Parent"], items);
    assert!(ensure_unique_keys(&batch).is_ok());
}
