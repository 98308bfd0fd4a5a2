use arrow::array::{Array, ArrayRef, StringArray};
use arrow::record_batch::RecordBatch;
use banda_scoring::{ItemCount, ItemLevel, ScoringError, ScoringOptions, score_questionnaire};

use crate::utils::{f64_column, keyed_batch, names, numbers, texts, u32_column, uniform_items};

#[test]
fn test_mfq_expected_items_follow_respondent() {
    // the child form leaves item 34 blank
    let mut items = uniform_items("mfq01", "mfq", 34, &[Some(2.0), Some(2.0)]);
    items[33].1 = numbers(&[None, Some(2.0)]);
    let batch = keyed_batch(&["Child", "Parent"], items);

    let options = ScoringOptions::new(ItemLevel::Retain, ItemCount::Compute);
    let scored = score_questionnaire(batch, "mfq", &options).unwrap();
    assert_eq!(f64_column(&scored, "mfq_tot"), vec![Some(33.0), Some(34.0)]);
    assert_eq!(u32_column(&scored, "mfq_tot_nmissing"), vec![0, 0]);
    assert_eq!(u32_column(&scored, "mfq_tot_nexpected"), vec![33, 34]);
}

#[test]
fn test_mfq_child_answering_every_item_is_rejected() {
    let items = uniform_items("mfq01", "mfq", 34, &[Some(1.0)]);
    let batch = keyed_batch(&["Child"], items);
    let err = score_questionnaire(batch, "mfq", &ScoringOptions::default()).unwrap_err();
    match err {
        ScoringError::ItemCountMismatch { expected, actual, scope, .. } => {
            assert_eq!((expected, actual), (33, 34));
            assert!(scope.contains("B000"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_chaphand_label_only_for_complete_rows() {
    let mut items: Vec<_> = (1..=13)
        .map(|i| (format!("chaphand01_hu0{i:02}"), numbers(&[Some(2.0), Some(0.0)])))
        .collect();
    items[0].1 = numbers(&[Some(2.0), None]);
    let batch = keyed_batch(&["Child", "Child"], items);

    let scored = score_questionnaire(batch, "chaphand", &ScoringOptions::default()).unwrap();
    assert_eq!(f64_column(&scored, "chaphand_tot"), vec![Some(13.0), Some(36.0)]);

    let labels = scored.column_by_name("chaphand_handedness").unwrap();
    let labels = labels.as_any().downcast_ref::<StringArray>().unwrap();
    assert_eq!(labels.value(0), "right");
    assert!(labels.is_null(1));
}

#[test]
fn test_ksads_undefined_code_is_a_configuration_error() {
    let diagnoses = [
        "mddcurrent",
        "dysthymiacurrent",
        "depnoscurrent",
        "gadcurrent",
        "panicdisordercurrent",
        "agoraphobiacurrent",
        "separationcurrent",
        "socialphobiacurrent",
        "simplephobiacurrent",
    ];
    let items = diagnoses
        .iter()
        .map(|name| (format!("ksads_diagnoses01_{name}"), numbers(&[Some(1.0), Some(7.0)])))
        .collect();
    let batch = keyed_batch(&["Child", "Child"], items);
    let err = score_questionnaire(batch, "ksads", &ScoringOptions::default()).unwrap_err();
    assert!(matches!(err, ScoringError::Configuration(_)));
}

#[test]
fn test_rcads_rejects_unknown_answer_text() {
    let items = (1..=47)
        .map(|i| (format!("rcads01_rcads_{i}"), texts(&[Some("Rarely")])))
        .collect();
    let batch = keyed_batch(&["Child"], items);
    let err = score_questionnaire(batch, "rcads", &ScoringOptions::default()).unwrap_err();
    assert!(matches!(err, ScoringError::Configuration(_)));
}

#[test]
fn test_bisbas_replaces_release_scores() {
    let mut items = uniform_items("bisbas01", "bisbas", 24, &[Some(2.0)]);
    items.push(("bisbas01_bissc_total".to_string(), numbers(&[Some(99.0)])));
    let batch = keyed_batch(&["Child"], items);

    let options = ScoringOptions::new(ItemLevel::Drop, ItemCount::Skip);
    let scored = score_questionnaire(batch, "bisbas", &options).unwrap();
    let columns = names(&scored);
    assert!(columns.iter().all(|name| !name.starts_with("bisbas01_")));
    assert!(columns.contains(&"bisbas_bis".to_string()));
}

fn drop_items() -> ScoringOptions {
    ScoringOptions::new(ItemLevel::Drop, ItemCount::Skip)
}

/// Score twice with items dropped; the second run must report missing columns
fn assert_drop_twice_fails(batch: RecordBatch, questionnaire: &str) {
    let scored = score_questionnaire(batch, questionnaire, &drop_items()).unwrap();
    let err = score_questionnaire(scored, questionnaire, &drop_items()).unwrap_err();
    assert!(
        matches!(err, ScoringError::MissingColumns { .. }),
        "{questionnaire}: {err}"
    );
}

#[test]
fn test_cssrs_drop_twice() {
    let items = [
        "css_sim1", "css_sim2", "css_sim3", "css_sim4", "css_sim5", "sbaap3m", "sbiap3m",
        "sbasiap3m", "sbpabp3m", "actlthl1", "potlthl1",
    ]
    .iter()
    .map(|name| (format!("cssrs01_{name}"), numbers(&[Some(1.0)])))
    .collect();
    assert_drop_twice_fails(keyed_batch(&["Child"], items), "cssrs");
}

fn ksads_items() -> Vec<(String, ArrayRef)> {
    [
        "mddcurrent",
        "dysthymiacurrent",
        "depnoscurrent",
        "gadcurrent",
        "panicdisordercurrent",
        "agoraphobiacurrent",
        "separationcurrent",
        "socialphobiacurrent",
        "simplephobiacurrent",
        "ocdcurrent",
    ]
    .iter()
    .map(|name| (format!("ksads_diagnoses01_{name}"), numbers(&[Some(3.0), Some(1.0)])))
    .collect()
}

#[test]
fn test_ksads_drop_twice() {
    assert_drop_twice_fails(keyed_batch(&["Child", "Parent"], ksads_items()), "ksads");
}

#[test]
fn test_ksads_supplement_drop_twice() {
    let mut items = ksads_items();
    items.push(("ksads_diagnosesp201_sldc194".to_string(), numbers(&[Some(0.0), None])));
    let batch = keyed_batch(&["Child", "Parent"], items);
    let batch = score_questionnaire(batch, "ksads", &drop_items()).unwrap();
    assert_drop_twice_fails(batch, "ksadsp201");
}

#[test]
fn test_wasi_drop_twice() {
    let items = vec![("wasi201_fsiq2".to_string(), numbers(&[Some(98.0)]))];
    assert_drop_twice_fails(keyed_batch(&["Child"], items), "wasi");
}

#[test]
fn test_penn_nih_drop_twice() {
    let items = vec![
        ("flanker01_nih_flanker_uncorrected".to_string(), numbers(&[Some(101.0)])),
        ("pmat01_pmat24_a_cr".to_string(), numbers(&[Some(999.0)])),
    ];
    let batch = keyed_batch(&["Child"], items);
    let scored = score_questionnaire(batch.clone(), "penn_nih", &drop_items()).unwrap();
    assert_eq!(f64_column(&scored, "penntask_matreason_pmat24_a_cr"), vec![None]);
    assert_drop_twice_fails(batch, "penn_nih");
}
