use std::sync::Arc;

use showroom::{CategoryDomains, InferenceError, InputRecord, ModelStore, Predictor};

fn fixture_predictor() -> Predictor {
    let domains = CategoryDomains {
        age_ranges: vec!["18–24".into(), "25–34".into()],
        income_levels: vec!["Under $50,000".into(), "Over $50,000".into()],
        genders: vec!["Female".into(), "Male".into()],
        zip_codes: vec!["12345".into(), "54321".into()],
    };
    let feature_len = domains.feature_len();
    let store = ModelStore::new(
        "validation-test",
        vec!["Sedan LX".into(), "SUV Max".into(), "Coupe S".into()],
        domains,
        (5_000.0, 100_000.0),
        vec![vec![0.0; feature_len]; 3],
        vec![0.0; 3],
    )
    .unwrap();
    Predictor::new(Arc::new(store))
}

fn valid_record() -> InputRecord {
    InputRecord::new("25–34", "Under $50,000", "Female", "12345", 25_000.0)
}

#[test]
fn unknown_age_range_is_rejected() {
    let mut record = valid_record();
    record.age_range = "65+".into();

    let err = fixture_predictor().predict(&record).unwrap_err();
    assert_eq!(
        err,
        InferenceError::UnknownCategory {
            field: "age_range",
            value: "65+".into(),
        }
    );
}

#[test]
fn unknown_income_level_is_rejected() {
    let mut record = valid_record();
    record.income_level = "Billionaire".into();

    let err = fixture_predictor().predict(&record).unwrap_err();
    assert!(matches!(
        err,
        InferenceError::UnknownCategory { field: "income_level", .. }
    ));
}

#[test]
fn unknown_gender_is_rejected() {
    let mut record = valid_record();
    record.gender = "".into();

    let err = fixture_predictor().predict(&record).unwrap_err();
    assert!(matches!(
        err,
        InferenceError::UnknownCategory { field: "gender", .. }
    ));
}

#[test]
fn unknown_zip_code_is_rejected() {
    let mut record = valid_record();
    record.zip_code = "99999".into();

    let err = fixture_predictor().predict(&record).unwrap_err();
    assert!(matches!(
        err,
        InferenceError::UnknownCategory { field: "zip_code", .. }
    ));
}

#[test]
fn budget_below_range_is_rejected() {
    let mut record = valid_record();
    record.budget = 4_999.0;

    let err = fixture_predictor().predict(&record).unwrap_err();
    assert!(matches!(err, InferenceError::BudgetOutOfRange { .. }));
}

#[test]
fn budget_above_range_is_rejected() {
    let mut record = valid_record();
    record.budget = 100_001.0;

    let err = fixture_predictor().predict(&record).unwrap_err();
    assert!(matches!(err, InferenceError::BudgetOutOfRange { .. }));
}

#[test]
fn budget_at_exact_bounds_is_accepted() {
    let predictor = fixture_predictor();

    let mut record = valid_record();
    record.budget = 5_000.0;
    assert!(predictor.predict(&record).is_ok());

    record.budget = 100_000.0;
    assert!(predictor.predict(&record).is_ok());
}

#[test]
fn error_message_names_the_offending_value() {
    let mut record = valid_record();
    record.zip_code = "00000".into();

    let err = fixture_predictor().predict(&record).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("zip_code"));
    assert!(msg.contains("00000"));
}
