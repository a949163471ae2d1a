// ABOUTME: End-to-end tests for the growth assessor over synthetic reference tables
// ABOUTME: Validates indicator independence, corrected-age lookups, gender folding, and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use tukem_growth::{
    AssessmentInput, ChildInput, Gender, GrowthAssessor, GrowthError, GrowthIndicator,
    GrowthStandardRow, GrowthStandardTable, HeightStatus, WastingStatus, WeightStatus,
};

fn age_row(indicator: GrowthIndicator, gender: Gender, age_months: u32, m: f64) -> GrowthStandardRow {
    GrowthStandardRow::from_lms(indicator, gender, Some(age_months), None, 0.1, m, 0.1)
}

fn wfh_row(gender: Gender, height_cm: f64, m: f64) -> GrowthStandardRow {
    GrowthStandardRow::from_lms(
        GrowthIndicator::WeightForHeight,
        gender,
        None,
        Some(height_cm),
        -0.3521,
        m,
        0.082,
    )
}

/// Rows for a twelve-month-old boy measuring 75.5 cm
fn twelve_month_table() -> GrowthStandardTable {
    GrowthStandardTable::from_rows(vec![
        age_row(GrowthIndicator::WeightForAge, Gender::Male, 12, 9.6),
        age_row(GrowthIndicator::HeightForAge, Gender::Male, 12, 75.5),
        age_row(GrowthIndicator::HeadCircumferenceForAge, Gender::Male, 12, 46.0),
        wfh_row(Gender::Male, 75.5, 9.6),
    ])
    .unwrap()
}

fn twelve_month_input() -> AssessmentInput {
    AssessmentInput {
        gender: "male".to_owned(),
        measurement_date: "2024-01-10".to_owned(),
        weight_kg: 9.6,
        height_cm: 75.5,
        head_circumference_cm: Some(46.0),
        child: ChildInput {
            date_of_birth: "2023-01-10".to_owned(),
            is_premature: false,
            gestational_age_weeks: None,
        },
    }
}

#[test]
fn test_assess_child_on_all_medians_is_normal_everywhere() {
    let table = twelve_month_table();
    let assessor = GrowthAssessor::new(&table);

    let result = assessor.assess(&twelve_month_input()).unwrap();

    assert_eq!(result.age_days, 365);
    assert_eq!(result.age_months, 12);
    assert!(!result.used_corrected_age);

    // Measurements sit exactly on the medians
    assert!(result.zscores.weight_for_age.unwrap().abs() < 1e-9);
    assert!(result.zscores.height_for_age.unwrap().abs() < 1e-9);
    assert!(result.zscores.weight_for_height.unwrap().abs() < 1e-9);
    assert!(result.zscores.head_circumference.unwrap().abs() < 1e-9);

    let status = result.status.unwrap();
    assert_eq!(status.weight_status, WeightStatus::NormalWeight);
    assert_eq!(status.height_status, HeightStatus::NormalHeight);
    assert_eq!(status.weight_for_height_status, WastingStatus::Normal);
}

#[test]
fn test_missing_weight_for_height_row_does_not_poison_others() {
    // Same table minus the weight-for-height row
    let table = GrowthStandardTable::from_rows(vec![
        age_row(GrowthIndicator::WeightForAge, Gender::Male, 12, 9.6),
        age_row(GrowthIndicator::HeightForAge, Gender::Male, 12, 75.5),
    ])
    .unwrap();
    let assessor = GrowthAssessor::new(&table);

    let result = assessor.assess(&twelve_month_input()).unwrap();

    assert!(result.zscores.weight_for_age.is_some());
    assert!(result.zscores.height_for_age.is_some());
    assert!(result.zscores.weight_for_height.is_none());

    // Status is still produced; the missing indicator reads as its Normal band
    let status = result.status.unwrap();
    assert_eq!(status.weight_for_height_status, WastingStatus::Normal);
}

#[test]
fn test_no_age_based_rows_yields_no_status() {
    let table = GrowthStandardTable::from_rows(vec![wfh_row(Gender::Male, 75.5, 9.6)]).unwrap();
    let assessor = GrowthAssessor::new(&table);

    let result = assessor.assess(&twelve_month_input()).unwrap();

    assert!(result.zscores.weight_for_height.is_some());
    assert!(result.zscores.weight_for_age.is_none());
    assert!(result.status.is_none());
}

#[test]
fn test_head_circumference_skipped_when_not_provided() {
    let table = twelve_month_table();
    let assessor = GrowthAssessor::new(&table);

    let mut input = twelve_month_input();
    input.head_circumference_cm = None;
    let result = assessor.assess(&input).unwrap();
    assert!(result.zscores.head_circumference.is_none());

    // Non-positive head circumference means "not taken", never an error
    input.head_circumference_cm = Some(0.0);
    let result = assessor.assess(&input).unwrap();
    assert!(result.zscores.head_circumference.is_none());
}

#[test]
fn test_corrected_age_drives_the_reference_lookup() {
    // Born 2023-01-01 at 32 weeks (56 days premature), measured 2023-06-01:
    // chronological is 5 completed months, corrected is 3. Only a 3-month
    // row exists, so a match proves the corrected age was used.
    let table = GrowthStandardTable::from_rows(vec![age_row(
        GrowthIndicator::WeightForAge,
        Gender::Male,
        3,
        6.4,
    )])
    .unwrap();
    let assessor = GrowthAssessor::new(&table);

    let result = assessor
        .assess(&AssessmentInput {
            gender: "male".to_owned(),
            measurement_date: "2023-06-01".to_owned(),
            weight_kg: 6.4,
            height_cm: 60.0,
            head_circumference_cm: None,
            child: ChildInput {
                date_of_birth: "2023-01-01".to_owned(),
                is_premature: true,
                gestational_age_weeks: Some(32),
            },
        })
        .unwrap();

    assert!(result.used_corrected_age);
    assert_eq!(result.age_days, 95);
    assert_eq!(result.age_months, 3);
    assert!(result.zscores.weight_for_age.unwrap().abs() < 1e-9);
}

#[test]
fn test_gender_locale_variants_fold() {
    let table = GrowthStandardTable::from_rows(vec![age_row(
        GrowthIndicator::WeightForAge,
        Gender::Female,
        12,
        8.9,
    )])
    .unwrap();
    let assessor = GrowthAssessor::new(&table);

    for gender in ["female", "P", "perempuan", "Perempuan"] {
        let mut input = twelve_month_input();
        input.gender = gender.to_owned();
        input.weight_kg = 8.9;
        let result = assessor.assess(&input).unwrap();
        assert!(
            result.zscores.weight_for_age.is_some(),
            "gender variant '{gender}' did not resolve"
        );
    }
}

#[test]
fn test_unknown_gender_is_fatal() {
    let table = twelve_month_table();
    let assessor = GrowthAssessor::new(&table);

    let mut input = twelve_month_input();
    input.gender = "x".to_owned();
    let err = assessor.assess(&input).unwrap_err();
    assert!(matches!(err, GrowthError::UnknownGender { .. }));
}

#[test]
fn test_unparseable_date_is_fatal() {
    let table = twelve_month_table();
    let assessor = GrowthAssessor::new(&table);

    let mut input = twelve_month_input();
    input.child.date_of_birth = "10-01-2023".to_owned();
    let err = assessor.assess(&input).unwrap_err();
    assert!(matches!(err, GrowthError::InvalidDateFormat { .. }));
}

#[test]
fn test_non_positive_measurements_are_fatal() {
    let table = twelve_month_table();
    let assessor = GrowthAssessor::new(&table);

    let mut input = twelve_month_input();
    input.weight_kg = 0.0;
    assert!(matches!(
        assessor.assess(&input).unwrap_err(),
        GrowthError::InvalidMeasurement {
            parameter: "weight_kg",
            ..
        }
    ));

    let mut input = twelve_month_input();
    input.height_cm = -50.0;
    assert!(matches!(
        assessor.assess(&input).unwrap_err(),
        GrowthError::InvalidMeasurement {
            parameter: "height_cm",
            ..
        }
    ));
}

#[test]
fn test_measurement_before_birth_skips_age_based_indicators() {
    let table = twelve_month_table();
    let assessor = GrowthAssessor::new(&table);

    let mut input = twelve_month_input();
    input.measurement_date = "2022-06-01".to_owned();
    let result = assessor.assess(&input).unwrap();

    assert!(result.age_days < 0);
    assert!(result.zscores.weight_for_age.is_none());
    assert!(result.zscores.height_for_age.is_none());
    assert!(result.status.is_none());
}

#[test]
fn test_underweight_classification_end_to_end() {
    let table = twelve_month_table();
    let assessor = GrowthAssessor::new(&table);

    let mut input = twelve_month_input();
    input.weight_kg = 7.0; // well below the 9.6 kg median
    let result = assessor.assess(&input).unwrap();

    let wfa_z = result.zscores.weight_for_age.unwrap();
    assert!(wfa_z < -2.0);
    let status = result.status.unwrap();
    assert_ne!(status.weight_status, WeightStatus::NormalWeight);
}

#[test]
fn test_assessment_input_deserializes_from_request_shape() {
    let input: AssessmentInput = serde_json::from_str(
        r#"{
            "gender": "L",
            "measurement_date": "2024-01-10T08:00:00Z",
            "weight_kg": 9.6,
            "height_cm": 75.5,
            "child": {
                "date_of_birth": "2023-01-10"
            }
        }"#,
    )
    .unwrap();

    assert_eq!(input.head_circumference_cm, None);
    assert!(!input.child.is_premature);

    let table = twelve_month_table();
    let result = GrowthAssessor::new(&table).assess(&input).unwrap();
    assert_eq!(result.age_months, 12);
    assert!(result.zscores.weight_for_age.is_some());
}
