// ABOUTME: Growth assessment engine combining age, LMS, lookup, and interpretation
// ABOUTME: Computes per-indicator Z-scores and an overall assessment for one measurement
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Growth Assessor
//!
//! The request-facing engine. Callers hand in plain values (gender string,
//! ISO dates, measurements); the assessor resolves the age to use, queries
//! the injected reference table per indicator, computes Z-scores, and
//! interprets them into status categories.
//!
//! Each indicator is attempted independently: a missing reference row only
//! leaves that indicator's Z-score absent, it never aborts the others.

use crate::algorithms::age::{corrected_age, parse_date, CorrectedAge};
use crate::algorithms::lms::zscore;
use crate::errors::GrowthResult;
use crate::interpretation::StatusResult;
use crate::models::{ChildBiometrics, Gender, GrowthIndicator, Measurement, ZScoreResult};
use crate::standards::{GrowthStandardRow, GrowthStandardTable};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

/// Child fields of an assessment request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChildInput {
    /// Date of birth, ISO-8601 (time component ignored)
    pub date_of_birth: String,
    /// Whether the child was born premature
    #[serde(default)]
    pub is_premature: bool,
    /// Gestational age at birth in weeks, meaningful only when premature
    #[serde(default)]
    pub gestational_age_weeks: Option<u32>,
}

/// One assessment request with plain, unvalidated values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentInput {
    /// Gender, accepting locale variants ("male", "female", "L", "P", ...)
    pub gender: String,
    /// Measurement date, ISO-8601 (time component ignored)
    pub measurement_date: String,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body height in centimeters
    pub height_cm: f64,
    /// Head circumference in centimeters, if taken
    #[serde(default)]
    pub head_circumference_cm: Option<f64>,
    /// Child biological data
    pub child: ChildInput,
}

impl AssessmentInput {
    /// Parse and validate into typed value objects
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateFormat`, `UnknownGender`, or `InvalidMeasurement`
    /// per the validation rules on [`Measurement`].
    pub fn parse(&self) -> GrowthResult<(ChildBiometrics, Measurement)> {
        let gender = Gender::from_str(&self.gender)?;
        let date_of_birth = parse_date("date_of_birth", &self.child.date_of_birth)?;
        let measurement_date = parse_date("measurement_date", &self.measurement_date)?;

        let measurement = Measurement {
            measurement_date,
            gender,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            head_circumference_cm: self.head_circumference_cm,
        };
        measurement.validate()?;

        let child = ChildBiometrics {
            date_of_birth,
            is_premature: self.child.is_premature,
            gestational_age_weeks: self.child.gestational_age_weeks,
        };
        Ok((child, measurement))
    }
}

/// Full result of assessing one measurement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentResult {
    /// Age in days used for the assessment (corrected when applicable)
    pub age_days: i64,
    /// Age in months used for the reference lookups
    pub age_months: i64,
    /// Whether prematurity correction was applied
    pub used_corrected_age: bool,
    /// Per-indicator Z-scores; absent where no reference row matched
    pub zscores: ZScoreResult,
    /// Status categories; absent when no age-based Z-score resolved
    pub status: Option<StatusResult>,
}

/// Growth assessment engine over an injected read-only reference table
#[derive(Debug, Clone, Copy)]
pub struct GrowthAssessor<'a> {
    standards: &'a GrowthStandardTable,
}

impl<'a> GrowthAssessor<'a> {
    /// Create an assessor over the given reference table
    #[must_use]
    pub const fn new(standards: &'a GrowthStandardTable) -> Self {
        Self { standards }
    }

    /// Compute every applicable Z-score for one set of measurements
    ///
    /// Weight-for-age, height-for-age, and head-circumference-for-age are
    /// keyed by `age_months`; weight-for-height is keyed by height. Head
    /// circumference is only attempted when provided and positive. Each
    /// indicator that finds no reference row is left `None` and logged.
    #[must_use]
    pub fn compute_all(
        &self,
        gender: Gender,
        age_months: i64,
        weight_kg: f64,
        height_cm: f64,
        head_circumference_cm: Option<f64>,
    ) -> ZScoreResult {
        let mut result = ZScoreResult::default();

        let age_key = u32::try_from(age_months).ok();
        if age_key.is_none() {
            warn!(age_months, "negative age, skipping age-based indicators");
        }

        if let Some(age) = age_key {
            result.weight_for_age =
                self.indicator_zscore(GrowthIndicator::WeightForAge, gender, age, weight_kg);
            result.height_for_age =
                self.indicator_zscore(GrowthIndicator::HeightForAge, gender, age, height_cm);
        }

        result.weight_for_height = match self.standards.by_height(
            GrowthIndicator::WeightForHeight,
            gender,
            height_cm,
        ) {
            Some(row) => Self::row_zscore(GrowthIndicator::WeightForHeight, weight_kg, row),
            None => {
                warn!(%gender, height_cm, "no weight-for-height standard for height");
                None
            }
        };

        if let Some(age) = age_key {
            if let Some(head_circ) = head_circumference_cm.filter(|hc| *hc > 0.0) {
                result.head_circumference = self.indicator_zscore(
                    GrowthIndicator::HeadCircumferenceForAge,
                    gender,
                    age,
                    head_circ,
                );
            }
        }

        result
    }

    /// Assess one measurement end to end
    ///
    /// Resolves the age (corrected for prematurity when applicable), computes
    /// all Z-scores against the injected table, and interprets statuses with
    /// the explicit missing-as-zero policy of
    /// [`StatusResult::from_zscores`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateFormat`, `UnknownGender`, or `InvalidMeasurement`
    /// for unusable input. A missing reference row is never an error.
    pub fn assess(&self, input: &AssessmentInput) -> GrowthResult<AssessmentResult> {
        let (child, measurement) = input.parse()?;

        let age: CorrectedAge = corrected_age(
            child.date_of_birth,
            measurement.measurement_date,
            child.is_premature,
            child.gestational_age_weeks,
        );
        debug!(
            days = age.days,
            months = age.months,
            used_correction = age.used_correction,
            "resolved assessment age"
        );

        let zscores = self.compute_all(
            measurement.gender,
            age.months,
            measurement.weight_kg,
            measurement.height_cm,
            measurement.head_circumference(),
        );
        let status = StatusResult::from_zscores(&zscores);

        Ok(AssessmentResult {
            age_days: age.days,
            age_months: age.months,
            used_corrected_age: age.used_correction,
            zscores,
            status,
        })
    }

    fn indicator_zscore(
        &self,
        indicator: GrowthIndicator,
        gender: Gender,
        age_months: u32,
        value: f64,
    ) -> Option<f64> {
        match self.standards.by_age(indicator, gender, age_months) {
            Some(row) => Self::row_zscore(indicator, value, row),
            None => {
                warn!(%indicator, %gender, age_months, "no growth standard for age");
                None
            }
        }
    }

    fn row_zscore(indicator: GrowthIndicator, value: f64, row: &GrowthStandardRow) -> Option<f64> {
        match zscore(value, row.l, row.m, row.s) {
            Ok(z) => Some(z),
            Err(error) => {
                warn!(%indicator, %error, "z-score computation failed");
                None
            }
        }
    }
}
