// ABOUTME: Core value objects for growth assessment
// ABOUTME: Gender and indicator enums, child biometrics, measurements, and Z-score results
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models
//!
//! Value objects exchanged with the assessment engine. All types here are
//! plain data: nothing is shared or mutated across calls.

use crate::errors::{GrowthError, GrowthResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological gender used for reference-table selection
///
/// Input strings are folded from the locale variants the platform accepts:
/// `"L"`/`"laki-laki"` map to male, `"P"`/`"perempuan"` map to female.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male ("L" / "laki-laki")
    Male,
    /// Female ("P" / "perempuan")
    Female,
}

impl Gender {
    /// Canonical lowercase name, matching the reference dataset
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "l" | "laki-laki" => Ok(Self::Male),
            "female" | "p" | "perempuan" => Ok(Self::Female),
            _ => Err(GrowthError::UnknownGender {
                value: s.to_owned(),
            }),
        }
    }
}

/// WHO growth indicator
///
/// Age-based indicators are keyed by completed months; weight-for-height is
/// keyed by height on a 0.5 cm grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GrowthIndicator {
    /// Weight-for-age ("wfa")
    #[serde(alias = "wfa")]
    WeightForAge,
    /// Height-for-age ("hfa"), the stunting indicator
    #[serde(alias = "hfa")]
    HeightForAge,
    /// Weight-for-height ("wfh"), the wasting indicator, keyed by height
    #[serde(alias = "wfh")]
    WeightForHeight,
    /// Head-circumference-for-age ("hcfa")
    #[serde(alias = "hcfa")]
    HeadCircumferenceForAge,
}

impl GrowthIndicator {
    /// Short code used by the reference dataset
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::WeightForAge => "wfa",
            Self::HeightForAge => "hfa",
            Self::WeightForHeight => "wfh",
            Self::HeadCircumferenceForAge => "hcfa",
        }
    }

    /// Whether this indicator is looked up by height rather than age
    #[must_use]
    pub const fn is_height_keyed(self) -> bool {
        matches!(self, Self::WeightForHeight)
    }
}

impl fmt::Display for GrowthIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GrowthIndicator {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wfa" | "weight_for_age" => Ok(Self::WeightForAge),
            "hfa" | "height_for_age" => Ok(Self::HeightForAge),
            "wfh" | "weight_for_height" => Ok(Self::WeightForHeight),
            "hcfa" | "head_circumference_for_age" => Ok(Self::HeadCircumferenceForAge),
            other => Err(GrowthError::InvalidStandard {
                detail: format!(
                    "Unknown indicator: '{other}'. Valid options: wfa, hfa, wfh, hcfa"
                ),
            }),
        }
    }
}

/// Child biological data relevant to growth assessment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChildBiometrics {
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Whether the child was born premature
    pub is_premature: bool,
    /// Gestational age at birth in weeks, meaningful only when premature
    pub gestational_age_weeks: Option<u32>,
}

/// One anthropometric measurement taken on a given date
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Calendar date the measurement was taken
    pub measurement_date: NaiveDate,
    /// Normalized gender
    pub gender: Gender,
    /// Body weight in kilograms, must be positive
    pub weight_kg: f64,
    /// Body height (or recumbent length) in centimeters, must be positive
    pub height_cm: f64,
    /// Head circumference in centimeters; non-positive values mean "not taken"
    pub head_circumference_cm: Option<f64>,
}

impl Measurement {
    /// Validate the measurement values
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidMeasurement`] when weight or height is
    /// non-positive or non-finite. Head circumference is never an error: a
    /// non-positive value is treated as "not provided".
    pub fn validate(&self) -> GrowthResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(GrowthError::InvalidMeasurement {
                parameter: "weight_kg",
                value: self.weight_kg,
            });
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(GrowthError::InvalidMeasurement {
                parameter: "height_cm",
                value: self.height_cm,
            });
        }
        Ok(())
    }

    /// Head circumference, filtered to positive finite values
    #[must_use]
    pub fn head_circumference(&self) -> Option<f64> {
        self.head_circumference_cm
            .filter(|hc| hc.is_finite() && *hc > 0.0)
    }
}

/// One optional Z-score per indicator
///
/// `None` is the first-class "no reference row matched" flag; no sentinel
/// zero values are used. A missing row for one indicator never affects the
/// others.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ZScoreResult {
    /// Weight-for-age Z-score
    pub weight_for_age: Option<f64>,
    /// Height-for-age Z-score
    pub height_for_age: Option<f64>,
    /// Weight-for-height Z-score
    pub weight_for_height: Option<f64>,
    /// Head-circumference-for-age Z-score
    pub head_circumference: Option<f64>,
}

impl ZScoreResult {
    /// Whether at least one age-based indicator resolved
    ///
    /// Status interpretation is gated on this, matching the platform's rule
    /// that a status is only reported when weight-for-age or height-for-age
    /// matched a reference row.
    #[must_use]
    pub const fn has_any_age_based(&self) -> bool {
        self.weight_for_age.is_some() || self.height_for_age.is_some()
    }
}
