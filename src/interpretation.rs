// ABOUTME: Z-score to nutritional/growth status interpretation
// ABOUTME: Threshold mapping for weight-for-age, height-for-age, and weight-for-height
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Growth Status Interpretation
//!
//! Maps Z-scores to the standard pediatric nutritional status categories.
//! Each mapping is pure and total over the real line: every Z-score lands in
//! exactly one band, with the boundaries placed where WHO places them (low
//! cutoffs exclusive on the left, high cutoffs inclusive).

use crate::models::ZScoreResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight-for-age status bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightStatus {
    /// Z < -3
    SeverelyUnderweight,
    /// -3 <= Z < -2
    Underweight,
    /// -2 <= Z < -1
    PossibleRiskOfUnderweight,
    /// -1 <= Z <= 1
    NormalWeight,
    /// 1 < Z <= 2
    PossibleRiskOfOverweight,
    /// Z > 2
    Overweight,
}

impl WeightStatus {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SeverelyUnderweight => "Severely Underweight",
            Self::Underweight => "Underweight",
            Self::PossibleRiskOfUnderweight => "Possible Risk of Underweight",
            Self::NormalWeight => "Normal Weight",
            Self::PossibleRiskOfOverweight => "Possible Risk of Overweight",
            Self::Overweight => "Overweight",
        }
    }
}

impl fmt::Display for WeightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Height-for-age (stunting) status bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HeightStatus {
    /// Z < -3
    SeverelyStunted,
    /// -3 <= Z < -2
    Stunted,
    /// -2 <= Z < -1
    PossibleRiskOfStunting,
    /// -1 <= Z <= 3
    NormalHeight,
    /// Z > 3
    Tall,
}

impl HeightStatus {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SeverelyStunted => "Severely Stunted",
            Self::Stunted => "Stunted",
            Self::PossibleRiskOfStunting => "Possible Risk of Stunting",
            Self::NormalHeight => "Normal Height",
            Self::Tall => "Tall",
        }
    }
}

impl fmt::Display for HeightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weight-for-height (wasting/overweight) status bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WastingStatus {
    /// Z < -3
    SeverelyWasted,
    /// -3 <= Z < -2
    Wasted,
    /// -2 <= Z < -1
    PossibleRiskOfWasting,
    /// -1 <= Z <= 1
    Normal,
    /// 1 < Z <= 2
    PossibleRiskOfOverweight,
    /// 2 < Z <= 3
    Overweight,
    /// Z > 3
    Obese,
}

impl WastingStatus {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SeverelyWasted => "Severely Wasted",
            Self::Wasted => "Wasted",
            Self::PossibleRiskOfWasting => "Possible Risk of Wasting",
            Self::Normal => "Normal",
            Self::PossibleRiskOfOverweight => "Possible Risk of Overweight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for WastingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chart/report alert level for a Z-score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// Beyond ±2 SD
    Danger,
    /// Beyond ±1 SD
    Warning,
    /// Within ±1 SD
    Ok,
}

/// One status per indicator, each derived independently from its own Z-score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResult {
    /// Weight-for-age status
    pub weight_status: WeightStatus,
    /// Height-for-age status
    pub height_status: HeightStatus,
    /// Weight-for-height status
    pub weight_for_height_status: WastingStatus,
}

impl StatusResult {
    /// Interpret a Z-score set, substituting zero for missing indicators
    ///
    /// Returns `None` when neither age-based Z-score resolved. When at least
    /// one did, any still-missing indicator is fed in as `Z = 0` — an
    /// explicit, preserved platform policy, which means a truly missing
    /// indicator reads as its "Normal" band rather than "unknown".
    #[must_use]
    pub fn from_zscores(zscores: &ZScoreResult) -> Option<Self> {
        if !zscores.has_any_age_based() {
            return None;
        }
        Some(interpret(
            zscores.weight_for_age.unwrap_or(0.0),
            zscores.height_for_age.unwrap_or(0.0),
            zscores.weight_for_height.unwrap_or(0.0),
        ))
    }
}

/// Weight-for-age band for a Z-score
#[must_use]
pub fn weight_for_age_status(z: f64) -> WeightStatus {
    if z < -3.0 {
        WeightStatus::SeverelyUnderweight
    } else if z < -2.0 {
        WeightStatus::Underweight
    } else if z < -1.0 {
        WeightStatus::PossibleRiskOfUnderweight
    } else if z <= 1.0 {
        WeightStatus::NormalWeight
    } else if z <= 2.0 {
        WeightStatus::PossibleRiskOfOverweight
    } else {
        WeightStatus::Overweight
    }
}

/// Height-for-age band for a Z-score
#[must_use]
pub fn height_for_age_status(z: f64) -> HeightStatus {
    if z < -3.0 {
        HeightStatus::SeverelyStunted
    } else if z < -2.0 {
        HeightStatus::Stunted
    } else if z < -1.0 {
        HeightStatus::PossibleRiskOfStunting
    } else if z <= 3.0 {
        HeightStatus::NormalHeight
    } else {
        HeightStatus::Tall
    }
}

/// Weight-for-height band for a Z-score
#[must_use]
pub fn weight_for_height_status(z: f64) -> WastingStatus {
    if z < -3.0 {
        WastingStatus::SeverelyWasted
    } else if z < -2.0 {
        WastingStatus::Wasted
    } else if z < -1.0 {
        WastingStatus::PossibleRiskOfWasting
    } else if z <= 1.0 {
        WastingStatus::Normal
    } else if z <= 2.0 {
        WastingStatus::PossibleRiskOfOverweight
    } else if z <= 3.0 {
        WastingStatus::Overweight
    } else {
        WastingStatus::Obese
    }
}

/// Interpret the three core Z-scores into one status per indicator
#[must_use]
pub fn interpret(wfa_z: f64, hfa_z: f64, wfh_z: f64) -> StatusResult {
    StatusResult {
        weight_status: weight_for_age_status(wfa_z),
        height_status: height_for_age_status(hfa_z),
        weight_for_height_status: weight_for_height_status(wfh_z),
    }
}

/// Alert level for chart and report display
#[must_use]
pub fn alert_level(z: f64) -> AlertLevel {
    if !(-2.0..=2.0).contains(&z) {
        AlertLevel::Danger
    } else if !(-1.0..=1.0).contains(&z) {
        AlertLevel::Warning
    } else {
        AlertLevel::Ok
    }
}
