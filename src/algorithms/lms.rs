// ABOUTME: WHO LMS method transforms between raw measurements and Z-scores
// ABOUTME: Implements zscore(), sd_value(), and the seven SD boundary columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # LMS Transforms
//!
//! The WHO LMS method describes each reference curve with three parameters
//! per age (or height) and gender: L (Box-Cox power), M (median), and S
//! (coefficient of variation). Both directions of the transform live here:
//!
//! - [`zscore`]: raw measurement → standardized Z-score
//! - [`sd_value`]: Z-score → the measurement value at that boundary
//!
//! Both are pure and deterministic, and both switch to the logarithmic form
//! below the same [`L_NEAR_ZERO`] threshold so they stay exact inverses of
//! each other near L = 0.
//!
//! # Scientific References
//!
//! - Cole, T.J. (1990). "The LMS method for constructing normalized growth
//!   standards." *Eur J Clin Nutr*, 44(1), 45-60.
//! - WHO Multicentre Growth Reference Study Group (2006). "WHO Child Growth
//!   Standards based on length/height, weight and age." *Acta Paediatr
//!   Suppl*, 450, 76-85.

use crate::errors::{GrowthError, GrowthResult};
use serde::{Deserialize, Serialize};

/// Below this magnitude, L is treated as zero and the logarithmic formulas
/// are used. Must match between [`zscore`] and [`sd_value`] to keep the two
/// transforms consistent near L = 0.
pub const L_NEAR_ZERO: f64 = 1e-4;

/// The seven standard-deviation boundary values derived from one LMS row
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SdBoundaries {
    /// Value at Z = -3
    pub sd3neg: f64,
    /// Value at Z = -2
    pub sd2neg: f64,
    /// Value at Z = -1
    pub sd1neg: f64,
    /// Value at Z = 0 (always equals M)
    pub sd0: f64,
    /// Value at Z = +1
    pub sd1: f64,
    /// Value at Z = +2
    pub sd2: f64,
    /// Value at Z = +3
    pub sd3: f64,
}

impl SdBoundaries {
    /// Whether the boundaries are non-decreasing from -3 SD to +3 SD
    ///
    /// Holds for any valid LMS row with S > 0.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        let values = [
            self.sd3neg,
            self.sd2neg,
            self.sd1neg,
            self.sd0,
            self.sd1,
            self.sd2,
            self.sd3,
        ];
        values.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

/// Measurement value at a given Z-score boundary
///
/// Formula: `M * (1 + L*S*z)^(1/L)`, or `M * exp(S*z)` when `|L| <`
/// [`L_NEAR_ZERO`]. `z = 0` returns M exactly (the median column is assigned
/// directly, not computed).
#[must_use]
pub fn sd_value(l: f64, m: f64, s: f64, z: f64) -> f64 {
    if z == 0.0 {
        return m;
    }
    if l.abs() < L_NEAR_ZERO {
        m * (s * z).exp()
    } else {
        m * (l * s * z + 1.0).powf(1.0 / l)
    }
}

/// All seven SD boundary columns for one LMS row
#[must_use]
pub fn sd_boundaries(l: f64, m: f64, s: f64) -> SdBoundaries {
    SdBoundaries {
        sd3neg: sd_value(l, m, s, -3.0),
        sd2neg: sd_value(l, m, s, -2.0),
        sd1neg: sd_value(l, m, s, -1.0),
        sd0: m,
        sd1: sd_value(l, m, s, 1.0),
        sd2: sd_value(l, m, s, 2.0),
        sd3: sd_value(l, m, s, 3.0),
    }
}

/// Z-score of a raw measurement against one LMS row
///
/// Formula: `((value/M)^L - 1) / (L*S)`, or `ln(value/M) / S` when `|L| <`
/// [`L_NEAR_ZERO`].
///
/// # Errors
///
/// Returns [`GrowthError::InvalidMeasurement`] when `value` or `m` is
/// non-positive or non-finite.
pub fn zscore(value: f64, l: f64, m: f64, s: f64) -> GrowthResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GrowthError::InvalidMeasurement {
            parameter: "value",
            value,
        });
    }
    if !m.is_finite() || m <= 0.0 {
        return Err(GrowthError::InvalidMeasurement {
            parameter: "m",
            value: m,
        });
    }

    if l.abs() < L_NEAR_ZERO {
        Ok((value / m).ln() / s)
    } else {
        Ok(((value / m).powf(l) - 1.0) / (l * s))
    }
}
