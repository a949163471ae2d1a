// ABOUTME: WHO growth reference table with keyed lookup and validated rows
// ABOUTME: Loads LMS reference data from JSON and derives SD boundary columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Growth Standard Table
//!
//! Immutable reference data: one row per (indicator, gender, age-in-months or
//! height-in-cm) carrying the LMS parameters and the seven derived SD
//! boundary columns. The table is built once from a static dataset, then
//! shared read-only; loading and lookup are distinct phases, so no locking is
//! needed between concurrent assessment calls.
//!
//! Lookup is exact-match only. Weight-for-height keys are snapped to the
//! nearest 0.5 cm grid before lookup; age keys are completed months. A miss
//! near the edge of the tabulated range is a normal outcome, not an error.

use crate::algorithms::lms::{sd_boundaries, SdBoundaries};
use crate::errors::{GrowthError, GrowthResult};
use crate::models::{Gender, GrowthIndicator};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Curated subset of the WHO reference dataset (LMS parameters only; the SD
/// columns are derived at load). Mirrors the platform's sample seed files.
const SAMPLE_DATASET: &str = include_str!("../data/who_standards_sample.json");

/// One reference entry: LMS parameters plus the seven SD boundary columns
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthStandardRow {
    /// Indicator this row belongs to
    pub indicator: GrowthIndicator,
    /// Gender this row applies to
    pub gender: Gender,
    /// Age key in completed months; present for age-based indicators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_months: Option<u32>,
    /// Height key in centimeters; present only for weight-for-height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Box-Cox power
    pub l: f64,
    /// Median, must be positive
    pub m: f64,
    /// Coefficient of variation, must be positive
    pub s: f64,
    /// Boundary value at Z = -3
    pub sd3neg: f64,
    /// Boundary value at Z = -2
    pub sd2neg: f64,
    /// Boundary value at Z = -1
    pub sd1neg: f64,
    /// Boundary value at Z = 0, always equal to M
    pub sd0: f64,
    /// Boundary value at Z = +1
    pub sd1: f64,
    /// Boundary value at Z = +2
    pub sd2: f64,
    /// Boundary value at Z = +3
    pub sd3: f64,
}

impl GrowthStandardRow {
    /// Build a row from LMS parameters alone, deriving the SD columns
    #[must_use]
    pub fn from_lms(
        indicator: GrowthIndicator,
        gender: Gender,
        age_months: Option<u32>,
        height_cm: Option<f64>,
        l: f64,
        m: f64,
        s: f64,
    ) -> Self {
        let b = sd_boundaries(l, m, s);
        Self {
            indicator,
            gender,
            age_months,
            height_cm,
            l,
            m,
            s,
            sd3neg: b.sd3neg,
            sd2neg: b.sd2neg,
            sd1neg: b.sd1neg,
            sd0: b.sd0,
            sd1: b.sd1,
            sd2: b.sd2,
            sd3: b.sd3,
        }
    }

    /// The SD boundary columns as a value
    #[must_use]
    pub const fn boundaries(&self) -> SdBoundaries {
        SdBoundaries {
            sd3neg: self.sd3neg,
            sd2neg: self.sd2neg,
            sd1neg: self.sd1neg,
            sd0: self.sd0,
            sd1: self.sd1,
            sd2: self.sd2,
            sd3: self.sd3,
        }
    }

    /// Check the row invariants
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidStandard`] when:
    /// - M or S is non-positive or non-finite
    /// - the lookup key does not match the indicator (age-based rows need
    ///   `age_months`, weight-for-height needs `height_cm`, never both)
    /// - `sd0 != m`
    /// - the SD columns are not non-decreasing
    pub fn validate(&self) -> GrowthResult<()> {
        if !self.m.is_finite() || self.m <= 0.0 {
            return Err(GrowthError::InvalidStandard {
                detail: format!("{} row has non-positive M: {}", self.indicator, self.m),
            });
        }
        if !self.s.is_finite() || self.s <= 0.0 {
            return Err(GrowthError::InvalidStandard {
                detail: format!("{} row has non-positive S: {}", self.indicator, self.s),
            });
        }

        match (self.indicator.is_height_keyed(), self.age_months, self.height_cm) {
            (true, None, Some(h)) if h.is_finite() && h >= 0.0 => {}
            (false, Some(_), None) => {}
            _ => {
                return Err(GrowthError::InvalidStandard {
                    detail: format!(
                        "{} row must be keyed by {} only (age_months: {:?}, height_cm: {:?})",
                        self.indicator,
                        if self.indicator.is_height_keyed() {
                            "height_cm"
                        } else {
                            "age_months"
                        },
                        self.age_months,
                        self.height_cm,
                    ),
                });
            }
        }

        if self.sd0 != self.m {
            return Err(GrowthError::InvalidStandard {
                detail: format!(
                    "{} row has sd0 {} diverging from M {}",
                    self.indicator, self.sd0, self.m
                ),
            });
        }
        if !self.boundaries().is_monotonic() {
            return Err(GrowthError::InvalidStandard {
                detail: format!("{} row has non-monotonic SD columns", self.indicator),
            });
        }
        Ok(())
    }

    fn key(&self) -> StandardKey {
        let lookup = match (self.age_months, self.height_cm) {
            (Some(age), _) => LookupKey::AgeMonths(age),
            (None, Some(h)) => LookupKey::half_centimeters(h),
            // validate() rejects keyless rows before this is reached
            (None, None) => LookupKey::AgeMonths(0),
        };
        StandardKey {
            indicator: self.indicator,
            gender: self.gender,
            lookup,
        }
    }
}

/// Raw dataset record: full rows with SD columns, or bare LMS records whose
/// SD columns are derived at load (the two shapes the platform's WHO seed
/// files use).
#[derive(Debug, Deserialize)]
struct RawStandardRecord {
    indicator: GrowthIndicator,
    gender: Gender,
    #[serde(default, alias = "month")]
    age_months: Option<u32>,
    #[serde(default)]
    height_cm: Option<f64>,
    #[serde(alias = "L")]
    l: f64,
    #[serde(alias = "M")]
    m: f64,
    #[serde(alias = "S")]
    s: f64,
    #[serde(default)]
    sd3neg: Option<f64>,
    #[serde(default)]
    sd2neg: Option<f64>,
    #[serde(default)]
    sd1neg: Option<f64>,
    #[serde(default)]
    sd0: Option<f64>,
    #[serde(default)]
    sd1: Option<f64>,
    #[serde(default)]
    sd2: Option<f64>,
    #[serde(default)]
    sd3: Option<f64>,
}

impl From<RawStandardRecord> for GrowthStandardRow {
    fn from(raw: RawStandardRecord) -> Self {
        let mut row = GrowthStandardRow::from_lms(
            raw.indicator,
            raw.gender,
            raw.age_months,
            raw.height_cm,
            raw.l,
            raw.m,
            raw.s,
        );
        // Only adopt tabulated SD columns when the record carries all seven;
        // otherwise keep the derived values.
        if let (Some(sd3neg), Some(sd2neg), Some(sd1neg), Some(sd0), Some(sd1), Some(sd2), Some(sd3)) = (
            raw.sd3neg, raw.sd2neg, raw.sd1neg, raw.sd0, raw.sd1, raw.sd2, raw.sd3,
        ) {
            row.sd3neg = sd3neg;
            row.sd2neg = sd2neg;
            row.sd1neg = sd1neg;
            row.sd0 = sd0;
            row.sd1 = sd1;
            row.sd2 = sd2;
            row.sd3 = sd3;
        }
        row
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum LookupKey {
    AgeMonths(u32),
    /// Height snapped to the 0.5 cm grid, stored in half-centimeter units
    HalfCentimeters(i64),
}

impl LookupKey {
    fn half_centimeters(height_cm: f64) -> Self {
        Self::HalfCentimeters((height_cm * 2.0).round() as i64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StandardKey {
    indicator: GrowthIndicator,
    gender: Gender,
    lookup: LookupKey,
}

/// Read-only keyed store of [`GrowthStandardRow`]s
#[derive(Debug, Default)]
pub struct GrowthStandardTable {
    rows: HashMap<StandardKey, GrowthStandardRow>,
}

impl GrowthStandardTable {
    /// Build a table from validated rows
    ///
    /// Duplicate (indicator, gender, key) entries keep the first row seen;
    /// later duplicates are dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidStandard`] when any row fails
    /// [`GrowthStandardRow::validate`].
    pub fn from_rows(rows: Vec<GrowthStandardRow>) -> GrowthResult<Self> {
        let mut table = Self {
            rows: HashMap::with_capacity(rows.len()),
        };
        for row in rows {
            row.validate()?;
            let key = row.key();
            if table.rows.contains_key(&key) {
                warn!(
                    indicator = %row.indicator,
                    gender = %row.gender,
                    age_months = ?row.age_months,
                    height_cm = ?row.height_cm,
                    "duplicate growth standard row dropped"
                );
                continue;
            }
            table.rows.insert(key, row);
        }
        Ok(table)
    }

    /// Build a table from a JSON array of reference records
    ///
    /// Accepts both dataset shapes: full rows with the seven SD columns, and
    /// bare LMS records (`month`/`age_months`, `l`, `m`, `s`) whose SD
    /// columns are derived here.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::MalformedStandardsData`] when the JSON does not
    /// parse, or [`GrowthError::InvalidStandard`] when a row violates the
    /// table invariants.
    pub fn from_json_str(data: &str) -> GrowthResult<Self> {
        let records: Vec<RawStandardRecord> = serde_json::from_str(data)?;
        Self::from_rows(records.into_iter().map(GrowthStandardRow::from).collect())
    }

    /// The embedded sample reference subset, for demos and tests
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded dataset is malformed.
    pub fn sample() -> GrowthResult<Self> {
        Self::from_json_str(SAMPLE_DATASET)
    }

    /// Look up an age-based row by completed months
    #[must_use]
    pub fn by_age(
        &self,
        indicator: GrowthIndicator,
        gender: Gender,
        age_months: u32,
    ) -> Option<&GrowthStandardRow> {
        self.rows.get(&StandardKey {
            indicator,
            gender,
            lookup: LookupKey::AgeMonths(age_months),
        })
    }

    /// Look up a height-keyed row, snapping to the nearest 0.5 cm
    #[must_use]
    pub fn by_height(
        &self,
        indicator: GrowthIndicator,
        gender: Gender,
        height_cm: f64,
    ) -> Option<&GrowthStandardRow> {
        self.rows.get(&StandardKey {
            indicator,
            gender,
            lookup: LookupKey::half_centimeters(height_cm),
        })
    }

    /// Recompute every row's SD columns from its LMS parameters
    ///
    /// Offline maintenance step, idempotent: running it twice yields
    /// identical values. Must not overlap with lookup traffic; it takes
    /// `&mut self`, so the borrow checker enforces that.
    pub fn recompute_sd_columns(&mut self) {
        for row in self.rows.values_mut() {
            let b = sd_boundaries(row.l, row.m, row.s);
            row.sd3neg = b.sd3neg;
            row.sd2neg = b.sd2neg;
            row.sd1neg = b.sd1neg;
            row.sd0 = b.sd0;
            row.sd1 = b.sd1;
            row.sd2 = b.sd2;
            row.sd3 = b.sd3;
        }
    }

    /// Number of rows in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
