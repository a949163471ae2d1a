// ABOUTME: Calendar age calculation with prematurity correction
// ABOUTME: Computes age in days and completed months, and corrected age for premature children
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Age Calculation
//!
//! Chronological age in exact days and completed calendar months, plus the
//! corrected age used for premature children until 24 months chronological
//! age. Corrected age subtracts the missed gestation (`40 - gestational
//! weeks`, floored at zero) from the chronological age.

use crate::errors::{GrowthError, GrowthResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Full-term pregnancy length in weeks
pub const FULL_TERM_WEEKS: u32 = 40;

/// Corrected age applies below this chronological age (24 months)
pub const CORRECTED_AGE_CUTOFF_DAYS: i64 = 730;

/// Average days per month, used to derive corrected months from corrected days
pub const AVERAGE_DAYS_PER_MONTH: f64 = 30.44;

/// The age to use for a reference lookup, with its provenance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorrectedAge {
    /// Age in days (corrected when `used_correction` is true)
    pub days: i64,
    /// Age in months (corrected when `used_correction` is true)
    pub months: i64,
    /// Whether prematurity correction was applied
    pub used_correction: bool,
}

/// Parse an ISO-8601 date, ignoring any time component
///
/// Handles both `"2024-11-20"` and `"2024-11-20T00:00:00Z"` by truncating to
/// the first ten characters before parsing.
///
/// # Errors
///
/// Returns [`GrowthError::InvalidDateFormat`] when the value does not start
/// with a valid `YYYY-MM-DD` calendar date.
pub fn parse_date(field: &'static str, value: &str) -> GrowthResult<NaiveDate> {
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|source| {
        GrowthError::InvalidDateFormat {
            field,
            value: value.to_owned(),
            source,
        }
    })
}

/// Exact calendar day difference between two dates
#[must_use]
pub fn age_in_days(dob: NaiveDate, on_date: NaiveDate) -> i64 {
    (on_date - dob).num_days()
}

/// Completed calendar months between two dates
///
/// `year_diff * 12 + month_diff`, decremented by one when the day of month
/// has not been reached yet. This is the "completed months" convention the
/// WHO tables are indexed by, not a rounded fractional value.
#[must_use]
pub fn age_in_months(dob: NaiveDate, on_date: NaiveDate) -> i64 {
    let years = i64::from(on_date.year()) - i64::from(dob.year());
    let months = i64::from(on_date.month()) - i64::from(dob.month());
    let mut total = years * 12 + months;
    if on_date.day() < dob.day() {
        total -= 1;
    }
    total
}

/// Age with prematurity correction applied when applicable
///
/// Correction applies only when all three hold: the child is premature, a
/// gestational age is known, and chronological age is under
/// [`CORRECTED_AGE_CUTOFF_DAYS`]. Otherwise the chronological age is returned
/// with `used_correction = false`.
///
/// Corrected days are clamped at zero; corrected months are
/// `floor(days / 30.44)`.
#[must_use]
pub fn corrected_age(
    dob: NaiveDate,
    on_date: NaiveDate,
    is_premature: bool,
    gestational_age_weeks: Option<u32>,
) -> CorrectedAge {
    let chrono_days = age_in_days(dob, on_date);
    let chrono_months = age_in_months(dob, on_date);

    let chronological = CorrectedAge {
        days: chrono_days,
        months: chrono_months,
        used_correction: false,
    };

    if !is_premature {
        return chronological;
    }
    let Some(weeks) = gestational_age_weeks else {
        return chronological;
    };
    if chrono_days >= CORRECTED_AGE_CUTOFF_DAYS {
        debug!(
            chrono_days,
            "chronological age past 24 months, skipping prematurity correction"
        );
        return chronological;
    }

    let weeks_premature = i64::from(FULL_TERM_WEEKS.saturating_sub(weeks));
    let corrected_days = (chrono_days - weeks_premature * 7).max(0);
    let corrected_months = ((corrected_days as f64) / AVERAGE_DAYS_PER_MONTH).floor() as i64;

    debug!(
        chrono_days,
        corrected_days, weeks_premature, "applying prematurity correction"
    );

    CorrectedAge {
        days: corrected_days,
        months: corrected_months,
        used_correction: true,
    }
}

/// Format an age in months for display, e.g. "2 years 3 months"
#[must_use]
pub fn format_age(age_in_months: i64) -> String {
    if age_in_months < 0 {
        return "Invalid age".to_owned();
    }

    let years = age_in_months / 12;
    let months = age_in_months % 12;
    let year_unit = if years == 1 { "year" } else { "years" };
    let month_unit = if months == 1 { "month" } else { "months" };

    match (years, months) {
        (0, _) => format!("{months} {month_unit}"),
        (_, 0) => format!("{years} {year_unit}"),
        _ => format!("{years} {year_unit} {months} {month_unit}"),
    }
}
