// ABOUTME: WHO child-growth assessment engine using the LMS statistical method
// ABOUTME: Computes Z-scores, corrected age, and nutritional status categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Tukem Growth
//!
//! Child-growth assessment core of the tukem growth-monitoring platform.
//! Given a child's biological data (date of birth, prematurity) and one
//! anthropometric measurement, it produces standardized Z-scores against the
//! WHO child-growth reference curves and translates them into clinical status
//! categories (stunted, wasted, overweight, ...).
//!
//! All computation is pure and synchronous. The only shared state is the
//! read-only [`GrowthStandardTable`], loaded once and then shared across
//! arbitrarily many concurrent callers without locking.
//!
//! ## Modules
//!
//! - **errors**: domain errors (`GrowthError`, `GrowthResult`)
//! - **models**: value objects (gender, indicators, measurements, Z-scores)
//! - **standards**: the keyed WHO reference table and its JSON loader
//! - **algorithms**: age calculation and the LMS transforms
//! - **interpretation**: Z-score to status-category mapping
//! - **assessment**: the request-facing `GrowthAssessor`
//!
//! ## Example
//!
//! ```rust,no_run
//! use tukem_growth::{AssessmentInput, ChildInput, GrowthAssessor, GrowthStandardTable};
//!
//! # fn example() -> tukem_growth::GrowthResult<()> {
//! let standards = GrowthStandardTable::sample()?;
//! let assessor = GrowthAssessor::new(&standards);
//! let result = assessor.assess(&AssessmentInput {
//!     gender: "laki-laki".to_owned(),
//!     measurement_date: "2024-01-15".to_owned(),
//!     weight_kg: 9.2,
//!     height_cm: 75.5,
//!     head_circumference_cm: None,
//!     child: ChildInput {
//!         date_of_birth: "2023-01-10".to_owned(),
//!         is_premature: false,
//!         gestational_age_weeks: None,
//!     },
//! })?;
//! println!("weight-for-age z: {:?}", result.zscores.weight_for_age);
//! # Ok(())
//! # }
//! ```

/// Domain errors and the `GrowthResult` alias
pub mod errors;

/// Value objects: gender, indicators, biometrics, measurements, Z-scores
pub mod models;

/// WHO growth reference table with keyed exact-match lookup
pub mod standards;

/// Age calculation and WHO LMS transforms
pub mod algorithms;

/// Z-score to nutritional/growth status interpretation
pub mod interpretation;

/// The request-facing growth assessment engine
pub mod assessment;

pub use assessment::{AssessmentInput, AssessmentResult, ChildInput, GrowthAssessor};
pub use errors::{GrowthError, GrowthResult};
pub use interpretation::{AlertLevel, HeightStatus, StatusResult, WastingStatus, WeightStatus};
pub use models::{ChildBiometrics, Gender, GrowthIndicator, Measurement, ZScoreResult};
pub use standards::{GrowthStandardRow, GrowthStandardTable};
