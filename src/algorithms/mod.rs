// ABOUTME: Growth assessment algorithm modules
// ABOUTME: Contains age calculation and the WHO LMS transforms
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Chronological and prematurity-corrected age calculation
pub mod age;

/// WHO LMS method: Z-score and SD-boundary transforms
pub mod lms;

pub use age::CorrectedAge;
pub use lms::SdBoundaries;
