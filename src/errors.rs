// ABOUTME: Domain error types for growth assessment operations
// ABOUTME: Defines GrowthError with structured context and the GrowthResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Growth Assessment Errors
//!
//! Structured error types for the assessment core. A missing reference row is
//! deliberately *not* an error here: lookups return `Option` and the affected
//! indicator is simply absent from the result.

/// Errors produced by the growth assessment core
#[derive(Debug, thiserror::Error)]
pub enum GrowthError {
    /// A date string could not be parsed as an ISO-8601 calendar date
    #[error("Invalid date in '{field}': '{value}'")]
    InvalidDateFormat {
        /// Name of the offending input field
        field: &'static str,
        /// Raw value that failed to parse
        value: String,
        /// Underlying chrono parse error
        #[source]
        source: chrono::format::ParseError,
    },

    /// A measurement value is outside its valid domain
    #[error("Invalid measurement: '{parameter}' must be a positive finite number, got {value}")]
    InvalidMeasurement {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Gender value not recognized after locale folding
    #[error("Unknown gender '{value}'. Accepted: male, female, L, P, laki-laki, perempuan")]
    UnknownGender {
        /// Raw gender string received
        value: String,
    },

    /// A reference row violates the standard-table invariants
    #[error("Invalid growth standard row: {detail}")]
    InvalidStandard {
        /// Description of the violated invariant
        detail: String,
    },

    /// Reference dataset could not be deserialized
    #[error("Malformed growth standards data")]
    MalformedStandardsData {
        /// Underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for growth assessment operations
pub type GrowthResult<T> = Result<T, GrowthError>;
