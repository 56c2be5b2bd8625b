//! Error types for the Weekly Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::DayType;

/// The main error type for the Weekly Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A day-type label was not in the recognized set.
    ///
    /// The engine fails closed on unknown labels instead of silently
    /// falling back to a neutral multiplier.
    #[error("Unrecognized day type: {label}")]
    InvalidDayType {
        /// The label that could not be parsed.
        label: String,
    },

    /// A clock hour fell outside the 24-hour domain.
    #[error("Invalid clock hour {value}: must be between 0 and 23")]
    InvalidTimeValue {
        /// The rejected hour value.
        value: i64,
    },

    /// The base daily rate was zero or negative.
    #[error("Daily rate must be positive, got {value}")]
    NonPositiveRate {
        /// The rejected rate.
        value: Decimal,
    },

    /// The maximum regular hours setting was zero or negative.
    #[error("Maximum regular hours must be positive, got {value}")]
    NonPositiveMaxHours {
        /// The rejected setting.
        value: i64,
    },

    /// A weekly schedule was structurally invalid.
    #[error("Invalid weekly schedule: {message}")]
    InvalidSchedule {
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// A rate table was missing an entry for a day type.
    #[error("Rate table '{table}' has no entry for day type {day_type}")]
    IncompleteRateTable {
        /// The table that failed validation.
        table: String,
        /// The day type with no multiplier.
        day_type: DayType,
    },

    /// A rate table carried a zero or negative multiplier.
    #[error("Rate table '{table}' has non-positive multiplier {value} for day type {day_type}")]
    InvalidMultiplier {
        /// The table that failed validation.
        table: String,
        /// The day type with the bad multiplier.
        day_type: DayType,
        /// The rejected multiplier.
        value: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
