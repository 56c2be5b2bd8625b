//! Response types for the Weekly Payroll Engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API. Salary amounts are rounded to two decimal places here, at the
//! presentation boundary; the calculation layer works with exact decimals.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{ClockHour, DailySalaryResult, DayType};

/// Rounds an exact amount to the two places shown on a payslip.
///
/// Halves round away from zero, the conventional payroll treatment, rather
/// than the banker's rounding `round_dp` defaults to.
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// One day's salary line in a payroll response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySalaryLine {
    /// The day's position in the week, 1 through 7.
    pub day: u32,
    /// The pay classification for the day.
    pub day_type: DayType,
    /// Human-readable description of the day type.
    pub day_type_description: String,
    /// The clock-in time in military format, e.g. `"0900"`.
    pub in_time: String,
    /// The clock-out time in military format.
    pub out_time: String,
    /// The day's pay, rounded to two decimal places.
    pub salary: Decimal,
    /// Overtime hours paid at the day-shift overtime rate.
    pub normal_overtime_hours: u32,
    /// Overtime hours paid at the night-shift overtime rate.
    pub nightshift_overtime_hours: u32,
    /// Night hours within the regular portion of the shift.
    pub nightshift_hours: u32,
}

impl DailySalaryLine {
    /// Builds a presentation line from a day's inputs and its computed
    /// result.
    pub fn build(
        day: u32,
        day_type: DayType,
        clock_in: ClockHour,
        clock_out: ClockHour,
        result: &DailySalaryResult,
    ) -> Self {
        DailySalaryLine {
            day,
            day_type,
            day_type_description: day_type.description().to_string(),
            in_time: clock_in.to_string(),
            out_time: clock_out.to_string(),
            salary: round_for_display(result.salary),
            normal_overtime_hours: result.normal_overtime_hours,
            nightshift_overtime_hours: result.nightshift_overtime_hours,
            nightshift_hours: result.nightshift_hours,
        }
    }
}

/// Response body for the `/payroll/weekly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPayrollResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The employee the payroll belongs to.
    pub employee_id: String,
    /// The seven daily salary lines in schedule order.
    pub days: Vec<DailySalaryLine>,
    /// The weekly total, rounded to two decimal places.
    pub weekly_salary: Decimal,
}

/// Response body for the `/payroll/daily` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySalaryResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The employee the salary belongs to.
    pub employee_id: String,
    /// The computed salary line.
    pub result: DailySalaryLine,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::IncompleteRateTable { table, day_type } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "RATE_TABLE_ERROR",
                    "Rate table failed validation",
                    format!("Table '{}' has no entry for day type {}", table, day_type),
                ),
            },
            EngineError::InvalidMultiplier {
                table,
                day_type,
                value,
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "RATE_TABLE_ERROR",
                    "Rate table failed validation",
                    format!(
                        "Table '{}' has non-positive multiplier {} for day type {}",
                        table, value, day_type
                    ),
                ),
            },
            EngineError::InvalidDayType { label } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DAY_TYPE",
                    format!("Unrecognized day type: {}", label),
                    "Recognized codes are N, R, SNWH, SNWHR, RH and RHR",
                ),
            },
            EngineError::InvalidTimeValue { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME_VALUE",
                    format!("Invalid clock hour: {}", value),
                    "Clock hours must be between 0 and 23, with 24 accepted as midnight",
                ),
            },
            EngineError::NonPositiveRate { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "NON_POSITIVE_RATE",
                    format!("Daily rate must be positive, got {}", value),
                ),
            },
            EngineError::NonPositiveMaxHours { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "NON_POSITIVE_MAX_HOURS",
                    format!("Maximum regular hours must be positive, got {}", value),
                ),
            },
            EngineError::InvalidSchedule { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "INVALID_SCHEDULE",
                    format!("Invalid weekly schedule: {}", message),
                ),
            },
        }
    }
}
