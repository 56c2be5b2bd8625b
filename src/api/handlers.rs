//! HTTP request handlers for the Weekly Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_daily_salary, calculate_weekly_payroll};
use crate::error::EngineResult;
use crate::models::ClockHour;

use super::request::{DailySalaryRequest, DayScheduleRequest, EmployeeRequest, WeeklyPayrollRequest};
use super::response::{
    ApiError, ApiErrorResponse, DailySalaryLine, DailySalaryResponse, WeeklyPayrollResponse,
    round_for_display,
};
use super::state::AppState;

/// Bounds on the regular-hours setting accepted over the API.
///
/// The calculation layer accepts any positive value; this policy range is
/// enforced only at the input boundary.
const MAX_HOURS_POLICY_RANGE: std::ops::RangeInclusive<u32> = 8..=24;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/weekly", post(weekly_payroll_handler))
        .route("/payroll/daily", post(daily_salary_handler))
        .with_state(state)
}

/// Handler for POST /payroll/weekly.
///
/// Accepts a week of attendance and returns the seven daily salary lines
/// plus the weekly total.
async fn weekly_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeeklyPayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly payroll request");

    let request = match unwrap_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    if let Err(response) = check_max_hours_policy(&request.employee, correlation_id) {
        return response;
    }

    let config = match request.to_payroll_config() {
        Ok(config) => config,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Request validation failed");
            return error_response(err.into());
        }
    };

    match calculate_weekly_payroll(&config, state.config().rates(), request.night_overtime_rule) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee.id,
                weekly_salary = %result.weekly_salary,
                "Weekly payroll calculated"
            );
            let days = request
                .schedule
                .iter()
                .zip(result.daily_results.iter())
                .enumerate()
                .map(|(index, (day, daily))| build_line(index as u32 + 1, day, daily))
                .collect::<EngineResult<Vec<_>>>();
            let days = match days {
                Ok(days) => days,
                Err(err) => return error_response(err.into()),
            };

            let response = WeeklyPayrollResponse {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee_id: request.employee.id.clone(),
                days,
                weekly_salary: round_for_display(result.weekly_salary),
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Weekly payroll failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /payroll/daily.
///
/// Exposes the single-day salary computation directly.
async fn daily_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailySalaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily salary request");

    let request = match unwrap_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    if let Err(response) = check_max_hours_policy(&request.employee, correlation_id) {
        return response;
    }

    let outcome = request.day.to_record().and_then(|record| {
        calculate_daily_salary(
            &record,
            request.employee.base_daily_rate,
            request.employee.max_regular_hours,
            state.config().rates(),
            crate::calculation::NightOvertimeRule::default(),
        )
    });

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee.id,
                salary = %result.salary,
                "Daily salary calculated"
            );
            let line = match build_line(1, &request.day, &result) {
                Ok(line) => line,
                Err(err) => return error_response(err.into()),
            };
            let response = DailySalaryResponse {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee_id: request.employee.id.clone(),
                result: line,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Daily salary failed");
            error_response(err.into())
        }
    }
}

/// Unwraps a JSON payload, mapping axum rejections onto the error envelope.
fn unwrap_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, axum::response::Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

/// Enforces the policy bounds on the regular-hours setting.
fn check_max_hours_policy(
    employee: &EmployeeRequest,
    correlation_id: Uuid,
) -> Result<(), axum::response::Response> {
    if MAX_HOURS_POLICY_RANGE.contains(&employee.max_regular_hours) {
        Ok(())
    } else {
        warn!(
            correlation_id = %correlation_id,
            max_regular_hours = employee.max_regular_hours,
            "Regular-hours setting outside policy range"
        );
        Err((
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::validation_error(format!(
                "max_regular_hours must be between {} and {}, got {}",
                MAX_HOURS_POLICY_RANGE.start(),
                MAX_HOURS_POLICY_RANGE.end(),
                employee.max_regular_hours
            ))),
        )
            .into_response())
    }
}

/// Builds a presentation line for one day, normalizing raw clock input.
fn build_line(
    day: u32,
    request: &DayScheduleRequest,
    result: &crate::models::DailySalaryResult,
) -> EngineResult<DailySalaryLine> {
    let clock_in = ClockHour::from_clock_input(request.in_hour)?;
    let clock_out = ClockHour::from_clock_input(request.out_hour)?;
    Ok(DailySalaryLine::build(
        day,
        request.day_type,
        clock_in,
        clock_out,
        result,
    ))
}

/// Converts an error envelope into an HTTP response.
fn error_response(error: ApiErrorResponse) -> axum::response::Response {
    (
        error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error.error),
    )
        .into_response()
}
