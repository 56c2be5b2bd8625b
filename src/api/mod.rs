//! HTTP API module for the Weekly Payroll Engine.
//!
//! This module provides the REST API endpoints for computing daily and
//! weekly pay from attendance records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DailySalaryRequest, DayScheduleRequest, EmployeeRequest, WeeklyPayrollRequest};
pub use response::{ApiError, DailySalaryLine, DailySalaryResponse, WeeklyPayrollResponse};
pub use state::AppState;
