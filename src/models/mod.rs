//! Core data models for the Weekly Payroll Engine.
//!
//! This module contains all the domain types used throughout the engine.

mod attendance;
mod clock;
mod day_type;
mod salary_result;

pub use attendance::{Attendance, AttendanceRecord, PayrollConfig, SCHEDULE_DAYS};
pub use clock::ClockHour;
pub use day_type::DayType;
pub use salary_result::{DailySalaryResult, WeeklyPayrollResult};
