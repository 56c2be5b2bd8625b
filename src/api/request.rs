//! Request types for the Weekly Payroll Engine API.
//!
//! This module defines the JSON request structures for the payroll
//! endpoints and their conversion into domain types. Raw input validation
//! (clock-hour domains including the hour-24 midnight convention) happens
//! here, before the calculation layer sees anything.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::NightOvertimeRule;
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, ClockHour, DayType, PayrollConfig};

/// Request body for the `/payroll/weekly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPayrollRequest {
    /// The employee's pay settings.
    pub employee: EmployeeRequest,
    /// The week's attendance, one entry per day in order.
    pub schedule: Vec<DayScheduleRequest>,
    /// How overtime hours are classified against the night window.
    #[serde(default)]
    pub night_overtime_rule: NightOvertimeRule,
}

/// Request body for the `/payroll/daily` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySalaryRequest {
    /// The employee's pay settings.
    pub employee: EmployeeRequest,
    /// The single day's attendance.
    pub day: DayScheduleRequest,
}

/// Employee pay settings in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The base pay for one regular day.
    pub base_daily_rate: Decimal,
    /// The number of regular hours in a working day.
    pub max_regular_hours: u32,
}

/// One day's attendance in a payroll request.
///
/// Hours are raw clock input: `0` through `23`, with `24` accepted as an
/// alias for midnight. Equal in and out hours mean the employee was absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayScheduleRequest {
    /// The pay classification for the day.
    pub day_type: DayType,
    /// The clock-in hour.
    pub in_hour: u8,
    /// The clock-out hour.
    pub out_hour: u8,
}

impl DayScheduleRequest {
    /// Converts the raw day into a validated attendance record.
    pub fn to_record(&self) -> EngineResult<AttendanceRecord> {
        let clock_in = ClockHour::from_clock_input(self.in_hour)?;
        let clock_out = ClockHour::from_clock_input(self.out_hour)?;
        Ok(AttendanceRecord::present(self.day_type, clock_in, clock_out))
    }
}

impl WeeklyPayrollRequest {
    /// Converts the request into a validated per-employee configuration.
    pub fn to_payroll_config(&self) -> EngineResult<PayrollConfig> {
        let weekly_schedule = self
            .schedule
            .iter()
            .map(DayScheduleRequest::to_record)
            .collect::<EngineResult<Vec<_>>>()?;

        let config = PayrollConfig {
            base_daily_rate: self.employee.base_daily_rate,
            max_regular_hours: self.employee.max_regular_hours,
            weekly_schedule,
        };
        config.validate()?;
        Ok(config)
    }
}
