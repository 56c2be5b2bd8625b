//! Attendance records and per-employee payroll configuration.
//!
//! This module defines the per-day attendance input consumed by the
//! calculation layer and the long-lived per-employee configuration that
//! carries a full week of attendance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{ClockHour, DayType};

/// Number of days in a weekly schedule.
pub const SCHEDULE_DAYS: usize = 7;

/// Presence for one calendar day.
///
/// Absence is an explicit variant rather than a sentinel pair of equal clock
/// values. [`Attendance::from_hours`] maps the legacy clock convention onto
/// the variants, preserving its exact semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum Attendance {
    /// The employee clocked in and out.
    Present {
        /// The clock-in hour.
        clock_in: ClockHour,
        /// The clock-out hour, which may fall past midnight.
        clock_out: ClockHour,
    },
    /// The employee did not work that day.
    Absent,
}

impl Attendance {
    /// Maps raw clock hours onto attendance, where equal in and out hours
    /// mean the employee was absent.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Attendance, ClockHour};
    ///
    /// let nine = ClockHour::new(9).unwrap();
    /// let eighteen = ClockHour::new(18).unwrap();
    /// assert_eq!(Attendance::from_hours(nine, nine), Attendance::Absent);
    /// assert!(matches!(
    ///     Attendance::from_hours(nine, eighteen),
    ///     Attendance::Present { .. }
    /// ));
    /// ```
    pub fn from_hours(clock_in: ClockHour, clock_out: ClockHour) -> Self {
        if clock_in == clock_out {
            Attendance::Absent
        } else {
            Attendance::Present { clock_in, clock_out }
        }
    }

    /// Returns true when the employee did not work.
    pub fn is_absent(&self) -> bool {
        matches!(self, Attendance::Absent)
    }
}

/// One calendar day's attendance input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The pay classification for the day.
    pub day_type: DayType,
    /// The day's attendance.
    pub attendance: Attendance,
}

impl AttendanceRecord {
    /// Creates a record for an attended day.
    pub fn present(day_type: DayType, clock_in: ClockHour, clock_out: ClockHour) -> Self {
        AttendanceRecord {
            day_type,
            attendance: Attendance::from_hours(clock_in, clock_out),
        }
    }

    /// Creates a record for an absent day.
    pub fn absent(day_type: DayType) -> Self {
        AttendanceRecord {
            day_type,
            attendance: Attendance::Absent,
        }
    }
}

/// Per-employee payroll configuration.
///
/// Long-lived settings plus one week of attendance. Mutated only through
/// explicit configuration edits; read-only for the duration of a payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// The base pay for one regular day, before any multipliers.
    pub base_daily_rate: Decimal,
    /// The number of regular hours in a working day. Hours beyond this
    /// count as overtime.
    pub max_regular_hours: u32,
    /// The week's attendance, index 0..6 = day 1..7.
    pub weekly_schedule: Vec<AttendanceRecord>,
}

impl PayrollConfig {
    /// Validates the configuration ahead of a payroll run.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NonPositiveRate`] when the daily rate is not positive
    /// - [`EngineError::NonPositiveMaxHours`] when the regular-hours setting is zero
    /// - [`EngineError::InvalidSchedule`] when the schedule is not exactly seven days
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_daily_rate <= Decimal::ZERO {
            return Err(EngineError::NonPositiveRate {
                value: self.base_daily_rate,
            });
        }
        if self.max_regular_hours == 0 {
            return Err(EngineError::NonPositiveMaxHours { value: 0 });
        }
        if self.weekly_schedule.len() != SCHEDULE_DAYS {
            return Err(EngineError::InvalidSchedule {
                message: format!(
                    "expected {} days, got {}",
                    SCHEDULE_DAYS,
                    self.weekly_schedule.len()
                ),
            });
        }
        Ok(())
    }
}

impl Default for PayrollConfig {
    /// The starting configuration for a new employee: 500.00 daily rate,
    /// 8 regular hours, five normal days followed by two rest days, no
    /// attendance recorded.
    fn default() -> Self {
        let weekly_schedule = [
            DayType::Normal,
            DayType::Normal,
            DayType::Normal,
            DayType::Normal,
            DayType::Normal,
            DayType::RestDay,
            DayType::RestDay,
        ]
        .into_iter()
        .map(AttendanceRecord::absent)
        .collect();

        PayrollConfig {
            base_daily_rate: Decimal::from(500),
            max_regular_hours: 8,
            weekly_schedule,
        }
    }
}
