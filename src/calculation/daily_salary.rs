//! Daily salary computation.
//!
//! This module is the core of the engine: it dispatches one day's
//! attendance across the four pay scenarios (absence, paid absence on a
//! rest-type day, night-differential shift, general shift with optional
//! overtime) and accumulates overtime pay hour by hour against the
//! applicable rate table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Attendance, AttendanceRecord, ClockHour, DailySalaryResult, DayType};

use super::night_shift::count_night_hours;
use super::rate_table::RateTable;
use super::shift_hours::derive_worked_hours;

/// How overtime hours are classified against the night window.
///
/// The carryover rule reproduces the long-standing payroll behavior: once
/// an overtime hour falls inside the night window, every later overtime
/// hour of the same day keeps the night rate even after the window ends.
/// The per-hour rule rates each hour by its own wall-clock position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NightOvertimeRule {
    /// Night classification sticks for the remainder of the overtime span.
    #[default]
    Carryover,
    /// Each overtime hour is classified independently.
    PerHour,
}

/// Calculates one day's salary from a typed attendance record.
///
/// Scenarios, in priority order:
/// 1. Absent on a non-rest day: no pay, all hour counters zero.
/// 2. Absent on a rest day (or a holiday falling on one): the base daily
///    rate is owed in full.
/// 3. Present with no overtime but night hours: base pay for the day type
///    plus a flat night differential on the hourly-equivalent rate. The
///    differential is not compounded with the day-type multiplier.
/// 4. General case: base pay for the day type, plus per-hour overtime pay
///    split between day and night overtime rates.
///
/// The reported `nightshift_hours` always covers the full worked span
/// (break included), independent of the overtime split.
///
/// # Errors
///
/// Returns [`EngineError::NonPositiveRate`] or
/// [`EngineError::NonPositiveMaxHours`] when the employee configuration is
/// out of domain; no computation happens on invalid inputs.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{RateTable, NightOvertimeRule, calculate_daily_salary};
/// use payroll_engine::models::{AttendanceRecord, ClockHour, DayType};
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::statutory();
/// let record = AttendanceRecord::present(
///     DayType::Normal,
///     ClockHour::new(22).unwrap(),
///     ClockHour::new(6).unwrap(),
/// );
/// let result = calculate_daily_salary(
///     &record,
///     Decimal::from(500),
///     8,
///     &rates,
///     NightOvertimeRule::default(),
/// )
/// .unwrap();
/// // 500 * 1.0 + (500/8) * 8 * 1.1
/// assert_eq!(result.salary, Decimal::from(1050));
/// assert_eq!(result.nightshift_hours, 8);
/// ```
pub fn calculate_daily_salary(
    record: &AttendanceRecord,
    base_daily_rate: Decimal,
    max_regular_hours: u32,
    rates: &RateTable,
    night_rule: NightOvertimeRule,
) -> EngineResult<DailySalaryResult> {
    if base_daily_rate <= Decimal::ZERO {
        return Err(EngineError::NonPositiveRate {
            value: base_daily_rate,
        });
    }
    if max_regular_hours == 0 {
        return Err(EngineError::NonPositiveMaxHours { value: 0 });
    }

    let (clock_in, clock_out) = match record.attendance {
        Attendance::Absent => {
            // An absent rest-type day still pays the full daily rate.
            let result = if record.day_type.includes_rest_day() {
                DailySalaryResult::flat_pay(base_daily_rate)
            } else {
                DailySalaryResult::empty()
            };
            return Ok(result);
        }
        Attendance::Present { clock_in, clock_out } => (clock_in, clock_out),
    };

    let hours = derive_worked_hours(clock_in, clock_out, max_regular_hours);
    let nightshift_hours = count_night_hours(clock_in, hours.with_break);
    let hourly_rate = base_daily_rate / Decimal::from(max_regular_hours);
    let base_pay = base_daily_rate * rates.special_rate(record.day_type);

    if hours.overtime == 0 && nightshift_hours > 0 {
        // Night differential: flat premium on the hourly-equivalent rate,
        // not compounded with the day-type multiplier.
        let differential =
            hourly_rate * Decimal::from(nightshift_hours) * rates.night_differential();
        return Ok(DailySalaryResult {
            salary: base_pay + differential,
            normal_overtime_hours: 0,
            nightshift_overtime_hours: 0,
            nightshift_hours,
        });
    }

    let mut salary = base_pay;
    let mut normal_overtime_hours = 0;
    let mut nightshift_overtime_hours = 0;

    if hours.overtime > 0 {
        // First paid hour past the regular span and the unpaid break.
        let mut overtime_hour = clock_in.wrapping_add(max_regular_hours + 1);
        let mut night_rate_active = false;

        for _ in 0..hours.overtime {
            let is_night_shift = match night_rule {
                NightOvertimeRule::Carryover => {
                    night_rate_active = night_rate_active || overtime_hour.is_night();
                    night_rate_active
                }
                NightOvertimeRule::PerHour => overtime_hour.is_night(),
            };

            if is_night_shift {
                nightshift_overtime_hours += 1;
            } else {
                normal_overtime_hours += 1;
            }
            salary += hourly_rate * rates.overtime_rate(record.day_type, is_night_shift);
            overtime_hour = overtime_hour.successor();
        }
    }

    Ok(DailySalaryResult {
        salary,
        normal_overtime_hours,
        nightshift_overtime_hours,
        nightshift_hours,
    })
}

/// Computes one day's salary from raw clock hours.
///
/// This is the function-level boundary consumed by the presentation layer:
/// every precondition (hour domain, positive rate, positive regular-hours
/// setting) is validated before any computation begins, and equal in/out
/// hours are interpreted as absence. Overtime follows the default
/// carryover night rule.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{RateTable, compute_daily_salary};
/// use payroll_engine::models::DayType;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::statutory();
/// let result =
///     compute_daily_salary(9, 9, DayType::RestDay, Decimal::from(500), 8, &rates).unwrap();
/// assert_eq!(result.salary, Decimal::from(500));
/// ```
pub fn compute_daily_salary(
    in_hour: u8,
    out_hour: u8,
    day_type: DayType,
    base_daily_rate: Decimal,
    max_regular_hours: u32,
    rates: &RateTable,
) -> EngineResult<DailySalaryResult> {
    let clock_in = ClockHour::new(in_hour)?;
    let clock_out = ClockHour::new(out_hour)?;
    let record = AttendanceRecord {
        day_type,
        attendance: Attendance::from_hours(clock_in, clock_out),
    };
    calculate_daily_salary(
        &record,
        base_daily_rate,
        max_regular_hours,
        rates,
        NightOvertimeRule::default(),
    )
}
