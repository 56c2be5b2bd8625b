//! Calculation logic for the Weekly Payroll Engine.
//!
//! This module contains the calculation functions for determining pay:
//! day-type rate lookup, worked-hour derivation from raw clock hours,
//! night-shift hour counting, the daily salary scenario dispatch with
//! overtime accumulation, and the weekly roll-up.

mod daily_salary;
mod night_shift;
mod rate_table;
mod shift_hours;
mod weekly_payroll;

pub use daily_salary::{NightOvertimeRule, calculate_daily_salary, compute_daily_salary};
pub use night_shift::count_night_hours;
pub use rate_table::RateTable;
pub use shift_hours::{BREAK_HOURS, WorkedHours, adjust_out_hour, derive_worked_hours};
pub use weekly_payroll::calculate_weekly_payroll;
