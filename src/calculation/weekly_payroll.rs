//! Weekly payroll roll-up.
//!
//! A payroll week is seven independent daily calculations; no state crosses
//! day boundaries. The weekly total is the exact decimal sum of the daily
//! salaries, left unrounded for the presentation layer.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{PayrollConfig, WeeklyPayrollResult};

use super::daily_salary::{NightOvertimeRule, calculate_daily_salary};
use super::rate_table::RateTable;

/// Calculates a full payroll week for one employee.
///
/// Validates the configuration once, then runs the daily calculation for
/// each scheduled day in order.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{RateTable, NightOvertimeRule, calculate_weekly_payroll};
/// use payroll_engine::models::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// // Default configuration: no attendance, two paid rest days
/// let config = PayrollConfig::default();
/// let rates = RateTable::statutory();
/// let result =
///     calculate_weekly_payroll(&config, &rates, NightOvertimeRule::default()).unwrap();
/// assert_eq!(result.weekly_salary, Decimal::from(1000));
/// ```
pub fn calculate_weekly_payroll(
    config: &PayrollConfig,
    rates: &RateTable,
    night_rule: NightOvertimeRule,
) -> EngineResult<WeeklyPayrollResult> {
    config.validate()?;

    let mut daily_results = Vec::with_capacity(config.weekly_schedule.len());
    let mut weekly_salary = Decimal::ZERO;
    for record in &config.weekly_schedule {
        let result = calculate_daily_salary(
            record,
            config.base_daily_rate,
            config.max_regular_hours,
            rates,
            night_rule,
        )?;
        weekly_salary += result.salary;
        daily_results.push(result);
    }

    Ok(WeeklyPayrollResult {
        daily_results,
        weekly_salary,
    })
}
