//! Salary result value objects.
//!
//! This module contains the output types of the calculation layer: the
//! per-day salary breakdown and the weekly roll-up. Amounts stay as exact
//! decimals; rounding to two places happens only at presentation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed salary breakdown for a single day.
///
/// Produced fresh per calculation call and never mutated after return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySalaryResult {
    /// The day's pay, including premiums and overtime.
    pub salary: Decimal,
    /// Overtime hours paid at the day-shift overtime rate.
    pub normal_overtime_hours: u32,
    /// Overtime hours paid at the night-shift overtime rate.
    pub nightshift_overtime_hours: u32,
    /// Night hours within the regular (non-overtime) portion of the shift,
    /// counted over the full worked span including the break hour.
    pub nightshift_hours: u32,
}

impl DailySalaryResult {
    /// A zeroed result for a day with no pay and no hours.
    pub fn empty() -> Self {
        DailySalaryResult {
            salary: Decimal::ZERO,
            normal_overtime_hours: 0,
            nightshift_overtime_hours: 0,
            nightshift_hours: 0,
        }
    }

    /// A result carrying pay but no worked hours, e.g. a paid absent
    /// rest day.
    pub fn flat_pay(salary: Decimal) -> Self {
        DailySalaryResult {
            salary,
            ..Self::empty()
        }
    }

    /// Total overtime hours regardless of shift classification.
    pub fn overtime_hours(&self) -> u32 {
        self.normal_overtime_hours + self.nightshift_overtime_hours
    }
}

/// The seven daily results of one payroll week plus their exact sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPayrollResult {
    /// Daily breakdowns in schedule order, index 0..6 = day 1..7.
    pub daily_results: Vec<DailySalaryResult>,
    /// The exact sum of the seven daily salaries, unrounded.
    pub weekly_salary: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_empty_result_is_zeroed() {
        let result = DailySalaryResult::empty();
        assert_eq!(result.salary, Decimal::ZERO);
        assert_eq!(result.normal_overtime_hours, 0);
        assert_eq!(result.nightshift_overtime_hours, 0);
        assert_eq!(result.nightshift_hours, 0);
    }

    #[test]
    fn test_flat_pay_carries_salary_only() {
        let result = DailySalaryResult::flat_pay(Decimal::from(500));
        assert_eq!(result.salary, Decimal::from(500));
        assert_eq!(result.overtime_hours(), 0);
        assert_eq!(result.nightshift_hours, 0);
    }

    #[test]
    fn test_overtime_hours_sums_both_classifications() {
        let result = DailySalaryResult {
            salary: Decimal::from_str("812.5").unwrap(),
            normal_overtime_hours: 2,
            nightshift_overtime_hours: 3,
            nightshift_hours: 4,
        };
        assert_eq!(result.overtime_hours(), 5);
    }

    #[test]
    fn test_serde_round_trip() {
        let result = WeeklyPayrollResult {
            daily_results: vec![DailySalaryResult::flat_pay(Decimal::from(500))],
            weekly_salary: Decimal::from(500),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: WeeklyPayrollResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
