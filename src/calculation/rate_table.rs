//! Day-type rate multiplier tables.
//!
//! This module provides the [`RateTable`] that maps a day type to its
//! base-pay multiplier and, combined with the shift classification, to its
//! overtime multiplier. Tables are immutable once constructed and validated
//! to cover every day type, so lookups cannot fall back to a neutral
//! multiplier.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::config::RateTableConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::DayType;

/// Immutable day-type multiplier tables.
///
/// Construction fails closed: a table missing any [`DayType`], or carrying a
/// zero or negative multiplier, is rejected up front. After construction
/// every lookup is total.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::RateTable;
/// use payroll_engine::models::DayType;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::statutory();
/// assert_eq!(rates.special_rate(DayType::RegularHoliday), Decimal::new(2, 0));
/// assert_eq!(rates.overtime_rate(DayType::Normal, true), Decimal::new(1375, 3));
/// ```
#[derive(Debug, Clone)]
pub struct RateTable {
    special: HashMap<DayType, Decimal>,
    overtime_day: HashMap<DayType, Decimal>,
    overtime_night: HashMap<DayType, Decimal>,
    night_differential: Decimal,
}

impl RateTable {
    /// Builds a rate table from its component maps, validating completeness.
    ///
    /// # Errors
    ///
    /// - [`EngineError::IncompleteRateTable`] when any table has no entry
    ///   for some day type
    /// - [`EngineError::InvalidMultiplier`] when any multiplier, or the
    ///   night differential, is zero or negative
    pub fn new(
        special: HashMap<DayType, Decimal>,
        overtime_day: HashMap<DayType, Decimal>,
        overtime_night: HashMap<DayType, Decimal>,
        night_differential: Decimal,
    ) -> EngineResult<Self> {
        let tables = [
            ("special", &special),
            ("overtime_day", &overtime_day),
            ("overtime_night", &overtime_night),
        ];
        for (name, table) in tables {
            for day_type in DayType::ALL {
                match table.get(&day_type) {
                    None => {
                        return Err(EngineError::IncompleteRateTable {
                            table: name.to_string(),
                            day_type,
                        });
                    }
                    Some(value) if *value <= Decimal::ZERO => {
                        return Err(EngineError::InvalidMultiplier {
                            table: name.to_string(),
                            day_type,
                            value: *value,
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        if night_differential <= Decimal::ZERO {
            return Err(EngineError::InvalidMultiplier {
                table: "night_differential".to_string(),
                day_type: DayType::Normal,
                value: night_differential,
            });
        }

        Ok(RateTable {
            special,
            overtime_day,
            overtime_night,
            night_differential,
        })
    }

    /// Builds a rate table from a raw configuration file structure.
    pub fn from_config(config: RateTableConfig) -> EngineResult<Self> {
        Self::new(
            config.special,
            config.overtime.day,
            config.overtime.night,
            config.night_differential,
        )
    }

    /// The built-in statutory multiplier tables.
    pub fn statutory() -> Self {
        let special = HashMap::from([
            (DayType::Normal, Decimal::ONE),
            (DayType::RestDay, Decimal::new(13, 1)),
            (DayType::SpecialNonWorking, Decimal::new(13, 1)),
            (DayType::SpecialNonWorkingAndRest, Decimal::new(15, 1)),
            (DayType::RegularHoliday, Decimal::new(2, 0)),
            (DayType::RegularHolidayAndRest, Decimal::new(26, 1)),
        ]);
        let overtime_day = HashMap::from([
            (DayType::Normal, Decimal::new(125, 2)),
            (DayType::RestDay, Decimal::new(169, 2)),
            (DayType::SpecialNonWorking, Decimal::new(169, 2)),
            (DayType::SpecialNonWorkingAndRest, Decimal::new(195, 2)),
            (DayType::RegularHoliday, Decimal::new(26, 1)),
            (DayType::RegularHolidayAndRest, Decimal::new(338, 2)),
        ]);
        let overtime_night = HashMap::from([
            (DayType::Normal, Decimal::new(1375, 3)),
            (DayType::RestDay, Decimal::new(1859, 3)),
            (DayType::SpecialNonWorking, Decimal::new(1859, 3)),
            (DayType::SpecialNonWorkingAndRest, Decimal::new(2145, 3)),
            (DayType::RegularHoliday, Decimal::new(286, 2)),
            (DayType::RegularHolidayAndRest, Decimal::new(3718, 3)),
        ]);

        Self::new(special, overtime_day, overtime_night, Decimal::new(11, 1))
            .expect("statutory rate tables cover every day type")
    }

    /// Returns the day's base-pay multiplier.
    pub fn special_rate(&self, day_type: DayType) -> Decimal {
        // Tables are validated exhaustive at construction.
        self.special[&day_type]
    }

    /// Returns the overtime-hour multiplier for the day type and shift
    /// classification.
    pub fn overtime_rate(&self, day_type: DayType, is_night_shift: bool) -> Decimal {
        if is_night_shift {
            self.overtime_night[&day_type]
        } else {
            self.overtime_day[&day_type]
        }
    }

    /// Returns the premium multiplier applied to the hourly-equivalent rate
    /// for night hours within a regular (non-overtime) shift.
    pub fn night_differential(&self) -> Decimal {
        self.night_differential
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_statutory_special_rates() {
        let rates = RateTable::statutory();
        assert_eq!(rates.special_rate(DayType::Normal), dec("1.0"));
        assert_eq!(rates.special_rate(DayType::RestDay), dec("1.3"));
        assert_eq!(rates.special_rate(DayType::SpecialNonWorking), dec("1.3"));
        assert_eq!(rates.special_rate(DayType::SpecialNonWorkingAndRest), dec("1.5"));
        assert_eq!(rates.special_rate(DayType::RegularHoliday), dec("2.0"));
        assert_eq!(rates.special_rate(DayType::RegularHolidayAndRest), dec("2.6"));
    }

    #[test]
    fn test_statutory_day_overtime_rates() {
        let rates = RateTable::statutory();
        assert_eq!(rates.overtime_rate(DayType::Normal, false), dec("1.25"));
        assert_eq!(rates.overtime_rate(DayType::RestDay, false), dec("1.69"));
        assert_eq!(rates.overtime_rate(DayType::SpecialNonWorking, false), dec("1.69"));
        assert_eq!(
            rates.overtime_rate(DayType::SpecialNonWorkingAndRest, false),
            dec("1.95")
        );
        assert_eq!(rates.overtime_rate(DayType::RegularHoliday, false), dec("2.6"));
        assert_eq!(
            rates.overtime_rate(DayType::RegularHolidayAndRest, false),
            dec("3.38")
        );
    }

    #[test]
    fn test_statutory_night_overtime_rates() {
        let rates = RateTable::statutory();
        assert_eq!(rates.overtime_rate(DayType::Normal, true), dec("1.375"));
        assert_eq!(rates.overtime_rate(DayType::RestDay, true), dec("1.859"));
        assert_eq!(rates.overtime_rate(DayType::SpecialNonWorking, true), dec("1.859"));
        assert_eq!(
            rates.overtime_rate(DayType::SpecialNonWorkingAndRest, true),
            dec("2.145")
        );
        assert_eq!(rates.overtime_rate(DayType::RegularHoliday, true), dec("2.86"));
        assert_eq!(
            rates.overtime_rate(DayType::RegularHolidayAndRest, true),
            dec("3.718")
        );
    }

    #[test]
    fn test_statutory_night_differential() {
        assert_eq!(RateTable::statutory().night_differential(), dec("1.1"));
    }

    #[test]
    fn test_lookups_are_pure() {
        let rates = RateTable::statutory();
        for day_type in DayType::ALL {
            for is_night in [false, true] {
                assert_eq!(
                    rates.overtime_rate(day_type, is_night),
                    rates.overtime_rate(day_type, is_night)
                );
            }
            assert_eq!(rates.special_rate(day_type), rates.special_rate(day_type));
        }
    }

    #[test]
    fn test_missing_entry_fails_closed() {
        let rates = RateTable::statutory();
        let mut special = rates.special.clone();
        special.remove(&DayType::RegularHolidayAndRest);

        let result = RateTable::new(
            special,
            rates.overtime_day.clone(),
            rates.overtime_night.clone(),
            rates.night_differential,
        );
        match result.unwrap_err() {
            EngineError::IncompleteRateTable { table, day_type } => {
                assert_eq!(table, "special");
                assert_eq!(day_type, DayType::RegularHolidayAndRest);
            }
            other => panic!("Expected IncompleteRateTable, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_multiplier_rejected() {
        let rates = RateTable::statutory();
        let mut overtime_day = rates.overtime_day.clone();
        overtime_day.insert(DayType::RestDay, Decimal::ZERO);

        let result = RateTable::new(
            rates.special.clone(),
            overtime_day,
            rates.overtime_night.clone(),
            rates.night_differential,
        );
        match result.unwrap_err() {
            EngineError::InvalidMultiplier { table, day_type, value } => {
                assert_eq!(table, "overtime_day");
                assert_eq!(day_type, DayType::RestDay);
                assert_eq!(value, Decimal::ZERO);
            }
            other => panic!("Expected InvalidMultiplier, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_night_differential_rejected() {
        let rates = RateTable::statutory();
        let result = RateTable::new(
            rates.special.clone(),
            rates.overtime_day.clone(),
            rates.overtime_night.clone(),
            dec("-0.1"),
        );
        assert!(matches!(
            result.unwrap_err(),
            EngineError::InvalidMultiplier { .. }
        ));
    }
}
