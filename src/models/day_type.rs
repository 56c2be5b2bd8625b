//! Day-type classification for payroll rate selection.
//!
//! This module defines the [`DayType`] enum that labels each calendar day's
//! pay category. Day types are supplied by configuration and never derived
//! from a date.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Classification label for a calendar day's pay category.
///
/// The short codes in the serde aliases (`N`, `R`, `SNWH`, ...) match the
/// labels used in attendance exports; the canonical serialized form is the
/// snake_case variant name.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DayType;
///
/// let day_type = DayType::from_code("SNWHR").unwrap();
/// assert_eq!(day_type, DayType::SpecialNonWorkingAndRest);
/// assert!(day_type.includes_rest_day());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Ordinary working day - base rate applies.
    #[serde(alias = "N")]
    Normal,
    /// Scheduled rest day.
    #[serde(alias = "R")]
    RestDay,
    /// Special non-working holiday.
    #[serde(alias = "SNWH")]
    SpecialNonWorking,
    /// Special non-working holiday falling on a rest day.
    #[serde(alias = "SNWHR")]
    SpecialNonWorkingAndRest,
    /// Regular holiday.
    #[serde(alias = "RH")]
    RegularHoliday,
    /// Regular holiday falling on a rest day.
    #[serde(alias = "RHR")]
    RegularHolidayAndRest,
}

impl DayType {
    /// Every day-type variant, in rate-table order.
    ///
    /// Used to verify that rate tables cover the full classification set.
    pub const ALL: [DayType; 6] = [
        DayType::Normal,
        DayType::RestDay,
        DayType::SpecialNonWorking,
        DayType::SpecialNonWorkingAndRest,
        DayType::RegularHoliday,
        DayType::RegularHolidayAndRest,
    ];

    /// Parses the short code used in attendance exports.
    ///
    /// Codes are matched case-insensitively. Unknown labels fail with
    /// [`EngineError::InvalidDayType`]; there is no fallback classification.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::DayType;
    ///
    /// assert_eq!(DayType::from_code("rh").unwrap(), DayType::RegularHoliday);
    /// assert!(DayType::from_code("XYZ").is_err());
    /// ```
    pub fn from_code(label: &str) -> EngineResult<Self> {
        match label.to_ascii_uppercase().as_str() {
            "N" => Ok(DayType::Normal),
            "R" => Ok(DayType::RestDay),
            "SNWH" => Ok(DayType::SpecialNonWorking),
            "SNWHR" => Ok(DayType::SpecialNonWorkingAndRest),
            "RH" => Ok(DayType::RegularHoliday),
            "RHR" => Ok(DayType::RegularHolidayAndRest),
            _ => Err(EngineError::InvalidDayType {
                label: label.to_string(),
            }),
        }
    }

    /// Returns the short code for this day type.
    pub fn code(self) -> &'static str {
        match self {
            DayType::Normal => "N",
            DayType::RestDay => "R",
            DayType::SpecialNonWorking => "SNWH",
            DayType::SpecialNonWorkingAndRest => "SNWHR",
            DayType::RegularHoliday => "RH",
            DayType::RegularHolidayAndRest => "RHR",
        }
    }

    /// Returns a human-readable description for payroll display.
    pub fn description(self) -> &'static str {
        match self {
            DayType::Normal => "Normal Day",
            DayType::RestDay => "Rest Day",
            DayType::SpecialNonWorking => "SNWH",
            DayType::SpecialNonWorkingAndRest => "SNWH, Rest Day",
            DayType::RegularHoliday => "RH",
            DayType::RegularHolidayAndRest => "RH, Rest Day",
        }
    }

    /// Returns true for day types that are paid in full when the employee
    /// is absent.
    ///
    /// Rest days and holidays falling on rest days owe the base daily rate
    /// even without attendance.
    pub fn includes_rest_day(self) -> bool {
        matches!(
            self,
            DayType::RestDay | DayType::SpecialNonWorkingAndRest | DayType::RegularHolidayAndRest
        )
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_recognizes_all_variants() {
        for day_type in DayType::ALL {
            assert_eq!(DayType::from_code(day_type.code()).unwrap(), day_type);
        }
    }

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(DayType::from_code("snwhr").unwrap(), DayType::SpecialNonWorkingAndRest);
        assert_eq!(DayType::from_code("Rhr").unwrap(), DayType::RegularHolidayAndRest);
    }

    #[test]
    fn test_from_code_rejects_unknown_label() {
        let result = DayType::from_code("HOLIDAY");
        match result.unwrap_err() {
            EngineError::InvalidDayType { label } => assert_eq!(label, "HOLIDAY"),
            other => panic!("Expected InvalidDayType, got {:?}", other),
        }
    }

    #[test]
    fn test_rest_day_classification() {
        assert!(!DayType::Normal.includes_rest_day());
        assert!(DayType::RestDay.includes_rest_day());
        assert!(!DayType::SpecialNonWorking.includes_rest_day());
        assert!(DayType::SpecialNonWorkingAndRest.includes_rest_day());
        assert!(!DayType::RegularHoliday.includes_rest_day());
        assert!(DayType::RegularHolidayAndRest.includes_rest_day());
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(DayType::Normal.description(), "Normal Day");
        assert_eq!(DayType::SpecialNonWorkingAndRest.description(), "SNWH, Rest Day");
        assert_eq!(DayType::RegularHolidayAndRest.description(), "RH, Rest Day");
    }

    #[test]
    fn test_serialization_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&DayType::SpecialNonWorking).unwrap(),
            "\"special_non_working\""
        );
        assert_eq!(
            serde_json::to_string(&DayType::RegularHolidayAndRest).unwrap(),
            "\"regular_holiday_and_rest\""
        );
    }

    #[test]
    fn test_deserialization_accepts_short_codes() {
        let day_type: DayType = serde_json::from_str("\"SNWH\"").unwrap();
        assert_eq!(day_type, DayType::SpecialNonWorking);

        let day_type: DayType = serde_json::from_str("\"rest_day\"").unwrap();
        assert_eq!(day_type, DayType::RestDay);
    }

    #[test]
    fn test_display_prints_code() {
        assert_eq!(DayType::RegularHoliday.to_string(), "RH");
    }
}
