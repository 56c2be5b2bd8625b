//! Configuration types for the Weekly Payroll Engine.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from YAML configuration files.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::DayType;

/// Metadata about the loaded rate set (`payroll.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// The human-readable name of the rate set.
    pub name: String,
    /// The version or effective date of the rates.
    pub version: String,
    /// A description of what the rate set covers.
    pub description: String,
}

/// Raw rate-table file structure (`rates.yaml`).
///
/// Validated into a [`crate::calculation::RateTable`] at load time;
/// incomplete or non-positive tables never reach the calculation layer.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTableConfig {
    /// Premium multiplier for night hours within a regular shift.
    pub night_differential: Decimal,
    /// Base-pay multiplier per day type.
    pub special: HashMap<DayType, Decimal>,
    /// Overtime multiplier tables.
    pub overtime: OvertimeTables,
}

/// Overtime multiplier tables, split by shift classification.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeTables {
    /// Day-shift overtime multipliers per day type.
    pub day: HashMap<DayType, Decimal>,
    /// Night-shift overtime multipliers per day type.
    pub night: HashMap<DayType, Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_rate_table_config() {
        let yaml = r#"
night_differential: "1.1"
special:
  normal: "1.0"
  rest_day: "1.3"
overtime:
  day:
    normal: "1.25"
  night:
    normal: "1.375"
"#;
        let config: RateTableConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.night_differential, Decimal::from_str("1.1").unwrap());
        assert_eq!(
            config.special[&DayType::RestDay],
            Decimal::from_str("1.3").unwrap()
        );
        assert_eq!(
            config.overtime.night[&DayType::Normal],
            Decimal::from_str("1.375").unwrap()
        );
    }

    #[test]
    fn test_deserialize_metadata() {
        let yaml = r#"
name: "Weekly Attendance Payroll"
version: "2025-01-01"
description: "Day-type pay multipliers"
"#;
        let metadata: EngineMetadata = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(metadata.name, "Weekly Attendance Payroll");
        assert_eq!(metadata.version, "2025-01-01");
    }

    #[test]
    fn test_unknown_day_type_key_fails_to_parse() {
        let yaml = r#"
night_differential: "1.1"
special:
  someday: "1.0"
overtime:
  day: {}
  night: {}
"#;
        assert!(serde_yaml::from_str::<RateTableConfig>(yaml).is_err());
    }
}
