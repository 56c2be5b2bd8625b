//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine's
//! rate tables and metadata from YAML files.

use std::fs;
use std::path::Path;

use crate::calculation::RateTable;
use crate::error::{EngineError, EngineResult};

use super::types::{EngineMetadata, RateTableConfig};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates the rate tables before any calculation can use them.
///
/// # Directory Structure
///
/// ```text
/// config/weekly_payroll/
/// ├── payroll.yaml   # Rate-set metadata
/// └── rates.yaml     # Day-type multiplier tables
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::DayType;
///
/// let loader = ConfigLoader::load("./config/weekly_payroll").unwrap();
/// println!("Loaded rate set: {}", loader.metadata().name);
/// let multiplier = loader.rates().special_rate(DayType::RestDay);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: EngineMetadata,
    rates: RateTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] when a required file is missing
    /// - [`EngineError::ConfigParseError`] when a file contains invalid YAML
    /// - [`EngineError::IncompleteRateTable`] /
    ///   [`EngineError::InvalidMultiplier`] when the rate tables fail
    ///   validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("payroll.yaml"))?;
        let raw_rates = Self::load_yaml::<RateTableConfig>(&path.join("rates.yaml"))?;
        let rates = RateTable::from_config(raw_rates)?;

        Ok(Self { metadata, rates })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the rate-set metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the validated rate tables.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}
