//! Configuration loading and management for the Weekly Payroll Engine.
//!
//! This module provides functionality to load the engine's rate tables and
//! metadata from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/weekly_payroll").unwrap();
//! println!("Loaded rate set: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineMetadata, OvertimeTables, RateTableConfig};
