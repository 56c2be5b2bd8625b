//! Weekly Payroll Engine
//!
//! This crate computes an individual's weekly pay from a per-day attendance
//! record (clock-in hour, clock-out hour, day-type classification), applying
//! differentiated rates for rest days, special and regular holidays, overtime,
//! and night-shift work.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
