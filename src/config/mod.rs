//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load default pay settings and
//! employee profiles from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Default hourly rate: {}", config.defaults().base_hourly_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EmployeeProfile, EmployeesConfig, PayrollConfig};
