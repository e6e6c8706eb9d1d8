//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeSettings, SettingsRecord};

use super::types::{EmployeeProfile, EmployeesConfig, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// merges every settings record over the built-in defaults and validates
/// the result.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// ├── defaults.yaml   # Settings applied to every employee
/// └── employees.yaml  # Employee names and per-employee overrides
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
///
/// let settings = loader.settings_for("emp_001").unwrap();
/// println!("Hourly rate: {}", settings.base_hourly_rate);
///
/// let employee = loader.employee("emp_001").unwrap();
/// println!("Employee: {}", employee.name());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    /// - The defaults or any employee's merged settings fail validation
    ///   (`InvalidSettings`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let defaults_record = Self::load_yaml::<SettingsRecord>(&path.join("defaults.yaml"))?;
        let defaults = EmployeeSettings::default().merged(&defaults_record);
        defaults.validate()?;

        let employees_config = Self::load_yaml::<EmployeesConfig>(&path.join("employees.yaml"))?;
        for profile in employees_config.employees.values() {
            defaults.merged(&profile.settings).validate()?;
        }

        info!(
            path = %path.display(),
            employees = employees_config.employees.len(),
            "Payroll configuration loaded"
        );

        Ok(Self {
            config: PayrollConfig::new(defaults, employees_config.employees),
        })
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

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the default settings for employees without overrides.
    pub fn defaults(&self) -> &EmployeeSettings {
        self.config.defaults()
    }

    /// Gets an employee profile by id.
    ///
    /// # Returns
    ///
    /// Returns the profile if found, or `EmployeeNotFound` error.
    pub fn get_employee(&self, id: &str) -> EngineResult<&EmployeeProfile> {
        self.config
            .employees()
            .get(id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Gets an employee's effective settings: their overrides merged over
    /// the defaults.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// let settings = loader.settings_for("emp_001")?;
    /// assert!(settings.hours_per_shift > rust_decimal::Decimal::ZERO);
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn settings_for(&self, id: &str) -> EngineResult<EmployeeSettings> {
        let profile = self.get_employee(id)?;
        Ok(self.defaults().merged(&profile.settings))
    }

    /// Builds an [`Employee`] with no weeks from a configured profile.
    pub fn employee(&self, id: &str) -> EngineResult<Employee> {
        let profile = self.get_employee(id)?;
        Employee::new(id, profile.name.clone(), self.settings_for(id)?)
    }

    /// Returns the configured employee ids, sorted.
    pub fn employee_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.config.employees().keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/payroll"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.employee_ids(), vec!["emp_001", "emp_002", "emp_003"]);
    }

    #[test]
    fn test_defaults_merged_over_built_in_values() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let defaults = loader.defaults();

        assert_eq!(defaults.base_hourly_rate, dec("450"));
        assert!(defaults.uses_overtime);
        assert_eq!(defaults.hours_per_shift, dec("8"));
        // Not set in defaults.yaml
        assert_eq!(defaults.min_hours_for_break, dec("5"));
    }

    #[test]
    fn test_get_employee() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let profile = loader.get_employee("emp_001").unwrap();
        assert_eq!(profile.name, "Ana Torres");
    }

    #[test]
    fn test_get_employee_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_employee("unknown") {
            Err(EngineError::EmployeeNotFound { id }) => assert_eq!(id, "unknown"),
            _ => panic!("Expected EmployeeNotFound error"),
        }
    }

    #[test]
    fn test_settings_for_employee_without_overrides() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(&loader.settings_for("emp_001").unwrap(), loader.defaults());
    }

    #[test]
    fn test_settings_for_employee_with_overrides() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let settings = loader.settings_for("emp_002").unwrap();
        assert_eq!(settings.base_hourly_rate, dec("520"));
        assert_eq!(settings.hours_per_shift, dec("9"));
        assert_eq!(settings.break_hours, dec("0.5"));
        assert!(settings.uses_overtime);

        let no_overtime = loader.settings_for("emp_003").unwrap();
        assert!(!no_overtime.uses_overtime);
        assert_eq!(no_overtime.base_hourly_rate, dec("450"));
        assert!(no_overtime.uses_tips);
        assert_eq!(no_overtime.currency, crate::models::Currency::Usd);
        assert_eq!(settings.currency, crate::models::Currency::Mxn);
    }

    #[test]
    fn test_employee_builds_empty_employee() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let employee = loader.employee("emp_002").unwrap();
        assert_eq!(employee.id(), "emp_002");
        assert_eq!(employee.name(), "Luis Medina");
        assert_eq!(employee.settings().base_hourly_rate, dec("520"));
        assert!(employee.weeks().is_empty());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("defaults.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        match ConfigLoader::load("./tests/fixtures/malformed") {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("defaults.yaml"));
            }
            _ => panic!("Expected ConfigParseError error"),
        }
    }

    #[test]
    fn test_load_invalid_employee_settings_returns_error() {
        match ConfigLoader::load("./tests/fixtures/negative_rate") {
            Err(EngineError::InvalidSettings { field, .. }) => {
                assert_eq!(field, "base_hourly_rate");
            }
            _ => panic!("Expected InvalidSettings error"),
        }
    }
}
