//! Configuration types for payroll setup.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{EmployeeSettings, SettingsRecord};

/// One employee entry in `employees.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeProfile {
    /// Display name.
    pub name: String,
    /// Settings overriding the configured defaults.
    #[serde(default)]
    pub settings: SettingsRecord,
}

/// Employees configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// Map of employee id to profile.
    #[serde(default)]
    pub employees: HashMap<String, EmployeeProfile>,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Built-in defaults with `defaults.yaml` merged over them.
    defaults: EmployeeSettings,
    /// Employee profiles by id.
    employees: HashMap<String, EmployeeProfile>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(defaults: EmployeeSettings, employees: HashMap<String, EmployeeProfile>) -> Self {
        Self {
            defaults,
            employees,
        }
    }

    /// Returns the default settings.
    pub fn defaults(&self) -> &EmployeeSettings {
        &self.defaults
    }

    /// Returns all employee profiles.
    pub fn employees(&self) -> &HashMap<String, EmployeeProfile> {
        &self.employees
    }
}
