//! Error types for the payroll engine.
//!
//! The calculation core never fails; these errors come from the edges of the
//! crate: configuration loading, settings validation and employee/week
//! bookkeeping.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/defaults.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/defaults.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee with the given id exists.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// No week with the given id exists for the employee.
    #[error("Week not found: {week_id}")]
    WeekNotFound {
        /// The week id that was not found.
        week_id: String,
    },

    /// A week with the same id is already recorded for the employee.
    #[error("Week {week_id} already exists for this employee")]
    DuplicateWeek {
        /// The conflicting week id.
        week_id: String,
    },

    /// A settings field holds a value the engine cannot work with.
    #[error("Invalid settings field '{field}': {message}")]
    InvalidSettings {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/defaults.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/defaults.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            id: "emp_404".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: emp_404");
    }

    #[test]
    fn test_week_errors_display_week_id() {
        let missing = EngineError::WeekNotFound {
            week_id: "2025-W03".to_string(),
        };
        assert_eq!(missing.to_string(), "Week not found: 2025-W03");

        let duplicate = EngineError::DuplicateWeek {
            week_id: "2025-W03".to_string(),
        };
        assert_eq!(
            duplicate.to_string(),
            "Week 2025-W03 already exists for this employee"
        );
    }

    #[test]
    fn test_invalid_settings_displays_field_and_message() {
        let error = EngineError::InvalidSettings {
            field: "hours_per_shift".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid settings field 'hours_per_shift': must be greater than zero"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_week_not_found() -> EngineResult<()> {
            Err(EngineError::WeekNotFound {
                week_id: "2025-W01".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_week_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
