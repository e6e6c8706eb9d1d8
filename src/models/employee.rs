//! Employee model.
//!
//! An [`Employee`] owns its pay settings and its recorded weeks. Every
//! mutation goes through the employee so that day results and week
//! aggregates are always recalculated with the current settings.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{calculate_employee_stats, calculate_monthly_stats, find_available_months};
use crate::error::{EngineError, EngineResult};

use super::{
    AvailableMonth, DayInput, DayUpdate, EmployeeSettings, EmployeeStats, MonthlyStats,
    SettingsRecord, Week, week_id,
};

/// An employee with pay settings and recorded weeks, ordered by start date.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{DayInput, Employee, EmployeeSettings};
/// use chrono::{NaiveDate, Weekday};
/// use rust_decimal::Decimal;
///
/// let settings = EmployeeSettings {
///     base_hourly_rate: Decimal::new(450, 0),
///     ..EmployeeSettings::default()
/// };
/// let mut employee = Employee::new("emp_001", "Ana", settings)?;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let week_id = employee.add_week(start)?.id().to_string();
/// employee.update_day(&week_id, Weekday::Mon, DayInput::working(9, 0, 18, 0))?;
///
/// assert_eq!(employee.stats().total_hours, Decimal::new(8, 0));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
///
/// Deserializing validates the settings, rejects duplicate week ids and
/// recalculates every week with the loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EmployeeRecord")]
pub struct Employee {
    id: String,
    name: String,
    settings: EmployeeSettings,
    weeks: Vec<Week>,
}

#[derive(Deserialize)]
struct EmployeeRecord {
    id: String,
    name: String,
    settings: EmployeeSettings,
    #[serde(default)]
    weeks: Vec<Week>,
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = EngineError;

    fn try_from(record: EmployeeRecord) -> EngineResult<Self> {
        let mut employee = Employee::new(record.id, record.name, record.settings)?;

        for mut week in record.weeks {
            if employee.weeks.iter().any(|stored| stored.id() == week.id()) {
                return Err(EngineError::DuplicateWeek {
                    week_id: week.id().to_string(),
                });
            }
            week.recalculate(&employee.settings);
            let position = employee
                .weeks
                .partition_point(|stored| stored.start_date() <= week.start_date());
            employee.weeks.insert(position, week);
        }

        Ok(employee)
    }
}

impl Employee {
    /// Creates an employee with no weeks.
    ///
    /// Returns `InvalidSettings` if the settings fail validation.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        settings: EmployeeSettings,
    ) -> EngineResult<Self> {
        settings.validate()?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            settings,
            weeks: Vec::new(),
        })
    }

    /// Unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current pay settings.
    pub fn settings(&self) -> &EmployeeSettings {
        &self.settings
    }

    /// Recorded weeks, oldest first.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Looks up a week by id.
    pub fn week(&self, week_id: &str) -> EngineResult<&Week> {
        self.weeks
            .iter()
            .find(|week| week.id() == week_id)
            .ok_or_else(|| EngineError::WeekNotFound {
                week_id: week_id.to_string(),
            })
    }

    fn week_mut(&mut self, week_id: &str) -> EngineResult<&mut Week> {
        self.weeks
            .iter_mut()
            .find(|week| week.id() == week_id)
            .ok_or_else(|| EngineError::WeekNotFound {
                week_id: week_id.to_string(),
            })
    }

    /// Records a new empty week starting on `start_date`.
    ///
    /// Returns `DuplicateWeek` if a week with the same id already exists.
    pub fn add_week(&mut self, start_date: NaiveDate) -> EngineResult<&Week> {
        let id = week_id(start_date);
        if self.weeks.iter().any(|week| week.id() == id) {
            return Err(EngineError::DuplicateWeek { week_id: id });
        }

        let position = self
            .weeks
            .partition_point(|week| week.start_date() <= start_date);
        self.weeks.insert(position, Week::new(start_date));
        debug!(employee_id = %self.id, week_id = %id, "Week added");

        Ok(&self.weeks[position])
    }

    /// Deletes a week and returns it.
    pub fn remove_week(&mut self, week_id: &str) -> EngineResult<Week> {
        let position = self
            .weeks
            .iter()
            .position(|week| week.id() == week_id)
            .ok_or_else(|| EngineError::WeekNotFound {
                week_id: week_id.to_string(),
            })?;

        debug!(employee_id = %self.id, week_id, "Week removed");
        Ok(self.weeks.remove(position))
    }

    /// Replaces one day's input in a week.
    pub fn update_day(
        &mut self,
        week_id: &str,
        weekday: Weekday,
        input: DayInput,
    ) -> EngineResult<&Week> {
        let settings = self.settings.clone();
        let week = self.week_mut(week_id)?;
        week.update_day(weekday, input, &settings);
        Ok(week)
    }

    /// Merges partial day updates into a week.
    pub fn update_schedule(
        &mut self,
        week_id: &str,
        updates: &[(Weekday, DayUpdate)],
    ) -> EngineResult<&Week> {
        let settings = self.settings.clone();
        let week = self.week_mut(week_id)?;
        week.update_schedule(updates, &settings);
        Ok(week)
    }

    /// Sets or clears a week's flat shift rate.
    pub fn set_shift_rate(
        &mut self,
        week_id: &str,
        shift_rate: Option<Decimal>,
    ) -> EngineResult<&Week> {
        let settings = self.settings.clone();
        let week = self.week_mut(week_id)?;
        week.set_shift_rate(shift_rate, &settings);
        Ok(week)
    }

    /// Sets a week's tips.
    pub fn set_weekly_tips(&mut self, week_id: &str, weekly_tips: Decimal) -> EngineResult<&Week> {
        let week = self.week_mut(week_id)?;
        week.set_weekly_tips(weekly_tips);
        Ok(week)
    }

    /// Merges `record` over the current settings and recalculates every week.
    ///
    /// The settings are left untouched if the merged result is invalid.
    pub fn update_settings(&mut self, record: &SettingsRecord) -> EngineResult<()> {
        let merged = self.settings.merged(record);
        merged.validate()?;

        self.settings = merged;
        for week in &mut self.weeks {
            week.recalculate(&self.settings);
        }
        debug!(employee_id = %self.id, weeks = self.weeks.len(), "Settings updated");

        Ok(())
    }

    /// Lifetime statistics.
    pub fn stats(&self) -> EmployeeStats {
        calculate_employee_stats(&self.weeks)
    }

    /// Statistics for the weeks starting in `year`/`month` (1 through 12).
    pub fn monthly_stats(&self, year: i32, month: u32) -> Option<MonthlyStats> {
        calculate_monthly_stats(&self.weeks, year, month)
    }

    /// Months with recorded weeks, most recent first.
    pub fn available_months(&self) -> Vec<AvailableMonth> {
        find_available_months(&self.weeks)
    }
}
