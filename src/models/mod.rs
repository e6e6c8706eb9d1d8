//! Core data models for the payroll engine.
//!
//! This module contains the domain models used throughout the engine:
//! settings, day inputs and results, weeks, employees and report types.

mod calculation_result;
mod employee;
mod schedule;
mod settings;
mod stats;
mod week;

pub use calculation_result::{AuditStep, DayCalculation, DayResult, WeekAggregates};
pub use employee::Employee;
pub use schedule::{DayInput, DaySchedule, DayUpdate, MINUTES_PER_DAY};
pub use settings::{
    DEFAULT_BREAK_HOURS, DEFAULT_HOURS_PER_SHIFT, DEFAULT_MIN_HOURS_FOR_BREAK,
    DEFAULT_OVERTIME_TIER1_HOURS, DEFAULT_OVERTIME_TIER1_RATE, DEFAULT_OVERTIME_TIER2_RATE,
    Currency, EmployeeSettings, OvertimeTier, SettingsRecord,
};
pub use stats::{AvailableMonth, EmployeeStats, MonthlyStats};
pub use week::{WEEKDAYS, Week, week_id};
