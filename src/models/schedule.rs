//! Day schedule models.
//!
//! This module defines the raw clock inputs for a day ([`DayInput`]), the
//! partial form used to edit them ([`DayUpdate`]), and the stored pairing of
//! raw input with its computed result ([`DaySchedule`]).

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::DayResult;

/// Minutes in one day, used to wrap overnight shifts.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Raw clock inputs for one day, as supplied by the validation layer.
///
/// Hours are 24-hour clock components (0-23) and minutes 0-59.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DayInput;
///
/// let day = DayInput::working(22, 0, 6, 0);
/// assert_eq!(day.entry_minutes(), 1320);
/// assert_eq!(day.exit_minutes(), 360);
/// assert!(day.is_working);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInput {
    /// Clock-in hour.
    pub entry_hour: u8,
    /// Clock-in minute.
    pub entry_minute: u8,
    /// Clock-out hour.
    pub exit_hour: u8,
    /// Clock-out minute.
    pub exit_minute: u8,
    /// Whether the employee worked this day at all.
    pub is_working: bool,
    /// Marks a shift continuing past midnight from the previous day.
    #[serde(default)]
    pub force_overtime: bool,
    /// Break length for this day only, replacing the employee default.
    #[serde(default)]
    pub break_hours: Option<Decimal>,
}

impl DayInput {
    /// Creates a working day with the given clock-in and clock-out times.
    pub fn working(entry_hour: u8, entry_minute: u8, exit_hour: u8, exit_minute: u8) -> Self {
        Self {
            entry_hour,
            entry_minute,
            exit_hour,
            exit_minute,
            is_working: true,
            force_overtime: false,
            break_hours: None,
        }
    }

    /// Sets the force-overtime flag.
    pub fn with_force_overtime(mut self, force_overtime: bool) -> Self {
        self.force_overtime = force_overtime;
        self
    }

    /// Sets the per-day break override.
    pub fn with_break_hours(mut self, break_hours: Option<Decimal>) -> Self {
        self.break_hours = break_hours;
        self
    }

    /// Minutes since midnight of the clock-in time.
    pub fn entry_minutes(&self) -> u32 {
        u32::from(self.entry_hour) * 60 + u32::from(self.entry_minute)
    }

    /// Minutes since midnight of the clock-out time, before any overnight wrap.
    pub fn exit_minutes(&self) -> u32 {
        u32::from(self.exit_hour) * 60 + u32::from(self.exit_minute)
    }

    /// Returns true when every clock component is within range.
    pub fn has_valid_clock(&self) -> bool {
        self.entry_hour < 24 && self.exit_hour < 24 && self.entry_minute < 60 && self.exit_minute < 60
    }

    /// Returns the input with every field present in `update` applied.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{DayInput, DayUpdate};
    ///
    /// let stored = DayInput::working(9, 0, 18, 0);
    /// let update = DayUpdate {
    ///     exit_hour: Some(20),
    ///     ..DayUpdate::default()
    /// };
    /// let merged = stored.apply(&update);
    /// assert_eq!(merged.entry_hour, 9);
    /// assert_eq!(merged.exit_hour, 20);
    /// ```
    pub fn apply(&self, update: &DayUpdate) -> DayInput {
        DayInput {
            entry_hour: update.entry_hour.unwrap_or(self.entry_hour),
            entry_minute: update.entry_minute.unwrap_or(self.entry_minute),
            exit_hour: update.exit_hour.unwrap_or(self.exit_hour),
            exit_minute: update.exit_minute.unwrap_or(self.exit_minute),
            is_working: update.is_working.unwrap_or(self.is_working),
            force_overtime: update.force_overtime.unwrap_or(self.force_overtime),
            break_hours: update.break_hours.unwrap_or(self.break_hours),
        }
    }
}

/// A partial edit of a [`DayInput`]; absent fields keep their stored value.
///
/// `break_hours` is doubly optional: `None` keeps the stored override,
/// `Some(None)` clears it and `Some(Some(h))` replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DayUpdate {
    /// New clock-in hour.
    pub entry_hour: Option<u8>,
    /// New clock-in minute.
    pub entry_minute: Option<u8>,
    /// New clock-out hour.
    pub exit_hour: Option<u8>,
    /// New clock-out minute.
    pub exit_minute: Option<u8>,
    /// New working flag.
    pub is_working: Option<bool>,
    /// New force-overtime flag.
    pub force_overtime: Option<bool>,
    /// New per-day break override.
    #[serde(deserialize_with = "present_field")]
    pub break_hours: Option<Option<Decimal>>,
}

/// Maps a present field (even `null`) to `Some`, so it can be told apart
/// from an absent one.
fn present_field<'de, D>(deserializer: D) -> Result<Option<Option<Decimal>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer).map(Some)
}

/// One weekday of a week: the raw input and the result derived from it.
///
/// Only the owning [`Week`](super::Week) writes a schedule, always by
/// recomputing the result from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    weekday: Weekday,
    input: DayInput,
    result: DayResult,
}

impl DaySchedule {
    pub(crate) fn new(weekday: Weekday, input: DayInput, result: DayResult) -> Self {
        Self {
            weekday,
            input,
            result,
        }
    }

    /// The weekday this schedule belongs to.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The raw clock inputs.
    pub fn input(&self) -> &DayInput {
        &self.input
    }

    /// The computed breakdown.
    pub fn result(&self) -> &DayResult {
        &self.result
    }
}
