//! Week model.
//!
//! A [`Week`] owns seven [`DaySchedule`]s, Monday first, together with the
//! weekly tips, an optional flat shift rate and the aggregates derived from
//! them. Every mutator re-derives the computed values it affects, so they
//! can never drift from the raw inputs.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{calculate_day, calculate_week_aggregates, round2};

use super::{DayInput, DayResult, DaySchedule, DayUpdate, EmployeeSettings, WeekAggregates};

/// The weekdays in storage order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Builds the `YYYY-Wnn` identifier of the week starting on `date`.
///
/// The week number counts calendar rows of the year with Sunday as the first
/// column: `ceil((day_of_year + weekday_of_jan1) / 7)`, where the weekday of
/// 1 January counts from Sunday = 0.
///
/// # Example
///
/// ```
/// use payroll_engine::models::week_id;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// assert_eq!(week_id(date), "2025-W02");
/// ```
pub fn week_id(date: NaiveDate) -> String {
    let day_of_year = date.ordinal();
    let offset_from_jan1 = (day_of_year - 1) % 7;
    let jan1_from_sunday = (date.weekday().num_days_from_sunday() + 7 - offset_from_jan1) % 7;
    let week_number = (day_of_year + jan1_from_sunday).div_ceil(7);

    format!("{}-W{:02}", date.year(), week_number)
}

/// One recorded week of an employee's schedule.
///
/// Deserializing keeps the stored inputs and day results but re-derives the
/// id, end date and aggregates. Day results are recalculated when the week is
/// loaded as part of an [`Employee`](super::Employee).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WeekRecord")]
pub struct Week {
    id: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    weekly_tips: Decimal,
    shift_rate: Option<Decimal>,
    days: [DaySchedule; 7],
    aggregates: WeekAggregates,
}

/// Stored form of a [`Week`]; computed fields are ignored.
#[derive(Deserialize)]
struct WeekRecord {
    start_date: NaiveDate,
    #[serde(default)]
    weekly_tips: Decimal,
    #[serde(default)]
    shift_rate: Option<Decimal>,
    days: [DaySchedule; 7],
}

impl From<WeekRecord> for Week {
    fn from(record: WeekRecord) -> Self {
        let mut week = Week::new(record.start_date);
        week.weekly_tips = round2(record.weekly_tips);
        week.shift_rate = record.shift_rate.filter(|rate| *rate > Decimal::ZERO);
        for (slot, (weekday, stored)) in week.days.iter_mut().zip(WEEKDAYS.iter().zip(record.days)) {
            *slot = DaySchedule::new(*weekday, *stored.input(), *stored.result());
        }
        week.reaggregate();
        week
    }
}

impl Week {
    /// Creates an empty week: seven non-working days, no tips, no shift rate.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::Week;
    /// use chrono::NaiveDate;
    ///
    /// let week = Week::new(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
    /// assert_eq!(week.id(), "2025-W02");
    /// assert_eq!(week.end_date(), NaiveDate::from_ymd_opt(2025, 1, 12).unwrap());
    /// assert_eq!(week.aggregates().total_shifts, 0);
    /// ```
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            id: week_id(start_date),
            start_date,
            end_date: start_date + Duration::days(6),
            weekly_tips: Decimal::ZERO,
            shift_rate: None,
            days: WEEKDAYS
                .map(|weekday| DaySchedule::new(weekday, DayInput::default(), DayResult::default())),
            aggregates: WeekAggregates::default(),
        }
    }

    /// The `YYYY-Wnn` identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// First day of the week.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the week, six days after the start.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Calendar date of a weekday slot, counting Monday as the start date.
    pub fn date_of(&self, weekday: Weekday) -> NaiveDate {
        self.start_date + Duration::days(i64::from(weekday.num_days_from_monday()))
    }

    /// Tips received over the week.
    pub fn weekly_tips(&self) -> Decimal {
        self.weekly_tips
    }

    /// The flat per-shift pay, if one is set.
    pub fn shift_rate(&self) -> Option<Decimal> {
        self.shift_rate
    }

    /// The schedule for one weekday.
    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    /// All seven schedules, Monday first.
    pub fn days(&self) -> &[DaySchedule; 7] {
        &self.days
    }

    /// Totals derived from the days and tips.
    pub fn aggregates(&self) -> &WeekAggregates {
        &self.aggregates
    }

    /// Replaces one day's input and recalculates it.
    pub fn update_day(&mut self, weekday: Weekday, input: DayInput, settings: &EmployeeSettings) {
        self.set_day(weekday, input, settings);
        self.reaggregate();
        debug!(week_id = %self.id, ?weekday, "Day updated");
    }

    /// Applies partial updates to several days, then recalculates them.
    ///
    /// Each [`DayUpdate`] is merged over the stored input of its weekday;
    /// days without an update are untouched.
    pub fn update_schedule(&mut self, updates: &[(Weekday, DayUpdate)], settings: &EmployeeSettings) {
        for (weekday, update) in updates {
            let merged = self.day(*weekday).input().apply(update);
            self.set_day(*weekday, merged, settings);
        }
        self.reaggregate();
        debug!(week_id = %self.id, days = updates.len(), "Schedule updated");
    }

    /// Sets or clears the flat shift rate and recalculates every day.
    ///
    /// A rate of zero or below is stored as no rate.
    pub fn set_shift_rate(&mut self, shift_rate: Option<Decimal>, settings: &EmployeeSettings) {
        self.shift_rate = shift_rate.filter(|rate| *rate > Decimal::ZERO);
        self.recalculate(settings);
    }

    /// Sets the weekly tips, rounded to two decimals. Only the aggregates
    /// change.
    pub fn set_weekly_tips(&mut self, weekly_tips: Decimal) {
        self.weekly_tips = round2(weekly_tips);
        self.reaggregate();
        debug!(week_id = %self.id, tips = %self.weekly_tips, "Weekly tips updated");
    }

    /// Recalculates every day from its stored input, then the aggregates.
    pub fn recalculate(&mut self, settings: &EmployeeSettings) {
        for weekday in WEEKDAYS {
            let input = *self.day(weekday).input();
            self.set_day(weekday, input, settings);
        }
        self.reaggregate();
        debug!(week_id = %self.id, "Week recalculated");
    }

    fn set_day(&mut self, weekday: Weekday, input: DayInput, settings: &EmployeeSettings) {
        let result = calculate_day(&input, settings, self.shift_rate).result;
        self.days[weekday.num_days_from_monday() as usize] = DaySchedule::new(weekday, input, result);
    }

    fn reaggregate(&mut self) {
        let results: Vec<DayResult> = self.days.iter().map(|day| *day.result()).collect();
        self.aggregates = calculate_week_aggregates(&results, self.weekly_tips);
    }
}
