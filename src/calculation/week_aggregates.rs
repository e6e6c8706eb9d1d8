//! Week-level aggregation of day results.

use rust_decimal::Decimal;

use crate::models::{DayResult, WeekAggregates};

use super::rounding::round2;

/// Hours a day must reach to count as a full shift.
///
/// Fixed, independent of each employee's `hours_per_shift`.
pub const SHIFT_COUNT_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Sums a week's day results and adds the weekly tips.
///
/// Hour and pay totals are rounded to two decimals after summing. Pay
/// saturates at [`Decimal::MAX`].
/// `total_shifts` counts days reaching [`SHIFT_COUNT_THRESHOLD_HOURS`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_week_aggregates;
/// use payroll_engine::models::DayResult;
/// use rust_decimal::Decimal;
///
/// let day = DayResult {
///     hours_worked: Decimal::new(8, 0),
///     regular_hours: Decimal::new(8, 0),
///     daily_pay: Decimal::new(3600, 0),
///     ..DayResult::default()
/// };
/// let week = calculate_week_aggregates(&[day, day], Decimal::new(250, 0));
/// assert_eq!(week.total_base_pay, Decimal::new(7200, 0));
/// assert_eq!(week.total_pay, Decimal::new(7450, 0));
/// assert_eq!(week.total_shifts, 2);
/// ```
pub fn calculate_week_aggregates(days: &[DayResult], weekly_tips: Decimal) -> WeekAggregates {
    let mut totals = WeekAggregates::default();

    for day in days {
        totals.total_hours += day.hours_worked;
        totals.total_regular_hours += day.regular_hours;
        totals.total_overtime_hours += day.overtime_hours;
        totals.total_extra_hours += day.extra_hours;
        totals.total_base_pay = totals.total_base_pay.saturating_add(day.daily_pay);
        if day.hours_worked >= SHIFT_COUNT_THRESHOLD_HOURS {
            totals.total_shifts += 1;
        }
    }

    let total_base_pay = round2(totals.total_base_pay);

    WeekAggregates {
        total_hours: round2(totals.total_hours),
        total_regular_hours: round2(totals.total_regular_hours),
        total_overtime_hours: round2(totals.total_overtime_hours),
        total_extra_hours: round2(totals.total_extra_hours),
        total_base_pay,
        total_pay: round2(total_base_pay.saturating_add(weekly_tips)),
        total_shifts: totals.total_shifts,
    }
}
