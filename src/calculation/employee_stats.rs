//! Lifetime statistics across an employee's weeks.

use rust_decimal::Decimal;

use crate::models::{EmployeeStats, Week};

use super::rounding::round2;

/// Totals and averages over every recorded week.
///
/// Totals are taken from each week's aggregates; pay saturates at
/// [`Decimal::MAX`]. Averages are rounded to two decimals and are zero when
/// there is nothing to divide by.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_employee_stats;
/// use rust_decimal::Decimal;
///
/// let stats = calculate_employee_stats(&[]);
/// assert_eq!(stats.total_weeks, 0);
/// assert_eq!(stats.avg_hours_per_week, Decimal::ZERO);
/// ```
pub fn calculate_employee_stats(weeks: &[Week]) -> EmployeeStats {
    let total_weeks = weeks.len() as u32;
    let mut total_shifts = 0u32;
    let mut total_hours = Decimal::ZERO;
    let mut total_pay = Decimal::ZERO;

    for week in weeks {
        let aggregates = week.aggregates();
        total_shifts += aggregates.total_shifts;
        total_hours += aggregates.total_hours;
        total_pay = total_pay.saturating_add(aggregates.total_pay);
    }

    let average = |count: u32| {
        if count == 0 {
            Decimal::ZERO
        } else {
            round2(total_hours / Decimal::from(count))
        }
    };

    EmployeeStats {
        total_weeks,
        total_shifts,
        total_hours,
        total_pay,
        avg_hours_per_week: average(total_weeks),
        avg_hours_per_shift: average(total_shifts),
    }
}
