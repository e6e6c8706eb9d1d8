//! Calendar-month reporting over an employee's weeks.
//!
//! A week belongs to the month its start date falls in, even when it ends in
//! the next one.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{AvailableMonth, MonthlyStats, Week};

use super::rounding::round2;

/// Totals for the weeks starting in `year`/`month` (month 1 through 12).
///
/// Returns `None` when no week starts in that month.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_monthly_stats;
/// use payroll_engine::models::Week;
/// use chrono::NaiveDate;
///
/// let weeks = vec![
///     Week::new(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()),
///     Week::new(NaiveDate::from_ymd_opt(2025, 1, 27).unwrap()),
///     Week::new(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()),
/// ];
///
/// let january = calculate_monthly_stats(&weeks, 2025, 1).unwrap();
/// assert_eq!(january.week_count, 2);
/// assert!(calculate_monthly_stats(&weeks, 2025, 3).is_none());
/// ```
pub fn calculate_monthly_stats(weeks: &[Week], year: i32, month: u32) -> Option<MonthlyStats> {
    let in_month: Vec<&Week> = weeks
        .iter()
        .filter(|week| week.start_date().year() == year && week.start_date().month() == month)
        .collect();

    if in_month.is_empty() {
        return None;
    }

    let mut stats = MonthlyStats {
        year,
        month,
        week_count: in_month.len() as u32,
        week_ids: in_month.iter().map(|week| week.id().to_string()).collect(),
        total_hours: Decimal::ZERO,
        regular_hours: Decimal::ZERO,
        overtime_hours: Decimal::ZERO,
        extra_hours: Decimal::ZERO,
        total_tips: Decimal::ZERO,
        total_base_pay: Decimal::ZERO,
        total_pay: Decimal::ZERO,
        avg_hours_per_week: Decimal::ZERO,
        avg_pay_per_week: Decimal::ZERO,
    };

    for week in &in_month {
        let aggregates = week.aggregates();
        stats.total_hours += aggregates.total_hours;
        stats.regular_hours += aggregates.total_regular_hours;
        stats.overtime_hours += aggregates.total_overtime_hours;
        stats.extra_hours += aggregates.total_extra_hours;
        stats.total_tips = stats.total_tips.saturating_add(week.weekly_tips());
        stats.total_base_pay = stats.total_base_pay.saturating_add(aggregates.total_base_pay);
        stats.total_pay = stats.total_pay.saturating_add(aggregates.total_pay);
    }

    let count = Decimal::from(stats.week_count);
    stats.avg_hours_per_week = round2(stats.total_hours / count);
    stats.avg_pay_per_week = round2(stats.total_pay / count);

    Some(stats)
}

/// Lists the distinct months with at least one week, most recent first.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::find_available_months;
/// use payroll_engine::models::Week;
/// use chrono::NaiveDate;
///
/// let weeks = vec![
///     Week::new(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()),
///     Week::new(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()),
/// ];
///
/// let months = find_available_months(&weeks);
/// assert_eq!(months[0].label, "January 2025");
/// assert_eq!(months[1].label, "December 2024");
/// ```
pub fn find_available_months(weeks: &[Week]) -> Vec<AvailableMonth> {
    let months: BTreeSet<(i32, u32)> = weeks
        .iter()
        .map(|week| (week.start_date().year(), week.start_date().month()))
        .collect();

    months
        .into_iter()
        .rev()
        .filter_map(|(year, month)| {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            Some(AvailableMonth {
                year,
                month,
                label: first.format("%B %Y").to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayInput, EmployeeSettings};
    use chrono::Weekday;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn settings() -> EmployeeSettings {
        EmployeeSettings {
            base_hourly_rate: dec("450"),
            ..EmployeeSettings::default()
        }
    }

    fn week(y: i32, m: u32, d: u32) -> Week {
        Week::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    // ==========================================================================
    // calculate_monthly_stats
    // ==========================================================================

    #[test]
    fn test_empty_month_is_none() {
        assert!(calculate_monthly_stats(&[], 2025, 1).is_none());
        assert!(calculate_monthly_stats(&[week(2025, 2, 3)], 2025, 1).is_none());
    }

    #[test]
    fn test_same_month_other_year_is_excluded() {
        assert!(calculate_monthly_stats(&[week(2024, 1, 8)], 2025, 1).is_none());
    }

    #[test]
    fn test_week_belongs_to_start_month() {
        // Runs 27 January to 2 February
        let weeks = [week(2025, 1, 27)];
        assert_eq!(calculate_monthly_stats(&weeks, 2025, 1).unwrap().week_count, 1);
        assert!(calculate_monthly_stats(&weeks, 2025, 2).is_none());
    }

    #[test]
    fn test_monthly_totals() {
        let mut first = week(2025, 3, 3);
        first.update_day(Weekday::Mon, DayInput::working(9, 0, 20, 0), &settings());
        first.set_weekly_tips(dec("50"));

        let mut second = week(2025, 3, 10);
        second.update_day(Weekday::Tue, DayInput::working(9, 0, 22, 0), &settings());
        second.set_weekly_tips(dec("25.25"));

        let other_month = week(2025, 4, 7);

        let stats = calculate_monthly_stats(&[first, second, other_month], 2025, 3).unwrap();

        assert_eq!(stats.year, 2025);
        assert_eq!(stats.month, 3);
        assert_eq!(stats.week_count, 2);
        assert_eq!(stats.week_ids, vec!["2025-W10", "2025-W11"]);
        assert_eq!(stats.total_hours, dec("22"));
        assert_eq!(stats.regular_hours, dec("16"));
        assert_eq!(stats.overtime_hours, dec("4"));
        assert_eq!(stats.extra_hours, dec("2"));
        assert_eq!(stats.total_tips, dec("75.25"));
        assert_eq!(stats.total_base_pay, dec("11700"));
        assert_eq!(stats.total_pay, dec("11775.25"));
        assert_eq!(stats.avg_hours_per_week, dec("11"));
        // 11775.25 / 2 = 5887.625
        assert_eq!(stats.avg_pay_per_week, dec("5887.63"));
    }

    // ==========================================================================
    // find_available_months
    // ==========================================================================

    #[test]
    fn test_no_weeks_no_months() {
        assert!(find_available_months(&[]).is_empty());
    }

    #[test]
    fn test_months_are_deduplicated_and_most_recent_first() {
        let weeks = [
            week(2024, 11, 4),
            week(2025, 2, 3),
            week(2024, 11, 11),
            week(2025, 1, 6),
            week(2025, 2, 10),
        ];

        let months = find_available_months(&weeks);
        let keys: Vec<(i32, u32)> = months.iter().map(|m| (m.year, m.month)).collect();

        assert_eq!(keys, vec![(2025, 2), (2025, 1), (2024, 11)]);
        assert_eq!(months[0].label, "February 2025");
        assert_eq!(months[2].label, "November 2024");
    }
}
