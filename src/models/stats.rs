//! Reporting models built on top of week aggregates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifetime statistics for one employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeeStats;
///
/// let stats = EmployeeStats::default();
/// assert_eq!(stats.total_weeks, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStats {
    /// Number of recorded weeks.
    pub total_weeks: u32,
    /// Full shifts across all weeks.
    pub total_shifts: u32,
    /// Hours worked across all weeks.
    pub total_hours: Decimal,
    /// Pay including tips across all weeks.
    pub total_pay: Decimal,
    /// `total_hours / total_weeks`, zero without weeks.
    pub avg_hours_per_week: Decimal,
    /// `total_hours / total_shifts`, zero without shifts.
    pub avg_hours_per_shift: Decimal,
}

/// Totals for the weeks that start in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
    /// Number of weeks starting in the month.
    pub week_count: u32,
    /// Ids of those weeks, in start-date order.
    pub week_ids: Vec<String>,
    /// Hours worked.
    pub total_hours: Decimal,
    /// Regular hours.
    pub regular_hours: Decimal,
    /// Tier-1 overtime hours.
    pub overtime_hours: Decimal,
    /// Tier-2 overtime hours.
    pub extra_hours: Decimal,
    /// Tips.
    pub total_tips: Decimal,
    /// Pay before tips.
    pub total_base_pay: Decimal,
    /// Pay including tips.
    pub total_pay: Decimal,
    /// Hours per week.
    pub avg_hours_per_week: Decimal,
    /// Pay per week.
    pub avg_pay_per_week: Decimal,
}

/// A calendar month that has at least one recorded week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableMonth {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
    /// Display label, e.g. "January 2025".
    pub label: String,
}
