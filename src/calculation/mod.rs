//! Calculation logic for the payroll engine.
//!
//! This module contains the pure functions that turn raw clock inputs and
//! employee settings into pay: shift measurement, break deduction, the
//! regular/overtime split, daily pay, and the week, employee and monthly
//! aggregations built on top of them.

mod daily_pay;
mod day;
mod employee_stats;
mod monthly_stats;
mod overtime_split;
mod rounding;
mod shift_duration;
mod week_aggregates;

pub use daily_pay::{DailyPay, calculate_daily_pay};
pub use day::calculate_day;
pub use employee_stats::calculate_employee_stats;
pub use monthly_stats::{calculate_monthly_stats, find_available_months};
pub use overtime_split::{
    FORCED_REGULAR_ALLOWANCE_HOURS, HoursSplit, OVERTIME_TOLERANCE_MINUTES, TierAllocation,
    split_overtime, split_worked_hours,
};
pub use rounding::{STORED_DECIMAL_PLACES, round2};
pub use shift_duration::{
    BreakDeduction, MAX_BREAK_HOURS, ShiftSpan, deduct_break, measure_shift,
};
pub use week_aggregates::{SHIFT_COUNT_THRESHOLD_HOURS, calculate_week_aggregates};
