//! Per-day calculation pipeline.
//!
//! Runs a [`DayInput`] through shift measurement, break deduction, the
//! regular/overtime split and pricing, collecting one audit step per stage.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{AuditStep, DayCalculation, DayInput, DayResult, EmployeeSettings};

use super::daily_pay::calculate_daily_pay;
use super::overtime_split::split_worked_hours;
use super::rounding::{minutes_to_hours, round2};
use super::shift_duration::{deduct_break, measure_shift};

fn not_worked(reasoning: &str, mut audit_steps: Vec<AuditStep>) -> DayCalculation {
    let step_number = audit_steps.len() as u32 + 1;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "non_working_day".to_string(),
        rule_name: "Non-Working Day".to_string(),
        input: serde_json::json!({}),
        output: serde_json::json!({
            "hours_worked": "0",
            "daily_pay": "0"
        }),
        reasoning: reasoning.to_string(),
    });

    DayCalculation {
        result: DayResult::default(),
        audit_steps,
    }
}

/// Calculates worked hours, the overtime split and pay for one day.
///
/// # Arguments
///
/// * `input` - The raw clock inputs for the day
/// * `settings` - The employee's pay settings
/// * `shift_rate` - A flat per-shift pay; when positive it replaces hourly pay
///
/// # Returns
///
/// A [`DayCalculation`] with the [`DayResult`] and its audit steps. The
/// result is all zeros when the day is not worked, when a clock component is
/// out of range, when the break leaves no worked time, or when pricing the
/// hours overflows.
///
/// This function never fails; calling it twice with the same arguments
/// returns identical values.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_day;
/// use payroll_engine::models::{DayInput, EmployeeSettings};
/// use rust_decimal::Decimal;
///
/// let settings = EmployeeSettings {
///     base_hourly_rate: Decimal::new(450, 0),
///     ..EmployeeSettings::default()
/// };
///
/// // 09:00 to 22:00 with a one hour break
/// let day = calculate_day(&DayInput::working(9, 0, 22, 0), &settings, None);
/// assert_eq!(day.result.hours_worked, Decimal::new(12, 0));
/// assert_eq!(day.result.regular_hours, Decimal::new(8, 0));
/// assert_eq!(day.result.overtime_hours, Decimal::new(2, 0));
/// assert_eq!(day.result.extra_hours, Decimal::new(2, 0));
/// assert_eq!(day.result.daily_pay, Decimal::new(6750, 0));
/// assert_eq!(day.audit_steps.len(), 4);
/// ```
pub fn calculate_day(
    input: &DayInput,
    settings: &EmployeeSettings,
    shift_rate: Option<Decimal>,
) -> DayCalculation {
    if !input.is_working {
        return not_worked("Day is not marked as worked", Vec::new());
    }

    let Some(span) = measure_shift(input, 1) else {
        return not_worked("Clock components out of range", Vec::new());
    };

    let deduction = deduct_break(span.raw_minutes, input.break_hours, settings, 2);
    let mut audit_steps = vec![span.audit_step, deduction.audit_step];

    if deduction.worked_minutes <= Decimal::ZERO {
        return not_worked("Break leaves no worked time", audit_steps);
    }

    let hours_worked = round2(minutes_to_hours(deduction.worked_minutes));
    let split = split_worked_hours(hours_worked, input.force_overtime, settings, 3);
    audit_steps.push(split.audit_step.clone());

    let Some(pay) = calculate_daily_pay(&split, settings, shift_rate, 4) else {
        warn!(
            hours_worked = %hours_worked,
            base_hourly_rate = %settings.base_hourly_rate,
            "Daily pay overflowed, day recorded as not worked"
        );
        return not_worked("Pay calculation overflowed", audit_steps);
    };

    let result = DayResult {
        hours_worked,
        regular_hours: split.regular_hours,
        overtime_hours: split.tier1_hours(),
        extra_hours: split.beyond_tier1_hours(),
        daily_pay: pay.amount,
    };

    audit_steps.push(pay.audit_step);

    DayCalculation {
        result,
        audit_steps,
    }
}
