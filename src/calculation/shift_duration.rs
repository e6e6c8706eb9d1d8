//! Shift duration and break deduction.
//!
//! Turns a day's clock-in and clock-out components into worked minutes:
//! overnight shifts wrap past midnight, and the unpaid break is subtracted
//! once the raw shift is long enough.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{AuditStep, DayInput, EmployeeSettings, MINUTES_PER_DAY};

use super::rounding::minutes_to_hours;

/// The measured span between clock-in and clock-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftSpan {
    /// Clock-in, minutes since midnight.
    pub entry_minutes: u32,
    /// Clock-out, minutes since the clock-in day's midnight (past 1440 when overnight).
    pub exit_minutes: u32,
    /// Minutes between clock-in and clock-out, before any break.
    pub raw_minutes: u32,
    /// Whether the clock-out fell on the following day.
    pub overnight: bool,
    /// The audit step recording the measurement.
    pub audit_step: AuditStep,
}

/// The worked time left once the break rule has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakDeduction {
    /// Minutes worked after the deduction. May be zero or negative when the
    /// break is longer than the shift.
    pub worked_minutes: Decimal,
    /// Break hours actually subtracted (zero when the rule did not apply).
    pub deducted_hours: Decimal,
    /// The audit step recording the deduction decision.
    pub audit_step: AuditStep,
}

fn format_clock(hour: u8, minute: u8) -> String {
    format!("{:02}:{:02}", hour, minute)
}

/// Measures the raw length of a shift from its clock components.
///
/// A clock-out at or before the clock-in is read as the next day, so
/// 22:00 to 06:00 is eight hours. Equal times therefore produce a full
/// 24-hour shift.
///
/// Returns `None` when a clock component is out of range; the caller treats
/// the day as not worked.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::measure_shift;
/// use payroll_engine::models::DayInput;
///
/// let span = measure_shift(&DayInput::working(22, 0, 6, 0), 1).unwrap();
/// assert_eq!(span.raw_minutes, 480);
/// assert!(span.overnight);
/// ```
pub fn measure_shift(input: &DayInput, step_number: u32) -> Option<ShiftSpan> {
    if !input.has_valid_clock() {
        warn!(
            entry_hour = input.entry_hour,
            entry_minute = input.entry_minute,
            exit_hour = input.exit_hour,
            exit_minute = input.exit_minute,
            "Clock components out of range, treating day as not worked"
        );
        return None;
    }

    let entry_minutes = input.entry_minutes();
    let mut exit_minutes = input.exit_minutes();
    let overnight = exit_minutes <= entry_minutes;

    if overnight {
        exit_minutes += MINUTES_PER_DAY;
    }

    let raw_minutes = exit_minutes - entry_minutes;
    let entry = format_clock(input.entry_hour, input.entry_minute);
    let exit = format_clock(input.exit_hour, input.exit_minute);

    let reasoning = if raw_minutes == MINUTES_PER_DAY {
        warn!(
            entry = %entry,
            exit = %exit,
            "Clock-in equals clock-out, wrapping to a 24-hour shift"
        );
        format!(
            "Clock-out {} equals clock-in {}, wrapped to a full 24-hour shift",
            exit, entry
        )
    } else if overnight {
        format!(
            "Clock-out {} is not after clock-in {}, shift ends the next day: {} minutes",
            exit, entry, raw_minutes
        )
    } else {
        format!("{} to {} spans {} minutes", entry, exit, raw_minutes)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "shift_duration".to_string(),
        rule_name: "Shift Duration".to_string(),
        input: serde_json::json!({
            "entry": entry,
            "exit": exit
        }),
        output: serde_json::json!({
            "raw_minutes": raw_minutes,
            "overnight": overnight
        }),
        reasoning,
    };

    Some(ShiftSpan {
        entry_minutes,
        exit_minutes,
        raw_minutes,
        overnight,
        audit_step,
    })
}

/// Longest break deducted from one day; anything longer is cut to this.
pub const MAX_BREAK_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Subtracts the unpaid break from a raw shift length.
///
/// The per-day `break_override` wins over `settings.break_hours`. The break
/// is only deducted when the raw shift, in hours, reaches
/// `settings.min_hours_for_break`. Breaks are capped at [`MAX_BREAK_HOURS`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::deduct_break;
/// use payroll_engine::models::EmployeeSettings;
/// use rust_decimal::Decimal;
///
/// let settings = EmployeeSettings::default();
///
/// // 9 hours raw, 1 hour break
/// let long = deduct_break(540, None, &settings, 2);
/// assert_eq!(long.worked_minutes, Decimal::from(480));
///
/// // 3 hours raw is below the 5 hour threshold
/// let short = deduct_break(180, None, &settings, 2);
/// assert_eq!(short.worked_minutes, Decimal::from(180));
/// ```
pub fn deduct_break(
    raw_minutes: u32,
    break_override: Option<Decimal>,
    settings: &EmployeeSettings,
    step_number: u32,
) -> BreakDeduction {
    let raw = Decimal::from(raw_minutes);
    let raw_hours = minutes_to_hours(raw);
    let effective_break = break_override
        .unwrap_or(settings.break_hours)
        .min(MAX_BREAK_HOURS);
    let source = if break_override.is_some() {
        "day_override"
    } else {
        "employee_default"
    };

    let applies = raw_hours >= settings.min_hours_for_break && effective_break > Decimal::ZERO;

    let (worked_minutes, deducted_hours) = if applies {
        (raw - effective_break * Decimal::from(60), effective_break)
    } else {
        (raw, Decimal::ZERO)
    };

    let reasoning = if applies {
        format!(
            "Raw shift of {} hours reaches the {} hour threshold, deducted {} hour break ({})",
            raw_hours.round_dp(2).normalize(),
            settings.min_hours_for_break.normalize(),
            effective_break.normalize(),
            source
        )
    } else if effective_break <= Decimal::ZERO {
        "No break configured, nothing deducted".to_string()
    } else {
        format!(
            "Raw shift of {} hours is under the {} hour threshold, no break deducted",
            raw_hours.round_dp(2).normalize(),
            settings.min_hours_for_break.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "break_deduction".to_string(),
        rule_name: "Break Deduction".to_string(),
        input: serde_json::json!({
            "raw_minutes": raw_minutes,
            "break_hours": effective_break.normalize().to_string(),
            "break_source": source,
            "min_hours_for_break": settings.min_hours_for_break.normalize().to_string()
        }),
        output: serde_json::json!({
            "deducted_hours": deducted_hours.normalize().to_string(),
            "worked_minutes": worked_minutes.normalize().to_string()
        }),
        reasoning,
    };

    BreakDeduction {
        worked_minutes,
        deducted_hours,
        audit_step,
    }
}
