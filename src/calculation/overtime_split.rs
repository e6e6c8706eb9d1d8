//! Regular/overtime split of worked hours.
//!
//! Hours up to a regular allowance are paid at the base rate. The excess,
//! if it clears a small tolerance, is poured into the ordered overtime tiers
//! from [`EmployeeSettings::overtime_tiers`]; otherwise every hour stays
//! regular.

use rust_decimal::Decimal;

use crate::models::{AuditStep, EmployeeSettings, OvertimeTier};

use super::rounding::round2;

/// Overtime shorter than this, in minutes, is not credited as overtime.
pub const OVERTIME_TOLERANCE_MINUTES: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Regular hours granted to a force-overtime day before overtime starts.
///
/// Force-overtime days are continuations of the previous night's shift and
/// are expected to start at 00:00; the allowance is counted from the
/// clock-in, whatever it is.
pub const FORCED_REGULAR_ALLOWANCE_HOURS: Decimal = Decimal::ONE;

/// Hours assigned to one overtime tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierAllocation {
    /// Hours placed in the tier.
    pub hours: Decimal,
    /// Multiplier of the base rate for those hours.
    pub multiplier: Decimal,
}

/// The split of a day's worked hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursSplit {
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// One allocation per overtime tier, in tier order.
    pub tiers: Vec<TierAllocation>,
    /// The audit step recording the split.
    pub audit_step: AuditStep,
}

impl HoursSplit {
    /// Hours in the first tier.
    pub fn tier1_hours(&self) -> Decimal {
        self.tiers.first().map_or(Decimal::ZERO, |t| t.hours)
    }

    /// Hours in every tier after the first.
    pub fn beyond_tier1_hours(&self) -> Decimal {
        self.tiers.iter().skip(1).map(|t| t.hours).sum()
    }
}

/// Distributes overtime hours across ordered tiers.
///
/// Each tier takes up to its capacity; the last tier takes whatever is left
/// regardless of capacity, so the returned hours always sum to
/// `overtime_hours`. Negative capacities count as zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::split_overtime;
/// use payroll_engine::models::EmployeeSettings;
/// use rust_decimal::Decimal;
///
/// let tiers = EmployeeSettings::default().overtime_tiers();
/// let hours = split_overtime(Decimal::new(35, 1), &tiers);
/// assert_eq!(hours, vec![Decimal::new(2, 0), Decimal::new(15, 1)]);
/// ```
pub fn split_overtime(overtime_hours: Decimal, tiers: &[OvertimeTier]) -> Vec<Decimal> {
    let last = tiers.len().saturating_sub(1);
    let mut remaining = overtime_hours;

    tiers
        .iter()
        .enumerate()
        .map(|(index, tier)| {
            let taken = match tier.capacity_hours {
                Some(capacity) if index < last => {
                    round2(remaining.min(capacity.max(Decimal::ZERO)))
                }
                _ => remaining,
            };
            remaining -= taken;
            taken
        })
        .collect()
}

/// Splits a day's worked hours into regular hours and overtime tiers.
///
/// The regular allowance is `settings.hours_per_shift`, or
/// [`FORCED_REGULAR_ALLOWANCE_HOURS`] when `force_overtime` is set. Overtime
/// is only credited when `settings.uses_overtime` is on and the excess is
/// longer than [`OVERTIME_TOLERANCE_MINUTES`]; in every other case all hours
/// are regular.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_worked_hours;
/// use payroll_engine::models::EmployeeSettings;
/// use rust_decimal::Decimal;
///
/// let settings = EmployeeSettings::default();
///
/// let split = split_worked_hours(Decimal::new(12, 0), false, &settings, 3);
/// assert_eq!(split.regular_hours, Decimal::new(8, 0));
/// assert_eq!(split.tier1_hours(), Decimal::new(2, 0));
/// assert_eq!(split.beyond_tier1_hours(), Decimal::new(2, 0));
///
/// // A force-overtime day gets one regular hour
/// let forced = split_worked_hours(Decimal::new(3, 0), true, &settings, 3);
/// assert_eq!(forced.regular_hours, Decimal::ONE);
/// assert_eq!(forced.tier1_hours(), Decimal::new(2, 0));
/// ```
pub fn split_worked_hours(
    hours_worked: Decimal,
    force_overtime: bool,
    settings: &EmployeeSettings,
    step_number: u32,
) -> HoursSplit {
    let tier_definitions = settings.overtime_tiers();
    let (allowance, mode) = if force_overtime {
        (FORCED_REGULAR_ALLOWANCE_HOURS, "force_overtime")
    } else {
        (settings.hours_per_shift, "normal")
    };

    let capped_regular = round2(hours_worked.min(allowance));
    let excess = hours_worked - capped_regular;
    let clears_tolerance = excess * Decimal::from(60) > OVERTIME_TOLERANCE_MINUTES;

    let credits_overtime =
        settings.uses_overtime && clears_tolerance && !tier_definitions.is_empty();

    let (regular_hours, tier_hours) = if credits_overtime {
        (capped_regular, split_overtime(excess, &tier_definitions))
    } else {
        (hours_worked, vec![Decimal::ZERO; tier_definitions.len()])
    };

    let tiers: Vec<TierAllocation> = tier_definitions
        .iter()
        .zip(tier_hours)
        .map(|(tier, hours)| TierAllocation {
            hours,
            multiplier: tier.multiplier,
        })
        .collect();

    let reasoning = if !settings.uses_overtime {
        format!(
            "Overtime disabled for this employee, all {} hours are regular",
            hours_worked.normalize()
        )
    } else if credits_overtime {
        format!(
            "{} hours worked exceeds the {} hour regular allowance ({} mode) by {} hours: {}",
            hours_worked.normalize(),
            allowance.normalize(),
            mode,
            excess.normalize(),
            tiers
                .iter()
                .enumerate()
                .map(|(i, t)| format!("tier {}: {}h", i + 1, t.hours.normalize()))
                .collect::<Vec<_>>()
                .join(", ")
        )
    } else if excess > Decimal::ZERO {
        format!(
            "Excess of {} hours over the {} hour allowance ({} mode) is within the {} minute tolerance, all hours are regular",
            excess.normalize(),
            allowance.normalize(),
            mode,
            OVERTIME_TOLERANCE_MINUTES
        )
    } else {
        format!(
            "{} hours worked is within the {} hour regular allowance ({} mode), no overtime",
            hours_worked.normalize(),
            allowance.normalize(),
            mode
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_split".to_string(),
        rule_name: "Regular and Overtime Split".to_string(),
        input: serde_json::json!({
            "hours_worked": hours_worked.normalize().to_string(),
            "mode": mode,
            "regular_allowance": allowance.normalize().to_string(),
            "uses_overtime": settings.uses_overtime
        }),
        output: serde_json::json!({
            "regular_hours": regular_hours.normalize().to_string(),
            "tier_hours": tiers
                .iter()
                .map(|t| t.hours.normalize().to_string())
                .collect::<Vec<_>>()
        }),
        reasoning,
    };

    HoursSplit {
        regular_hours,
        tiers,
        audit_step,
    }
}
