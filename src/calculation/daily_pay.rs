//! Daily pay from an hours split.

use rust_decimal::Decimal;

use crate::models::{AuditStep, EmployeeSettings};

use super::overtime_split::HoursSplit;
use super::rounding::round2;

/// Pay for one day together with its audit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPay {
    /// The day's pay.
    pub amount: Decimal,
    /// The audit step recording how it was reached.
    pub audit_step: AuditStep,
}

/// Prices an hours split.
///
/// A positive `shift_rate` is paid as-is regardless of hours. Otherwise
/// regular hours earn the base rate and each overtime tier earns the base
/// rate times its multiplier; the total is rounded to two decimals.
///
/// Returns `None` when the hourly pricing overflows [`Decimal`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_daily_pay, split_worked_hours};
/// use payroll_engine::models::EmployeeSettings;
/// use rust_decimal::Decimal;
///
/// let settings = EmployeeSettings {
///     base_hourly_rate: Decimal::new(450, 0),
///     ..EmployeeSettings::default()
/// };
/// let split = split_worked_hours(Decimal::new(10, 0), false, &settings, 3);
///
/// let hourly = calculate_daily_pay(&split, &settings, None, 4).unwrap();
/// assert_eq!(hourly.amount, Decimal::new(4950, 0));
///
/// let flat = calculate_daily_pay(&split, &settings, Some(Decimal::new(500, 0)), 4).unwrap();
/// assert_eq!(flat.amount, Decimal::new(500, 0));
/// ```
pub fn calculate_daily_pay(
    split: &HoursSplit,
    settings: &EmployeeSettings,
    shift_rate: Option<Decimal>,
    step_number: u32,
) -> Option<DailyPay> {
    let rate = settings.base_hourly_rate;

    if let Some(flat) = shift_rate.filter(|r| *r > Decimal::ZERO) {
        let audit_step = AuditStep {
            step_number,
            rule_id: "daily_pay".to_string(),
            rule_name: "Daily Pay".to_string(),
            input: serde_json::json!({
                "shift_rate": flat.normalize().to_string()
            }),
            output: serde_json::json!({
                "daily_pay": flat.normalize().to_string()
            }),
            reasoning: format!(
                "Flat shift rate of {} applies, hourly breakdown not priced",
                flat.normalize()
            ),
        };

        return Some(DailyPay {
            amount: flat,
            audit_step,
        });
    }

    let regular_pay = split.regular_hours.checked_mul(rate)?;
    let tier_pay = split
        .tiers
        .iter()
        .map(|tier| tier.hours.checked_mul(rate)?.checked_mul(tier.multiplier))
        .collect::<Option<Vec<Decimal>>>()?;
    let total = tier_pay
        .iter()
        .try_fold(regular_pay, |sum, pay| sum.checked_add(*pay))?;
    let amount = round2(total);

    let mut parts = vec![format!(
        "{}h x {} = {}",
        split.regular_hours.normalize(),
        rate.normalize(),
        round2(regular_pay).normalize()
    )];
    parts.extend(
        split
            .tiers
            .iter()
            .zip(&tier_pay)
            .filter(|(tier, _)| tier.hours > Decimal::ZERO)
            .map(|(tier, pay)| {
                format!(
                    "{}h x {} x {} = {}",
                    tier.hours.normalize(),
                    rate.normalize(),
                    tier.multiplier.normalize(),
                    round2(*pay).normalize()
                )
            }),
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_pay".to_string(),
        rule_name: "Daily Pay".to_string(),
        input: serde_json::json!({
            "base_hourly_rate": rate.normalize().to_string(),
            "regular_hours": split.regular_hours.normalize().to_string(),
            "tier_hours": split
                .tiers
                .iter()
                .map(|t| t.hours.normalize().to_string())
                .collect::<Vec<_>>(),
            "tier_multipliers": split
                .tiers
                .iter()
                .map(|t| t.multiplier.normalize().to_string())
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "daily_pay": amount.normalize().to_string()
        }),
        reasoning: format!("{}; total {}", parts.join(", "), amount.normalize()),
    };

    Some(DailyPay { amount, audit_step })
}
