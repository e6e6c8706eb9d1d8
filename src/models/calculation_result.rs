//! Calculation result models for the payroll engine.
//!
//! This module contains the per-day [`DayResult`] with its audit trail, and the
//! week-level [`WeekAggregates`] derived from seven day results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "shift_duration".to_string(),
///     rule_name: "Shift Duration".to_string(),
///     input: serde_json::json!({"entry": "09:00", "exit": "18:00"}),
///     output: serde_json::json!({"raw_minutes": 540}),
///     reasoning: "09:00 to 18:00 spans 540 minutes".to_string(),
/// };
/// assert_eq!(step.rule_id, "shift_duration");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Worked-hour breakdown and pay for one day.
///
/// `regular_hours + overtime_hours + extra_hours` always equals
/// `hours_worked`. A non-working day is [`DayResult::default`], all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
    /// Hours worked after the break deduction.
    pub hours_worked: Decimal,
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Tier-1 overtime hours.
    pub overtime_hours: Decimal,
    /// Tier-2 overtime hours.
    pub extra_hours: Decimal,
    /// Pay for the day, either hourly or the flat shift rate.
    pub daily_pay: Decimal,
}

impl DayResult {
    /// Returns the total of all overtime tiers.
    pub fn total_overtime_hours(&self) -> Decimal {
        self.overtime_hours + self.extra_hours
    }
}

/// The outcome of running one day through the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCalculation {
    /// The computed breakdown.
    pub result: DayResult,
    /// The rule applications that produced it, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Week-level totals derived from seven day results and the weekly tips.
///
/// `total_pay` always equals `total_base_pay` plus the week's tips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekAggregates {
    /// Sum of hours worked.
    pub total_hours: Decimal,
    /// Sum of regular hours.
    pub total_regular_hours: Decimal,
    /// Sum of tier-1 overtime hours.
    pub total_overtime_hours: Decimal,
    /// Sum of tier-2 overtime hours.
    pub total_extra_hours: Decimal,
    /// Sum of daily pay.
    pub total_base_pay: Decimal,
    /// Base pay plus tips.
    pub total_pay: Decimal,
    /// Days counted as full shifts.
    pub total_shifts: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_day_result_is_all_zero() {
        let result = DayResult::default();
        assert_eq!(result.hours_worked, Decimal::ZERO);
        assert_eq!(result.regular_hours, Decimal::ZERO);
        assert_eq!(result.overtime_hours, Decimal::ZERO);
        assert_eq!(result.extra_hours, Decimal::ZERO);
        assert_eq!(result.daily_pay, Decimal::ZERO);
    }

    #[test]
    fn test_total_overtime_hours_sums_both_tiers() {
        let result = DayResult {
            hours_worked: dec("12"),
            regular_hours: dec("8"),
            overtime_hours: dec("2"),
            extra_hours: dec("2"),
            daily_pay: dec("6750"),
        };
        assert_eq!(result.total_overtime_hours(), dec("4"));
    }

    #[test]
    fn test_day_result_serialization() {
        let result = DayResult {
            hours_worked: dec("8.5"),
            regular_hours: dec("8"),
            overtime_hours: dec("0.5"),
            extra_hours: Decimal::ZERO,
            daily_pay: dec("3937.50"),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"hours_worked\":\"8.5\""));
        assert!(json.contains("\"daily_pay\":\"3937.50\""));

        let deserialized: DayResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, result);
    }

    #[test]
    fn test_week_aggregates_deserialization() {
        let json = r#"{
            "total_hours": "40",
            "total_regular_hours": "38",
            "total_overtime_hours": "2",
            "total_extra_hours": "0",
            "total_base_pay": "18450",
            "total_pay": "18950",
            "total_shifts": 5
        }"#;

        let aggregates: WeekAggregates = serde_json::from_str(json).unwrap();
        assert_eq!(aggregates.total_hours, dec("40"));
        assert_eq!(aggregates.total_pay, dec("18950"));
        assert_eq!(aggregates.total_shifts, 5);
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 2,
            rule_id: "break_deduction".to_string(),
            rule_name: "Break Deduction".to_string(),
            input: serde_json::json!({"raw_hours": "9"}),
            output: serde_json::json!({"worked_hours": "8"}),
            reasoning: "Deducted 1 hour break".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":2"));
        assert!(json.contains("\"rule_id\":\"break_deduction\""));
        assert!(json.contains("\"rule_name\":\"Break Deduction\""));
    }
}
