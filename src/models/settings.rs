//! Employee pay settings.
//!
//! [`EmployeeSettings`] is the immutable pay configuration every calculation
//! receives explicitly. [`SettingsRecord`] is its partial form, as stored by the
//! persistence layer or written in YAML, where any field may be absent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default tier-1 overtime multiplier (150%).
pub const DEFAULT_OVERTIME_TIER1_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default tier-2 overtime multiplier (200%).
pub const DEFAULT_OVERTIME_TIER2_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Default tier-1 capacity in hours.
pub const DEFAULT_OVERTIME_TIER1_HOURS: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Default regular-hours threshold per shift.
pub const DEFAULT_HOURS_PER_SHIFT: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default unpaid break length in hours.
pub const DEFAULT_BREAK_HOURS: Decimal = Decimal::ONE;

/// Default raw shift length, in hours, from which the break is deducted.
pub const DEFAULT_MIN_HOURS_FOR_BREAK: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Currency an employee is paid in.
///
/// Recorded for display only; amounts are never converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Mexican peso.
    #[default]
    Mxn,
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
}

/// One band of overtime: how many hours it can hold and the multiplier of the
/// base hourly rate those hours are paid at.
///
/// A `capacity_hours` of `None` means the band is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeTier {
    /// Maximum hours this tier absorbs, or `None` for no limit.
    pub capacity_hours: Option<Decimal>,
    /// Multiplier applied to the base hourly rate.
    pub multiplier: Decimal,
}

/// Pay rules for one employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeeSettings;
/// use rust_decimal::Decimal;
///
/// let settings = EmployeeSettings {
///     base_hourly_rate: Decimal::new(450, 0),
///     ..EmployeeSettings::default()
/// };
/// assert_eq!(settings.hours_per_shift, Decimal::new(8, 0));
/// assert_eq!(settings.overtime_tiers().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSettings {
    /// Pay per regular hour.
    pub base_hourly_rate: Decimal,
    /// Whether hours beyond the shift length are paid as overtime.
    pub uses_overtime: bool,
    /// Multiplier for tier-1 overtime hours.
    pub overtime_tier1_rate: Decimal,
    /// Multiplier for tier-2 overtime hours.
    pub overtime_tier2_rate: Decimal,
    /// Number of overtime hours paid at the tier-1 multiplier.
    pub overtime_tier1_hours: Decimal,
    /// Regular hours per shift before overtime starts.
    pub hours_per_shift: Decimal,
    /// Unpaid break length in hours.
    pub break_hours: Decimal,
    /// Minimum raw shift length, in hours, for the break to be deducted.
    pub min_hours_for_break: Decimal,
    /// Currency the pay is shown in. Not used by any calculation.
    #[serde(default)]
    pub currency: Currency,
    /// Whether the employee receives tips. Informational; weekly tips are
    /// added to the totals either way.
    #[serde(default)]
    pub uses_tips: bool,
}

impl Default for EmployeeSettings {
    fn default() -> Self {
        Self {
            base_hourly_rate: Decimal::ZERO,
            uses_overtime: true,
            overtime_tier1_rate: DEFAULT_OVERTIME_TIER1_RATE,
            overtime_tier2_rate: DEFAULT_OVERTIME_TIER2_RATE,
            overtime_tier1_hours: DEFAULT_OVERTIME_TIER1_HOURS,
            hours_per_shift: DEFAULT_HOURS_PER_SHIFT,
            break_hours: DEFAULT_BREAK_HOURS,
            min_hours_for_break: DEFAULT_MIN_HOURS_FOR_BREAK,
            currency: Currency::Mxn,
            uses_tips: false,
        }
    }
}

impl EmployeeSettings {
    /// Returns the ordered overtime bands for these settings.
    ///
    /// Tier 1 holds up to `overtime_tier1_hours`; tier 2 takes the rest.
    pub fn overtime_tiers(&self) -> Vec<OvertimeTier> {
        vec![
            OvertimeTier {
                capacity_hours: Some(self.overtime_tier1_hours),
                multiplier: self.overtime_tier1_rate,
            },
            OvertimeTier {
                capacity_hours: None,
                multiplier: self.overtime_tier2_rate,
            },
        ]
    }

    /// Returns a copy of these settings with every field present in `record`
    /// replacing the current value.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{EmployeeSettings, SettingsRecord};
    /// use rust_decimal::Decimal;
    ///
    /// let record = SettingsRecord {
    ///     base_hourly_rate: Some(Decimal::new(500, 0)),
    ///     uses_overtime: Some(false),
    ///     ..SettingsRecord::default()
    /// };
    /// let merged = EmployeeSettings::default().merged(&record);
    /// assert_eq!(merged.base_hourly_rate, Decimal::new(500, 0));
    /// assert!(!merged.uses_overtime);
    /// assert_eq!(merged.break_hours, Decimal::ONE);
    /// ```
    pub fn merged(&self, record: &SettingsRecord) -> EmployeeSettings {
        EmployeeSettings {
            base_hourly_rate: record.base_hourly_rate.unwrap_or(self.base_hourly_rate),
            uses_overtime: record.uses_overtime.unwrap_or(self.uses_overtime),
            overtime_tier1_rate: record.overtime_tier1_rate.unwrap_or(self.overtime_tier1_rate),
            overtime_tier2_rate: record.overtime_tier2_rate.unwrap_or(self.overtime_tier2_rate),
            overtime_tier1_hours: record
                .overtime_tier1_hours
                .unwrap_or(self.overtime_tier1_hours),
            hours_per_shift: record.hours_per_shift.unwrap_or(self.hours_per_shift),
            break_hours: record.break_hours.unwrap_or(self.break_hours),
            min_hours_for_break: record.min_hours_for_break.unwrap_or(self.min_hours_for_break),
            currency: record.currency.unwrap_or(self.currency),
            uses_tips: record.uses_tips.unwrap_or(self.uses_tips),
        }
    }

    /// Checks that every field holds a value the calculator can work with.
    ///
    /// Rates, tier capacity, break length and break threshold must be
    /// non-negative; the shift length must be positive.
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative = [
            ("base_hourly_rate", self.base_hourly_rate),
            ("overtime_tier1_rate", self.overtime_tier1_rate),
            ("overtime_tier2_rate", self.overtime_tier2_rate),
            ("overtime_tier1_hours", self.overtime_tier1_hours),
            ("break_hours", self.break_hours),
            ("min_hours_for_break", self.min_hours_for_break),
        ];

        if let Some((field, value)) = non_negative
            .iter()
            .find(|(_, value)| *value < Decimal::ZERO)
        {
            return Err(EngineError::InvalidSettings {
                field: field.to_string(),
                message: format!("must not be negative (got {})", value.normalize()),
            });
        }

        if self.hours_per_shift <= Decimal::ZERO {
            return Err(EngineError::InvalidSettings {
                field: "hours_per_shift".to_string(),
                message: format!(
                    "must be greater than zero (got {})",
                    self.hours_per_shift.normalize()
                ),
            });
        }

        Ok(())
    }
}

/// Partial employee settings where every field is optional.
///
/// Absent fields fall back to whatever settings the record is merged into
/// (see [`EmployeeSettings::merged`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    /// Pay per regular hour.
    pub base_hourly_rate: Option<Decimal>,
    /// Whether overtime is paid.
    pub uses_overtime: Option<bool>,
    /// Multiplier for tier-1 overtime hours.
    pub overtime_tier1_rate: Option<Decimal>,
    /// Multiplier for tier-2 overtime hours.
    pub overtime_tier2_rate: Option<Decimal>,
    /// Tier-1 capacity in hours.
    pub overtime_tier1_hours: Option<Decimal>,
    /// Regular hours per shift.
    pub hours_per_shift: Option<Decimal>,
    /// Unpaid break length in hours.
    pub break_hours: Option<Decimal>,
    /// Break deduction threshold in hours.
    pub min_hours_for_break: Option<Decimal>,
    /// Display currency.
    pub currency: Option<Currency>,
    /// Whether the employee receives tips.
    pub uses_tips: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_settings_match_documented_defaults() {
        let settings = EmployeeSettings::default();

        assert_eq!(settings.base_hourly_rate, Decimal::ZERO);
        assert!(settings.uses_overtime);
        assert_eq!(settings.overtime_tier1_rate, dec("1.5"));
        assert_eq!(settings.overtime_tier2_rate, dec("2.0"));
        assert_eq!(settings.overtime_tier1_hours, dec("2"));
        assert_eq!(settings.hours_per_shift, dec("8"));
        assert_eq!(settings.break_hours, dec("1"));
        assert_eq!(settings.min_hours_for_break, dec("5"));
        assert_eq!(settings.currency, Currency::Mxn);
        assert!(!settings.uses_tips);
    }

    #[test]
    fn test_overtime_tiers_are_ordered_and_last_is_unbounded() {
        let settings = EmployeeSettings {
            overtime_tier1_hours: dec("3"),
            overtime_tier1_rate: dec("1.25"),
            overtime_tier2_rate: dec("1.75"),
            ..EmployeeSettings::default()
        };

        let tiers = settings.overtime_tiers();
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[0].capacity_hours, Some(dec("3")));
        assert_eq!(tiers[0].multiplier, dec("1.25"));
        assert_eq!(tiers[1].capacity_hours, None);
        assert_eq!(tiers[1].multiplier, dec("1.75"));
    }

    #[test]
    fn test_merged_only_replaces_present_fields() {
        let base = EmployeeSettings {
            base_hourly_rate: dec("450"),
            ..EmployeeSettings::default()
        };
        let record = SettingsRecord {
            hours_per_shift: Some(dec("9")),
            break_hours: Some(dec("0.5")),
            ..SettingsRecord::default()
        };

        let merged = base.merged(&record);
        assert_eq!(merged.base_hourly_rate, dec("450"));
        assert_eq!(merged.hours_per_shift, dec("9"));
        assert_eq!(merged.break_hours, dec("0.5"));
        assert_eq!(merged.min_hours_for_break, dec("5"));
    }

    #[test]
    fn test_merged_replaces_currency_and_tips_flag() {
        let record: SettingsRecord =
            serde_json::from_str(r#"{"currency": "USD", "uses_tips": true}"#).unwrap();

        let merged = EmployeeSettings::default().merged(&record);
        assert_eq!(merged.currency, Currency::Usd);
        assert!(merged.uses_tips);
        assert_eq!(merged.hours_per_shift, dec("8"));
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let result = serde_json::from_str::<SettingsRecord>(r#"{"currency": "GBP"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_without_currency_deserialize_with_defaults() {
        let json = r#"{
            "base_hourly_rate": "450",
            "uses_overtime": true,
            "overtime_tier1_rate": "1.5",
            "overtime_tier2_rate": "2",
            "overtime_tier1_hours": "2",
            "hours_per_shift": "8",
            "break_hours": "1",
            "min_hours_for_break": "5"
        }"#;

        let settings: EmployeeSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.currency, Currency::Mxn);
        assert!(!settings.uses_tips);
    }

    #[test]
    fn test_merged_with_empty_record_is_identity() {
        let base = EmployeeSettings {
            base_hourly_rate: dec("380.5"),
            uses_overtime: false,
            ..EmployeeSettings::default()
        };
        assert_eq!(base.merged(&SettingsRecord::default()), base);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(EmployeeSettings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let settings = EmployeeSettings {
            base_hourly_rate: dec("-1"),
            ..EmployeeSettings::default()
        };

        match settings.validate() {
            Err(EngineError::InvalidSettings { field, message }) => {
                assert_eq!(field, "base_hourly_rate");
                assert!(message.contains("-1"));
            }
            other => panic!("Expected InvalidSettings error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_hours_per_shift() {
        let settings = EmployeeSettings {
            hours_per_shift: Decimal::ZERO,
            ..EmployeeSettings::default()
        };

        match settings.validate() {
            Err(EngineError::InvalidSettings { field, .. }) => {
                assert_eq!(field, "hours_per_shift");
            }
            other => panic!("Expected InvalidSettings error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_zero_break() {
        let settings = EmployeeSettings {
            break_hours: Decimal::ZERO,
            min_hours_for_break: Decimal::ZERO,
            ..EmployeeSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_record_deserializes_partial_json() {
        let json = r#"{
            "base_hourly_rate": "450",
            "uses_overtime": false
        }"#;

        let record: SettingsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.base_hourly_rate, Some(dec("450")));
        assert_eq!(record.uses_overtime, Some(false));
        assert_eq!(record.hours_per_shift, None);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = EmployeeSettings {
            base_hourly_rate: dec("450"),
            ..EmployeeSettings::default()
        };

        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"base_hourly_rate\":\"450\""));
        assert!(json.contains("\"uses_overtime\":true"));
        assert!(json.contains("\"currency\":\"MXN\""));

        let deserialized: EmployeeSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, settings);
    }
}
