//! Rounding to stored precision.
//!
//! Hours and money are both stored with two decimal places; every derived
//! quantity is rounded at the step that produces it.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for hours and pay.
pub const STORED_DECIMAL_PLACES: u32 = 2;

/// Rounds to two decimal places, midpoints away from zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("8.333333").unwrap()), Decimal::from_str("8.33").unwrap());
/// assert_eq!(round2(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(STORED_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts minutes to hours without rounding.
pub(crate) fn minutes_to_hours(minutes: Decimal) -> Decimal {
    minutes / Decimal::from(60)
}
