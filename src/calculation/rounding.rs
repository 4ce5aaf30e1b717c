//! Rounding and saturating arithmetic shared by the calculators.
//!
//! Money values are user input with no upper bound, so the calculators
//! saturate at the `Decimal` range instead of overflowing.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to 2 decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use shift_tracker::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_cents(Decimal::from_str("38.8125").unwrap()), Decimal::from_str("38.81").unwrap());
/// assert_eq!(round_to_cents(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Divides, clamping to `Decimal::MAX` or `Decimal::MIN` when the quotient
/// is out of range. Callers guard against a zero divisor.
pub(crate) fn saturating_div(value: Decimal, divisor: Decimal) -> Decimal {
    value.checked_div(divisor).unwrap_or_else(|| {
        if value.is_sign_negative() != divisor.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Sums values, clamping at the ends of the `Decimal` range.
pub(crate) fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}
