//! Tip calculations.
//!
//! Tips per hour, net tips after tip-out, and the one-directional sync that
//! derives total tips from a cash/credit breakdown.

use rust_decimal::Decimal;

use super::rounding::{round_to_cents, saturating_div};
use crate::models::ShiftRecord;

/// Tips per worked hour, rounded to 2 decimals.
///
/// Returns 0 when tips are absent or the duration is not positive.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_tracker::calculation::calculate_tips_per_hour;
/// use std::str::FromStr;
///
/// let rate = calculate_tips_per_hour(Some(Decimal::from_str("310.50").unwrap()), Decimal::new(8, 0));
/// assert_eq!(rate, Decimal::from_str("38.81").unwrap());
/// ```
pub fn calculate_tips_per_hour(tips: Option<Decimal>, duration: Decimal) -> Decimal {
    match tips {
        Some(tips) if duration > Decimal::ZERO => round_to_cents(saturating_div(tips, duration)),
        _ => Decimal::ZERO,
    }
}

/// Tips minus tip-out; absent values count as 0.
pub fn calculate_net_tips(tips: Option<Decimal>, tip_out: Option<Decimal>) -> Decimal {
    tips.unwrap_or(Decimal::ZERO)
        .saturating_sub(tip_out.unwrap_or(Decimal::ZERO))
}

/// Derives total tips from a cash/credit breakdown.
///
/// Returns the new tips value when either part is nonzero and their sum
/// differs from the current tips; `None` means tips stay as they are.
/// Editing tips never changes the breakdown.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_tracker::calculation::sync_tips_from_breakdown;
/// use std::str::FromStr;
///
/// let cash = Some(Decimal::new(100, 0));
/// let credit = Some(Decimal::from_str("210.50").unwrap());
/// assert_eq!(
///     sync_tips_from_breakdown(Some(Decimal::ZERO), cash, credit),
///     Some(Decimal::from_str("310.50").unwrap())
/// );
/// ```
pub fn sync_tips_from_breakdown(
    tips: Option<Decimal>,
    cash_tips: Option<Decimal>,
    credit_tips: Option<Decimal>,
) -> Option<Decimal> {
    let cash = cash_tips.unwrap_or(Decimal::ZERO);
    let credit = credit_tips.unwrap_or(Decimal::ZERO);

    if cash.is_zero() && credit.is_zero() {
        return None;
    }

    let total = cash.saturating_add(credit);
    if total == tips.unwrap_or(Decimal::ZERO) {
        None
    } else {
        Some(total)
    }
}

/// Applies [`sync_tips_from_breakdown`] to a shift in place.
///
/// Returns true if the tips changed.
pub fn apply_tip_breakdown(shift: &mut ShiftRecord) -> bool {
    match sync_tips_from_breakdown(shift.tips, shift.cash_tips, shift.credit_tips) {
        Some(total) => {
            shift.tips = Some(total);
            true
        }
        None => false,
    }
}
