//! Earnings calculation.
//!
//! Combines tips, base wage, differentials and the chump payout into the
//! earnings of a shift.

use rust_decimal::Decimal;

use super::differentials::calculate_differentials;
use super::rounding::saturating_sum;
use super::tips::{calculate_net_tips, calculate_tips_per_hour};
use crate::models::{Differentials, EarningsBreakdown};

/// Inputs to [`calculate_earnings`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EarningsInput<'a> {
    /// Total tips, absent while pending.
    pub tips: Option<Decimal>,
    /// Tip-out paid to support staff.
    pub tip_out: Option<Decimal>,
    /// Hourly wage rate.
    pub hourly_rate: Option<Decimal>,
    /// Worked hours.
    pub duration: Decimal,
    /// Wage-window hours.
    pub wage_duration: Decimal,
    /// Differential categories.
    pub differentials: Option<&'a Differentials>,
    /// Chump game payout to the user.
    pub chump_payout: Decimal,
}

/// Base wage: hourly rate times wage-window hours. An absent rate pays 0.
pub fn calculate_base_wage(hourly_rate: Option<Decimal>, wage_duration: Decimal) -> Decimal {
    hourly_rate
        .unwrap_or(Decimal::ZERO)
        .saturating_mul(wage_duration)
}

/// Calculates the earnings of a shift.
///
/// `total_earnings = net tips + base wage + differentials + chump payout`
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_tracker::calculation::{EarningsInput, calculate_earnings};
///
/// let earnings = calculate_earnings(&EarningsInput {
///     tips: Some(Decimal::new(200, 0)),
///     tip_out: Some(Decimal::new(20, 0)),
///     hourly_rate: Some(Decimal::new(5, 0)),
///     duration: Decimal::new(8, 0),
///     wage_duration: Decimal::new(8, 0),
///     ..Default::default()
/// });
/// assert_eq!(earnings.base_wage, Decimal::new(40, 0));
/// assert_eq!(earnings.total_earnings, Decimal::new(220, 0));
/// ```
pub fn calculate_earnings(input: &EarningsInput<'_>) -> EarningsBreakdown {
    let tips_per_hour = calculate_tips_per_hour(input.tips, input.duration);
    let net_tips = calculate_net_tips(input.tips, input.tip_out);
    let base_wage = calculate_base_wage(input.hourly_rate, input.wage_duration);
    let differentials = calculate_differentials(input.differentials, input.wage_duration);
    let total_earnings =
        saturating_sum([net_tips, base_wage, differentials.total, input.chump_payout]);

    EarningsBreakdown {
        tips_per_hour,
        net_tips,
        base_wage,
        differentials,
        chump_payout: input.chump_payout,
        total_earnings,
    }
}
