//! Differential calculations.
//!
//! Resolves the four differential categories of a shift into per-category
//! amounts and their total.

use rust_decimal::Decimal;

use super::rounding::saturating_sum;
use crate::models::{DifferentialBreakdown, DifferentialEvent, Differentials, RoleDifferential};

/// Resolves a category entered as a flat total and an event list.
///
/// A non-empty event list wins; otherwise the flat total is used. This is
/// the rule [`DifferentialEntry::from_parts`](crate::models::DifferentialEntry::from_parts)
/// applies when building an entry from legacy documents.
pub fn resolve_category_total<E: DifferentialEvent>(total: Decimal, events: &[E]) -> Decimal {
    if events.is_empty() {
        total
    } else {
        saturating_sum(events.iter().map(DifferentialEvent::amount))
    }
}

/// Role bonus: hourly bonus times wage-window hours plus the flat bonus.
pub fn calculate_role_bonus(role: &RoleDifferential, wage_duration: Decimal) -> Decimal {
    role.hourly_bonus
        .saturating_mul(wage_duration)
        .saturating_add(role.flat_bonus)
}

/// Resolves every differential category of a shift.
///
/// Absent differentials resolve to all zeros.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_tracker::calculation::calculate_differentials;
/// use shift_tracker::models::{DifferentialEntry, Differentials, RoleDifferential};
///
/// let diffs = Differentials {
///     consideration: DifferentialEntry::Total(Decimal::new(-10, 0)),
///     tip: DifferentialEntry::Total(Decimal::new(20, 0)),
///     role: RoleDifferential { hourly_bonus: Decimal::ZERO, flat_bonus: Decimal::new(15, 0) },
///     overtime: Decimal::new(25, 0),
/// };
/// let breakdown = calculate_differentials(Some(&diffs), Decimal::new(8, 0));
/// assert_eq!(breakdown.total, Decimal::new(50, 0));
/// ```
pub fn calculate_differentials(
    differentials: Option<&Differentials>,
    wage_duration: Decimal,
) -> DifferentialBreakdown {
    let Some(diffs) = differentials else {
        return DifferentialBreakdown::default();
    };

    let consideration = diffs.consideration.total();
    let tip = diffs.tip.total();
    let role = calculate_role_bonus(&diffs.role, wage_duration);
    let overtime = diffs.overtime;

    DifferentialBreakdown {
        consideration,
        tip,
        role,
        overtime,
        total: saturating_sum([consideration, tip, role, overtime]),
    }
}
