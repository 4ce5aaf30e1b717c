//! Dashboard statistics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rounding::{round_to_cents, saturating_div, saturating_sum};
use crate::models::ShiftRecord;

/// Aggregates shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Number of shifts.
    pub total_shifts: usize,
    /// Sum of stored durations.
    pub total_hours: Decimal,
    /// Sum of tips over shifts with tips entered.
    pub total_tips: Decimal,
    /// Total tips over the hours of shifts with tips entered.
    pub average_tips_per_hour: Decimal,
}

/// Computes dashboard statistics over stored shifts.
///
/// Shifts with pending tips count toward total hours but not toward the
/// tip average.
pub fn calculate_dashboard_stats(shifts: &[ShiftRecord]) -> DashboardStats {
    let total_hours = saturating_sum(shifts.iter().map(|s| s.duration));

    let (total_tips, tipped_hours) = shifts
        .iter()
        .filter_map(|s| s.tips.map(|tips| (tips, s.duration)))
        .fold((Decimal::ZERO, Decimal::ZERO), |(tips, hours), (t, h)| {
            (tips.saturating_add(t), hours.saturating_add(h))
        });

    let average_tips_per_hour = if tipped_hours > Decimal::ZERO {
        round_to_cents(saturating_div(total_tips, tipped_hours))
    } else {
        Decimal::ZERO
    };

    DashboardStats {
        total_shifts: shifts.len(),
        total_hours,
        total_tips,
        average_tips_per_hour,
    }
}
