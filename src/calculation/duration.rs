//! Shift duration calculation.
//!
//! Durations are measured between two clock times on a shift date. An end
//! time that is not after the start time belongs to the next calendar day.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use super::rounding::round_to_cents;
use crate::models::{ClockTime, ShiftRecord};

/// Calculates the hours between `start` and `end` on `date`.
///
/// If `end` is not strictly after `start`, it is moved to the next day, so
/// equal times mean a 24 hour shift. The result is rounded to 2 decimals.
/// Any missing input yields 0.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use shift_tracker::calculation::calculate_duration_hours;
/// use shift_tracker::models::ClockTime;
///
/// let date = NaiveDate::from_ymd_opt(2024, 7, 22);
/// let hours = calculate_duration_hours(date, ClockTime::new(18, 0), ClockTime::new(2, 0));
/// assert_eq!(hours, Decimal::new(8, 0));
///
/// assert_eq!(calculate_duration_hours(date, None, ClockTime::new(2, 0)), Decimal::ZERO);
/// ```
pub fn calculate_duration_hours(
    date: Option<NaiveDate>,
    start: Option<ClockTime>,
    end: Option<ClockTime>,
) -> Decimal {
    let (Some(date), Some(start), Some(end)) = (date, start, end) else {
        return Decimal::ZERO;
    };

    let start_at = date.and_time(start.as_naive_time());
    let mut end_at = date.and_time(end.as_naive_time());

    if end_at <= start_at {
        end_at = match end_at.checked_add_days(Days::new(1)) {
            Some(next_day) => next_day,
            None => return Decimal::ZERO,
        };
    }

    let minutes = (end_at - start_at).num_minutes();
    if minutes <= 0 {
        return Decimal::ZERO;
    }

    round_to_cents(Decimal::from(minutes) / Decimal::from(60))
}

/// Hours worked in the shift's worked window.
pub fn shift_duration(shift: &ShiftRecord) -> Decimal {
    calculate_duration_hours(Some(shift.date), Some(shift.start_time), Some(shift.end_time))
}

/// Hours in the shift's wage window, which defaults to the worked window.
pub fn wage_duration(shift: &ShiftRecord) -> Decimal {
    calculate_duration_hours(
        Some(shift.date),
        Some(shift.effective_wage_start()),
        Some(shift.effective_wage_end()),
    )
}
