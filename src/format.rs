//! Presentation formatting.
//!
//! US-locale strings for money, 12-hour times and dates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_to_cents;
use crate::models::ClockTime;

/// A date split into its weekday and the date text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateDisplay {
    /// Full weekday name (`Monday`).
    pub day_of_week: String,
    /// Formatted date (`Jul 22` or `July 22, 2024`).
    pub formatted_date: String,
}

/// Formats an amount as US dollars with cents and thousands separators.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_tracker::format::format_currency;
///
/// assert_eq!(format_currency(Decimal::new(123456, 2)), "$1,234.56");
/// assert_eq!(format_currency(Decimal::new(-10, 0)), "-$10.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_to_cents(amount);
    let cents = format!("{:.2}", rounded.abs());
    let (whole, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{fraction}")
}

/// Formats a clock time as `h:MM AM|PM`.
///
/// # Examples
///
/// ```
/// use shift_tracker::format::format_time_12h;
/// use shift_tracker::models::ClockTime;
///
/// assert_eq!(format_time_12h(ClockTime::new(17, 0).unwrap()), "5:00 PM");
/// assert_eq!(format_time_12h(ClockTime::new(0, 30).unwrap()), "12:30 AM");
/// ```
pub fn format_time_12h(time: ClockTime) -> String {
    let meridiem = if time.hour() < 12 { "AM" } else { "PM" };
    let hour = match time.hour() % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour, time.minute(), meridiem)
}

/// Weekday and short date (`Monday`, `Jul 22`).
pub fn format_date_short(date: NaiveDate) -> DateDisplay {
    DateDisplay {
        day_of_week: date.format("%A").to_string(),
        formatted_date: date.format("%b %-d").to_string(),
    }
}

/// Weekday and long date (`Monday`, `July 22, 2024`).
pub fn format_date_long(date: NaiveDate) -> DateDisplay {
    DateDisplay {
        day_of_week: date.format("%A").to_string(),
        formatted_date: date.format("%B %-d, %Y").to_string(),
    }
}
