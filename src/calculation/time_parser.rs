//! Free-form time-of-day parsing.
//!
//! Workers type times the quick way: `5p`, `1730`, `1.5`, `10`. This module
//! turns that text into a [`ClockTime`], inferring AM/PM from where the time
//! is entered and, for end times, from the paired start time.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::ClockTime;

/// Where a time is being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeContext {
    /// A start time. Bare hours 1-8 are read as PM.
    Start,
    /// An end time, read relative to the paired start time.
    End,
}

/// Outcome of parsing time input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTime {
    /// The input is a valid time.
    Valid(ClockTime),
    /// The input was blank.
    Empty,
    /// The input could not be read as a time.
    Invalid,
}

impl ParsedTime {
    /// Returns the parsed time if valid.
    pub fn time(self) -> Option<ClockTime> {
        match self {
            Self::Valid(time) => Some(time),
            Self::Empty | Self::Invalid => None,
        }
    }

    /// Returns true if the input was a valid time.
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Parses free-form time input into a canonical 24-hour time.
///
/// Accepted shapes:
/// * `H`, `HH`: whole hours (`"10"` → 10:00)
/// * `HMM`, `HHMM`: the last two digits are minutes (`"1730"` → 17:30)
/// * `H.F`: fractional hours on the 24-hour clock (`"1.5"` → 01:30)
/// * `HH:MM`: canonical 24-hour text, taken as-is
///
/// An `a` anywhere marks AM and a `p` anywhere marks PM. Without a marker,
/// whole-hour input is inferred from `context`: start times with hours 1-8
/// become PM; end times are placed after `paired_time` when one is given.
///
/// Never fails: blank input is [`ParsedTime::Empty`] and unreadable input is
/// [`ParsedTime::Invalid`].
///
/// # Examples
///
/// ```
/// use shift_tracker::calculation::{ParsedTime, TimeContext, parse_time_input};
/// use shift_tracker::models::ClockTime;
///
/// let five_pm = ClockTime::new(17, 0).unwrap();
/// assert_eq!(parse_time_input("5p", TimeContext::Start, None), ParsedTime::Valid(five_pm));
/// assert_eq!(parse_time_input("5", TimeContext::Start, None), ParsedTime::Valid(five_pm));
///
/// let one_am = ClockTime::new(1, 0).unwrap();
/// assert_eq!(parse_time_input("1", TimeContext::End, Some(five_pm)), ParsedTime::Valid(one_am));
///
/// assert_eq!(parse_time_input("  ", TimeContext::Start, None), ParsedTime::Empty);
/// assert_eq!(parse_time_input("soon", TimeContext::Start, None), ParsedTime::Invalid);
/// ```
pub fn parse_time_input(
    input: &str,
    context: TimeContext,
    paired_time: Option<ClockTime>,
) -> ParsedTime {
    let cleaned: String = input
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != ' ')
        .collect();

    if cleaned.is_empty() {
        return ParsedTime::Empty;
    }

    if is_canonical(&cleaned) {
        return match cleaned.parse::<ClockTime>() {
            Ok(time) => ParsedTime::Valid(time),
            Err(_) => ParsedTime::Invalid,
        };
    }

    let has_am = cleaned.contains('a');
    let has_pm = cleaned.contains('p');
    let stripped: String = cleaned
        .chars()
        .filter(|c| !matches!(c, 'a' | 'm' | 'p' | ':'))
        .collect();
    // Dots left over from "a.m." / "p.m.".
    let numeric = stripped.trim_end_matches('.');
    let fractional = numeric.contains('.');

    let Some((hour, minute)) = split_hour_minute(numeric) else {
        debug!(input = %input, "Unreadable time input");
        return ParsedTime::Invalid;
    };

    let hour = if fractional && !has_am && !has_pm {
        hour
    } else {
        apply_meridiem(hour, has_am, has_pm, context, paired_time)
    };

    match ClockTime::new(hour, minute) {
        Some(time) => ParsedTime::Valid(time),
        None => {
            debug!(input = %input, hour, minute, "Time input out of range");
            ParsedTime::Invalid
        }
    }
}

/// Applies a parse outcome to the value currently held by an input field.
///
/// A valid time replaces the current value, blank input clears it, and
/// invalid input keeps the last valid value.
pub fn apply_time_input(current: Option<ClockTime>, outcome: ParsedTime) -> Option<ClockTime> {
    match outcome {
        ParsedTime::Valid(time) => Some(time),
        ParsedTime::Empty => None,
        ParsedTime::Invalid => current,
    }
}

/// `HH:MM` with a two-digit hour is already a 24-hour time.
fn is_canonical(cleaned: &str) -> bool {
    let bytes = cleaned.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit())
}

fn split_hour_minute(numeric: &str) -> Option<(u32, u32)> {
    if !numeric.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }

    if let Some((whole, fraction)) = numeric.split_once('.') {
        if fraction.contains('.') {
            return None;
        }
        return Some((parse_digits(whole)?, fraction_to_minutes(fraction)?));
    }

    if numeric.len() >= 3 {
        let (hour, minute) = numeric.split_at(numeric.len() - 2);
        Some((parse_digits(hour)?, parse_digits(minute)?))
    } else {
        Some((parse_digits(numeric)?, 0))
    }
}

fn parse_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Converts the digits after the decimal point into minutes, rounding half up.
fn fraction_to_minutes(fraction: &str) -> Option<u32> {
    if fraction.is_empty() {
        return Some(0);
    }
    let value: Decimal = format!("0.{fraction}").parse().ok()?;
    (value * Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
}

fn apply_meridiem(
    hour: u32,
    has_am: bool,
    has_pm: bool,
    context: TimeContext,
    paired_time: Option<ClockTime>,
) -> u32 {
    if has_pm && hour < 12 {
        return hour + 12;
    }
    if has_am && hour == 12 {
        return 0;
    }
    if has_am || has_pm {
        return hour;
    }

    match context {
        TimeContext::Start if (1..=8).contains(&hour) => hour + 12,
        TimeContext::Start => hour,
        TimeContext::End => match paired_time {
            Some(start) => infer_end_hour(hour, start.hour()),
            None => hour,
        },
    }
}

/// Places a bare end hour after the start hour where that reading makes sense.
fn infer_end_hour(hour: u32, start_hour: u32) -> u32 {
    let mut hour = hour;
    if hour <= start_hour && hour < 12 && hour + 12 > start_hour {
        hour += 12;
    }
    if hour == 12 && start_hour >= 12 {
        hour = 0;
    }
    hour
}
