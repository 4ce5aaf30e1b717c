//! Save-time validation.
//!
//! Each validator checks its rules in order and reports the first failing
//! rule as a single human-readable message.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use super::duration::{calculate_duration_hours, shift_duration};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{ClockTime, ConsiderationEvent, Coworker, ShiftRecord};

/// Message when the shift date is missing.
pub const DATE_REQUIRED: &str = "Date is required.";
/// Message when the start time is missing.
pub const START_TIME_REQUIRED: &str = "Start time is required.";
/// Message when the end time is missing.
pub const END_TIME_REQUIRED: &str = "End time is required.";
/// Message when the start time cannot be read and nothing is stored.
pub const START_TIME_INVALID: &str = "Start time is not a valid time.";
/// Message when the end time cannot be read and nothing is stored.
pub const END_TIME_INVALID: &str = "End time is not a valid time.";
/// Message when a wage window time cannot be read and nothing is stored.
pub const WAGE_TIME_INVALID: &str = "Wage time is not a valid time.";
/// Message when the shift has no positive duration.
pub const END_AFTER_START: &str = "End time must be after start time.";
/// Message when a required coworker field is blank.
pub const COWORKER_FIELDS_REQUIRED: &str = "Please fill in all required fields.";
/// Message when a coworker has no position.
pub const COWORKER_POSITION_REQUIRED: &str = "Please select at least one position.";
/// Message when a consideration event is incomplete.
pub const CONSIDERATION_FIELDS_REQUIRED: &str = "Please fill in Amount, Person, and Reason.";

/// Validates the mandatory fields of a shift draft.
///
/// Returns the date, start and end time once all are present and span a
/// positive duration.
///
/// # Examples
///
/// ```
/// use shift_tracker::calculation::validate_shift_times;
/// use shift_tracker::error::TrackerError;
/// use shift_tracker::models::ClockTime;
///
/// let result = validate_shift_times(None, ClockTime::new(17, 0), None);
/// match result {
///     Err(TrackerError::InvalidShift { message, .. }) => assert_eq!(message, "Date is required."),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
pub fn validate_shift_times(
    date: Option<NaiveDate>,
    start: Option<ClockTime>,
    end: Option<ClockTime>,
) -> TrackerResult<(NaiveDate, ClockTime, ClockTime)> {
    let date_label = date.map(|d| d.to_string()).unwrap_or_default();
    let fail = |message: &str| {
        warn!(date = %date_label, reason = message, "Shift rejected");
        Err(TrackerError::InvalidShift {
            date: date_label.clone(),
            message: message.to_string(),
        })
    };

    let Some(date) = date else {
        return fail(DATE_REQUIRED);
    };
    let Some(start) = start else {
        return fail(START_TIME_REQUIRED);
    };
    let Some(end) = end else {
        return fail(END_TIME_REQUIRED);
    };
    if calculate_duration_hours(Some(date), Some(start), Some(end)) <= Decimal::ZERO {
        return fail(END_AFTER_START);
    }

    Ok((date, start, end))
}

/// Validates a complete shift record before it is saved.
pub fn validate_shift(shift: &ShiftRecord) -> TrackerResult<()> {
    if shift_duration(shift) <= Decimal::ZERO {
        warn!(date = %shift.date, "Shift rejected: no positive duration");
        return Err(TrackerError::InvalidShift {
            date: shift.date.to_string(),
            message: END_AFTER_START.to_string(),
        });
    }
    Ok(())
}

/// Validates a coworker record: id, name, first name and last name are
/// required, and at least one position.
pub fn validate_coworker(coworker: &Coworker) -> TrackerResult<()> {
    let required = [
        ("id", &coworker.id),
        ("name", &coworker.name),
        ("firstName", &coworker.first_name),
        ("lastName", &coworker.last_name),
    ];

    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(TrackerError::InvalidCoworker {
            field: field.to_string(),
            message: COWORKER_FIELDS_REQUIRED.to_string(),
        });
    }

    if coworker.positions.is_empty() {
        return Err(TrackerError::InvalidCoworker {
            field: "positions".to_string(),
            message: COWORKER_POSITION_REQUIRED.to_string(),
        });
    }

    Ok(())
}

/// Validates a consideration event: person and reason are required.
pub fn validate_consideration_event(event: &ConsiderationEvent) -> TrackerResult<()> {
    if event.person.trim().is_empty() || event.reason.trim().is_empty() {
        return Err(TrackerError::InvalidDifferentialEvent {
            message: CONSIDERATION_FIELDS_REQUIRED.to_string(),
        });
    }
    Ok(())
}
