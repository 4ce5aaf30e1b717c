//! Error types for the shift tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the tracker can report: configuration problems,
//! save-time validation, storage lookups and row decoding.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the shift tracker.
///
/// The pure calculation functions never fail; this type is returned by
/// configuration loading, save-time validation and the storage layer.
///
/// # Example
///
/// ```
/// use shift_tracker::error::TrackerError;
///
/// let error = TrackerError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration file could not be written.
    #[error("Failed to write configuration file '{path}': {message}")]
    ConfigWriteError {
        /// The path that could not be written.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// A shift failed save-time validation.
    #[error("Invalid shift '{date}': {message}")]
    InvalidShift {
        /// The shift date, or an empty string when the date itself is missing.
        date: String,
        /// The message of the first failing rule.
        message: String,
    },

    /// A coworker record failed validation.
    #[error("Invalid coworker field '{field}': {message}")]
    InvalidCoworker {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A private party failed validation.
    #[error("Invalid party '{name}': {message}")]
    InvalidParty {
        /// The party name as entered (may be empty).
        name: String,
        /// A description of what made the party invalid.
        message: String,
    },

    /// A differential event failed validation.
    #[error("Invalid differential event: {message}")]
    InvalidDifferentialEvent {
        /// A description of what made the event invalid.
        message: String,
    },

    /// No shift is stored for the given date.
    #[error("Shift not found: {date}")]
    ShiftNotFound {
        /// The date that was looked up.
        date: NaiveDate,
    },

    /// A shift already exists for the given date.
    #[error("A shift already exists for {date}")]
    DuplicateShift {
        /// The conflicting date.
        date: NaiveDate,
    },

    /// No coworker is stored with the given id.
    #[error("Coworker not found: {id}")]
    CoworkerNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A coworker with the given id already exists.
    #[error("A coworker with id '{id}' already exists")]
    DuplicateCoworker {
        /// The conflicting id.
        id: String,
    },

    /// A stored row could not be decoded.
    #[error("Failed to decode row {row} of sheet '{sheet}': {message}")]
    RowDecodeError {
        /// The sheet (tab) name.
        sheet: String,
        /// The 1-based sheet row number.
        row: usize,
        /// A description of the decode error.
        message: String,
    },

    /// A record could not be encoded into a row.
    #[error("Failed to encode row for sheet '{sheet}': {message}")]
    RowEncodeError {
        /// The sheet (tab) name.
        sheet: String,
        /// A description of the encode error.
        message: String,
    },

    /// The sheet backend rejected an operation.
    #[error("Sheet backend error: {message}")]
    BackendError {
        /// A description of the backend failure.
        message: String,
    },
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;
