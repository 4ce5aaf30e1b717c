//! Response types for the shift tracker API.
//!
//! This module defines the time-parse response, the error response
//! structures and the mapping from [`TrackerError`] to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::ParsedTime;
use crate::error::TrackerError;
use crate::models::ClockTime;

/// Outcome of a time parse, as reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStatus {
    /// The input is a valid time.
    Valid,
    /// The input was blank.
    Empty,
    /// The input could not be read; the field keeps its last valid value.
    Invalid,
}

/// Response body for `POST /time/parse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeParseResponse {
    /// The parse outcome.
    pub status: ParseStatus,
    /// The canonical time when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<ClockTime>,
}

impl From<ParsedTime> for TimeParseResponse {
    fn from(parsed: ParsedTime) -> Self {
        let status = match parsed {
            ParsedTime::Valid(_) => ParseStatus::Valid,
            ParsedTime::Empty => ParseStatus::Empty,
            ParsedTime::Invalid => ParseStatus::Invalid,
        };
        Self {
            status,
            time: parsed.time(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TrackerError> for ApiErrorResponse {
    fn from(error: TrackerError) -> Self {
        // Validation messages are shown to the user as-is.
        let (status, error) = match error {
            TrackerError::InvalidShift { date, message } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details("INVALID_SHIFT", message, format!("Shift date: '{date}'")),
            ),
            TrackerError::InvalidCoworker { field, message } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details("INVALID_COWORKER", message, format!("Field: {field}")),
            ),
            TrackerError::InvalidParty { name, message } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details("INVALID_PARTY", message, format!("Party: '{name}'")),
            ),
            TrackerError::InvalidDifferentialEvent { message } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_EVENT", message),
            ),
            err @ (TrackerError::ShiftNotFound { .. } | TrackerError::CoworkerNotFound { .. }) => {
                (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", err.to_string()))
            }
            err @ (TrackerError::DuplicateShift { .. } | TrackerError::DuplicateCoworker { .. }) => {
                (StatusCode::CONFLICT, ApiError::new("CONFLICT", err.to_string()))
            }
            err @ (TrackerError::ConfigNotFound { .. }
            | TrackerError::ConfigParseError { .. }
            | TrackerError::ConfigWriteError { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", err.to_string()),
            ),
            err @ (TrackerError::RowDecodeError { .. }
            | TrackerError::RowEncodeError { .. }
            | TrackerError::BackendError { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("STORAGE_ERROR", "Storage error", err.to_string()),
            ),
        };
        Self { status, error }
    }
}
