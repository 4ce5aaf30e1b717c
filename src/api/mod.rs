//! HTTP API module for the shift tracker.
//!
//! This module exposes the time parser, shift previews, the shift and
//! coworker stores, dashboard statistics and settings as a JSON API.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ChumpCandidatesRequest, ChumpToggleRequest, DATE_FORMAT_INVALID, ShiftDraftRequest,
    TimeParseRequest,
};
pub use response::{ApiError, ApiErrorResponse, ParseStatus, TimeParseResponse};
pub use state::AppState;
