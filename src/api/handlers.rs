//! HTTP request handlers for the shift tracker API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_dashboard_stats, candidate_players, parse_time_input, summarize_shift, toggle_player,
};
use crate::config::AppContext;
use crate::error::TrackerError;
use crate::models::Coworker;

use super::request::{
    ChumpCandidatesRequest, ChumpToggleRequest, ShiftDraftRequest, TimeParseRequest,
};
use super::response::{ApiError, ApiErrorResponse, TimeParseResponse};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/time/parse", post(parse_time_handler))
        .route("/shifts/preview", post(preview_shift_handler))
        .route("/chump/candidates", post(chump_candidates_handler))
        .route("/chump/players", post(toggle_chump_player_handler))
        .route("/shifts", get(list_shifts_handler).post(create_shift_handler))
        .route(
            "/shifts/:date",
            get(get_shift_handler)
                .put(update_shift_handler)
                .delete(delete_shift_handler),
        )
        .route(
            "/coworkers",
            get(list_coworkers_handler).post(create_coworker_handler),
        )
        .route(
            "/coworkers/:id",
            put(update_coworker_handler).delete(delete_coworker_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/settings", get(get_settings_handler).put(update_settings_handler))
        .with_state(state)
}

/// Unwraps a JSON body, turning extractor rejections into API errors.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>, correlation_id: Uuid) -> ApiResult<T> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

/// Logs a rejected operation and converts the error for the response.
fn rejected(correlation_id: Uuid, error: TrackerError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %error, "Request rejected");
    error.into()
}

fn path_date(text: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
        ApiErrorResponse::bad_request(ApiError::validation_error(format!(
            "Invalid date in path: '{text}' (expected YYYY-MM-DD)"
        )))
    })
}

// ----------------------------------------------------------------------------
// Time parsing and preview
// ----------------------------------------------------------------------------

/// Handler for POST /time/parse.
async fn parse_time_handler(
    payload: Result<Json<TimeParseRequest>, JsonRejection>,
) -> ApiResult<Json<TimeParseResponse>> {
    let correlation_id = Uuid::new_v4();
    let request = json_body(payload, correlation_id)?;

    let parsed = parse_time_input(&request.input, request.context, request.paired_clock_time());
    debug!(
        correlation_id = %correlation_id,
        input = %request.input,
        result = ?parsed,
        "Time parsed"
    );
    Ok(Json(parsed.into()))
}

/// Handler for POST /shifts/preview.
///
/// Returns the full summary of a draft without saving it.
async fn preview_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftDraftRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift preview");
    let draft = json_body(payload, correlation_id)?;

    let context = state.context().await;
    let user = state.user_name().await?;
    let record = draft
        .into_record(&context, None, user.as_deref())
        .map_err(|e| rejected(correlation_id, e))?;

    let started = Instant::now();
    let summary = summarize_shift(&record);
    info!(
        correlation_id = %correlation_id,
        date = %record.date,
        total_earnings = %summary.earnings.total_earnings,
        duration_us = started.elapsed().as_micros(),
        "Shift preview completed"
    );
    Ok(Json(summary))
}

/// Handler for POST /chump/candidates.
///
/// Lists who can join the chump game: the team grid plus the app's user.
async fn chump_candidates_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChumpCandidatesRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<String>>> {
    let correlation_id = Uuid::new_v4();
    let request = json_body(payload, correlation_id)?;
    let user = state.user_name().await?;
    Ok(Json(candidate_players(&request.team_on_shift, user.as_deref())))
}

/// Handler for POST /chump/players.
async fn toggle_chump_player_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChumpToggleRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let request = json_body(payload, correlation_id)?;
    let user = state.user_name().await?;
    let game = toggle_player(&request.game, &request.name, user.as_deref());
    debug!(correlation_id = %correlation_id, name = %request.name, "Chump player toggled");
    Ok(Json(game))
}

// ----------------------------------------------------------------------------
// Shifts
// ----------------------------------------------------------------------------

/// Handler for GET /shifts.
async fn list_shifts_handler(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let shifts = state.store().lock().await.list_shifts()?;
    Ok(Json(shifts))
}

/// Handler for GET /shifts/:date.
async fn get_shift_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let date = path_date(&date)?;
    let shift = state.store().lock().await.get_shift(date)?;
    Ok(Json(shift))
}

/// Handler for POST /shifts.
async fn create_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftDraftRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift create");
    let draft = json_body(payload, correlation_id)?;

    let context = state.context().await;
    let user = state.user_name().await?;
    let record = draft
        .into_record(&context, None, user.as_deref())
        .map_err(|e| rejected(correlation_id, e))?;

    let saved = state
        .store()
        .lock()
        .await
        .add_shift(record)
        .map_err(|e| rejected(correlation_id, e))?;

    info!(correlation_id = %correlation_id, date = %saved.date, "Shift created");
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Handler for PUT /shifts/:date.
async fn update_shift_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
    payload: Result<Json<ShiftDraftRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Processing shift update");
    let date = path_date(&date)?;
    let draft = json_body(payload, correlation_id)?;

    let context = state.context().await;
    let user = state.user_name().await?;
    let mut store = state.store().lock().await;
    let previous = store
        .get_shift(date)
        .map_err(|e| rejected(correlation_id, e))?;
    let record = draft
        .into_record(&context, Some(&previous), user.as_deref())
        .map_err(|e| rejected(correlation_id, e))?;
    let saved = store
        .update_shift(date, record)
        .map_err(|e| rejected(correlation_id, e))?;

    Ok(Json(saved))
}

/// Handler for DELETE /shifts/:date.
async fn delete_shift_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> ApiResult<StatusCode> {
    let date = path_date(&date)?;
    state.store().lock().await.delete_shift(date)?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------------------------------------------------------------------
// Coworkers
// ----------------------------------------------------------------------------

/// Handler for GET /coworkers.
async fn list_coworkers_handler(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let roster = state.store().lock().await.list_coworkers()?;
    Ok(Json(roster))
}

/// Handler for POST /coworkers.
async fn create_coworker_handler(
    State(state): State<AppState>,
    payload: Result<Json<Coworker>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let coworker = json_body(payload, correlation_id)?;

    let mut store = state.store().lock().await;
    match store.get_coworker(&coworker.id) {
        Ok(_) => {
            return Err(rejected(
                correlation_id,
                TrackerError::DuplicateCoworker { id: coworker.id },
            ));
        }
        Err(TrackerError::CoworkerNotFound { .. }) => {}
        Err(err) => return Err(rejected(correlation_id, err)),
    }

    let saved = store
        .save_coworker(coworker)
        .map_err(|e| rejected(correlation_id, e))?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Handler for PUT /coworkers/:id.
async fn update_coworker_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Coworker>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let coworker = json_body(payload, correlation_id)?;
    if coworker.id != id {
        return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            format!("Coworker id '{}' does not match the path id '{}'", coworker.id, id),
        )));
    }

    let mut store = state.store().lock().await;
    store
        .get_coworker(&id)
        .map_err(|e| rejected(correlation_id, e))?;
    let saved = store
        .save_coworker(coworker)
        .map_err(|e| rejected(correlation_id, e))?;
    Ok(Json(saved))
}

/// Handler for DELETE /coworkers/:id.
async fn delete_coworker_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store().lock().await.delete_coworker(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------------------------------------------------------------------
// Stats and settings
// ----------------------------------------------------------------------------

/// Handler for GET /stats.
async fn stats_handler(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let shifts = state.store().lock().await.list_shifts()?;
    Ok(Json(calculate_dashboard_stats(&shifts)))
}

/// Handler for GET /settings.
async fn get_settings_handler(State(state): State<AppState>) -> Json<AppContext> {
    Json(state.context().await)
}

/// Handler for PUT /settings.
async fn update_settings_handler(
    State(state): State<AppState>,
    payload: Result<Json<AppContext>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let context = json_body(payload, correlation_id)?;

    state
        .config()
        .write()
        .await
        .replace(context.clone())
        .map_err(|e| rejected(correlation_id, e))?;

    info!(correlation_id = %correlation_id, "Settings updated");
    Ok(Json(context))
}
