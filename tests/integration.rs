//! Integration tests for the shift tracker.
//!
//! This test suite drives the public API end to end:
//! - Time parsing through the router
//! - Shift previews (tips per hour, differentials, chump game)
//! - Shift create/update/delete and the cash/credit tips sync
//! - Storage round trips of nested fields
//! - Coworker roster and the single-user rule
//! - Dashboard statistics
//! - Settings persistence
//! - Property tests for the parser and duration arithmetic

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use shift_tracker::api::{AppState, create_router};
use shift_tracker::calculation::{
    ParsedTime, TimeContext, calculate_duration_hours, parse_time_input,
};
use shift_tracker::config::{AppContext, ConfigLoader};
use shift_tracker::models::ClockTime;
use shift_tracker::storage::SheetStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal that serde wrote as a string.
fn decimal_at(value: &Value) -> Decimal {
    match value {
        Value::String(s) => decimal(s),
        Value::Number(n) => decimal(&n.to_string()),
        other => panic!("expected a decimal, got {other}"),
    }
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

fn draft(date: &str, start: &str, end: &str) -> Value {
    json!({
        "date": date,
        "startTime": start,
        "endTime": end
    })
}

fn coworker(id: &str, first_name: &str, is_user: bool) -> Value {
    json!({
        "id": id,
        "name": first_name,
        "firstName": first_name,
        "lastName": "Lopez",
        "positions": ["Bartender"],
        "manager": false,
        "isUser": is_user
    })
}

fn router() -> Router {
    create_router(AppState::in_memory())
}

// =============================================================================
// Time Parsing
// =============================================================================

async fn parse_via_api(router: &Router, input: &str, context: &str, paired: Option<&str>) -> Value {
    let (status, body) = send(
        router,
        "POST",
        "/time/parse",
        Some(json!({ "input": input, "context": context, "paired_time": paired })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn test_time_parse_start_context() {
    let router = router();
    let cases = [
        ("5p", "17:00"),
        ("10", "10:00"),
        ("5", "17:00"),
        ("1.5", "01:30"),
        ("1730", "17:30"),
    ];
    for (input, expected) in cases {
        let body = parse_via_api(&router, input, "start", None).await;
        assert_eq!(body["status"], "valid", "input {input}");
        assert_eq!(body["time"], expected, "input {input}");
    }
}

#[tokio::test]
async fn test_time_parse_end_context_uses_paired_start() {
    let router = router();

    let body = parse_via_api(&router, "1", "end", Some("17:00")).await;
    assert_eq!(body["time"], "01:00");

    let body = parse_via_api(&router, "5", "end", Some("10:00")).await;
    assert_eq!(body["time"], "17:00");

    let body = parse_via_api(&router, "12", "end", Some("18:00")).await;
    assert_eq!(body["time"], "00:00");
}

#[tokio::test]
async fn test_time_parse_empty_and_invalid() {
    let router = router();

    let body = parse_via_api(&router, "   ", "start", None).await;
    assert_eq!(body, json!({ "status": "empty" }));

    let body = parse_via_api(&router, "25", "start", None).await;
    assert_eq!(body, json!({ "status": "invalid" }));

    let body = parse_via_api(&router, "5x", "start", None).await;
    assert_eq!(body["status"], "invalid");
}

#[tokio::test]
async fn test_time_parse_rejects_unknown_context() {
    let router = router();
    let (status, body) = send(
        &router,
        "POST",
        "/time/parse",
        Some(json!({ "input": "5", "context": "middle" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

// =============================================================================
// Shift Preview
// =============================================================================

#[tokio::test]
async fn test_preview_tips_per_hour() {
    let router = router();
    let mut body = draft("2024-07-22", "6p", "2");
    body["tips"] = json!("310.50");

    let (status, summary) = send(&router, "POST", "/shifts/preview", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&summary["duration"]), decimal("8"));
    assert_eq!(decimal_at(&summary["earnings"]["tipsPerHour"]), decimal("38.81"));
    assert_eq!(decimal_at(&summary["earnings"]["baseWage"]), decimal("40"));
    assert!(!summary["steps"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_preview_crossing_midnight() {
    let router = router();
    let (status, summary) = send(
        &router,
        "POST",
        "/shifts/preview",
        Some(draft("2024-07-21", "5p", "1:30")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&summary["duration"]), decimal("8.5"));
}

#[tokio::test]
async fn test_preview_differentials_total() {
    let router = router();
    let mut body = draft("2024-07-22", "6p", "2");
    body["hourlyRate"] = json!("");
    body["differentials"] = json!({
        "consideration": { "mode": "total", "total": "-10" },
        "tip": { "mode": "total", "total": "20" },
        "role": { "hourlyBonus": "0", "flatBonus": "15" },
        "overtime": "25"
    });

    let (status, summary) = send(&router, "POST", "/shifts/preview", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&summary["wageDuration"]), decimal("8"));
    assert_eq!(
        decimal_at(&summary["earnings"]["differentials"]["total"]),
        decimal("50")
    );
    assert_eq!(decimal_at(&summary["earnings"]["totalEarnings"]), decimal("50"));
}

#[tokio::test]
async fn test_preview_itemized_consideration() {
    let router = router();
    let mut body = draft("2024-07-22", "6p", "2");
    body["differentials"] = json!({
        "consideration": {
            "mode": "events",
            "events": [
                { "id": "c1", "amount": "-10", "person": "Sam", "reason": "Covered break" },
                { "id": "c2", "amount": "4.50", "person": "Jo", "reason": "Swapped section" }
            ]
        }
    });

    let (_, summary) = send(&router, "POST", "/shifts/preview", Some(body)).await;
    assert_eq!(
        decimal_at(&summary["earnings"]["differentials"]["consideration"]),
        decimal("-5.50")
    );
}

#[tokio::test]
async fn test_preview_chump_game_breakdown() {
    let router = router();
    let game = |winner: &str| {
        json!({
            "players": [
                { "name": "Ian", "isUser": true },
                { "name": "Sam", "isUser": false }
            ],
            "pot": "0",
            "coins": "1.50",
            "cash": "4.00",
            "winnerName": winner
        })
    };

    let mut body = draft("2024-07-22", "6p", "2");
    body["chumpGame"] = game("Ian");
    let (_, summary) = send(&router, "POST", "/shifts/preview", Some(body)).await;
    assert_eq!(decimal_at(&summary["chump"]["pot"]), decimal("5.50"));
    assert_eq!(decimal_at(&summary["chump"]["payoutToUser"]), decimal("5.50"));

    let mut body = draft("2024-07-22", "6p", "2");
    body["chumpGame"] = game("Sam");
    let (_, summary) = send(&router, "POST", "/shifts/preview", Some(body)).await;
    assert_eq!(decimal_at(&summary["chump"]["pot"]), decimal("5.50"));
    assert_eq!(decimal_at(&summary["chump"]["payoutToUser"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_huge_money_values_saturate_instead_of_failing() {
    let router = router();
    let huge = "79228162514264337593543950335";
    let mut body = draft("2024-07-22", "17:00", "17:01");
    body["tips"] = json!(huge);
    body["hourlyRate"] = json!(huge);
    body["differentials"] = json!({
        "role": { "hourlyBonus": huge, "flatBonus": huge },
        "overtime": huge
    });

    let (status, summary) = send(&router, "POST", "/shifts/preview", Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&summary["duration"]), decimal("0.02"));
    assert_eq!(decimal_at(&summary["earnings"]["tipsPerHour"]), Decimal::MAX);
    assert_eq!(decimal_at(&summary["earnings"]["totalEarnings"]), Decimal::MAX);

    let (status, saved) = send(&router, "POST", "/shifts", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(decimal_at(&saved["tipsPerHour"]), Decimal::MAX);

    let (status, stats) = send(&router, "GET", "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&stats["average_tips_per_hour"]), Decimal::MAX);
}

#[tokio::test]
async fn test_preview_validation_messages() {
    let router = router();

    let (status, body) = send(
        &router,
        "POST",
        "/shifts/preview",
        Some(draft("", "5p", "1")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SHIFT");
    assert_eq!(body["message"], "Date is required.");

    let (_, body) = send(
        &router,
        "POST",
        "/shifts/preview",
        Some(draft("2024-07-22", "", "1")),
    )
    .await;
    assert_eq!(body["message"], "Start time is required.");

    let (_, body) = send(
        &router,
        "POST",
        "/shifts/preview",
        Some(draft("2024-07-22", "5p", "")),
    )
    .await;
    assert_eq!(body["message"], "End time is required.");
}

// =============================================================================
// Shift Storage
// =============================================================================

#[tokio::test]
async fn test_create_shift_bakes_derived_fields() {
    let router = router();
    let mut body = draft("2024-07-22", "6p", "2");
    body["tips"] = json!("310.50");

    let (status, saved) = send(&router, "POST", "/shifts", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(saved["startTime"], "18:00");
    assert_eq!(saved["endTime"], "02:00");
    assert_eq!(decimal_at(&saved["duration"]), decimal("8"));
    assert_eq!(decimal_at(&saved["tipsPerHour"]), decimal("38.81"));
    assert_eq!(decimal_at(&saved["wage"]), decimal("40"));

    let (status, fetched) = send(&router, "GET", "/shifts/2024-07-22", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, saved);
}

#[tokio::test]
async fn test_pending_tips_stay_absent() {
    let router = router();
    let (_, saved) = send(&router, "POST", "/shifts", Some(draft("2024-07-22", "6p", "2"))).await;
    assert!(saved["tips"].is_null());
    assert!(saved["tipsPerHour"].is_null());
}

#[tokio::test]
async fn test_duplicate_date_conflicts() {
    let router = router();
    let body = draft("2024-07-22", "6p", "2");
    let (status, _) = send(&router, "POST", "/shifts", Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, error) = send(&router, "POST", "/shifts", Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "CONFLICT");
}

#[tokio::test]
async fn test_cash_credit_sync_and_manual_override() {
    let router = router();
    let mut body = draft("2024-07-22", "6p", "2");
    body["tips"] = json!("0");
    body["cashTips"] = json!("100");
    body["creditTips"] = json!("210.50");

    let (_, saved) = send(&router, "POST", "/shifts", Some(body.clone())).await;
    assert_eq!(decimal_at(&saved["tips"]), decimal("310.50"));

    body["tips"] = json!("300");
    let (status, updated) = send(&router, "PUT", "/shifts/2024-07-22", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&updated["tips"]), decimal("300"));
    assert_eq!(decimal_at(&updated["cashTips"]), decimal("100"));
    assert_eq!(decimal_at(&updated["creditTips"]), decimal("210.50"));
    assert_eq!(decimal_at(&updated["tipsPerHour"]), decimal("37.5"));
}

#[tokio::test]
async fn test_unreadable_times_keep_stored_values_on_update() {
    let router = router();
    let (status, error) = send(
        &router,
        "POST",
        "/shifts",
        Some(draft("2024-07-22", "5x", "1")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Start time is not a valid time.");

    send(&router, "POST", "/shifts", Some(draft("2024-07-22", "5p", "1"))).await;

    let mut body = draft("2024-07-22", "5x", "2");
    body["tips"] = json!("180");
    let (status, updated) = send(&router, "PUT", "/shifts/2024-07-22", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["startTime"], "17:00");
    assert_eq!(updated["endTime"], "02:00");
    assert_eq!(decimal_at(&updated["duration"]), decimal("9"));

    let (status, updated) = send(
        &router,
        "PUT",
        "/shifts/2024-07-22",
        Some(draft("2024-07-22", "6p", "later")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["startTime"], "18:00");
    assert_eq!(updated["endTime"], "02:00");
}

#[tokio::test]
async fn test_list_shifts_newest_first_and_delete() {
    let router = router();
    for date in ["2024-07-20", "2024-07-22", "2024-07-21"] {
        let (status, _) = send(&router, "POST", "/shifts", Some(draft(date, "6p", "2"))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, shifts) = send(&router, "GET", "/shifts", None).await;
    let dates: Vec<&str> = shifts
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-07-22", "2024-07-21", "2024-07-20"]);

    let (status, _) = send(&router, "DELETE", "/shifts/2024-07-21", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, error) = send(&router, "GET", "/shifts/2024-07-21", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_nested_fields_round_trip_through_storage() {
    let router = router();
    let mut body = draft("2024-07-22", "5p", "1");
    body["notes"] = json!("  Wedding on the deck\nBusy bar ");
    body["teamOnShift"] = json!({
        "Bartender": [
            { "rowId": "r1", "coworkerId": "1444", "name": "Ian",
              "startTime": "17:00", "endTime": "01:00", "location": "main" },
            { "rowId": "r2", "name": "Guest", "startTime": "", "endTime": "", "location": "" }
        ],
        "Server": []
    });
    body["parties"] = json!([{
        "id": "party-1",
        "name": "Lopez Wedding",
        "type": "wedding",
        "cutType": "night",
        "location": "deck",
        "time": { "start": "18:00", "end": "23:00", "duration": "5" },
        "size": 120,
        "packages": { "drink": "Premium", "food": "Buffet" }
    }]);
    body["differentials"] = json!({
        "consideration": { "mode": "events", "events": [
            { "id": "c1", "amount": "-10", "person": "Sam", "reason": "Covered break", "note": "Owe lunch" }
        ]},
        "tip": { "mode": "total", "total": "20" },
        "role": { "hourlyBonus": "1.25", "flatBonus": "0" },
        "overtime": "0"
    });
    body["chumpGame"] = json!({
        "players": [{ "name": "Ian", "isUser": true }],
        "pot": "12",
        "winnerName": null
    });

    let (status, saved) = send(&router, "POST", "/shifts", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, fetched) = send(&router, "GET", "/shifts/2024-07-22", None).await;
    assert_eq!(fetched, saved);
    assert_eq!(fetched["notes"], "  Wedding on the deck\nBusy bar ");
    assert_eq!(fetched["teamOnShift"]["Bartender"][1]["startTime"], "");
    assert_eq!(fetched["parties"][0]["location"], "deck");
    assert_eq!(
        fetched["differentials"]["consideration"]["events"][0]["note"],
        "Owe lunch"
    );
}

#[tokio::test]
async fn test_empty_record_round_trips_through_storage() {
    let router = router();
    let mut body = draft("2024-07-22", "5p", "1");
    body["hourlyRate"] = json!("");

    let (_, saved) = send(&router, "POST", "/shifts", Some(body)).await;
    let (_, fetched) = send(&router, "GET", "/shifts/2024-07-22", None).await;
    assert_eq!(fetched, saved);
    assert!(fetched["differentials"].is_null());
    assert!(fetched["chumpGame"].is_null());
    assert_eq!(fetched["teamOnShift"], json!({}));
    assert_eq!(fetched["parties"], json!([]));
}

// =============================================================================
// Coworkers
// =============================================================================

#[tokio::test]
async fn test_coworker_roster_is_sorted() {
    let router = router();
    for (id, name) in [("3", "sam"), ("1", "Ian"), ("2", "Jess")] {
        let (status, _) = send(&router, "POST", "/coworkers", Some(coworker(id, name, false))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, roster) = send(&router, "GET", "/coworkers", None).await;
    let names: Vec<&str> = roster
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["firstName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ian", "Jess", "sam"]);
}

#[tokio::test]
async fn test_only_one_coworker_is_the_user() {
    let router = router();
    send(&router, "POST", "/coworkers", Some(coworker("1", "Jess", true))).await;
    send(&router, "POST", "/coworkers", Some(coworker("2", "Sam", false))).await;

    let (status, _) = send(&router, "PUT", "/coworkers/2", Some(coworker("2", "Sam", true))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, roster) = send(&router, "GET", "/coworkers", None).await;
    let users: Vec<&str> = roster
        .as_array()
        .unwrap()
        .iter()
        .filter(|c| c["isUser"] == json!(true))
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(users, vec!["2"]);
}

#[tokio::test]
async fn test_coworker_validation_and_lookups() {
    let router = router();

    let mut missing_position = coworker("1", "Jess", false);
    missing_position["positions"] = json!([]);
    let (status, error) = send(&router, "POST", "/coworkers", Some(missing_position)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_COWORKER");
    assert_eq!(error["message"], "Please select at least one position.");

    let mut missing_name = coworker("1", "Jess", false);
    missing_name["lastName"] = json!("  ");
    let (_, error) = send(&router, "POST", "/coworkers", Some(missing_name)).await;
    assert_eq!(error["message"], "Please fill in all required fields.");

    let (status, _) = send(&router, "PUT", "/coworkers/9", Some(coworker("9", "Al", false))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(&router, "POST", "/coworkers", Some(coworker("1", "Jess", false))).await;
    let (status, _) = send(&router, "POST", "/coworkers", Some(coworker("1", "Jess", false))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&router, "DELETE", "/coworkers/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&router, "DELETE", "/coworkers/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Chump Game and the App's User
// =============================================================================

fn chump_without_user(winner: &str) -> Value {
    json!({
        "players": [{ "name": "Sam", "isUser": false }],
        "pot": "12",
        "winnerName": winner
    })
}

#[tokio::test]
async fn test_chump_game_pays_roster_user_added_automatically() {
    let router = router();
    send(&router, "POST", "/coworkers", Some(coworker("1444", "Ian", true))).await;

    let mut body = draft("2024-07-22", "6p", "2");
    body["chumpGame"] = chump_without_user("Ian");
    let (status, summary) = send(&router, "POST", "/shifts/preview", Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&summary["chump"]["payoutToUser"]), decimal("12"));

    let (status, saved) = send(&router, "POST", "/shifts", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(decimal_at(&saved["chump"]), decimal("12"));
    let players = saved["chumpGame"]["players"].as_array().unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[1]["name"], "Ian");
    assert_eq!(players[1]["isUser"], true);
}

#[tokio::test]
async fn test_configured_user_wins_over_roster_flag() {
    let context = AppContext {
        current_user_id: Some("2".to_string()),
        ..AppContext::default()
    };
    let router = create_router(AppState::new(
        SheetStore::in_memory(),
        ConfigLoader::from_context(context),
    ));
    send(&router, "POST", "/coworkers", Some(coworker("1", "Ian", true))).await;
    send(&router, "POST", "/coworkers", Some(coworker("2", "Jess", false))).await;

    let mut body = draft("2024-07-22", "6p", "2");
    body["chumpGame"] = chump_without_user("Ian");
    let (_, summary) = send(&router, "POST", "/shifts/preview", Some(body.clone())).await;
    assert_eq!(decimal_at(&summary["chump"]["payoutToUser"]), Decimal::ZERO);

    body["chumpGame"] = chump_without_user("Jess");
    let (_, summary) = send(&router, "POST", "/shifts/preview", Some(body)).await;
    assert_eq!(decimal_at(&summary["chump"]["payoutToUser"]), decimal("12"));
}

#[tokio::test]
async fn test_chump_candidates_and_toggle() {
    let router = router();
    send(&router, "POST", "/coworkers", Some(coworker("1444", "Ian", true))).await;

    let team = json!({
        "Bartender": [
            { "rowId": "r1", "name": "Sam", "startTime": "", "endTime": "", "location": "" },
            { "rowId": "r2", "name": "Ian", "startTime": "", "endTime": "", "location": "" }
        ],
        "Server": [
            { "rowId": "r3", "name": "Jo", "startTime": "", "endTime": "", "location": "" }
        ]
    });
    let (status, names) = send(
        &router,
        "POST",
        "/chump/candidates",
        Some(json!({ "teamOnShift": team })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names, json!(["Sam", "Ian", "Jo"]));

    let (status, game) = send(
        &router,
        "POST",
        "/chump/players",
        Some(json!({ "name": "Ian" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(game["players"], json!([{ "name": "Ian", "isUser": true }]));

    let (_, game) = send(
        &router,
        "POST",
        "/chump/players",
        Some(json!({ "game": game, "name": "Ian" })),
    )
    .await;
    assert_eq!(game["players"], json!([]));
}

// =============================================================================
// Stats and Settings
// =============================================================================

#[tokio::test]
async fn test_dashboard_stats() {
    let router = router();

    let (_, stats) = send(&router, "GET", "/stats", None).await;
    assert_eq!(stats["total_shifts"], 0);
    assert_eq!(decimal_at(&stats["average_tips_per_hour"]), Decimal::ZERO);

    let mut tipped = draft("2024-07-22", "6p", "2");
    tipped["tips"] = json!("240");
    send(&router, "POST", "/shifts", Some(tipped)).await;
    send(&router, "POST", "/shifts", Some(draft("2024-07-23", "6p", "10"))).await;

    let (status, stats) = send(&router, "GET", "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_shifts"], 2);
    assert_eq!(decimal_at(&stats["total_hours"]), decimal("12"));
    assert_eq!(decimal_at(&stats["total_tips"]), decimal("240"));
    assert_eq!(decimal_at(&stats["average_tips_per_hour"]), decimal("30"));
}

#[tokio::test]
async fn test_default_hourly_rate_comes_from_settings() {
    let context = AppContext {
        default_hourly_rate: decimal("7.25"),
        ..AppContext::default()
    };
    let state = AppState::new(SheetStore::in_memory(), ConfigLoader::from_context(context));
    let router = create_router(state);

    let (_, saved) = send(&router, "POST", "/shifts", Some(draft("2024-07-22", "6p", "2"))).await;
    assert_eq!(decimal_at(&saved["hourlyRate"]), decimal("7.25"));
    assert_eq!(decimal_at(&saved["wage"]), decimal("58"));
}

#[tokio::test]
async fn test_settings_are_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(SheetStore::in_memory(), ConfigLoader::load_or_default(dir.path()));
    let router = create_router(state);

    let (status, settings) = send(&router, "GET", "/settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings["positions"][0], "Bartender");

    let mut updated = settings.clone();
    updated["positions"] = json!(["Bartender", "Barback"]);
    updated["current_user_id"] = json!("1444");
    let (status, _) = send(&router, "PUT", "/settings", Some(updated)).await;
    assert_eq!(status, StatusCode::OK);

    let reloaded = ConfigLoader::load(dir.path()).unwrap();
    assert_eq!(reloaded.context().positions, vec!["Bartender", "Barback"]);
    assert_eq!(reloaded.context().current_user_id.as_deref(), Some("1444"));
}

#[test]
fn test_bundled_settings_file_loads() {
    let loader = ConfigLoader::load("./config").unwrap();
    assert_eq!(loader.context().positions.len(), 6);
    assert_eq!(loader.context().default_hourly_rate, decimal("5.00"));
}

// =============================================================================
// Property Tests
// =============================================================================

fn context_strategy() -> impl Strategy<Value = TimeContext> {
    prop_oneof![Just(TimeContext::Start), Just(TimeContext::End)]
}

fn clock_time_strategy() -> impl Strategy<Value = ClockTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| ClockTime::new(h, m).unwrap())
}

proptest! {
    #[test]
    fn prop_canonical_text_parses_to_itself(
        time in clock_time_strategy(),
        context in context_strategy(),
        paired in proptest::option::of(clock_time_strategy()),
    ) {
        prop_assert_eq!(
            parse_time_input(&time.to_string(), context, paired),
            ParsedTime::Valid(time)
        );
    }

    #[test]
    fn prop_parse_is_idempotent(
        input in "[0-9apm.: ]{0,6}",
        context in context_strategy(),
        paired in proptest::option::of(clock_time_strategy()),
    ) {
        if let ParsedTime::Valid(time) = parse_time_input(&input, context, paired) {
            prop_assert_eq!(
                parse_time_input(&time.to_string(), context, paired),
                ParsedTime::Valid(time)
            );
        }
    }

    #[test]
    fn prop_duration_is_within_one_day(
        day in 0u32..365,
        start in clock_time_strategy(),
        end in clock_time_strategy(),
    ) {
        let date = NaiveDate::from_yo_opt(2024, day + 1).unwrap();
        let hours = calculate_duration_hours(Some(date), Some(start), Some(end));
        prop_assert!(hours > Decimal::ZERO);
        prop_assert!(hours <= Decimal::from(24));
    }

    #[test]
    fn prop_missing_input_gives_zero_duration(
        start in proptest::option::of(clock_time_strategy()),
        end in proptest::option::of(clock_time_strategy()),
        has_date in any::<bool>(),
    ) {
        let date = has_date.then(|| NaiveDate::from_ymd_opt(2024, 7, 22).unwrap());
        prop_assume!(date.is_none() || start.is_none() || end.is_none());
        prop_assert_eq!(calculate_duration_hours(date, start, end), Decimal::ZERO);
    }
}
