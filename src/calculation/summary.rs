//! Shift summary and commit.
//!
//! [`summarize_shift`] runs a shift through the whole pipeline (durations,
//! tips, wage, differentials, chump game) and records each step.
//! [`commit_shift`] validates a shift and bakes the derived values into it.

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::chump_game::resolve_chump_game;
use super::duration::{shift_duration, wage_duration};
use super::earnings::{EarningsInput, calculate_earnings};
use super::validation::validate_shift;
use crate::error::TrackerResult;
use crate::models::{CalculationStep, ChumpResolution, ShiftRecord, ShiftSummary};

fn opt(value: Option<Decimal>) -> serde_json::Value {
    match value {
        Some(v) => json!(v.normalize().to_string()),
        None => serde_json::Value::Null,
    }
}

fn money(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Computes the derived, read-only summary of a shift.
///
/// Pure: the record is not modified.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use shift_tracker::calculation::summarize_shift;
/// use shift_tracker::models::{ClockTime, ShiftRecord};
///
/// let mut shift = ShiftRecord::new(
///     NaiveDate::from_ymd_opt(2024, 7, 22).unwrap(),
///     ClockTime::new(18, 0).unwrap(),
///     ClockTime::new(2, 0).unwrap(),
/// );
/// shift.tips = Some(Decimal::new(31050, 2));
/// let summary = summarize_shift(&shift);
/// assert_eq!(summary.duration, Decimal::new(8, 0));
/// assert_eq!(summary.earnings.tips_per_hour, Decimal::new(3881, 2));
/// ```
pub fn summarize_shift(shift: &ShiftRecord) -> ShiftSummary {
    let mut steps = Vec::new();
    let mut step_number = 0u32;
    let mut push = |rule_id: &str, rule_name: &str, input, output, reasoning: String| {
        step_number += 1;
        steps.push(CalculationStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    };

    let duration = shift_duration(shift);
    push(
        "shift_duration",
        "Shift Duration",
        json!({
            "date": shift.id(),
            "start_time": shift.start_time.to_string(),
            "end_time": shift.end_time.to_string()
        }),
        json!({ "hours": money(duration) }),
        if shift.end_time <= shift.start_time {
            format!(
                "{} to {} crosses midnight: {} hours",
                shift.start_time,
                shift.end_time,
                money(duration)
            )
        } else {
            format!("{} to {}: {} hours", shift.start_time, shift.end_time, money(duration))
        },
    );

    let wage_hours = wage_duration(shift);
    let wage_start = shift.effective_wage_start();
    let wage_end = shift.effective_wage_end();
    push(
        "wage_duration",
        "Wage Window",
        json!({
            "wage_start_time": wage_start.to_string(),
            "wage_end_time": wage_end.to_string(),
            "inherited": shift.wage_start_time.is_none() && shift.wage_end_time.is_none()
        }),
        json!({ "hours": money(wage_hours) }),
        format!("Wage window {} to {}: {} hours", wage_start, wage_end, money(wage_hours)),
    );

    let chump = shift
        .chump_game
        .as_ref()
        .map(|game| resolve_chump_game(game, game.inferred_mode()))
        .unwrap_or_default();
    push(
        "chump_game",
        "Chump Game",
        json!({
            "played": shift.chump_game.is_some(),
            "mode": shift.chump_game.as_ref().map(|g| g.inferred_mode()),
            "winner_name": shift.chump_game.as_ref().and_then(|g| g.winner_name.clone())
        }),
        json!({
            "pot": money(chump.pot),
            "payout_to_user": money(chump.payout_to_user)
        }),
        chump_reasoning(shift, &chump),
    );

    let earnings = calculate_earnings(&EarningsInput {
        tips: shift.tips,
        tip_out: shift.tip_out,
        hourly_rate: shift.hourly_rate,
        duration,
        wage_duration: wage_hours,
        differentials: shift.differentials.as_ref(),
        chump_payout: chump.payout_to_user,
    });

    push(
        "tips",
        "Tips",
        json!({
            "tips": opt(shift.tips),
            "tip_out": opt(shift.tip_out),
            "hours": money(duration)
        }),
        json!({
            "tips_per_hour": money(earnings.tips_per_hour),
            "net_tips": money(earnings.net_tips)
        }),
        match shift.tips {
            Some(tips) => format!(
                "${} over {} hours = ${}/hour; net of tip-out ${}",
                money(tips),
                money(duration),
                money(earnings.tips_per_hour),
                money(earnings.net_tips)
            ),
            None => "Tips pending".to_string(),
        },
    );

    push(
        "base_wage",
        "Base Wage",
        json!({
            "hourly_rate": opt(shift.hourly_rate),
            "wage_hours": money(wage_hours)
        }),
        json!({ "base_wage": money(earnings.base_wage) }),
        match shift.hourly_rate {
            Some(rate) => format!(
                "${} x {} hours = ${}",
                money(rate),
                money(wage_hours),
                money(earnings.base_wage)
            ),
            None => "No hourly rate set".to_string(),
        },
    );

    let diffs = &earnings.differentials;
    push(
        "differentials",
        "Differentials",
        json!({
            "consideration_itemized": shift.differentials.as_ref().is_some_and(|d| d.consideration.is_itemized()),
            "tip_itemized": shift.differentials.as_ref().is_some_and(|d| d.tip.is_itemized()),
            "wage_hours": money(wage_hours)
        }),
        json!({
            "consideration": money(diffs.consideration),
            "tip": money(diffs.tip),
            "role": money(diffs.role),
            "overtime": money(diffs.overtime),
            "total": money(diffs.total)
        }),
        format!(
            "${} + ${} + ${} + ${} = ${}",
            money(diffs.consideration),
            money(diffs.tip),
            money(diffs.role),
            money(diffs.overtime),
            money(diffs.total)
        ),
    );

    push(
        "total_earnings",
        "Total Earnings",
        json!({
            "net_tips": money(earnings.net_tips),
            "base_wage": money(earnings.base_wage),
            "differential": money(diffs.total),
            "chump": money(earnings.chump_payout)
        }),
        json!({ "total_earnings": money(earnings.total_earnings) }),
        format!(
            "${} + ${} + ${} + ${} = ${}",
            money(earnings.net_tips),
            money(earnings.base_wage),
            money(diffs.total),
            money(earnings.chump_payout),
            money(earnings.total_earnings)
        ),
    );

    ShiftSummary {
        summary_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        date: shift.date,
        duration,
        wage_duration: wage_hours,
        tips: shift.tips,
        chump,
        earnings,
        steps,
    }
}

fn chump_reasoning(shift: &ShiftRecord, chump: &ChumpResolution) -> String {
    let Some(game) = &shift.chump_game else {
        return "No chump game played".to_string();
    };
    match (&game.winner_name, game.user_player()) {
        (None, _) => format!("Pot ${}, no winner yet", money(chump.pot)),
        (Some(winner), Some(user)) if *winner == user.name => {
            format!("{} won the ${} pot", winner, money(chump.pot))
        }
        (Some(winner), _) => format!("{} won the ${} pot; no payout", winner, money(chump.pot)),
    }
}

/// Validates a shift and bakes the derived fields into it.
///
/// Sets `duration`, `tips_per_hour` (absent when tips are absent), `wage`,
/// `differential` and `chump`.
///
/// # Errors
///
/// Returns `InvalidShift` if the shift has no positive duration.
pub fn commit_shift(shift: ShiftRecord) -> TrackerResult<ShiftRecord> {
    validate_shift(&shift)?;

    let summary = summarize_shift(&shift);
    let mut shift = shift;
    shift.duration = summary.duration;
    shift.tips_per_hour = shift.tips.map(|_| summary.earnings.tips_per_hour);
    shift.wage = summary.earnings.base_wage;
    shift.differential = summary.earnings.differentials.total;
    shift.chump = summary.chump.payout_to_user;

    info!(
        date = %shift.date,
        duration = %shift.duration,
        total_earnings = %summary.earnings.total_earnings,
        "Shift committed"
    );

    Ok(shift)
}
