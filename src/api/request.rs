//! Request types for the shift tracker API.
//!
//! Shift drafts arrive the way the entry form holds them: times and money as
//! raw text. This module turns a draft into a [`ShiftRecord`].

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    END_TIME_INVALID, ParsedTime, START_TIME_INVALID, TimeContext, WAGE_TIME_INVALID,
    apply_time_input, apply_tip_breakdown, ensure_user_player, parse_time_input,
    validate_shift_times,
};
use crate::config::AppContext;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    ChumpGame, ClockTime, Differentials, PrivateParty, ShiftRecord, TeamOnShift,
};

/// Message for a date that is present but not `YYYY-MM-DD`.
pub const DATE_FORMAT_INVALID: &str = "Date must be in YYYY-MM-DD format.";

/// Request body for `POST /time/parse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeParseRequest {
    /// The raw text as typed.
    pub input: String,
    /// Whether the text is a start or an end time.
    pub context: TimeContext,
    /// The paired start time (`HH:MM`) when parsing an end time.
    #[serde(default)]
    pub paired_time: Option<String>,
}

impl TimeParseRequest {
    /// The paired time, if present and canonical.
    pub fn paired_clock_time(&self) -> Option<ClockTime> {
        self.paired_time
            .as_deref()
            .and_then(|text| ClockTime::from_str(text.trim()).ok())
    }
}

/// Request body for `POST /chump/candidates`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChumpCandidatesRequest {
    /// The team grid of the shift being edited.
    #[serde(default)]
    pub team_on_shift: TeamOnShift,
}

/// Request body for `POST /chump/players`: adds or removes `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChumpToggleRequest {
    /// The game as currently entered.
    #[serde(default)]
    pub game: ChumpGame,
    /// Player to add, or to remove if already playing.
    pub name: String,
}

/// A shift as held by the entry form.
///
/// Times are free-form text read by the time parser; money fields are
/// numeric text where an empty string means absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDraftRequest {
    /// The shift date (`YYYY-MM-DD`).
    pub date: String,
    /// Start time as typed.
    pub start_time: String,
    /// End time as typed.
    pub end_time: String,
    /// Total tips.
    #[serde(default)]
    pub tips: String,
    /// Cash part of the tips.
    #[serde(default)]
    pub cash_tips: String,
    /// Credit part of the tips.
    #[serde(default)]
    pub credit_tips: String,
    /// Tips paid out to support staff.
    #[serde(default)]
    pub tip_out: String,
    /// Hourly rate. Omitted means the configured default rate.
    #[serde(default)]
    pub hourly_rate: Option<String>,
    /// Wage window start as typed; empty follows the shift start.
    #[serde(default)]
    pub wage_start_time: String,
    /// Wage window end as typed; empty follows the shift end.
    #[serde(default)]
    pub wage_end_time: String,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Workers on shift, keyed by position.
    #[serde(default)]
    pub team_on_shift: TeamOnShift,
    /// Private parties worked during the shift.
    #[serde(default)]
    pub parties: Vec<PrivateParty>,
    /// Pay differentials.
    #[serde(default)]
    pub differentials: Option<Differentials>,
    /// Chump change game state.
    #[serde(default)]
    pub chump_game: Option<ChumpGame>,
}

impl ShiftDraftRequest {
    /// Converts the draft into a shift record.
    ///
    /// `previous` is the stored record when the draft edits an existing
    /// shift. A time that cannot be read keeps the stored value; with no
    /// stored value it is rejected. Tips are synced from the cash/credit
    /// breakdown only when the breakdown is new or differs from the stored
    /// one, so a manual tips edit on an unchanged breakdown is kept.
    ///
    /// `user_name` is the app's user; a chump game always has the user as a
    /// player.
    ///
    /// # Errors
    ///
    /// `InvalidShift` when the date, start or end is missing or unreadable,
    /// when the end is not after the start, or when a money field is not a
    /// number.
    pub fn into_record(
        self,
        context: &AppContext,
        previous: Option<&ShiftRecord>,
        user_name: Option<&str>,
    ) -> TrackerResult<ShiftRecord> {
        let date_text = self.date.trim();
        let fail = |message: &str| TrackerError::InvalidShift {
            date: date_text.to_string(),
            message: message.to_string(),
        };
        let date = if date_text.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
                    .map_err(|_| fail(DATE_FORMAT_INVALID))?,
            )
        };

        let start_input = parse_time_input(&self.start_time, TimeContext::Start, None);
        let start = apply_time_input(previous.map(|p| p.start_time), start_input);
        let end_input = parse_time_input(&self.end_time, TimeContext::End, start);
        let end = apply_time_input(previous.map(|p| p.end_time), end_input);
        if date.is_some() {
            if unresolved(start_input, start) {
                return Err(fail(START_TIME_INVALID));
            }
            if start.is_some() && unresolved(end_input, end) {
                return Err(fail(END_TIME_INVALID));
            }
        }
        let (date, start, end) = validate_shift_times(date, start, end)?;
        let label = date.to_string();

        let wage_start_input = parse_time_input(&self.wage_start_time, TimeContext::Start, None);
        let wage_start = apply_time_input(previous.and_then(|p| p.wage_start_time), wage_start_input);
        let wage_end_input = parse_time_input(
            &self.wage_end_time,
            TimeContext::End,
            Some(wage_start.unwrap_or(start)),
        );
        let wage_end = apply_time_input(previous.and_then(|p| p.wage_end_time), wage_end_input);
        if unresolved(wage_start_input, wage_start) || unresolved(wage_end_input, wage_end) {
            return Err(fail(WAGE_TIME_INVALID));
        }

        let mut record = ShiftRecord::new(date, start, end);
        record.tips = parse_money(&label, "tips", &self.tips)?;
        record.cash_tips = parse_money(&label, "cashTips", &self.cash_tips)?;
        record.credit_tips = parse_money(&label, "creditTips", &self.credit_tips)?;
        record.tip_out = parse_money(&label, "tipOut", &self.tip_out)?;
        record.hourly_rate = match &self.hourly_rate {
            None => Some(context.default_hourly_rate),
            Some(text) => parse_money(&label, "hourlyRate", text)?,
        };
        record.wage_start_time = wage_start;
        record.wage_end_time = wage_end;
        record.notes = self.notes;
        record.team_on_shift = self.team_on_shift;
        record.parties = self.parties;
        record.differentials = self.differentials;
        record.chump_game = match (self.chump_game, user_name) {
            (Some(game), Some(user)) => Some(ensure_user_player(&game, user)),
            (game, _) => game,
        };

        let breakdown_changed = previous.is_none_or(|stored| {
            stored.cash_tips != record.cash_tips || stored.credit_tips != record.credit_tips
        });
        if breakdown_changed {
            apply_tip_breakdown(&mut record);
        }

        Ok(record)
    }
}

/// Unreadable input with no earlier value to fall back on.
fn unresolved(input: ParsedTime, resolved: Option<ClockTime>) -> bool {
    input == ParsedTime::Invalid && resolved.is_none()
}

fn parse_money(date: &str, field: &str, text: &str) -> TrackerResult<Option<Decimal>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(text)
        .map(Some)
        .map_err(|_| TrackerError::InvalidShift {
            date: date.to_string(),
            message: format!("{field} must be a number."),
        })
}
