//! Shift record model and related types.
//!
//! A [`ShiftRecord`] is the aggregate the tracker stores: the worked window,
//! tip income, wage inputs, differentials, the side game and the team that
//! worked the shift. The date is the record's identity.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::chump_game::ChumpGame;
use super::clock_time::{self, ClockTime};
use super::differentials::Differentials;
use super::party::PrivateParty;
use crate::config::AppContext;

/// One row of the team-on-shift grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerAssignment {
    /// Identifier of the grid row.
    pub row_id: String,
    /// Roster id, absent for people not in the roster.
    #[serde(default)]
    pub coworker_id: Option<String>,
    /// Name as shown on the grid.
    #[serde(default)]
    pub name: String,
    /// Start time, empty when not entered.
    #[serde(default, with = "clock_time::empty_as_none")]
    pub start_time: Option<ClockTime>,
    /// End time, empty when not entered.
    #[serde(default, with = "clock_time::empty_as_none")]
    pub end_time: Option<ClockTime>,
    /// Location within the venue, empty when not entered.
    #[serde(default)]
    pub location: String,
}

/// Team on shift: position name to ordered worker rows.
pub type TeamOnShift = BTreeMap<String, Vec<WorkerAssignment>>;

/// A recorded work shift.
///
/// Optional money fields distinguish "not entered yet" (`None`) from zero.
/// `duration`, `tips_per_hour`, `wage`, `differential` and `chump` are
/// derived and baked in on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    /// The shift date; unique per record.
    pub date: NaiveDate,
    /// Start of the worked window.
    pub start_time: ClockTime,
    /// End of the worked window; may be before the start (crosses midnight).
    pub end_time: ClockTime,
    /// Total tips; `None` while pending.
    #[serde(default)]
    pub tips: Option<Decimal>,
    /// Cash part of the tips.
    #[serde(default)]
    pub cash_tips: Option<Decimal>,
    /// Credit part of the tips.
    #[serde(default)]
    pub credit_tips: Option<Decimal>,
    /// Tips paid out to support staff.
    #[serde(default)]
    pub tip_out: Option<Decimal>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Who worked which position.
    #[serde(default)]
    pub team_on_shift: TeamOnShift,
    /// Private parties worked during the shift.
    #[serde(default)]
    pub parties: Vec<PrivateParty>,
    /// Hourly wage rate.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Start of the wage window; defaults to `start_time`.
    #[serde(default)]
    pub wage_start_time: Option<ClockTime>,
    /// End of the wage window; defaults to `end_time`.
    #[serde(default)]
    pub wage_end_time: Option<ClockTime>,
    /// Differential categories; `None` means all zero.
    #[serde(default)]
    pub differentials: Option<Differentials>,
    /// Side-game state.
    #[serde(default)]
    pub chump_game: Option<ChumpGame>,
    /// Derived: worked hours.
    #[serde(default)]
    pub duration: Decimal,
    /// Derived: tips per worked hour, absent when tips are absent.
    #[serde(default)]
    pub tips_per_hour: Option<Decimal>,
    /// Derived: base wage.
    #[serde(default)]
    pub wage: Decimal,
    /// Derived: total differential.
    #[serde(default)]
    pub differential: Decimal,
    /// Derived: chump payout to the user.
    #[serde(default)]
    pub chump: Decimal,
}

impl ShiftRecord {
    /// Creates a shift with the mandatory fields; everything else starts
    /// absent or zero.
    pub fn new(date: NaiveDate, start_time: ClockTime, end_time: ClockTime) -> Self {
        Self {
            date,
            start_time,
            end_time,
            tips: None,
            cash_tips: None,
            credit_tips: None,
            tip_out: None,
            notes: String::new(),
            team_on_shift: TeamOnShift::new(),
            parties: Vec::new(),
            hourly_rate: None,
            wage_start_time: None,
            wage_end_time: None,
            differentials: None,
            chump_game: None,
            duration: Decimal::ZERO,
            tips_per_hour: None,
            wage: Decimal::ZERO,
            differential: Decimal::ZERO,
            chump: Decimal::ZERO,
        }
    }

    /// Creates a new shift the way the entry form starts one: the default
    /// hourly rate and an empty bartender grid.
    pub fn with_context(
        date: NaiveDate,
        start_time: ClockTime,
        end_time: ClockTime,
        context: &AppContext,
    ) -> Self {
        let mut shift = Self::new(date, start_time, end_time);
        shift.hourly_rate = Some(context.default_hourly_rate);
        shift
            .team_on_shift
            .insert("Bartender".to_string(), Vec::new());
        shift
    }

    /// The record id: the date as `YYYY-MM-DD`.
    pub fn id(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Start of the wage window, falling back to the shift start.
    pub fn effective_wage_start(&self) -> ClockTime {
        self.wage_start_time.unwrap_or(self.start_time)
    }

    /// End of the wage window, falling back to the shift end.
    pub fn effective_wage_end(&self) -> ClockTime {
        self.wage_end_time.unwrap_or(self.end_time)
    }

    /// Iterates every worker row in position order, then row order.
    pub fn team_members(&self) -> impl Iterator<Item = &WorkerAssignment> {
        self.team_on_shift.values().flatten()
    }
}
