//! Shift summary model.
//!
//! A [`ShiftSummary`] is the read-only result of running a shift through the
//! calculation pipeline. It carries every intermediate value together with a
//! numbered trace of the steps that produced them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single step in the calculation trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// Machine-readable identifier of the rule applied.
    pub rule_id: String,
    /// Human-readable name of the rule.
    pub rule_name: String,
    /// The inputs of this step.
    pub input: serde_json::Value,
    /// The outputs of this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the result.
    pub reasoning: String,
}

/// Per-category differential totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferentialBreakdown {
    /// Effective consideration total.
    pub consideration: Decimal,
    /// Effective tip differential total.
    pub tip: Decimal,
    /// Role bonus contribution.
    pub role: Decimal,
    /// Overtime amount.
    pub overtime: Decimal,
    /// Sum of the four categories.
    pub total: Decimal,
}

/// Resolved side-game values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChumpResolution {
    /// The pot.
    pub pot: Decimal,
    /// What the user takes home from the game.
    pub payout_to_user: Decimal,
}

/// Earnings of a shift, before and after tip-out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsBreakdown {
    /// Tips per worked hour (0 when tips are absent).
    pub tips_per_hour: Decimal,
    /// Tips minus tip-out.
    pub net_tips: Decimal,
    /// Hourly rate times wage-window hours.
    pub base_wage: Decimal,
    /// Differential totals.
    pub differentials: DifferentialBreakdown,
    /// Chump game payout to the user.
    pub chump_payout: Decimal,
    /// Net tips + base wage + differentials + chump payout.
    pub total_earnings: Decimal,
}

/// The derived, read-only view of a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSummary {
    /// Unique identifier of this summary.
    pub summary_id: Uuid,
    /// When the summary was computed.
    pub timestamp: DateTime<Utc>,
    /// Version of the crate that computed it.
    pub engine_version: String,
    /// The shift date.
    pub date: NaiveDate,
    /// Worked hours.
    pub duration: Decimal,
    /// Wage-window hours.
    pub wage_duration: Decimal,
    /// Tips as recorded (after cash/credit sync).
    pub tips: Option<Decimal>,
    /// Side-game values.
    pub chump: ChumpResolution,
    /// Earnings.
    pub earnings: EarningsBreakdown,
    /// Numbered calculation trace.
    pub steps: Vec<CalculationStep>,
}
