//! Calculation logic for the shift tracker.
//!
//! This module contains the pure functions that turn shift input into
//! derived values: free-form time parsing, overnight-aware durations, tips,
//! base wage, differentials, the chump change game, the shift summary with
//! its calculation trace, save-time validation, roster rules and dashboard
//! statistics.

mod chump_game;
mod differentials;
mod duration;
mod earnings;
mod parties;
mod roster;
mod rounding;
mod stats;
mod summary;
mod time_parser;
mod tips;
mod validation;

pub use chump_game::{candidate_players, ensure_user_player, resolve_chump_game, toggle_player};
pub use differentials::{calculate_differentials, calculate_role_bonus, resolve_category_total};
pub use duration::{calculate_duration_hours, shift_duration, wage_duration};
pub use earnings::{EarningsInput, calculate_base_wage, calculate_earnings};
pub use parties::{PARTY_FIELDS_REQUIRED, PartyDraft, build_party};
pub use roster::{current_user, sort_roster, user_flag_handover, user_name};
pub use rounding::round_to_cents;
pub use stats::{DashboardStats, calculate_dashboard_stats};
pub use summary::{commit_shift, summarize_shift};
pub use time_parser::{ParsedTime, TimeContext, apply_time_input, parse_time_input};
pub use tips::{
    apply_tip_breakdown, calculate_net_tips, calculate_tips_per_hour, sync_tips_from_breakdown,
};
pub use validation::{
    CONSIDERATION_FIELDS_REQUIRED, COWORKER_FIELDS_REQUIRED, COWORKER_POSITION_REQUIRED,
    DATE_REQUIRED, END_AFTER_START, END_TIME_INVALID, END_TIME_REQUIRED, START_TIME_INVALID,
    START_TIME_REQUIRED, WAGE_TIME_INVALID,
    validate_consideration_event, validate_coworker, validate_shift, validate_shift_times,
};
