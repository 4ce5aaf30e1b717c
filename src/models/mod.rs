//! Core data models for the shift tracker.
//!
//! This module contains the domain records the tracker stores and the
//! derived summaries it computes from them.

pub mod clock_time;
mod chump_game;
mod coworker;
mod differentials;
mod party;
mod shift;
mod summary;

pub use chump_game::{ChumpGame, ChumpPlayer, PotInputMode};
pub use clock_time::{ClockTime, ParseClockTimeError};
pub use coworker::Coworker;
pub use differentials::{
    ConsiderationEvent, DifferentialEntry, DifferentialEvent, Differentials, RoleDifferential,
    TipDifferentialEvent,
};
pub use party::{PartyCutType, PartyLocation, PartyPackages, PartyTime, PartyType, PrivateParty};
pub use shift::{ShiftRecord, TeamOnShift, WorkerAssignment};
pub use summary::{
    CalculationStep, ChumpResolution, DifferentialBreakdown, EarningsBreakdown, ShiftSummary,
};
