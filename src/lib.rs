//! Shift and tip tracking engine for service-industry workers.
//!
//! This crate records work shifts, reads free-form time input, computes
//! overnight-aware durations and a layered earnings model (tips, base wage,
//! pay differentials and the chump change game), and stores shifts and the
//! coworker roster in a two-sheet spreadsheet layout.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod storage;
