//! Private party entry.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::duration::calculate_duration_hours;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    ClockTime, PartyCutType, PartyLocation, PartyPackages, PartyTime, PartyType, PrivateParty,
};

/// Message when a party is missing its name, size or a valid time window.
pub const PARTY_FIELDS_REQUIRED: &str = "Please fill in Name, Size, and valid times.";

/// A party as entered, before its duration is known.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartyDraft {
    /// Existing id when editing; a new id is generated otherwise.
    pub id: Option<String>,
    /// Party name.
    pub name: String,
    /// Kind of event.
    pub party_type: PartyType,
    /// How tips are cut.
    pub cut_type: PartyCutType,
    /// Where the party is held.
    pub location: PartyLocation,
    /// Start time.
    pub start: Option<ClockTime>,
    /// End time.
    pub end: Option<ClockTime>,
    /// Number of guests.
    pub size: u32,
    /// Booked packages.
    pub packages: PartyPackages,
}

/// Builds a party for a shift on `shift_date`, computing its duration.
///
/// Name, a positive size and a positive duration are required.
pub fn build_party(draft: PartyDraft, shift_date: NaiveDate) -> TrackerResult<PrivateParty> {
    let duration = calculate_duration_hours(Some(shift_date), draft.start, draft.end);

    if draft.name.trim().is_empty() || draft.size == 0 || duration <= Decimal::ZERO {
        return Err(TrackerError::InvalidParty {
            name: draft.name,
            message: PARTY_FIELDS_REQUIRED.to_string(),
        });
    }

    Ok(PrivateParty {
        id: draft
            .id
            .unwrap_or_else(|| format!("party-{}", Uuid::new_v4())),
        name: draft.name,
        party_type: draft.party_type,
        cut_type: draft.cut_type,
        location: draft.location,
        time: PartyTime {
            start: draft.start,
            end: draft.end,
            duration,
        },
        size: draft.size,
        packages: draft.packages,
    })
}
