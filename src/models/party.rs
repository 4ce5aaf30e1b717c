//! Private party model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::clock_time::{self, ClockTime};

/// Kind of private event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyType {
    /// Wedding.
    Wedding,
    /// Corporate event.
    Corporate,
    /// Birthday.
    Birthday,
    /// Holiday party.
    Holiday,
    /// Anything else.
    #[default]
    Other,
}

/// How the party's tips are cut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyCutType {
    /// Folded into the day cut.
    Day,
    /// Folded into the night cut.
    Night,
    /// Cut separately for the event.
    #[default]
    Event,
}

/// Where in the venue the party is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyLocation {
    /// The deck.
    #[serde(rename = "deck")]
    Deck,
    /// The main room.
    #[default]
    #[serde(rename = "main")]
    Main,
    /// Upstairs.
    #[serde(rename = "upstairs")]
    Upstairs,
    /// The whole venue.
    #[serde(rename = "full venue")]
    FullVenue,
}

/// Party time window; `duration` is in hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartyTime {
    /// Start time.
    #[serde(default, with = "clock_time::empty_as_none")]
    pub start: Option<ClockTime>,
    /// End time; may cross midnight.
    #[serde(default, with = "clock_time::empty_as_none")]
    pub end: Option<ClockTime>,
    /// Hours between start and end.
    #[serde(default)]
    pub duration: Decimal,
}

/// Drink and food packages booked for the party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyPackages {
    /// Drink package description.
    #[serde(default)]
    pub drink: String,
    /// Food package description.
    #[serde(default)]
    pub food: String,
}

/// A private party worked during a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateParty {
    /// Unique identifier (`party-...`).
    pub id: String,
    /// Party name.
    pub name: String,
    /// Kind of event.
    #[serde(rename = "type", default)]
    pub party_type: PartyType,
    /// How tips are cut.
    #[serde(default)]
    pub cut_type: PartyCutType,
    /// Where the party is held.
    #[serde(default)]
    pub location: PartyLocation,
    /// Time window.
    #[serde(default)]
    pub time: PartyTime,
    /// Number of guests.
    #[serde(default)]
    pub size: u32,
    /// Booked packages.
    #[serde(default)]
    pub packages: PartyPackages,
}
