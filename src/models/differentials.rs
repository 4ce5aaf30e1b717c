//! Pay differential models.
//!
//! A shift carries four differential categories. Two of them (consideration
//! and tip) can be entered either as a single total or as a list of itemized
//! events; [`DifferentialEntry`] models that choice as a tagged variant.

use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An itemized event that contributes an amount to a differential category.
pub trait DifferentialEvent {
    /// The signed amount of this event.
    fn amount(&self) -> Decimal;
}

/// A consideration: money exchanged with a coworker for coverage or a favor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsiderationEvent {
    /// Unique identifier of the event.
    pub id: String,
    /// Signed amount (negative when the user paid).
    pub amount: Decimal,
    /// The coworker involved.
    pub person: String,
    /// Why the money changed hands.
    pub reason: String,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ConsiderationEvent {
    /// Creates an event with a freshly generated id.
    pub fn new(
        amount: Decimal,
        person: impl Into<String>,
        reason: impl Into<String>,
        note: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            person: person.into(),
            reason: reason.into(),
            note,
        }
    }
}

impl DifferentialEvent for ConsiderationEvent {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// An itemized tip differential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipDifferentialEvent {
    /// Unique identifier of the event.
    pub id: String,
    /// Signed amount.
    pub amount: Decimal,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TipDifferentialEvent {
    /// Creates an event with a freshly generated id.
    pub fn new(amount: Decimal, note: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            note,
        }
    }
}

impl DifferentialEvent for TipDifferentialEvent {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// A differential category entered either as a single total or as events.
///
/// Stored as `{"mode": "total"|"events", "total": .., "events": [..]}`.
/// Documents without a `mode` pick the variant by the legacy rule: a
/// non-empty event list means `Events`, anything else means `Total`.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_tracker::models::{DifferentialEntry, TipDifferentialEvent};
///
/// let entry: DifferentialEntry<TipDifferentialEvent> =
///     DifferentialEntry::from_parts(Decimal::new(20, 0), Vec::new());
/// assert_eq!(entry.total(), Decimal::new(20, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DifferentialEntry<E> {
    /// A single signed total.
    Total(Decimal),
    /// Itemized events; the total is their sum.
    Events(Vec<E>),
}

impl<E> Default for DifferentialEntry<E> {
    fn default() -> Self {
        Self::Total(Decimal::ZERO)
    }
}

impl<E: DifferentialEvent> DifferentialEntry<E> {
    /// Builds an entry from a flat total and an event list using the
    /// selection rule: a non-empty event list wins.
    pub fn from_parts(total: Decimal, events: Vec<E>) -> Self {
        if events.is_empty() {
            Self::Total(total)
        } else {
            Self::Events(events)
        }
    }

    /// The effective total of this category.
    pub fn total(&self) -> Decimal {
        match self {
            Self::Total(total) => *total,
            Self::Events(events) => events
                .iter()
                .map(DifferentialEvent::amount)
                .fold(Decimal::ZERO, Decimal::saturating_add),
        }
    }

    /// Returns the events, or an empty slice in total mode.
    pub fn events(&self) -> &[E] {
        match self {
            Self::Total(_) => &[],
            Self::Events(events) => events,
        }
    }

    /// Returns true when the category is entered as itemized events.
    pub fn is_itemized(&self) -> bool {
        matches!(self, Self::Events(_))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EntryMode {
    Total,
    Events,
}

impl<E: Serialize + DifferentialEvent> Serialize for DifferentialEntry<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DifferentialEntry", 3)?;
        match self {
            Self::Total(total) => {
                state.serialize_field("mode", &EntryMode::Total)?;
                state.serialize_field("total", total)?;
                state.serialize_field("events", &[] as &[E])?;
            }
            Self::Events(events) => {
                state.serialize_field("mode", &EntryMode::Events)?;
                state.serialize_field("total", &self.total())?;
                state.serialize_field("events", events)?;
            }
        }
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "E: Deserialize<'de>"))]
struct RawEntry<E> {
    #[serde(default)]
    mode: Option<EntryMode>,
    #[serde(default)]
    total: Decimal,
    #[serde(default = "Vec::new")]
    events: Vec<E>,
}

impl<'de, E> Deserialize<'de> for DifferentialEntry<E>
where
    E: Deserialize<'de> + DifferentialEvent,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEntry::<E>::deserialize(deserializer)?;
        match raw.mode {
            Some(EntryMode::Total) => Ok(Self::Total(raw.total)),
            Some(EntryMode::Events) if raw.events.is_empty() => Err(de::Error::custom(
                "differential entry in events mode has no events",
            )),
            Some(EntryMode::Events) => Ok(Self::Events(raw.events)),
            None => Ok(Self::from_parts(raw.total, raw.events)),
        }
    }
}

/// Role differential: an hourly bonus over the wage window plus a flat bonus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDifferential {
    /// Bonus per wage-window hour.
    #[serde(default)]
    pub hourly_bonus: Decimal,
    /// Flat bonus for the shift.
    #[serde(default)]
    pub flat_bonus: Decimal,
}

/// The four differential categories of a shift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Differentials {
    /// Considerations exchanged with coworkers.
    #[serde(default)]
    pub consideration: DifferentialEntry<ConsiderationEvent>,
    /// Tip differentials.
    #[serde(default)]
    pub tip: DifferentialEntry<TipDifferentialEvent>,
    /// Role bonus.
    #[serde(default)]
    pub role: RoleDifferential,
    /// Signed overtime amount.
    #[serde(default)]
    pub overtime: Decimal,
}
