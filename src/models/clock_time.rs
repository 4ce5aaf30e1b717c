//! Clock time model.
//!
//! A [`ClockTime`] is an hour/minute pair on a 24-hour clock. Its canonical
//! text form is zero-padded `HH:MM`, which is also how it is serialized.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when text is not a canonical 24-hour `HH:MM` time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid clock time '{0}', expected HH:MM")]
pub struct ParseClockTimeError(pub String);

/// A time of day with minute precision.
///
/// # Example
///
/// ```
/// use shift_tracker::models::ClockTime;
///
/// let time: ClockTime = "17:30".parse().unwrap();
/// assert_eq!(time.hour(), 17);
/// assert_eq!(time.minute(), 30);
/// assert_eq!(time.to_string(), "17:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Creates a clock time, or `None` if hour ∉ [0,23] or minute ∉ [0,59].
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// The hour in [0,23].
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// The minute in [0,59].
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the time as a chrono [`NaiveTime`].
    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| ParseClockTimeError(s.to_string()))
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        // Truncate to minute precision.
        Self(time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional clock times stored as text, where an empty
/// string means "no time".
pub mod empty_as_none {
    use super::ClockTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes `None` as an empty string.
    pub fn serialize<S: Serializer>(
        value: &Option<ClockTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.collect_str(time),
            None => serializer.serialize_str(""),
        }
    }

    /// Deserializes an empty string (or null) as `None`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ClockTime>, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        match text.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}
