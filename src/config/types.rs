//! Configuration types for the shift tracker.
//!
//! This module contains the strongly-typed settings that are deserialized
//! from the YAML settings file and handed to the functions that need them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Positions offered when no settings file provides them.
pub const DEFAULT_POSITIONS: [&str; 6] = ["Bartender", "Server", "Door", "Expo", "Hostess", "Busser"];

/// Work locations offered when no settings file provides them.
pub const DEFAULT_LOCATIONS: [&str; 3] = ["deck", "main", "upstairs"];

/// Hourly rate a new shift starts with (5.00).
pub const DEFAULT_HOURLY_RATE: Decimal = Decimal::from_parts(500, 0, 0, false, 2);

/// The explicit application context.
///
/// Carries the user-editable lists of positions and locations, the id of the
/// coworker who is the app's user, and the hourly rate new shifts start with.
///
/// # Example
///
/// ```
/// use shift_tracker::config::AppContext;
///
/// let context = AppContext::default();
/// assert_eq!(context.positions[0], "Bartender");
/// assert!(context.current_user_id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppContext {
    /// Positions a worker can be assigned to (e.g., "Bartender").
    #[serde(default = "default_positions")]
    pub positions: Vec<String>,
    /// Locations within the venue (e.g., "deck").
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
    /// The roster id of the coworker who is the app's user.
    #[serde(default)]
    pub current_user_id: Option<String>,
    /// The hourly rate applied to newly created shifts.
    #[serde(default = "default_hourly_rate")]
    pub default_hourly_rate: Decimal,
}

impl Default for AppContext {
    fn default() -> Self {
        Self {
            positions: default_positions(),
            locations: default_locations(),
            current_user_id: None,
            default_hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}

impl AppContext {
    /// Returns true if the position is one of the configured positions.
    pub fn has_position(&self, position: &str) -> bool {
        self.positions.iter().any(|p| p == position)
    }
}

fn default_positions() -> Vec<String> {
    DEFAULT_POSITIONS.iter().map(|p| p.to_string()).collect()
}

fn default_locations() -> Vec<String> {
    DEFAULT_LOCATIONS.iter().map(|l| l.to_string()).collect()
}

fn default_hourly_rate() -> Decimal {
    DEFAULT_HOURLY_RATE
}
