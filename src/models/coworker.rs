//! Coworker roster model.

use serde::{Deserialize, Serialize};

/// A coworker in the roster.
///
/// The roster id is the employee id; at most one coworker carries
/// `is_user = true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coworker {
    /// Employee id, unique within the roster.
    pub id: String,
    /// General or official name.
    pub name: String,
    /// First name; the roster sorts by it.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Positions this coworker works.
    #[serde(default)]
    pub positions: Vec<String>,
    /// Whether this coworker is a manager.
    #[serde(default)]
    pub manager: bool,
    /// Whether this coworker is the app's user.
    #[serde(default)]
    pub is_user: bool,
    /// Optional avatar image URL (may be a data URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Coworker {
    /// Returns true if the coworker works the given position.
    pub fn works_position(&self, position: &str) -> bool {
        self.positions.iter().any(|p| p == position)
    }
}
