//! Chump change side-game model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A participant in the chump change game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChumpPlayer {
    /// Display name; players are identified by exact name.
    pub name: String,
    /// True for the player who is the app's user.
    #[serde(default)]
    pub is_user: bool,
}

/// How the pot was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PotInputMode {
    /// A single flat pot amount.
    Total,
    /// Coins and cash counted separately.
    Breakdown,
}

/// State of the pooled side game played during a shift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChumpGame {
    /// Players in the game.
    #[serde(default)]
    pub players: Vec<ChumpPlayer>,
    /// Flat pot amount.
    #[serde(default)]
    pub pot: Decimal,
    /// Coins in the pot, when counted separately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coins: Option<Decimal>,
    /// Cash in the pot, when counted separately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash: Option<Decimal>,
    /// Name of the winning player, if decided.
    #[serde(default)]
    pub winner_name: Option<String>,
}

impl ChumpGame {
    /// Infers the pot input mode: breakdown when coins or cash is present.
    pub fn inferred_mode(&self) -> PotInputMode {
        if self.coins.is_some() || self.cash.is_some() {
            PotInputMode::Breakdown
        } else {
            PotInputMode::Total
        }
    }

    /// Returns the player flagged as the app's user, if any.
    pub fn user_player(&self) -> Option<&ChumpPlayer> {
        self.players.iter().find(|p| p.is_user)
    }

    /// Returns true if a player with exactly this name is in the game.
    pub fn has_player(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }
}
