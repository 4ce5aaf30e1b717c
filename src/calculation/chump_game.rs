//! Chump change game resolution and player management.

use rust_decimal::Decimal;

use crate::models::{ChumpGame, ChumpPlayer, ChumpResolution, PotInputMode, TeamOnShift};

/// Resolves the pot and the user's payout.
///
/// In breakdown mode the pot is coins plus cash; in total mode it is the
/// flat pot. The user is paid the pot only when the winner's name equals the
/// name of the player flagged as the user.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_tracker::calculation::resolve_chump_game;
/// use shift_tracker::models::{ChumpGame, ChumpPlayer, PotInputMode};
/// use std::str::FromStr;
///
/// let game = ChumpGame {
///     players: vec![ChumpPlayer { name: "Ian".to_string(), is_user: true }],
///     coins: Some(Decimal::from_str("1.50").unwrap()),
///     cash: Some(Decimal::from_str("4.00").unwrap()),
///     winner_name: Some("Ian".to_string()),
///     ..Default::default()
/// };
/// let resolved = resolve_chump_game(&game, PotInputMode::Breakdown);
/// assert_eq!(resolved.payout_to_user, Decimal::from_str("5.50").unwrap());
/// ```
pub fn resolve_chump_game(game: &ChumpGame, mode: PotInputMode) -> ChumpResolution {
    let pot = match mode {
        PotInputMode::Breakdown => {
            game.coins
                .unwrap_or(Decimal::ZERO)
                .saturating_add(game.cash.unwrap_or(Decimal::ZERO))
        }
        PotInputMode::Total => game.pot,
    };

    let user_won = match (game.user_player(), game.winner_name.as_deref()) {
        (Some(user), Some(winner)) => user.name == winner,
        _ => false,
    };

    ChumpResolution {
        pot,
        payout_to_user: if user_won { pot } else { Decimal::ZERO },
    }
}

/// Names that can join the game: everyone on the team grid followed by the
/// user, without repeats. Names are compared exactly; blank grid rows are
/// skipped.
pub fn candidate_players(team: &TeamOnShift, user_name: Option<&str>) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut add = |name: &str| {
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    };

    for worker in team.values().flatten() {
        add(&worker.name);
    }
    if let Some(user) = user_name {
        add(user);
    }
    names
}

/// Returns the game with the user added as a player if no player is
/// flagged as the user yet.
pub fn ensure_user_player(game: &ChumpGame, user_name: &str) -> ChumpGame {
    let mut game = game.clone();
    if game.user_player().is_none() {
        game.players.push(ChumpPlayer {
            name: user_name.to_string(),
            is_user: true,
        });
    }
    game
}

/// Returns the game with `name` added, or removed if already playing.
///
/// A player added under the user's name is flagged as the user.
pub fn toggle_player(game: &ChumpGame, name: &str, user_name: Option<&str>) -> ChumpGame {
    let mut game = game.clone();
    if game.has_player(name) {
        game.players.retain(|p| p.name != name);
    } else {
        game.players.push(ChumpPlayer {
            name: name.to_string(),
            is_user: user_name == Some(name),
        });
    }
    game
}
