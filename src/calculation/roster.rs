//! Roster rules.
//!
//! At most one coworker is the app's user. These functions find that
//! coworker and plan the updates needed to move the flag.

use crate::config::AppContext;
use crate::models::Coworker;

/// Returns the coworker who is the app's user.
///
/// The configured `current_user_id` wins; otherwise the coworker flagged as
/// the user.
pub fn current_user<'a>(roster: &'a [Coworker], context: &AppContext) -> Option<&'a Coworker> {
    context
        .current_user_id
        .as_deref()
        .and_then(|id| roster.iter().find(|c| c.id == id))
        .or_else(|| roster.iter().find(|c| c.is_user))
}

/// Name of the app's user, if one is on the roster.
pub fn user_name(roster: &[Coworker], context: &AppContext) -> Option<String> {
    current_user(roster, context).map(|c| c.name.clone())
}

/// Sorts the roster by first name, ignoring case.
pub fn sort_roster(roster: &mut [Coworker]) {
    roster.sort_by(|a, b| {
        a.first_name
            .to_lowercase()
            .cmp(&b.first_name.to_lowercase())
            .then_with(|| a.first_name.cmp(&b.first_name))
    });
}

/// Plans the first step of saving `incoming`: if it is flagged as the user,
/// every other coworker carrying the flag is returned unflagged, to be saved
/// before `incoming`.
pub fn user_flag_handover(roster: &[Coworker], incoming: &Coworker) -> Vec<Coworker> {
    if !incoming.is_user {
        return Vec::new();
    }

    roster
        .iter()
        .filter(|c| c.is_user && c.id != incoming.id)
        .map(|c| Coworker {
            is_user: false,
            ..c.clone()
        })
        .collect()
}
