//! Legal-action generation.
//!
//! One predicate per action kind. `legal_actions` builds the list from
//! them, and the engine validates a submitted action by looking it up in
//! that same list, so the two can never disagree.
//!
//! ## Order
//!
//! 1. Roll (always offered)
//! 2. Desert tile placements, by ascending tile, oasis before mirage
//! 3. Leg tickets, by camel
//! 4. Winner bets, by camel
//! 5. Loser bets, by camel

use crate::betting::BetKind;
use crate::core::action::{Action, DesertFace};
use crate::core::camel::{Camel, CAMEL_COUNT};
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Is `tile` blocked for `player` by somebody else's desert tile?
///
/// A player's own tile never blocks them, since placing again moves it.
fn blocked_by_other_desert_tile(state: &GameState, tile: usize, player: PlayerId) -> bool {
    match state.desert_tile_owner(tile) {
        Some(owner) => owner != player,
        None => false,
    }
}

/// Can `player` put a desert tile on `tile`?
///
/// The tile must be interior, free of camels, and neither it nor a
/// neighbour may hold another player's desert tile.
#[must_use]
pub fn can_place_desert_tile(state: &GameState, player: PlayerId, tile: usize) -> bool {
    if tile == 0 || tile >= state.finish_tile() {
        return false;
    }
    if !state.track.is_empty(tile) {
        return false;
    }

    let neighbours = [Some(tile), tile.checked_sub(1), Some(tile + 1)];
    !neighbours
        .into_iter()
        .flatten()
        .any(|t| blocked_by_other_desert_tile(state, t, player))
}

/// Are there leg tickets left for `camel`?
#[must_use]
pub fn can_take_leg_ticket(state: &GameState, camel: Camel) -> bool {
    state.leg_tickets_remaining[camel] > 0
}

/// Does `player` still hold the `kind` card for `camel`?
#[must_use]
pub fn can_place_bet(state: &GameState, player: PlayerId, kind: BetKind, camel: Camel) -> bool {
    state
        .bet_cards
        .get(player)
        .is_some_and(|cards| cards.is_available(kind, camel))
}

/// Every action the current player may take, in a stable order.
///
/// Empty once the game is over.
#[must_use]
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    if state.terminal {
        return Vec::new();
    }

    let interior = state.finish_tile().saturating_sub(1);
    let mut actions = Vec::with_capacity(1 + interior * 2 + CAMEL_COUNT * 3);

    actions.push(Action::roll_die());

    let player = state.current_player;
    if player.index() >= state.player_count() {
        return actions;
    }

    for tile in 1..state.finish_tile() {
        if can_place_desert_tile(state, player, tile) {
            actions.extend(
                DesertFace::BOTH
                    .into_iter()
                    .map(|face| Action::place_desert_tile(tile, face)),
            );
        }
    }

    actions.extend(
        Camel::ALL
            .into_iter()
            .filter(|&camel| can_take_leg_ticket(state, camel))
            .map(Action::take_leg_ticket),
    );

    actions.extend(
        Camel::ALL
            .into_iter()
            .filter(|&camel| can_place_bet(state, player, BetKind::Winner, camel))
            .map(Action::bet_winner),
    );

    actions.extend(
        Camel::ALL
            .into_iter()
            .filter(|&camel| can_place_bet(state, player, BetKind::Loser, camel))
            .map(Action::bet_loser),
    );

    actions
}

/// Is `action` in the current legal set?
#[must_use]
pub fn is_legal(state: &GameState, action: &Action) -> bool {
    legal_actions(state).contains(action)
}
