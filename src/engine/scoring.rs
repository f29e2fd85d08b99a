//! Leg-end and game-end resolution.
//!
//! Neither is an action: the engine folds them into the roll that triggers
//! them, so callers never observe a half-resolved state.

use tracing::info;

use crate::betting::{settle_final_bets, settle_leg, Payout};
use crate::core::config::GameConfig;
use crate::core::error::InvariantViolation;
use crate::core::state::GameState;

fn apply_payouts(state: &mut GameState, payouts: &[Payout]) {
    for payout in payouts {
        state.credit(payout.player, payout.amount);
    }
}

/// Settle leg tickets, then reset the table for the next leg.
pub(crate) fn resolve_leg_end(state: &mut GameState, config: &GameConfig) -> Result<(), InvariantViolation> {
    let order = state.race_order();
    let first = *order.first().ok_or(InvariantViolation::EmptyRaceOrder)?;
    let second = order.get(1).copied();

    let payouts = settle_leg(&state.leg_tickets, first, second, config);
    apply_payouts(state, &payouts);

    for (_, hand) in state.leg_tickets.iter_mut() {
        hand.clear();
    }
    state.leg_tickets_remaining.fill(config.leg_deck_size());
    state.clear_desert_tiles();
    state.dice_available.fill(true);

    info!(
        leg = state.leg_number,
        %first,
        tickets = payouts.len(),
        "leg finished"
    );
    state.leg_number += 1;
    Ok(())
}

/// End the race: mark the state terminal and settle both final bet stacks.
pub(crate) fn resolve_game_end(state: &mut GameState, config: &GameConfig) -> Result<(), InvariantViolation> {
    let order = state.race_order();
    let winner = *order.first().ok_or(InvariantViolation::EmptyRaceOrder)?;
    let loser = *order.last().ok_or(InvariantViolation::EmptyRaceOrder)?;

    state.terminal = true;

    let winner_payouts = settle_final_bets(&state.winner_bets, winner, config);
    let loser_payouts = settle_final_bets(&state.loser_bets, loser, config);
    apply_payouts(state, &winner_payouts);
    apply_payouts(state, &loser_payouts);

    info!(
        leg = state.leg_number,
        %winner,
        %loser,
        winner_bets = winner_payouts.len(),
        loser_bets = loser_payouts.len(),
        "race finished"
    );
    Ok(())
}
